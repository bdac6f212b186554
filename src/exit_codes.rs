//! Exit code constants for the go-init CLI.
//!
//! - 0: Success
//! - 1: Failure (usage error, directory/author/write/config failure)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// Any failure: missing arguments, unresolvable author, existing directory,
/// failed write, or an unreadable config file.
pub const FAILURE: i32 = 1;
