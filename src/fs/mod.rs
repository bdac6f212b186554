//! Filesystem utilities for go-init.
//!
//! Project directories are created one level at a time so an existing
//! directory is an error, and files are written atomically with explicit
//! permission bits.

pub mod atomic;
mod create_dir;

pub use atomic::write_with_mode;
pub use create_dir::create_dir;
