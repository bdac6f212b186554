//! Error types for the go-init CLI.
//!
//! Uses thiserror for derive macros. Every variant is fatal: the run stops,
//! nothing is retried and nothing already on disk is rolled back.

use crate::exit_codes;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for scaffolding operations.
#[derive(Error, Debug)]
pub enum ScaffoldError {
    /// The project directory or one of its subdirectories could not be
    /// created (already exists, permission denied, ...).
    #[error("unable to create dir '{}' with error '{source}'", path.display())]
    DirectoryCreation {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The author name could not be read from git.
    #[error("unable to get git config author name with error {0}")]
    AuthorResolution(String),

    /// A generated file could not be written.
    #[error("failure writing '{}' with error '{source}'", path.display())]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The config file could not be read or is invalid.
    #[error("config error: {0}")]
    Config(String),
}

impl ScaffoldError {
    /// Returns the process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            ScaffoldError::DirectoryCreation { .. }
            | ScaffoldError::AuthorResolution(_)
            | ScaffoldError::FileWrite { .. }
            | ScaffoldError::Config(_) => exit_codes::FAILURE,
        }
    }

    pub(crate) fn file_write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ScaffoldError::FileWrite {
            path: path.into(),
            source,
        }
    }
}

/// Result type alias for go-init operations.
pub type Result<T> = std::result::Result<T, ScaffoldError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn every_error_exits_with_failure() {
        let errors = [
            ScaffoldError::DirectoryCreation {
                path: PathBuf::from("foo"),
                source: io::Error::from(io::ErrorKind::AlreadyExists),
            },
            ScaffoldError::AuthorResolution("git not found".to_string()),
            ScaffoldError::file_write("foo/LICENSE", io::Error::from(io::ErrorKind::Other)),
            ScaffoldError::Config("bad yaml".to_string()),
        ];
        for err in errors {
            assert_eq!(err.exit_code(), exit_codes::FAILURE, "{err}");
        }
    }

    #[test]
    fn directory_error_names_the_path() {
        let err = ScaffoldError::DirectoryCreation {
            path: PathBuf::from("foo/scripts"),
            source: io::Error::new(io::ErrorKind::AlreadyExists, "File exists"),
        };
        assert_eq!(
            err.to_string(),
            "unable to create dir 'foo/scripts' with error 'File exists'"
        );
    }

    #[test]
    fn write_error_names_the_path() {
        let err = ScaffoldError::file_write(
            "foo/go.mod",
            io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        );
        assert_eq!(err.to_string(), "failure writing 'foo/go.mod' with error 'denied'");
    }
}
