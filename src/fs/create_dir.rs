//! Non-recursive directory creation.

use crate::error::{Result, ScaffoldError};
use std::fs::DirBuilder;
use std::path::Path;

/// Permission bits for every directory go-init creates.
pub const DIR_MODE: u32 = 0o755;

/// Create exactly one directory with [`DIR_MODE`].
///
/// Fails with [`ScaffoldError::DirectoryCreation`] if the directory already
/// exists, its parent is missing, or permission is denied.
pub fn create_dir<P: AsRef<Path>>(path: P) -> Result<()> {
    let path = path.as_ref();

    let mut builder = DirBuilder::new();
    builder.recursive(false);
    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(DIR_MODE);
    }

    builder
        .create(path)
        .map_err(|source| ScaffoldError::DirectoryCreation {
            path: path.to_path_buf(),
            source,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn creates_a_new_directory() {
        let temp_dir = TempDir::new().unwrap();
        let dir = temp_dir.path().join("foo");

        create_dir(&dir).unwrap();

        assert!(dir.is_dir());
    }

    #[test]
    fn existing_directory_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let dir = temp_dir.path().join("foo");
        create_dir(&dir).unwrap();

        let err = create_dir(&dir).unwrap_err();

        match err {
            ScaffoldError::DirectoryCreation { path, source } => {
                assert_eq!(path, dir);
                assert_eq!(source.kind(), std::io::ErrorKind::AlreadyExists);
            }
            other => panic!("expected DirectoryCreation, got {other:?}"),
        }
    }

    #[test]
    fn missing_parent_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let dir = temp_dir.path().join("missing").join("foo");

        assert!(matches!(
            create_dir(&dir),
            Err(ScaffoldError::DirectoryCreation { .. })
        ));
        assert!(!temp_dir.path().join("missing").exists());
    }
}
