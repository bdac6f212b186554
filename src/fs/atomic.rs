//! Atomic file writes with explicit permission bits.
//!
//! Every generated file is written the same way:
//! 1. Write content to a temporary file next to the target
//! 2. Apply the requested permission bits to the temporary file
//! 3. Sync the file to disk (fsync)
//! 4. Rename it over the target
//!
//! The permission bits are applied with `set_permissions` after creation, so
//! the result does not depend on the process umask. On non-unix platforms
//! the mode is ignored.
//!
//! The parent directory must already exist; this module never creates
//! directories on its own.
//!
//! On crash, a temporary file named `.{filename}.tmp` may remain.

use crate::error::{Result, ScaffoldError};
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Atomically write `content` to `path` and give it `mode` permission bits.
///
/// Creates the file or replaces an existing one. Any failure is reported as
/// [`ScaffoldError::FileWrite`] naming `path`.
pub fn write_with_mode<P: AsRef<Path>>(path: P, content: &[u8], mode: u32) -> Result<()> {
    let path = path.as_ref();

    let temp_path = generate_temp_path(path)?;

    if let Err(e) = write_and_sync(&temp_path, content, mode) {
        let _ = fs::remove_file(&temp_path);
        return Err(ScaffoldError::file_write(path, e));
    }

    if let Err(e) = fs::rename(&temp_path, path) {
        let _ = fs::remove_file(&temp_path);
        return Err(ScaffoldError::file_write(path, e));
    }

    // Persist the directory entry too.
    if let Some(parent) = path.parent()
        && let Ok(dir) = File::open(parent)
    {
        let _ = dir.sync_all();
    }

    Ok(())
}

/// Generate a temporary file path in the same directory as the target.
fn generate_temp_path(target: &Path) -> Result<PathBuf> {
    let parent = target.parent().unwrap_or(Path::new("."));
    let filename = target
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| {
            ScaffoldError::file_write(
                target,
                io::Error::new(io::ErrorKind::InvalidInput, "invalid file path"),
            )
        })?;

    Ok(parent.join(format!(".{}.tmp", filename)))
}

fn write_and_sync(path: &Path, content: &[u8], mode: u32) -> io::Result<()> {
    let mut file = File::create(path)?;
    file.write_all(content)?;
    apply_mode(&file, mode)?;
    file.sync_all()
}

#[cfg(unix)]
fn apply_mode(file: &File, mode: u32) -> io::Result<()> {
    use std::os::unix::fs::PermissionsExt;
    file.set_permissions(fs::Permissions::from_mode(mode))
}

#[cfg(not(unix))]
fn apply_mode(_file: &File, _mode: u32) -> io::Result<()> {
    Ok(())
}
