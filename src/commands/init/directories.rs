//! Directory initializer: the project directory plus `scripts/` and `bin/`.

use crate::error::Result;
use crate::fs::create_dir;
use std::path::Path;
use tracing::debug;

use super::plan::{BIN_DIR, SCRIPTS_DIR};

/// Create `project_dir`, then `scripts/` and `bin/` inside it.
///
/// Fails if any of them already exists. Directories created before the
/// failing step stay on disk.
pub(super) fn create_project_dirs(project_dir: &Path) -> Result<()> {
    create_dir(project_dir)?;
    debug!(path = %project_dir.display(), "created project directory");

    for sub in [SCRIPTS_DIR, BIN_DIR] {
        let path = project_dir.join(sub);
        create_dir(&path)?;
        debug!(path = %path.display(), "created directory");
    }

    Ok(())
}
