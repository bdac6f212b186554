//! Author resolution.
//!
//! The author embedded in generated license headers comes from the local
//! git configuration (`git config user.name`). The value is used verbatim,
//! trailing newline included.

use crate::error::{Result, ScaffoldError};
use crate::git::run_git;
use std::ffi::OsString;
use std::path::PathBuf;
use tracing::debug;

/// Something that can produce the author name for a run.
pub trait ResolveAuthor {
    fn resolve_author(&self) -> Result<String>;
}

/// Reads `user.name` from git, as seen from `cwd`.
#[derive(Debug, Clone)]
pub struct GitAuthor {
    cwd: PathBuf,
    env: Vec<(OsString, OsString)>,
}

impl GitAuthor {
    pub fn new(cwd: impl Into<PathBuf>) -> Self {
        Self {
            cwd: cwd.into(),
            env: Vec::new(),
        }
    }

    /// Add environment variables to the git invocation.
    #[cfg(test)]
    pub fn with_env(mut self, env: Vec<(OsString, OsString)>) -> Self {
        self.env.extend(env);
        self
    }
}

impl ResolveAuthor for GitAuthor {
    fn resolve_author(&self) -> Result<String> {
        let name = run_git(&self.cwd, &["config", "user.name"], &self.env)
            .map_err(|e| ScaffoldError::AuthorResolution(e.to_string()))?;
        debug!(author = %name.trim_end(), "resolved author from git config");
        Ok(name)
    }
}

/// An author supplied up front (CLI flag or config file); no git lookup.
#[derive(Debug, Clone)]
pub struct FixedAuthor(pub String);

impl ResolveAuthor for FixedAuthor {
    fn resolve_author(&self) -> Result<String> {
        Ok(self.0.clone())
    }
}
