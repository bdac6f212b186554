//! Per-run project context.
//!
//! Every value a template needs is captured here once, at the start of a
//! run. Templates read it and never reach for the clock or the environment
//! themselves.

use crate::author::ResolveAuthor;
use crate::error::Result;
use chrono::{Datelike, Local};

/// Values substituted into the generated files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectContext {
    /// Project directory name, exactly as given on the command line.
    pub dir_name: String,
    /// GitHub organization (or user) that will host the project.
    pub org: String,
    /// Author for copyright lines, verbatim.
    pub author: String,
    /// Copyright year.
    pub year: i32,
}

impl ProjectContext {
    pub fn new(
        dir_name: impl Into<String>,
        org: impl Into<String>,
        author: impl Into<String>,
        year: i32,
    ) -> Self {
        Self {
            dir_name: dir_name.into(),
            org: org.into(),
            author: author.into(),
            year,
        }
    }

    /// Capture the context for a run: resolve the author and take the year
    /// from the local clock unless one is supplied.
    pub fn capture(
        dir_name: &str,
        org: &str,
        author: &dyn ResolveAuthor,
        year: Option<i32>,
    ) -> Result<Self> {
        let author = author.resolve_author()?;
        let year = year.unwrap_or_else(current_year);
        Ok(Self::new(dir_name, org, author, year))
    }

    /// Where the project is expected to live on GitHub.
    pub fn repo_url(&self) -> String {
        format!("http://github.com/{}/{}", self.org, self.dir_name)
    }
}

fn current_year() -> i32 {
    Local::now().year()
}
