//! Implementation of project generation.
//!
//! # What a run does
//!
//! 1. Captures the [`ProjectContext`]: author (git or explicit) and year
//! 2. Creates the project directory with `scripts/` and `bin/`
//! 3. Plans the fixed, ordered list of [`GenerationTask`]s
//! 4. Renders and writes each task with its permission bits
//!
//! The author is resolved before anything touches the filesystem, so a
//! missing git identity leaves no trace. After that the run is fail-fast:
//! the first error stops it and nothing already created is removed.
//!
//! Running twice against the same directory fails on the second run.

mod directories;
mod plan;


use crate::author::ResolveAuthor;
use crate::context::ProjectContext;
use crate::error::Result;
use crate::fs::write_with_mode;
use std::path::PathBuf;
use tracing::{debug, info};

use directories::create_project_dirs;
pub use plan::{GenerationTask, plan_tasks};

/// Inputs for one run.
#[derive(Debug, Clone)]
pub struct InitRequest {
    /// Name of the project directory, also used as binary and module name.
    pub dir_name: String,
    /// GitHub organization.
    pub org: String,
    /// Directory the project directory is created in.
    pub output_dir: PathBuf,
    /// Copyright year; current local year when `None`.
    pub year: Option<i32>,
    /// Plan only, write nothing.
    pub dry_run: bool,
}

impl InitRequest {
    fn project_dir(&self) -> PathBuf {
        self.output_dir.join(&self.dir_name)
    }
}

/// What a run produced.
#[derive(Debug)]
pub struct InitOutcome {
    pub context: ProjectContext,
    pub project_dir: PathBuf,
    pub tasks: Vec<GenerationTask>,
}

/// Generate the project described by `request`.
pub fn scaffold(request: &InitRequest, author: &dyn ResolveAuthor) -> Result<InitOutcome> {
    let context = ProjectContext::capture(&request.dir_name, &request.org, author, request.year)?;
    info!(year = context.year, "project context captured");

    let project_dir = request.project_dir();
    let tasks = plan_tasks(&project_dir);

    if request.dry_run {
        info!(tasks = tasks.len(), "dry run, nothing written");
        return Ok(InitOutcome {
            context,
            project_dir,
            tasks,
        });
    }

    create_project_dirs(&project_dir)?;
    info!(path = %project_dir.display(), "directories created");

    write_tasks(&tasks, &context)?;
    info!(files = tasks.len(), "project files written");

    Ok(InitOutcome {
        context,
        project_dir,
        tasks,
    })
}

/// Render and write every task in order, stopping at the first failure.
fn write_tasks(tasks: &[GenerationTask], ctx: &ProjectContext) -> Result<()> {
    for task in tasks {
        let content = task.content(ctx);
        write_with_mode(&task.path, content.as_bytes(), task.mode)?;
        debug!(
            template = %task.template,
            path = %task.path.display(),
            mode = %format!("{:o}", task.mode),
            "wrote file"
        );
    }
    Ok(())
}

/// Execute a run and report the result on stdout.
pub fn cmd_init(request: &InitRequest, author: &dyn ResolveAuthor) -> Result<()> {
    let outcome = scaffold(request, author)?;
    let ctx = &outcome.context;

    if request.dry_run {
        println!("would create {}/", outcome.project_dir.display());
        for task in &outcome.tasks {
            println!("  {:04o}  {}", task.mode, task.path.display());
        }
        println!("github repo is expected to be {}", ctx.repo_url());
        return Ok(());
    }

    println!("project {} created", ctx.dir_name);
    println!("github repo is expected to be {}", ctx.repo_url());

    Ok(())
}
