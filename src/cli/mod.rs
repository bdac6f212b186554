//! CLI argument parsing for go-init.
//!
//! Uses clap derive macros for declarative argument definitions. The
//! actual work happens in the `commands` module.

use clap::{ArgAction, Parser};
use std::path::PathBuf;

/// go-init: generate a Go project skeleton.
///
/// Creates `<DIR>` with a README, MIT license, `main.go` and test stubs,
/// `go.mod` for `github.com/<ORG>/<DIR>`, a `.gitignore`, developer scripts
/// under `scripts/` and an empty `bin/`.
#[derive(Parser, Debug)]
#[command(name = "go-init")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Name of the new project directory (also the binary and module name).
    pub dir: String,

    /// GitHub organization or user that will host the project.
    pub org: String,

    /// Author for copyright lines; skips the `git config user.name` lookup.
    #[arg(long)]
    pub author: Option<String>,

    /// Copyright year (default: current year).
    #[arg(long, value_parser = clap::value_parser!(i32).range(1..))]
    pub year: Option<i32>,

    /// Directory to create the project in (default: current directory).
    #[arg(long, value_name = "PATH")]
    pub output_dir: Option<PathBuf>,

    /// YAML config file with defaults for author, year and output_dir.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Show what would be generated without writing anything.
    #[arg(long)]
    pub dry_run: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors.
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

impl Cli {
    /// Parse command-line arguments without exiting on failure.
    ///
    /// clap's own exit code for usage errors is 2; the caller maps the error
    /// onto this tool's exit codes instead.
    pub fn parse_args() -> Result<Self, clap::Error> {
        Self::try_parse()
    }
}
