//! Command implementations for go-init.
//!
//! `dispatch` merges the command line with the optional config file, picks
//! how the author is resolved, and hands off to the generator.

mod init;

use crate::author::{FixedAuthor, GitAuthor, ResolveAuthor};
use crate::cli::Cli;
use crate::config::Config;
use crate::error::Result;
use std::path::PathBuf;
use tracing::debug;

use init::{InitRequest, cmd_init};

/// Run the command described by `cli`.
pub fn dispatch(cli: &Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => {
            debug!(path = %path.display(), "loading config");
            Config::load(path)?
        }
        None => Config::default(),
    };

    let request = build_request(cli, &config);
    let author = author_source(cli, &config);

    cmd_init(&request, author.as_ref())
}

/// Command-line values win over config values.
fn build_request(cli: &Cli, config: &Config) -> InitRequest {
    InitRequest {
        dir_name: cli.dir.clone(),
        org: cli.org.clone(),
        output_dir: cli
            .output_dir
            .clone()
            .or_else(|| config.output_dir.clone())
            .unwrap_or_else(|| PathBuf::from(".")),
        year: cli.year.or(config.year),
        dry_run: cli.dry_run,
    }
}

fn author_source(cli: &Cli, config: &Config) -> Box<dyn ResolveAuthor> {
    match cli.author.clone().or_else(|| config.author.clone()) {
        Some(name) => Box::new(FixedAuthor(name)),
        None => Box::new(GitAuthor::new(".")),
    }
}
