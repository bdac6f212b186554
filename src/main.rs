//! go-init: generate a Go project skeleton.
//!
//! This is the main entry point for the `go-init` CLI. It parses arguments,
//! sets up logging, runs the generator and maps errors to exit codes.

mod author;
mod cli;
mod commands;
mod config;
mod context;
mod error;
mod exit_codes;
mod fs;
mod git;
mod templates;

#[cfg(test)]
mod test_support;

use clap::error::ErrorKind;
use cli::Cli;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = match Cli::parse_args() {
        Ok(cli) => cli,
        Err(err) => {
            let code = match err.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => exit_codes::SUCCESS,
                _ => exit_codes::FAILURE,
            };
            // Prints help/version to stdout, usage errors to stderr.
            let _ = err.print();
            return ExitCode::from(code as u8);
        }
    };

    init_tracing(&cli);

    match commands::dispatch(&cli) {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(err) => {
            eprintln!(
                "unable to create project for dir '{}' with error '{}'",
                cli.dir, err
            );
            ExitCode::from(err.exit_code() as u8)
        }
    }
}

/// Log to stderr. `RUST_LOG` wins; otherwise the level follows `-v`/`-q`.
fn init_tracing(cli: &Cli) {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| match cli.verbose {
        0 if cli.quiet => EnvFilter::new("error"),
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(cli.verbose >= 2),
        )
        .init();
}
