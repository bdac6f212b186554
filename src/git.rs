//! Git command runner for go-init.
//!
//! Provides a thin wrapper around the `git` binary with captured
//! stdout/stderr and structured errors. Stdout is returned exactly as git
//! printed it; callers decide whether to trim.

use std::ffi::OsString;
use std::path::Path;
use std::process::Command;
use thiserror::Error;

/// Failure modes of a git invocation.
#[derive(Error, Debug)]
pub enum GitError {
    /// The git binary could not be started (not installed, not on PATH).
    #[error("failed to execute git {command}: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// Git ran but exited non-zero.
    #[error("git {command} failed (exit code {code}): {message}")]
    Failed {
        command: String,
        code: i32,
        message: String,
    },

    /// Git printed something that is not UTF-8.
    #[error("git {command} produced non-UTF-8 output")]
    NonUtf8 { command: String },
}

/// Run a git command in `cwd` with extra environment variables.
///
/// # Returns
///
/// * `Ok(String)` - Stdout, on exit code 0
/// * `Err(GitError)` - If git cannot be spawned, exits non-zero, or prints
///   non-UTF-8 on stdout
pub fn run_git<P: AsRef<Path>>(
    cwd: P,
    args: &[&str],
    env: &[(OsString, OsString)],
) -> Result<String, GitError> {
    let command = args.join(" ");

    let output = Command::new("git")
        .current_dir(cwd.as_ref())
        .args(args)
        .envs(env.iter().cloned())
        .output()
        .map_err(|source| GitError::Spawn {
            command: command.clone(),
            source,
        })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        let message = if stderr.is_empty() {
            "no output".to_string()
        } else {
            stderr
        };
        return Err(GitError::Failed {
            command,
            code: output.status.code().unwrap_or(-1),
            message,
        });
    }

    String::from_utf8(output.stdout).map_err(|_| GitError::NonUtf8 { command })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::create_test_repo;

    #[test]
    fn stdout_is_not_trimmed() {
        let temp_dir = create_test_repo("Test User");

        let output = run_git(temp_dir.path(), &["config", "user.name"], &[]).unwrap();

        assert_eq!(output, "Test User\n");
    }

    #[test]
    fn non_zero_exit_is_failed() {
        let temp_dir = create_test_repo("Test User");

        let err = run_git(
            temp_dir.path(),
            &["config", "--local", "no-such.key"],
            &[],
        )
        .unwrap_err();

        match err {
            GitError::Failed { command, code, .. } => {
                assert_eq!(command, "config --local no-such.key");
                assert_eq!(code, 1);
            }
            other => panic!("expected Failed, got {other:?}"),
        }
    }

    #[test]
    fn env_is_passed_through() {
        let temp_dir = create_test_repo("Test User");

        let output = run_git(
            temp_dir.path(),
            &["config", "scaffold.marker"],
            &[
                ("GIT_CONFIG_COUNT".into(), "1".into()),
                ("GIT_CONFIG_KEY_0".into(), "scaffold.marker".into()),
                ("GIT_CONFIG_VALUE_0".into(), "present".into()),
            ],
        )
        .unwrap();

        assert_eq!(output, "present\n");
    }
}
