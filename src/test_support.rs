use std::ffi::OsString;
use std::path::Path;
use std::process::Command;
use tempfile::TempDir;

/// Create a scratch git repository whose local `user.name` is `user_name`.
pub(crate) fn create_test_repo(user_name: &str) -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path();

    git(path, &["init"]);
    git(path, &["config", "user.email", "test@example.com"]);
    git(path, &["config", "user.name", user_name]);

    temp_dir
}

/// Environment that hides global and system git config, so a lookup in a
/// directory outside any repository sees no `user.name` at all.
pub(crate) fn isolated_git_env(scratch: &Path) -> Vec<(OsString, OsString)> {
    let empty_config = scratch.join("empty.gitconfig");
    std::fs::write(&empty_config, "").unwrap();

    vec![
        ("GIT_CONFIG_GLOBAL".into(), empty_config.into_os_string()),
        ("GIT_CONFIG_NOSYSTEM".into(), "1".into()),
        ("GIT_CEILING_DIRECTORIES".into(), scratch.as_os_str().to_owned()),
        ("HOME".into(), scratch.as_os_str().to_owned()),
    ]
}

fn git(repo_dir: &Path, args: &[&str]) {
    let output = Command::new("git")
        .current_dir(repo_dir)
        .args(args)
        .output()
        .unwrap_or_else(|e| panic!("failed to execute git {}: {}", args.join(" "), e));

    if !output.status.success() {
        let stdout = String::from_utf8_lossy(&output.stdout);
        let stderr = String::from_utf8_lossy(&output.stderr);
        panic!(
            "git {} failed (exit code {:?})\nstdout:\n{}\nstderr:\n{}",
            args.join(" "),
            output.status.code(),
            stdout,
            stderr
        );
    }
}
