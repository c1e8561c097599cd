//! Shared fixtures for tests that need a real git repository.

use std::path::Path;
use std::process::Command;
use tempfile::TempDir;

/// Create a repository with two commits.
///
/// The first commit adds `doc.md` and `notes.txt`; the second revises one
/// line of `doc.md`, so `HEAD~1..HEAD` yields a single-hunk diff.
pub(crate) fn create_test_repo() -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path();

    git(path, &["init", "-q"]);
    // Ensure the repo uses a deterministic default branch name across environments.
    git(path, &["symbolic-ref", "HEAD", "refs/heads/main"]);

    // Configure git user for commits
    git(path, &["config", "user.email", "test@example.com"]);
    git(path, &["config", "user.name", "Test User"]);

    std::fs::write(path.join("doc.md"), "# Title\n\nFirst line.\nSecond line.\nThird line.\n")
        .unwrap();
    std::fs::write(path.join("notes.txt"), "one\ntwo\n").unwrap();
    git(path, &["add", "."]);
    git(path, &["commit", "-q", "-m", "Initial commit"]);

    std::fs::write(
        path.join("doc.md"),
        "# Title\n\nFirst line.\nSecond line, revised.\nThird line.\n",
    )
    .unwrap();
    git(path, &["commit", "-q", "-am", "Revise doc"]);

    temp_dir
}

pub(crate) fn git(repo_dir: &Path, args: &[&str]) {
    git_stdout(repo_dir, args);
}

/// Run git and return its stdout exactly as written.
pub(crate) fn git_stdout(repo_dir: &Path, args: &[&str]) -> String {
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

    String::from_utf8_lossy(&output.stdout).into_owned()
}
