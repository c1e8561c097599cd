//! Git command runner for refinex-diff.
//!
//! Provides a thin wrapper around git commands with captured stdout/stderr
//! and structured error handling, used to pull unified diff text straight
//! out of a repository.

use crate::error::{DiffViewError, Result};
use std::path::Path;
use std::process::{Command, Output};

/// Result of a successful git command execution.
#[derive(Debug, Clone)]
pub struct GitOutput {
    /// Standard output from the command, untrimmed.
    ///
    /// Diff lines can begin or end with significant whitespace, so nothing
    /// is stripped here.
    pub stdout: String,
    /// Standard error from the command (trimmed).
    pub stderr: String,
}

impl GitOutput {
    /// Create a new GitOutput from raw output bytes.
    fn from_output(output: &Output) -> Self {
        Self {
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        }
    }
}

/// Run a git command with the specified working directory.
///
/// # Arguments
///
/// * `cwd` - The working directory to run the command in
/// * `args` - The git command arguments (without "git" prefix)
///
/// # Returns
///
/// * `Ok(GitOutput)` - On successful execution (exit code 0)
/// * `Err(DiffViewError::GitError)` - On spawn failure or non-zero exit code
pub fn run_git<P: AsRef<Path>>(cwd: P, args: &[&str]) -> Result<GitOutput> {
    let cwd = cwd.as_ref();

    log::debug!("running git {} in {}", args.join(" "), cwd.display());

    let output = Command::new("git")
        .current_dir(cwd)
        .args(args)
        .output()
        .map_err(|e| {
            DiffViewError::GitError(format!(
                "failed to execute git {}: {}",
                args.first().unwrap_or(&""),
                e
            ))
        })?;

    let git_output = GitOutput::from_output(&output);

    if output.status.success() {
        Ok(git_output)
    } else {
        let exit_code = output.status.code().unwrap_or(-1);
        let error_msg = if git_output.stderr.is_empty() {
            git_output.stdout.trim().to_string()
        } else {
            git_output.stderr.clone()
        };

        Err(DiffViewError::GitError(format!(
            "git {} failed (exit code {}): {}",
            args.first().unwrap_or(&""),
            exit_code,
            error_msg
        )))
    }
}

/// Check that `cwd` is inside a git working tree.
///
/// "Not a repository" is reported as a user error (exit 1) rather than a
/// git failure (exit 3), since the fix is to point `--repo` elsewhere.
pub fn ensure_repository<P: AsRef<Path>>(cwd: P) -> Result<()> {
    let cwd = cwd.as_ref();
    let not_a_repo = || {
        DiffViewError::UserError(format!(
            "'{}' is not inside a git repository",
            cwd.display()
        ))
    };

    match run_git(cwd, &["rev-parse", "--is-inside-work-tree"]) {
        Ok(output) if output.stdout.trim() == "true" => Ok(()),
        Ok(_) => Err(not_a_repo()),
        Err(DiffViewError::GitError(msg)) if msg.contains("not a git repository") => {
            Err(not_a_repo())
        }
        Err(e) => Err(e),
    }
}

/// Produce unified diff text for a revision range.
///
/// Runs `git diff --no-color --no-ext-diff <range>` in `repo`. `range` is
/// anything `git diff` accepts (`HEAD~1..HEAD`, `main`, a single commit).
/// When `range` is `None` the working tree is compared against the index.
pub fn diff_text<P: AsRef<Path>>(repo: P, range: Option<&str>) -> Result<String> {
    let repo = repo.as_ref();
    ensure_repository(repo)?;

    let mut args = vec!["diff", "--no-color", "--no-ext-diff"];
    if let Some(range) = range {
        args.push(range);
    }

    let output = run_git(repo, &args)?;
    Ok(output.stdout)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diff::{LineKind, parse};
    use crate::test_support::{create_test_repo, git, git_stdout};
    use tempfile::TempDir;

    #[test]
    fn test_run_git_success() {
        let temp_dir = create_test_repo();
        let result = run_git(temp_dir.path(), &["status", "--porcelain"]);
        assert!(result.is_ok());
    }

    #[test]
    fn test_run_git_failure_returns_git_error() {
        let temp_dir = create_test_repo();
        let result = run_git(temp_dir.path(), &["checkout", "nonexistent-branch"]);
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert!(matches!(err, DiffViewError::GitError(_)));
    }

    #[test]
    fn test_ensure_repository_outside_repo_returns_user_error() {
        let temp_dir = TempDir::new().unwrap(); // Not a git repo
        let err = ensure_repository(temp_dir.path()).unwrap_err();
        // Should be UserError (exit 1), not GitError (exit 3)
        assert!(matches!(err, DiffViewError::UserError(_)));
        assert!(err.to_string().contains("not inside a git repository"));
    }

    #[test]
    fn test_diff_text_for_commit_range() {
        let temp_dir = create_test_repo();

        let diff = diff_text(temp_dir.path(), Some("HEAD~1..HEAD")).unwrap();

        assert!(diff.starts_with("diff --git a/doc.md b/doc.md"));
        assert!(diff.contains("--- a/doc.md"));
        assert!(diff.contains("+++ b/doc.md"));
        assert!(diff.contains("-Second line."));
        assert!(diff.contains("+Second line, revised."));
    }

    #[test]
    fn test_diff_text_working_tree_clean_is_empty() {
        let temp_dir = create_test_repo();
        let diff = diff_text(temp_dir.path(), None).unwrap();
        assert!(diff.is_empty());
    }

    #[test]
    fn test_diff_text_working_tree_changes() {
        let temp_dir = create_test_repo();
        std::fs::write(temp_dir.path().join("notes.txt"), "one\nthree\n").unwrap();

        let diff = diff_text(temp_dir.path(), None).unwrap();

        assert!(diff.contains("-two"));
        assert!(diff.contains("+three"));
    }

    #[test]
    fn test_diff_text_unknown_revision() {
        let temp_dir = create_test_repo();
        let err = diff_text(temp_dir.path(), Some("no-such-ref")).unwrap_err();
        assert!(matches!(err, DiffViewError::GitError(_)));
    }

    #[test]
    fn test_diff_text_staged_deletion() {
        let temp_dir = create_test_repo();
        git(temp_dir.path(), &["rm", "-q", "--cached", "notes.txt"]);

        let diff = diff_text(temp_dir.path(), Some("--cached")).unwrap();

        assert!(diff.contains("+++ /dev/null"));
        assert!(diff.contains("\n-one\n-two"));
    }

    #[test]
    fn test_diff_text_keeps_trailing_blank_context_line() {
        let temp_dir = create_test_repo();
        let path = temp_dir.path();
        std::fs::write(path.join("f.txt"), "a\nb\n\n").unwrap();
        git(path, &["add", "f.txt"]);
        git(path, &["commit", "-q", "-m", "Add f.txt"]);
        std::fs::write(path.join("f.txt"), "A\nb\n\n").unwrap();

        let diff = diff_text(path, None).unwrap();
        let raw = git_stdout(path, &["diff", "--no-color", "--no-ext-diff"]);

        assert_eq!(diff, raw);
        let lines = parse(&diff);
        assert_eq!(lines.len(), raw.lines().count());

        let last = lines.last().unwrap();
        assert_eq!(last.kind, LineKind::Context);
        assert_eq!(last.raw_text, " ");
        assert_eq!(last.text, "");
        assert_eq!(last.old_line_number, Some(3));
        assert_eq!(last.new_line_number, Some(3));
    }

    #[test]
    fn test_diff_text_keeps_trailing_whitespace_on_last_line() {
        let temp_dir = create_test_repo();
        let path = temp_dir.path();
        std::fs::write(path.join("notes.txt"), "one\ntwo  \n").unwrap();

        let diff = diff_text(path, None).unwrap();
        let last = parse(&diff).pop().unwrap();

        assert_eq!(last.kind, LineKind::Add);
        assert_eq!(last.text, "two  ");
    }
}
