//! Where diff text comes from.

use crate::error::{DiffViewError, Result};
use crate::git;
use std::io::Read;
use std::path::PathBuf;

/// A source of unified diff text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// Read everything from standard input.
    Stdin,
    /// Read a diff or patch file.
    File(PathBuf),
    /// Run `git diff` in `repo`, optionally over `range`.
    Git {
        repo: PathBuf,
        range: Option<String>,
    },
}

impl InputSource {
    /// Pick a source from CLI-style arguments.
    ///
    /// `--git` wins over a path. A missing path or `-` means stdin.
    pub fn from_args(path: Option<PathBuf>, git_range: Option<String>, repo: PathBuf) -> Self {
        if git_range.is_some() {
            return InputSource::Git {
                repo,
                range: git_range.filter(|r| !r.is_empty()),
            };
        }

        match path {
            Some(path) if path.as_os_str() != "-" => InputSource::File(path),
            _ => InputSource::Stdin,
        }
    }

    /// Read the whole diff text.
    ///
    /// Invalid UTF-8 is replaced rather than rejected; the parser copes with
    /// whatever text comes through.
    pub fn read(&self) -> Result<String> {
        let text = match self {
            InputSource::Stdin => {
                let mut buf = Vec::new();
                std::io::stdin()
                    .read_to_end(&mut buf)
                    .map_err(|e| DiffViewError::InputError(format!("stdin: {}", e)))?;
                String::from_utf8_lossy(&buf).into_owned()
            }
            InputSource::File(path) => {
                let bytes = std::fs::read(path).map_err(|e| {
                    DiffViewError::InputError(format!("{}: {}", path.display(), e))
                })?;
                String::from_utf8_lossy(&bytes).into_owned()
            }
            InputSource::Git { repo, range } => git::diff_text(repo, range.as_deref())?,
        };

        log::debug!("read {} bytes from {}", text.len(), self);
        Ok(text)
    }
}

impl std::fmt::Display for InputSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InputSource::Stdin => write!(f, "stdin"),
            InputSource::File(path) => write!(f, "{}", path.display()),
            InputSource::Git { repo, range } => write!(
                f,
                "git diff {} in {}",
                range.as_deref().unwrap_or("(working tree)"),
                repo.display()
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::create_test_repo;
    use tempfile::TempDir;

    #[test]
    fn test_from_args_prefers_git() {
        let source = InputSource::from_args(
            Some(PathBuf::from("a.patch")),
            Some("HEAD~1..HEAD".to_string()),
            PathBuf::from("."),
        );
        assert_eq!(
            source,
            InputSource::Git {
                repo: PathBuf::from("."),
                range: Some("HEAD~1..HEAD".to_string()),
            }
        );
    }

    #[test]
    fn test_from_args_dash_and_none_mean_stdin() {
        let repo = PathBuf::from(".");
        assert_eq!(
            InputSource::from_args(None, None, repo.clone()),
            InputSource::Stdin
        );
        assert_eq!(
            InputSource::from_args(Some(PathBuf::from("-")), None, repo),
            InputSource::Stdin
        );
    }

    #[test]
    fn test_empty_git_range_means_working_tree() {
        let source = InputSource::from_args(None, Some(String::new()), PathBuf::from("."));
        assert_eq!(
            source,
            InputSource::Git {
                repo: PathBuf::from("."),
                range: None,
            }
        );
    }

    #[test]
    fn test_reads_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("change.diff");
        std::fs::write(&path, "@@ -1 +1 @@\n-a\n+b\n").unwrap();

        let text = InputSource::File(path).read().unwrap();

        assert_eq!(text, "@@ -1 +1 @@\n-a\n+b\n");
    }

    #[test]
    fn test_invalid_utf8_is_replaced() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("binary.diff");
        std::fs::write(&path, b"+ok\n+\xff\xfe\n").unwrap();

        let text = InputSource::File(path).read().unwrap();

        assert!(text.starts_with("+ok\n+"));
        assert!(text.contains('\u{fffd}'));
    }

    #[test]
    fn test_missing_file_is_input_error() {
        let temp_dir = TempDir::new().unwrap();
        let err = InputSource::File(temp_dir.path().join("missing.diff"))
            .read()
            .unwrap_err();

        assert!(matches!(err, DiffViewError::InputError(_)));
        assert!(err.to_string().contains("missing.diff"));
    }

    #[test]
    fn test_reads_git_range() {
        let temp_dir = create_test_repo();
        let source = InputSource::Git {
            repo: temp_dir.path().to_path_buf(),
            range: Some("HEAD~1..HEAD".to_string()),
        };

        let text = source.read().unwrap();

        assert!(text.contains("+Second line, revised."));
    }

    #[test]
    fn test_display_names_the_source() {
        assert_eq!(InputSource::Stdin.to_string(), "stdin");
        let git = InputSource::Git {
            repo: PathBuf::from("repo"),
            range: None,
        };
        assert_eq!(git.to_string(), "git diff (working tree) in repo");
    }
}
