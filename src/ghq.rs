//! Clone orchestration via `ghq`
//!
//! Clones are materialized by the external `ghq get` command, which places
//! the working copy at `<root>/<host>/<organization>/<name>` — the same path
//! the identity derivation computes, so a successful invocation means the
//! derived path exists. Combined stdout+stderr is captured so a failure
//! report carries everything the tool printed. A failed clone is fatal and
//! not retried; re-running the whole tool is assumed idempotent.

use std::path::{Path, PathBuf};
use std::process::Command;

use crate::error::{Error, Result};
use crate::repository::RepositoryRecord;

/// Default clone program.
pub const DEFAULT_PROGRAM: &str = "ghq";

/// Something that can materialize a remote repository locally.
pub trait Cloner {
    /// Clone the repository named by `identifier` (`host:org/name`).
    fn clone_repo(&self, identifier: &str) -> Result<()>;
}

/// Runs `ghq get <identifier>`.
pub struct GhqCloner {
    program: String,
}

impl GhqCloner {
    pub fn new() -> Self {
        Self::with_program(DEFAULT_PROGRAM)
    }

    pub fn with_program(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl Default for GhqCloner {
    fn default() -> Self {
        Self::new()
    }
}

impl Cloner for GhqCloner {
    fn clone_repo(&self, identifier: &str) -> Result<()> {
        let output = Command::new(&self.program)
            .args(["get", identifier])
            .output()
            .map_err(|e| Error::CloneFailed {
                identifier: identifier.to_string(),
                message: e.to_string(),
                output: String::new(),
            })?;

        if !output.status.success() {
            let mut combined = String::from_utf8_lossy(&output.stdout).into_owned();
            combined.push_str(&String::from_utf8_lossy(&output.stderr));
            return Err(Error::CloneFailed {
                identifier: identifier.to_string(),
                message: output.status.to_string(),
                output: combined.trim().to_string(),
            });
        }

        Ok(())
    }
}

/// Make sure `record` has a local clone and return its path.
///
/// Already-cloned records short-circuit without invoking anything.
pub fn ensure_clone(
    cloner: &impl Cloner,
    root: &Path,
    record: &RepositoryRecord,
) -> Result<PathBuf> {
    if !record.is_cloned {
        cloner.clone_repo(&record.remote_identifier())?;
    }
    Ok(record.clone_path(root))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    fn record(is_cloned: bool) -> RepositoryRecord {
        RepositoryRecord {
            name: "widgets".to_string(),
            description: None,
            primary_language: None,
            star_count: 0,
            organization: "acme".to_string(),
            host: "github.com".to_string(),
            web_url: "https://github.com/acme/widgets".to_string(),
            is_cloned,
        }
    }

    /// Records every requested identifier; optionally fails.
    struct FakeCloner {
        calls: RefCell<Vec<String>>,
        fail: bool,
    }

    impl FakeCloner {
        fn new(fail: bool) -> Self {
            Self {
                calls: RefCell::new(Vec::new()),
                fail,
            }
        }
    }

    impl Cloner for FakeCloner {
        fn clone_repo(&self, identifier: &str) -> Result<()> {
            self.calls.borrow_mut().push(identifier.to_string());
            if self.fail {
                return Err(Error::CloneFailed {
                    identifier: identifier.to_string(),
                    message: "exit status: 1".to_string(),
                    output: "fatal: repository not found".to_string(),
                });
            }
            Ok(())
        }
    }

    #[test]
    fn test_ensure_clone_invokes_cloner_with_identifier() {
        let cloner = FakeCloner::new(false);
        let path = ensure_clone(&cloner, Path::new("/home/u/ghq"), &record(false)).unwrap();
        assert_eq!(path, PathBuf::from("/home/u/ghq/github.com/acme/widgets"));
        assert_eq!(
            cloner.calls.borrow().as_slice(),
            &["github.com:acme/widgets".to_string()]
        );
    }

    #[test]
    fn test_ensure_clone_skips_already_cloned() {
        let cloner = FakeCloner::new(true);
        let path = ensure_clone(&cloner, Path::new("/home/u/ghq"), &record(true)).unwrap();
        assert_eq!(path, PathBuf::from("/home/u/ghq/github.com/acme/widgets"));
        assert!(cloner.calls.borrow().is_empty());
    }

    #[test]
    fn test_ensure_clone_propagates_failure() {
        let cloner = FakeCloner::new(true);
        let err = ensure_clone(&cloner, Path::new("/home/u/ghq"), &record(false)).unwrap_err();
        match err {
            Error::CloneFailed {
                identifier, output, ..
            } => {
                assert_eq!(identifier, "github.com:acme/widgets");
                assert!(output.contains("repository not found"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    #[cfg(unix)]
    fn test_ghq_cloner_missing_program_reports_failure() {
        let cloner = GhqCloner::with_program("repo-picker-no-such-ghq");
        let err = cloner.clone_repo("github.com:acme/widgets").unwrap_err();
        assert!(matches!(err, Error::CloneFailed { .. }));
    }

    #[test]
    #[cfg(unix)]
    fn test_ghq_cloner_nonzero_exit_captures_output() {
        // `false` exits 1 silently; status lands in the message
        let cloner = GhqCloner::with_program("false");
        let err = cloner.clone_repo("github.com:acme/widgets").unwrap_err();
        match err {
            Error::CloneFailed { message, .. } => assert!(message.contains("exit status")),
            other => panic!("unexpected error: {other}"),
        }
    }
}
