//! External fuzzy-finder invocation
//!
//! The candidate lines are piped to the finder's stdin, newline-joined; the
//! finder draws its UI on the inherited stderr/tty and prints the chosen
//! line on stdout. Empty output or a non-zero exit both mean "nothing
//! selected" and are not errors; only failing to run the finder at all is
//! fatal.

use std::io::{ErrorKind, Write};
use std::process::{Command, Stdio};

use crate::error::{Error, Result};

/// Default fuzzy-finder program.
pub const DEFAULT_PROGRAM: &str = "peco";

/// Something that can pick one line out of a list.
pub trait Selector {
    /// Present `lines` and return the chosen one, or `None` if nothing was
    /// selected.
    fn select(&self, lines: &[String]) -> Result<Option<String>>;
}

/// Runs an external interactive fuzzy finder.
pub struct Finder {
    program: String,
}

impl Finder {
    pub fn new() -> Self {
        Self::with_program(DEFAULT_PROGRAM)
    }

    pub fn with_program(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    fn finder_error(&self, message: impl ToString) -> Error {
        Error::Finder {
            program: self.program.clone(),
            message: message.to_string(),
        }
    }
}

impl Default for Finder {
    fn default() -> Self {
        Self::new()
    }
}

impl Selector for Finder {
    fn select(&self, lines: &[String]) -> Result<Option<String>> {
        let mut child = Command::new(&self.program)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit())
            .spawn()
            .map_err(|e| self.finder_error(e))?;

        if let Some(mut stdin) = child.stdin.take() {
            // The finder may exit before reading everything; a broken pipe
            // just means the choice was already made.
            if let Err(err) = stdin.write_all(lines.join("\n").as_bytes()) {
                if err.kind() != ErrorKind::BrokenPipe {
                    return Err(self.finder_error(err));
                }
            }
        }

        let output = child.wait_with_output().map_err(|e| self.finder_error(e))?;
        if !output.status.success() {
            return Ok(None);
        }

        let selected = String::from_utf8_lossy(&output.stdout).trim().to_string();
        if selected.is_empty() {
            Ok(None)
        } else {
            Ok(Some(selected))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    #[cfg(unix)]
    fn test_select_pipes_lines_to_stdin() {
        // `cat` echoes its stdin, so the joined candidate list comes back
        let finder = Finder::with_program("cat");
        let selected = finder.select(&lines(&["first", "second"])).unwrap();
        assert_eq!(selected.as_deref(), Some("first\nsecond"));
    }

    #[test]
    #[cfg(unix)]
    fn test_select_empty_output_means_nothing_selected() {
        // `true` exits 0 without printing anything
        let finder = Finder::with_program("true");
        let selected = finder.select(&lines(&["a", "b"])).unwrap();
        assert!(selected.is_none());
    }

    #[test]
    #[cfg(unix)]
    fn test_select_nonzero_exit_means_nothing_selected() {
        let finder = Finder::with_program("false");
        let selected = finder.select(&lines(&["a", "b"])).unwrap();
        assert!(selected.is_none());
    }

    #[test]
    #[cfg(unix)]
    fn test_select_passes_lines_through() {
        // `cat` echoes everything; the raw selection comes back trimmed
        let finder = Finder::with_program("cat");
        let selected = finder.select(&lines(&["only-line"])).unwrap();
        assert_eq!(selected.as_deref(), Some("only-line"));
    }

    #[test]
    fn test_select_missing_program_is_fatal() {
        let finder = Finder::with_program("repo-picker-no-such-finder");
        let err = finder.select(&lines(&["a"])).unwrap_err();
        assert!(matches!(err, Error::Finder { .. }));
    }
}
