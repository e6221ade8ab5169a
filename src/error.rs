//! # Error Handling
//!
//! This module defines the centralized error handling mechanism for the
//! `repo-picker` application. It uses the `thiserror` library to create an
//! `Error` enum covering all fatal failure modes, providing clear and
//! descriptive error messages.
//!
//! Every variant here is fatal when it reaches the binary entry point, which
//! prints it and exits non-zero. Failures the pipeline absorbs instead of
//! aborting on (a single organization's repository listing failing, an
//! unmatched selection) are reported inline and the run continues.

use thiserror::Error;

/// Main error type for repo-picker operations
#[derive(Error, Debug)]
pub enum Error {
    /// The GitHub API client could not be constructed.
    ///
    /// Includes the reason and optionally a hint about how to fix it
    /// (typically a missing authentication token).
    #[error("GitHub client initialization error: {message}{}", hint.as_ref().map(|h| format!("\n  hint: {}", h)).unwrap_or_default())]
    ClientInit {
        message: String,
        /// Optional hint for how to resolve the initialization issue
        hint: Option<String>,
    },

    /// The "my organizations" listing failed.
    #[error("Organization listing error: {message}")]
    OrgList { message: String },

    /// A single organization's repository listing failed.
    ///
    /// The aggregator absorbs this variant and skips the organization; it
    /// never terminates the process.
    #[error("Repository listing error for {org}: {message}")]
    RepoList { org: String, message: String },

    /// An error occurred with a path-related operation.
    #[error("Path operation error: {message}")]
    Path { message: String },

    /// The external fuzzy-finder process could not be run.
    #[error("Fuzzy finder error: {program} - {message}")]
    Finder { program: String, message: String },

    /// The external clone mechanism failed.
    ///
    /// Carries the combined stdout+stderr captured from the clone process.
    #[error("Clone failed for {identifier}: {message}\nOutput: {output}")]
    CloneFailed {
        identifier: String,
        message: String,
        output: String,
    },
}

/// A convenient type alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
