//! # repo-picker Library
//!
//! This library provides the core functionality for the `repo-picker`
//! command-line tool: interactively pick one repository from all
//! repositories belonging to organizations the authenticated user is a
//! member of, make sure it is cloned locally, and report its local path.
//!
//! ## Quick Example
//!
//! ```
//! use repo_picker::repository::RepositoryRecord;
//! use repo_picker::selection::{format_line, match_selection};
//!
//! let record = RepositoryRecord {
//!     name: "widgets".to_string(),
//!     description: Some("Widget factory".to_string()),
//!     primary_language: Some("Rust".to_string()),
//!     star_count: 42,
//!     organization: "acme".to_string(),
//!     host: "github.com".to_string(),
//!     web_url: "https://github.com/acme/widgets".to_string(),
//!     is_cloned: false,
//! };
//!
//! let line = format_line(&record);
//! assert_eq!(line, "  github.com/acme/widgets");
//!
//! // The line round-trips back to the record, even if the finder mangled
//! // the leading marker or whitespace
//! let records = vec![record];
//! assert!(match_selection(" github.com/acme/widgets ", &records).is_some());
//! ```
//!
//! ## Core Concepts
//!
//! - **Identity (`identity`)**: every repository is a `(host, organization,
//!   name)` triple, mapped deterministically to a local clone path under
//!   `<home>/ghq/` and to the remote identifier used for cloning.
//! - **Aggregation (`api`, `repository`)**: the GitHub listings are flattened
//!   into one ordered collection of [`repository::RepositoryRecord`], each
//!   stamped with its owning organization and host. An organization whose
//!   listing fails is skipped, not fatal.
//! - **Clone state (`clone_state`)**: each record is annotated with whether
//!   its derived clone path already exists as a directory.
//! - **Selection (`selection`, `finder`)**: records are rendered one per
//!   line for an external fuzzy finder; the chosen line is resolved back to
//!   the exact record with marker-tolerant matching.
//! - **Cloning (`ghq`)**: missing clones are materialized via `ghq get`;
//!   already-cloned repositories resolve without any invocation.
//!
//! ## Execution Flow
//!
//! The [`pipeline`] module wires these steps together and returns a
//! [`pipeline::Outcome`]; the binary performs the printing and process-exit
//! side effects. External collaborators sit behind the
//! [`api::RepoSource`], [`finder::Selector`] and [`ghq::Cloner`] traits so
//! the whole flow is testable in memory.

pub mod api;
pub mod clone_state;
pub mod error;
pub mod finder;
pub mod ghq;
pub mod identity;
pub mod pipeline;
pub mod repository;
pub mod selection;
