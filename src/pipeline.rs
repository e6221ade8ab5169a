//! # Run Pipeline
//!
//! One run moves through a fixed sequence: list organizations, aggregate
//! their repositories, annotate clone state, hand the formatted lines to the
//! fuzzy finder, resolve the selection back to a record, and ensure the
//! clone. Everything is sequential and blocking; a fatal error at any step
//! propagates straight out as `Err`.
//!
//! The pipeline itself performs no terminal side effects. It returns an
//! [`Outcome`] and leaves printing and process exit to the binary, so the
//! whole flow can be exercised with in-memory collaborators behind the
//! [`RepoSource`](crate::api::RepoSource),
//! [`Selector`](crate::finder::Selector) and [`Cloner`](crate::ghq::Cloner)
//! seams.

use std::path::{Path, PathBuf};

use crate::api::{GithubClient, RepoSource};
use crate::clone_state;
use crate::error::Result;
use crate::finder::{Finder, Selector};
use crate::ghq::{ensure_clone, Cloner, GhqCloner};
use crate::identity;
use crate::repository;
use crate::selection;

/// How a run ended, short of a fatal error.
#[derive(Debug, PartialEq, Eq)]
pub enum Outcome {
    /// The finder returned nothing; the user backed out.
    NothingSelected,
    /// The selected line matched no record; deliberately a silent no-op.
    NoMatch,
    /// A repository was resolved (cloning it first if needed); this is its
    /// local path.
    Resolved(PathBuf),
}

/// Run the pipeline with the real collaborators.
pub fn run() -> Result<Outcome> {
    let client = GithubClient::from_env()?;
    let root = identity::clone_root()?;
    run_with(&client, &Finder::new(), &GhqCloner::new(), &root)
}

/// Run the pipeline with explicit collaborators.
pub fn run_with(
    source: &impl RepoSource,
    selector: &impl Selector,
    cloner: &impl Cloner,
    root: &Path,
) -> Result<Outcome> {
    let orgs = source.organizations()?;
    log::debug!("{} organizations", orgs.len());

    let records = repository::aggregate(source, &orgs);
    let records = clone_state::annotate(records, root);

    let lines: Vec<String> = records.iter().map(selection::format_line).collect();
    let Some(selected) = selector.select(&lines)? else {
        return Ok(Outcome::NothingSelected);
    };

    let Some(record) = selection::match_selection(&selected, &records) else {
        return Ok(Outcome::NoMatch);
    };

    let path = ensure_clone(cloner, root, record)?;
    Ok(Outcome::Resolved(path))
}
