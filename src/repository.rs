//! # Repository Records and Aggregation
//!
//! The central entity of a run is the [`RepositoryRecord`]: one remote
//! repository stamped with its owning organization and the host derived from
//! its web URL. The aggregator flattens every organization's listing into a
//! single ordered collection, preserving the order organizations were listed
//! and the order repositories were returned within each organization.
//!
//! A failure listing one organization's repositories is non-fatal: it is
//! reported on the error stream and that organization simply contributes no
//! records. The `(host, organization, name)` triple uniquely identifies a
//! record within one run.

use std::path::{Path, PathBuf};

use crate::api::{OrganizationRef, RepoSource, RepoSummary};
use crate::identity;

/// One remote repository, stamped with its owning organization and host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryRecord {
    pub name: String,
    pub description: Option<String>,
    pub primary_language: Option<String>,
    pub star_count: u64,
    pub organization: String,
    pub host: String,
    pub web_url: String,
    pub is_cloned: bool,
}

impl RepositoryRecord {
    /// Build a record from a listing entry, deriving the host from the web
    /// URL. `is_cloned` starts false; the clone-state check sets it later.
    pub fn from_summary(summary: RepoSummary, organization: &str) -> Self {
        let host = identity::derive_host(&summary.web_url);
        Self {
            name: summary.name,
            description: summary.description,
            primary_language: summary.primary_language,
            star_count: summary.star_count,
            organization: organization.to_string(),
            host,
            web_url: summary.web_url,
            is_cloned: false,
        }
    }

    /// The deterministic local clone path for this record under `root`.
    pub fn clone_path(&self, root: &Path) -> PathBuf {
        identity::clone_path(root, &self.host, &self.organization, &self.name)
    }

    /// The remote identifier handed to the clone mechanism.
    pub fn remote_identifier(&self) -> String {
        identity::remote_identifier(&self.host, &self.organization, &self.name)
    }
}

/// Fetch and flatten every organization's repositories into one ordered
/// collection.
///
/// Organizations are fetched one at a time, in listing order. An
/// organization whose listing fails is reported and skipped; the remaining
/// organizations are still aggregated.
pub fn aggregate(source: &impl RepoSource, orgs: &[OrganizationRef]) -> Vec<RepositoryRecord> {
    let mut records = Vec::new();
    for org in orgs {
        match source.repositories(&org.login) {
            Ok(repos) => {
                log::debug!("{}: {} repositories", org.login, repos.len());
                records.extend(
                    repos
                        .into_iter()
                        .map(|summary| RepositoryRecord::from_summary(summary, &org.login)),
                );
            }
            Err(err) => {
                log::warn!("skipping organization {}: {}", org.login, err);
            }
        }
    }
    records
}
