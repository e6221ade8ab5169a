//! Repository identity derivation
//!
//! Every repository is identified by a `(host, organization, name)` triple.
//! This module derives that triple's components and maps it to the two forms
//! the rest of the pipeline needs: the deterministic local clone path under
//! `<home>/ghq/` and the remote identifier handed to the clone mechanism.

use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Directory under the home directory that all clones live in.
pub const CLONE_NAMESPACE: &str = "ghq";

/// Derive the host portion of a repository's web URL.
///
/// Strips a leading `https://` or `http://` and takes everything up to the
/// first `/`. Malformed input degrades to whatever is left of the string;
/// this is a data-quality issue in the remote metadata, not an error worth
/// surfacing.
pub fn derive_host(web_url: &str) -> String {
    let rest = web_url
        .strip_prefix("https://")
        .or_else(|| web_url.strip_prefix("http://"))
        .unwrap_or(web_url);
    rest.split('/').next().unwrap_or_default().to_string()
}

/// The root directory clones are placed under: `<home>/ghq`.
///
/// Fails only when the home directory cannot be determined.
pub fn clone_root() -> Result<PathBuf> {
    dirs::home_dir()
        .map(|home| home.join(CLONE_NAMESPACE))
        .ok_or_else(|| Error::Path {
            message: "could not determine the home directory".to_string(),
        })
}

/// Compose the local clone path for an identity triple.
///
/// Deterministic: the same triple always maps to the same path. This is the
/// basis for clone-state checking.
pub fn clone_path(root: &Path, host: &str, organization: &str, name: &str) -> PathBuf {
    root.join(host).join(organization).join(name)
}

/// Compose the remote identifier used to invoke the clone mechanism.
pub fn remote_identifier(host: &str, organization: &str, name: &str) -> String {
    format!("{}:{}/{}", host, organization, name)
}
