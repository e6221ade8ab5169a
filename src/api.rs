//! GitHub REST API collaborator
//!
//! The pipeline only needs two read-only calls from the remote host: the
//! authenticated user's organizations and each organization's repositories.
//! Those two calls are expressed as the [`RepoSource`] trait so the
//! aggregation logic can be exercised against an in-memory source; the real
//! implementation is [`GithubClient`] over a blocking `reqwest` client.
//!
//! Authentication is a token from `GITHUB_TOKEN` or `GH_TOKEN`; the API base
//! URL defaults to `https://api.github.com` and can be overridden with
//! `GITHUB_API_URL`. Missing token or a client build failure is a fatal
//! initialization error.

use std::env;
use std::time::Duration;

use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::error::{Error, Result};

const DEFAULT_BASE_URL: &str = "https://api.github.com";
const API_VERSION: &str = "2022-11-28";
const USER_AGENT: &str = concat!("repo-picker/", env!("CARGO_PKG_VERSION"));

/// An organization the authenticated user belongs to.
#[derive(Debug, Clone, Deserialize)]
pub struct OrganizationRef {
    pub login: String,
}

/// One repository as returned by the organization repository listing.
///
/// Field renames follow the GitHub REST payload; everything the listing may
/// omit is defaulted rather than rejected.
#[derive(Debug, Clone, Deserialize)]
pub struct RepoSummary {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(rename = "language", default)]
    pub primary_language: Option<String>,
    #[serde(rename = "stargazers_count", default)]
    pub star_count: u64,
    #[serde(rename = "html_url")]
    pub web_url: String,
}

/// The two remote listings the pipeline depends on.
pub trait RepoSource {
    /// Ordered list of organizations the authenticated user is a member of.
    fn organizations(&self) -> Result<Vec<OrganizationRef>>;

    /// Ordered list of one organization's repositories.
    fn repositories(&self, org: &str) -> Result<Vec<RepoSummary>>;
}

/// Blocking HTTP client for the GitHub REST API.
pub struct GithubClient {
    http: reqwest::blocking::Client,
    base_url: String,
    token: String,
}

impl GithubClient {
    /// Create a client from the process environment.
    ///
    /// Reads the token from `GITHUB_TOKEN`, falling back to `GH_TOKEN`, and
    /// the base URL from `GITHUB_API_URL` when set.
    pub fn from_env() -> Result<Self> {
        let token = env::var("GITHUB_TOKEN")
            .or_else(|_| env::var("GH_TOKEN"))
            .map_err(|_| Error::ClientInit {
                message: "no GitHub token found in the environment".to_string(),
                hint: Some("set GITHUB_TOKEN (or GH_TOKEN) to a token with read:org scope".to_string()),
            })?;
        let base_url = env::var("GITHUB_API_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Self::new(base_url, token)
    }

    /// Create a client against an explicit base URL with an explicit token.
    pub fn new(base_url: impl Into<String>, token: impl Into<String>) -> Result<Self> {
        let http = reqwest::blocking::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| Error::ClientInit {
                message: e.to_string(),
                hint: None,
            })?;

        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token: token.into(),
        })
    }

    /// The API base URL this client talks to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GET a path and deserialize the JSON body.
    ///
    /// Non-2xx responses become an error string carrying the status and as
    /// much of the body as the server returned.
    fn get_json<T: DeserializeOwned>(&self, path: &str) -> std::result::Result<T, String> {
        let url = format!("{}/{}", self.base_url, path);
        log::debug!("GET {}", url);

        let response = self
            .http
            .get(&url)
            .bearer_auth(&self.token)
            .header("Accept", "application/vnd.github+json")
            .header("X-GitHub-Api-Version", API_VERSION)
            .send()
            .map_err(|e| e.to_string())?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(format!("status {}: {}", status.as_u16(), body.trim()));
        }

        response
            .json()
            .map_err(|e| format!("failed to parse response JSON: {}", e))
    }
}

impl RepoSource for GithubClient {
    fn organizations(&self) -> Result<Vec<OrganizationRef>> {
        self.get_json("user/orgs")
            .map_err(|message| Error::OrgList { message })
    }

    fn repositories(&self, org: &str) -> Result<Vec<RepoSummary>> {
        self.get_json(&format!("orgs/{}/repos", org))
            .map_err(|message| Error::RepoList {
                org: org.to_string(),
                message,
            })
    }
}
