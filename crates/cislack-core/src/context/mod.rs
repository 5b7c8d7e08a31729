//! GitHub Actions run context
//!
//! Normalizes the runner environment (`GITHUB_*` variables and the event
//! payload file) into a [`RunContext`] the extractor can work with.

pub mod elements;
pub mod payload;

pub use elements::{extract_context, RunLinks};
pub use payload::PayloadKind;

use crate::error::{Error, Result};
use serde_json::Value;
use std::path::Path;

/// Default GitHub web URL
pub const DEFAULT_SERVER_URL: &str = "https://github.com";

/// Normalized context of the workflow run being reported
#[derive(Debug, Clone, PartialEq)]
pub struct RunContext {
    /// Repository owner
    pub owner: String,
    /// Repository name
    pub repo: String,
    /// Raw webhook event payload
    pub payload: Value,
    /// Git ref that triggered the run
    pub git_ref: String,
    /// Triggering event name (`push`, `pull_request`, ...)
    pub event_name: String,
    /// Workflow name
    pub workflow: String,
    /// Run identifier (empty when unknown)
    pub run_id: String,
    /// GitHub web URL (GitHub Enterprise aware)
    pub server_url: String,
}

impl Default for RunContext {
    fn default() -> Self {
        Self {
            owner: String::new(),
            repo: String::new(),
            payload: Value::Object(Default::default()),
            git_ref: String::new(),
            event_name: String::new(),
            workflow: String::new(),
            run_id: String::new(),
            server_url: DEFAULT_SERVER_URL.to_string(),
        }
    }
}

impl RunContext {
    /// Create from the runner's environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create from an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).unwrap_or_default();

        let repository = lookup("GITHUB_REPOSITORY").ok_or_else(|| {
            Error::Config("GITHUB_REPOSITORY not set (expected 'owner/repo')".to_string())
        })?;
        let (owner, repo) = parse_repository(&repository)?;

        let payload = match lookup("GITHUB_EVENT_PATH").filter(|p| !p.is_empty()) {
            Some(path) => load_event_payload(Path::new(&path))?,
            None => Value::Object(Default::default()),
        };

        let server_url = lookup("GITHUB_SERVER_URL")
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_SERVER_URL.to_string());

        Ok(Self {
            owner: owner.to_string(),
            repo: repo.to_string(),
            payload,
            git_ref: var("GITHUB_REF"),
            event_name: var("GITHUB_EVENT_NAME"),
            workflow: var("GITHUB_WORKFLOW"),
            run_id: var("GITHUB_RUN_ID"),
            server_url,
        })
    }
}

/// Split `owner/repo`
fn parse_repository(repository: &str) -> Result<(&str, &str)> {
    match repository.split_once('/') {
        Some((owner, repo)) if !owner.is_empty() && !repo.is_empty() && !repo.contains('/') => {
            Ok((owner, repo))
        }
        _ => Err(Error::Config(format!(
            "Invalid GITHUB_REPOSITORY format: {}",
            repository
        ))),
    }
}

/// Read the webhook payload file.
///
/// A missing file degrades to an empty payload; unparseable content is an error.
pub fn load_event_payload(path: &Path) -> Result<Value> {
    if !path.exists() {
        tracing::warn!(path = %path.display(), "GITHUB_EVENT_PATH does not exist");
        return Ok(Value::Object(Default::default()));
    }

    let content = std::fs::read_to_string(path)?;
    serde_json::from_str(&content)
        .map_err(|e| Error::EventParse(format!("{}: {}", path.display(), e)))
}
