//! Persisted document types.

use crate::platform::Platform;
use crate::search::CandidateRepository;
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// Branch assumed when the API does not report one.
const FALLBACK_DEFAULT_BRANCH: &str = "main";

/// Owner fields kept in the cache.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OwnerSummary {
    pub login: String,
    pub avatar_url: String,
}

/// A candidate confirmed to ship an installer, in cache form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifiedEntry {
    pub id: u64,
    pub name: String,
    pub full_name: String,
    pub owner: OwnerSummary,
    pub description: Option<String>,
    pub default_branch: String,
    pub html_url: String,
    pub stargazers_count: u64,
    pub forks_count: u64,
    pub language: Option<String>,
    pub topics: Vec<String>,
    pub releases_url: String,
    pub updated_at: String,
}

impl From<&CandidateRepository> for VerifiedEntry {
    fn from(repo: &CandidateRepository) -> Self {
        Self {
            id: repo.id,
            name: repo.name.clone(),
            full_name: repo.full_name.clone(),
            owner: OwnerSummary {
                login: repo.owner.login.clone(),
                avatar_url: repo.owner.avatar_url.clone(),
            },
            description: repo.description.clone(),
            default_branch: repo
                .default_branch
                .clone()
                .unwrap_or_else(|| FALLBACK_DEFAULT_BRANCH.to_string()),
            html_url: repo.html_url.clone(),
            stargazers_count: repo.stargazers_count,
            forks_count: repo.forks_count,
            language: repo.language.clone(),
            topics: repo.topics().to_vec(),
            releases_url: repo.releases_url.clone(),
            updated_at: repo.updated_at.clone(),
        }
    }
}

/// The per-platform cache file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlatformResultDocument {
    pub platform: String,
    pub last_updated: String,
    pub total_count: usize,
    pub repositories: Vec<VerifiedEntry>,
}

impl PlatformResultDocument {
    /// Wraps verified entries with platform metadata.
    #[must_use]
    pub fn new(platform: Platform, last_updated: &str, repositories: Vec<VerifiedEntry>) -> Self {
        Self {
            platform: platform.name().to_string(),
            last_updated: last_updated.to_string(),
            total_count: repositories.len(),
            repositories,
        }
    }
}

/// Formats a UTC instant as ISO-8601 with microseconds and a trailing `Z`.
#[must_use]
pub fn format_timestamp(instant: DateTime<Utc>) -> String {
    instant.to_rfc3339_opts(SecondsFormat::Micros, true)
}
