//! API client error types.

use std::time::Duration;
use thiserror::Error;

/// Errors returned by a [`GitHubApi`](super::GitHubApi) call.
#[derive(Debug, Error)]
pub enum ApiError {
    /// GitHub API error, including non-success responses and undecodable payloads.
    #[error("GitHub API error: {0}")]
    GitHubError(#[from] octocrab::Error),

    /// The request did not complete in time.
    #[error("{operation} timed out after {after:?}")]
    Timeout {
        operation: &'static str,
        after: Duration,
    },
}
