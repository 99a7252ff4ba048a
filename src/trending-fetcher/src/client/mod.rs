//! Access to the GitHub search and releases endpoints.
//!
//! The pipeline talks to GitHub through the [`GitHubApi`] trait so that the
//! collector can be driven by an in-memory source in tests.

mod error;

pub use error::ApiError;

use crate::config::FetchConfig;
use crate::search::SearchPage;
use crate::verification::Release;
use async_trait::async_trait;
use http::header::ACCEPT;
use octocrab::service::middleware::retry::RetryConfig;
use octocrab::Octocrab;
use serde::Serialize;
use std::future::Future;
use std::time::Duration;
use tracing::debug;

/// Versioned JSON media type sent with every request.
pub const GITHUB_MEDIA_TYPE: &str = "application/vnd.github.v3+json";

/// The two GitHub endpoints the pipeline reads.
#[async_trait]
pub trait GitHubApi: Send + Sync {
    /// Fetches one page of repository search results, sorted by stars descending.
    async fn search_repositories(
        &self,
        query: &str,
        page: u32,
        per_page: u8,
    ) -> Result<SearchPage, ApiError>;

    /// Lists the most recent releases of a repository, newest first.
    async fn list_releases(
        &self,
        owner: &str,
        repo: &str,
        per_page: u8,
    ) -> Result<Vec<Release>, ApiError>;
}

#[derive(Serialize)]
struct SearchParams<'a> {
    q: &'a str,
    sort: &'static str,
    order: &'static str,
    per_page: u8,
    page: u32,
}

#[derive(Serialize)]
struct ReleaseParams {
    per_page: u8,
}

/// [`GitHubApi`] backed by an [`Octocrab`] client.
#[derive(Clone)]
pub struct OctocrabApi {
    octocrab: Octocrab,
    search_timeout: Duration,
    release_timeout: Duration,
}

impl OctocrabApi {
    /// Builds a client from the run configuration.
    ///
    /// Without a token the client makes unauthenticated requests. Failed
    /// requests are never retried.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the base URL is invalid or the client cannot be built.
    pub fn new(config: &FetchConfig) -> Result<Self, ApiError> {
        let mut builder = Octocrab::builder()
            .add_retry_config(RetryConfig::None)
            .add_header(ACCEPT, GITHUB_MEDIA_TYPE.to_string());

        if let Some(token) = config.token() {
            builder = builder.personal_token(token.to_string());
        } else {
            debug!("No GitHub token configured, using unauthenticated access");
        }

        if let Some(base_url) = config.api_base_url() {
            builder = builder.base_uri(base_url.to_string())?;
        }

        Ok(Self {
            octocrab: builder.build()?,
            search_timeout: config.search_timeout(),
            release_timeout: config.release_timeout(),
        })
    }
}

#[async_trait]
impl GitHubApi for OctocrabApi {
    async fn search_repositories(
        &self,
        query: &str,
        page: u32,
        per_page: u8,
    ) -> Result<SearchPage, ApiError> {
        let params = SearchParams {
            q: query,
            sort: "stars",
            order: "desc",
            per_page,
            page,
        };
        with_timeout(
            "repository search",
            self.search_timeout,
            self.octocrab
                .get::<SearchPage, _, _>("/search/repositories", Some(&params)),
        )
        .await
    }

    async fn list_releases(
        &self,
        owner: &str,
        repo: &str,
        per_page: u8,
    ) -> Result<Vec<Release>, ApiError> {
        let route = format!("/repos/{owner}/{repo}/releases");
        let params = ReleaseParams { per_page };
        with_timeout(
            "release listing",
            self.release_timeout,
            self.octocrab.get::<Vec<Release>, _, _>(&route, Some(&params)),
        )
        .await
    }
}

async fn with_timeout<T>(
    operation: &'static str,
    after: Duration,
    request: impl Future<Output = Result<T, octocrab::Error>>,
) -> Result<T, ApiError> {
    match tokio::time::timeout(after, request).await {
        Ok(result) => Ok(result?),
        Err(_) => Err(ApiError::Timeout { operation, after }),
    }
}
