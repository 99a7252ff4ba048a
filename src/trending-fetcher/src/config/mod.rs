//! Run configuration.
//!
//! [`FetchConfig`] is built once at startup and passed by reference to every
//! stage that needs credentials, thresholds or pacing.

use std::path::{Path, PathBuf};
use std::time::Duration;

/// Environment variable holding the GitHub API token.
pub const TOKEN_ENV_VAR: &str = "GITHUB_TOKEN";

/// Environment variable overriding the GitHub API base URL.
pub const API_URL_ENV_VAR: &str = "GITHUB_API_URL";

/// Default output directory, relative to the working directory.
pub const DEFAULT_OUTPUT_DIR: &str = "cached-data/trending";

/// Configuration for a trending-cache refresh.
#[derive(Debug, Clone)]
pub struct FetchConfig {
    /// GitHub token; `None` means unauthenticated requests.
    token: Option<String>,
    /// Alternative API root (GitHub Enterprise, test servers).
    api_base_url: Option<String>,
    /// Directory receiving one JSON document per platform.
    output_dir: PathBuf,
    /// Verified entries wanted per platform.
    desired_count: usize,
    /// Maximum search pages requested per platform.
    max_pages: u32,
    /// Search results requested per page.
    per_page: u8,
    /// Top-scored candidates verified per page.
    candidates_per_page: usize,
    /// Minimum star count in the search query.
    min_stars: u32,
    /// Rolling window, in days, for the last push date.
    freshness_days: u32,
    /// Releases fetched per installer check.
    releases_per_check: u8,
    /// Timeout for one search page request.
    search_timeout: Duration,
    /// Timeout for one release listing request.
    release_timeout: Duration,
    /// Pause after every installer check.
    candidate_delay: Duration,
    /// Pause between platforms.
    platform_delay: Duration,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            token: None,
            api_base_url: None,
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            desired_count: 30,
            max_pages: 5,
            per_page: 100,
            candidates_per_page: 50,
            min_stars: 500,
            freshness_days: 7,
            releases_per_check: 10,
            search_timeout: Duration::from_secs(30),
            release_timeout: Duration::from_secs(10),
            candidate_delay: Duration::from_millis(500),
            platform_delay: Duration::from_secs(2),
        }
    }
}

impl FetchConfig {
    /// Creates the default configuration with credentials read from the environment.
    ///
    /// A missing or blank [`TOKEN_ENV_VAR`] degrades to unauthenticated access.
    #[must_use]
    pub fn from_env() -> Self {
        Self::default()
            .with_token(std::env::var(TOKEN_ENV_VAR).ok())
            .with_api_base_url(std::env::var(API_URL_ENV_VAR).ok())
    }

    /// Sets the API token. Blank tokens are treated as absent.
    #[must_use]
    pub fn with_token(mut self, token: Option<String>) -> Self {
        self.token = non_blank(token);
        self
    }

    /// Sets an alternative API base URL. Blank values are treated as absent.
    #[must_use]
    pub fn with_api_base_url(mut self, url: Option<String>) -> Self {
        self.api_base_url = non_blank(url);
        self
    }

    #[must_use]
    pub fn with_output_dir(mut self, output_dir: impl Into<PathBuf>) -> Self {
        self.output_dir = output_dir.into();
        self
    }

    #[must_use]
    pub fn with_desired_count(mut self, desired_count: usize) -> Self {
        self.desired_count = desired_count;
        self
    }

    #[must_use]
    pub fn with_max_pages(mut self, max_pages: u32) -> Self {
        self.max_pages = max_pages;
        self
    }

    /// Sets both pacing delays at once.
    #[must_use]
    pub fn with_delays(mut self, candidate_delay: Duration, platform_delay: Duration) -> Self {
        self.candidate_delay = candidate_delay;
        self.platform_delay = platform_delay;
        self
    }

    /// Sets the search and release request timeouts.
    #[must_use]
    pub fn with_timeouts(mut self, search_timeout: Duration, release_timeout: Duration) -> Self {
        self.search_timeout = search_timeout;
        self.release_timeout = release_timeout;
        self
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn api_base_url(&self) -> Option<&str> {
        self.api_base_url.as_deref()
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    pub fn desired_count(&self) -> usize {
        self.desired_count
    }

    pub fn max_pages(&self) -> u32 {
        self.max_pages
    }

    pub fn per_page(&self) -> u8 {
        self.per_page
    }

    pub fn candidates_per_page(&self) -> usize {
        self.candidates_per_page
    }

    pub fn min_stars(&self) -> u32 {
        self.min_stars
    }

    pub fn freshness_days(&self) -> u32 {
        self.freshness_days
    }

    pub fn releases_per_check(&self) -> u8 {
        self.releases_per_check
    }

    pub fn search_timeout(&self) -> Duration {
        self.search_timeout
    }

    pub fn release_timeout(&self) -> Duration {
        self.release_timeout
    }

    pub fn candidate_delay(&self) -> Duration {
        self.candidate_delay
    }

    pub fn platform_delay(&self) -> Duration {
        self.platform_delay
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_refresh_policy() {
        let config = FetchConfig::default();

        assert_eq!(config.output_dir(), Path::new("cached-data/trending"));
        assert_eq!(config.desired_count(), 30);
        assert_eq!(config.max_pages(), 5);
        assert_eq!(config.per_page(), 100);
        assert_eq!(config.candidates_per_page(), 50);
        assert_eq!(config.search_timeout(), Duration::from_secs(30));
        assert_eq!(config.candidate_delay(), Duration::from_millis(500));
        assert_eq!(config.platform_delay(), Duration::from_secs(2));
    }

    #[test]
    fn from_env_reads_token() {
        temp_env::with_vars(
            [(TOKEN_ENV_VAR, Some("ghp_test")), (API_URL_ENV_VAR, None)],
            || {
                let config = FetchConfig::from_env();
                assert_eq!(config.token(), Some("ghp_test"));
                assert_eq!(config.api_base_url(), None);
            },
        );
    }

    #[test]
    fn from_env_without_token_is_unauthenticated() {
        temp_env::with_var_unset(TOKEN_ENV_VAR, || {
            assert_eq!(FetchConfig::from_env().token(), None);
        });
    }

    #[test]
    fn blank_token_is_ignored() {
        temp_env::with_var(TOKEN_ENV_VAR, Some("   "), || {
            assert_eq!(FetchConfig::from_env().token(), None);
        });
    }
}
