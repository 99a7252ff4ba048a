//! Orchestrates a trending-cache refresh across all platforms.

mod error;

pub use error::RunnerError;

use crate::client::{GitHubApi, OctocrabApi};
use crate::collector::collect_trending;
use crate::config::FetchConfig;
use crate::output::{format_timestamp, write_document, PlatformResultDocument};
use crate::platform::Platform;
use crate::summary::{PlatformOutcome, RunSummary};
use chrono::Utc;
use tracing::{error, info};

/// Runs the fetch-score-verify-write pipeline for every platform.
pub struct Runner<A = OctocrabApi> {
    api: A,
    config: FetchConfig,
}

impl Runner<OctocrabApi> {
    /// Builds a runner talking to GitHub with the provided configuration.
    pub fn new(config: FetchConfig) -> Result<Self, RunnerError> {
        let api = OctocrabApi::new(&config)?;
        Ok(Self { api, config })
    }
}

impl<A: GitHubApi> Runner<A> {
    /// Builds a runner over an arbitrary API source.
    pub fn with_api(api: A, config: FetchConfig) -> Self {
        Self { api, config }
    }

    /// Processes every platform in order, overwriting each platform's document.
    ///
    /// Search, verification and write failures are contained per platform;
    /// the run always visits all platforms.
    pub async fn run(&self) -> RunSummary {
        let last_updated = format_timestamp(Utc::now());
        let mut summary = RunSummary::new(last_updated.clone());

        for (index, platform) in Platform::ALL.into_iter().enumerate() {
            if index > 0 {
                tokio::time::sleep(self.config.platform_delay()).await;
            }

            info!(platform = %platform, "Processing platform");
            let outcome = self.process_platform(platform, &last_updated, &mut summary).await;
            summary.record_outcome(outcome);
        }

        info!(
            platforms = summary.platforms_processed,
            verified = summary.repositories_verified,
            "All platforms processed"
        );
        summary
    }

    async fn process_platform(
        &self,
        platform: Platform,
        last_updated: &str,
        summary: &mut RunSummary,
    ) -> PlatformOutcome {
        let collection = collect_trending(&self.api, platform, &self.config).await;
        summary.record_collection(&collection);

        let search_failed = collection.page_error.is_some();
        let document = PlatformResultDocument::new(platform, last_updated, collection.entries);

        match write_document(self.config.output_dir(), platform, &document) {
            Ok(path) => {
                info!(
                    platform = %platform,
                    count = document.total_count,
                    path = %path.display(),
                    "Saved repositories"
                );
                PlatformOutcome::Written {
                    platform: platform.name().to_string(),
                    path,
                    count: document.total_count,
                    search_failed,
                }
            }
            Err(e) => {
                error!(platform = %platform, error = %e, "Failed to save repositories");
                PlatformOutcome::Failed {
                    platform: platform.name().to_string(),
                    error: e.to_string(),
                }
            }
        }
    }
}
