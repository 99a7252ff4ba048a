//! Run summary types.

use super::result::PlatformOutcome;
use crate::collector::CollectionOutcome;

/// Summary of a complete run.
#[derive(Debug, Clone, Default)]
pub struct RunSummary {
    /// Timestamp written into every document of this run.
    pub last_updated: String,

    /// Number of platforms processed.
    pub platforms_processed: usize,

    /// Search pages that returned results, across all platforms.
    pub pages_fetched: u32,

    /// Candidates checked for installers.
    pub candidates_checked: usize,

    /// Repositories verified and written.
    pub repositories_verified: usize,

    /// Malformed search items skipped.
    pub malformed_skipped: usize,

    /// Platforms whose pagination ended on a failed search request.
    pub search_failures: usize,

    /// Platforms whose document could not be written.
    pub write_failures: usize,

    /// Per-platform outcomes in processing order.
    pub outcomes: Vec<PlatformOutcome>,
}

impl RunSummary {
    /// Creates a new empty summary.
    #[must_use]
    pub fn new(last_updated: impl Into<String>) -> Self {
        Self {
            last_updated: last_updated.into(),
            ..Default::default()
        }
    }

    /// Updates the summary with one platform's collection counters.
    pub fn record_collection(&mut self, collection: &CollectionOutcome) {
        self.platforms_processed += 1;
        self.pages_fetched += collection.pages_fetched;
        self.candidates_checked += collection.candidates_checked;
        self.malformed_skipped += collection.malformed_skipped;
        if collection.page_error.is_some() {
            self.search_failures += 1;
        }
    }

    /// Updates the summary with a platform's write result.
    pub fn record_outcome(&mut self, outcome: PlatformOutcome) {
        match &outcome {
            PlatformOutcome::Written { count, .. } => self.repositories_verified += count,
            PlatformOutcome::Failed { .. } => self.write_failures += 1,
        }
        self.outcomes.push(outcome);
    }

    /// Returns true if any failures occurred.
    #[must_use]
    pub fn has_failures(&self) -> bool {
        self.search_failures > 0 || self.write_failures > 0
    }
}
