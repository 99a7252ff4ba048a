//! Collection outcome.

use crate::output::VerifiedEntry;

/// Everything one platform's fetch-score-verify pass produced.
#[derive(Debug, Clone, Default)]
pub struct CollectionOutcome {
    /// Verified entries in discovery order.
    pub entries: Vec<VerifiedEntry>,

    /// Search pages that returned results.
    pub pages_fetched: u32,

    /// Candidates whose releases were checked.
    pub candidates_checked: usize,

    /// Search items skipped because they did not match the expected schema.
    pub malformed_skipped: usize,

    /// Error that ended pagination early, if any.
    pub page_error: Option<String>,
}
