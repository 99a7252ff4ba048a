//! Per-platform result types.

use std::path::PathBuf;

/// Result of processing a single platform.
#[derive(Debug, Clone)]
pub enum PlatformOutcome {
    /// The document was written.
    Written {
        /// Platform name.
        platform: String,
        /// Path of the written document.
        path: PathBuf,
        /// Number of verified repositories in the document.
        count: usize,
        /// Whether pagination ended on a failed search request.
        search_failed: bool,
    },

    /// The document could not be written.
    Failed {
        /// Platform name.
        platform: String,
        /// Error message.
        error: String,
    },
}

impl PlatformOutcome {
    /// Platform this outcome belongs to.
    #[must_use]
    pub fn platform(&self) -> &str {
        match self {
            PlatformOutcome::Written { platform, .. }
            | PlatformOutcome::Failed { platform, .. } => platform,
        }
    }
}
