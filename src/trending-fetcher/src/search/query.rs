//! Search query construction.

use crate::config::FetchConfig;
use crate::platform::PlatformProfile;
use chrono::{DateTime, Duration, Utc};

/// Formats the oldest push date a repository may have to count as fresh.
#[must_use]
pub fn freshness_cutoff(now: DateTime<Utc>, days: u32) -> String {
    (now - Duration::days(i64::from(days)))
        .format("%Y-%m-%d")
        .to_string()
}

/// Builds a GitHub repository search query for a platform.
///
/// Format: `stars:>{min_stars} archived:false pushed:>={cutoff} topic:{topic}`
#[must_use]
pub fn build_search_query(
    profile: &PlatformProfile,
    config: &FetchConfig,
    now: DateTime<Utc>,
) -> String {
    let cutoff = freshness_cutoff(now, config.freshness_days());
    format!(
        "stars:>{} archived:false pushed:>={} topic:{}",
        config.min_stars(),
        cutoff,
        profile.topic
    )
}
