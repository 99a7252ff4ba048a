//! Release payload types.

use serde::Deserialize;

/// A downloadable file attached to a release.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ReleaseAsset {
    pub name: String,
}

/// A GitHub release as returned by the release listing endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Release {
    #[serde(default)]
    pub tag_name: Option<String>,
    #[serde(default)]
    pub draft: bool,
    #[serde(default)]
    pub prerelease: bool,
    #[serde(default)]
    pub assets: Vec<ReleaseAsset>,
}

impl Release {
    /// A release that is neither a draft nor a prerelease.
    #[must_use]
    pub fn is_stable(&self) -> bool {
        !self.draft && !self.prerelease
    }
}
