//! Installer verification against a repository's latest stable release.

mod release;

pub use release::{Release, ReleaseAsset};

use crate::client::GitHubApi;
use crate::platform::PlatformProfile;
use std::fmt;
use tracing::{debug, warn};

/// Outcome of checking a repository for a platform installer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstallerCheck {
    /// The latest stable release ships a matching asset.
    Found {
        /// Name of the first matching asset.
        asset: String,
    },

    /// No release in the listing is stable.
    NoStableRelease,

    /// The latest stable release has no assets.
    NoAssets,

    /// The latest stable release has assets, none of them installers.
    NoMatchingAsset,

    /// The release listing could not be fetched or decoded.
    RequestFailed {
        /// Error message.
        error: String,
    },
}

impl InstallerCheck {
    /// Returns true when an installer was found.
    #[must_use]
    pub fn is_found(&self) -> bool {
        matches!(self, InstallerCheck::Found { .. })
    }
}

impl fmt::Display for InstallerCheck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InstallerCheck::Found { asset } => write!(f, "found {asset}"),
            InstallerCheck::NoStableRelease => f.write_str("no stable release"),
            InstallerCheck::NoAssets => f.write_str("stable release has no assets"),
            InstallerCheck::NoMatchingAsset => f.write_str("no installer asset"),
            InstallerCheck::RequestFailed { error } => write!(f, "request failed: {error}"),
        }
    }
}

/// Returns the first stable release in listing order.
#[must_use]
pub fn find_stable_release(releases: &[Release]) -> Option<&Release> {
    releases.iter().find(|release| release.is_stable())
}

/// Case-insensitive suffix match of an asset name against installer extensions.
#[must_use]
pub fn is_installer_asset(asset_name: &str, extensions: &[&str]) -> bool {
    let name = asset_name.to_lowercase();
    extensions.iter().any(|ext| name.ends_with(ext))
}

/// Inspects a release listing for a platform installer.
///
/// Only the first stable release is considered; assets of older or
/// unstable releases never count.
#[must_use]
pub fn check_releases(releases: &[Release], profile: &PlatformProfile) -> InstallerCheck {
    let Some(release) = find_stable_release(releases) else {
        return InstallerCheck::NoStableRelease;
    };

    if release.assets.is_empty() {
        return InstallerCheck::NoAssets;
    }

    release
        .assets
        .iter()
        .find(|asset| is_installer_asset(&asset.name, profile.installer_extensions))
        .map_or(InstallerCheck::NoMatchingAsset, |asset| {
            InstallerCheck::Found {
                asset: asset.name.clone(),
            }
        })
}

/// Fetches recent releases of `owner/repo` and checks them for an installer.
///
/// Request failures become [`InstallerCheck::RequestFailed`] and are never
/// propagated.
pub async fn verify_installer<A: GitHubApi + ?Sized>(
    api: &A,
    owner: &str,
    repo: &str,
    profile: &PlatformProfile,
    releases_per_check: u8,
) -> InstallerCheck {
    match api.list_releases(owner, repo, releases_per_check).await {
        Ok(releases) => {
            let check = check_releases(&releases, profile);
            let tag = find_stable_release(&releases)
                .and_then(|release| release.tag_name.as_deref())
                .unwrap_or("-");
            debug!(
                repo = %format!("{owner}/{repo}"),
                tag,
                result = %check,
                "Checked releases"
            );
            check
        }
        Err(e) => {
            warn!(repo = %format!("{owner}/{repo}"), error = %e, "Error checking installers");
            InstallerCheck::RequestFailed {
                error: e.to_string(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::Platform;

    fn release(draft: bool, prerelease: bool, assets: &[&str]) -> Release {
        Release {
            tag_name: None,
            draft,
            prerelease,
            assets: assets
                .iter()
                .map(|name| ReleaseAsset {
                    name: name.to_string(),
                })
                .collect(),
        }
    }

    #[test]
    fn matches_extension_case_insensitively() {
        assert!(is_installer_asset("App-release.APK", &[".apk"]));
        assert!(!is_installer_asset("App-release.apk.sha256", &[".apk"]));
    }

    #[test]
    fn skips_drafts_and_prereleases() {
        let releases = vec![
            release(true, false, &["draft.deb"]),
            release(false, true, &["beta.deb"]),
            release(false, false, &["tool.tar.gz", "tool.deb"]),
        ];

        assert_eq!(
            check_releases(&releases, Platform::Linux.profile()),
            InstallerCheck::Found {
                asset: "tool.deb".to_string()
            }
        );
    }

    #[test]
    fn stable_release_without_assets_is_not_found() {
        let releases = vec![
            release(false, false, &[]),
            release(false, false, &["older.apk"]),
        ];

        let check = check_releases(&releases, Platform::Android.profile());
        assert_eq!(check, InstallerCheck::NoAssets);
        assert!(!check.is_found());
    }

    #[test]
    fn only_prereleases_means_no_stable_release() {
        let releases = vec![release(false, true, &["app.dmg"])];
        assert_eq!(
            check_releases(&releases, Platform::Macos.profile()),
            InstallerCheck::NoStableRelease
        );
    }

    #[test]
    fn non_matching_assets() {
        let releases = vec![release(false, false, &["source.zip", "checksums.txt"])];
        assert_eq!(
            check_releases(&releases, Platform::Windows.profile()),
            InstallerCheck::NoMatchingAsset
        );
    }

    #[test]
    fn release_payload_defaults() {
        let release: Release = serde_json::from_str(r#"{"tag_name":"v1.0"}"#).unwrap();
        assert!(release.is_stable());
        assert!(release.assets.is_empty());
    }
}
