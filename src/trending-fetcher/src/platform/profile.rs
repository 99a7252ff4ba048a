//! Platform profile records.

/// Static description of how to search for and recognise installers on one platform.
#[derive(Debug, PartialEq, Eq)]
pub struct PlatformProfile {
    /// Platform identifier (e.g., "android").
    pub name: &'static str,

    /// GitHub topic the search query is restricted to.
    pub topic: &'static str,

    /// Lowercase file suffixes of installable release assets.
    pub installer_extensions: &'static [&'static str],

    /// Keywords that raise a repository's relevance score.
    pub score_keywords: &'static [&'static str],
}

pub(super) const ANDROID: PlatformProfile = PlatformProfile {
    name: "android",
    topic: "android",
    installer_extensions: &[".apk"],
    score_keywords: &["android", "mobile", "kotlin", "java", "apk"],
};

pub(super) const WINDOWS: PlatformProfile = PlatformProfile {
    name: "windows",
    topic: "desktop",
    installer_extensions: &[".msi", ".exe"],
    score_keywords: &["desktop", "electron", "windows", "app", "gui"],
};

pub(super) const MACOS: PlatformProfile = PlatformProfile {
    name: "macos",
    topic: "macos",
    installer_extensions: &[".dmg", ".pkg"],
    score_keywords: &["macos", "desktop", "app", "swift"],
};

pub(super) const LINUX: PlatformProfile = PlatformProfile {
    name: "linux",
    topic: "linux",
    installer_extensions: &[".appimage", ".deb", ".rpm"],
    score_keywords: &["linux", "desktop", "app"],
};
