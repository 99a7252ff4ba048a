//! Target platforms and their static search/installer profiles.

mod profile;

pub use profile::PlatformProfile;

use std::fmt;

/// A target operating system the trending cache is built for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    Android,
    Windows,
    Macos,
    Linux,
}

impl Platform {
    /// Every supported platform, in processing order.
    pub const ALL: [Platform; 4] = [
        Platform::Android,
        Platform::Windows,
        Platform::Macos,
        Platform::Linux,
    ];

    /// Lowercase identifier used in output file names and documents.
    #[must_use]
    pub fn name(self) -> &'static str {
        self.profile().name
    }

    /// Returns the immutable profile for this platform.
    #[must_use]
    pub fn profile(self) -> &'static PlatformProfile {
        match self {
            Platform::Android => &profile::ANDROID,
            Platform::Windows => &profile::WINDOWS,
            Platform::Macos => &profile::MACOS,
            Platform::Linux => &profile::LINUX,
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
