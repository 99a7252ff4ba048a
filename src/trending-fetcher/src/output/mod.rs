//! Per-platform JSON cache documents.
//!
//! Each run overwrites `<output_dir>/<platform>.json`. Writes are not atomic.

mod document;
mod error;

pub use document::{format_timestamp, OwnerSummary, PlatformResultDocument, VerifiedEntry};
pub use error::OutputError;

use crate::platform::Platform;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Path of the document for `platform` inside `output_dir`.
#[must_use]
pub fn document_path(output_dir: &Path, platform: Platform) -> PathBuf {
    output_dir.join(format!("{}.json", platform.name()))
}

/// Writes a platform document, creating the output directory if needed.
///
/// Output is pretty-printed UTF-8 with non-ASCII characters left unescaped.
///
/// # Errors
///
/// Returns [`OutputError`] if the directory cannot be created or the file written.
pub fn write_document(
    output_dir: &Path,
    platform: Platform,
    document: &PlatformResultDocument,
) -> Result<PathBuf, OutputError> {
    std::fs::create_dir_all(output_dir).map_err(|e| OutputError::CreateDir {
        path: output_dir.display().to_string(),
        source: e,
    })?;

    let path = document_path(output_dir, platform);
    let json = serde_json::to_string_pretty(document).map_err(|e| OutputError::Serialize {
        path: path.display().to_string(),
        source: e,
    })?;

    std::fs::write(&path, json).map_err(|e| OutputError::Write {
        path: path.display().to_string(),
        source: e,
    })?;

    debug!(path = %path.display(), count = document.total_count, "Wrote document");
    Ok(path)
}

/// Reads a previously written platform document.
///
/// # Errors
///
/// Returns [`OutputError`] if the file cannot be read or parsed.
pub fn read_document(path: &Path) -> Result<PlatformResultDocument, OutputError> {
    let content = std::fs::read_to_string(path).map_err(|e| OutputError::Read {
        path: path.display().to_string(),
        source: e,
    })?;

    serde_json::from_str(&content).map_err(|e| OutputError::Deserialize {
        path: path.display().to_string(),
        source: e,
    })
}
