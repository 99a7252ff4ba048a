//! Output error types.

use thiserror::Error;

/// Errors that can occur while writing or reading a platform document.
#[derive(Debug, Error)]
pub enum OutputError {
    /// Failed to create the output directory.
    #[error("Failed to create directory '{path}': {source}")]
    CreateDir {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Failed to write a document.
    #[error("Failed to write '{path}': {source}")]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Failed to read a document.
    #[error("Failed to read '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Failed to encode a document as JSON.
    #[error("Failed to serialize document for '{path}': {source}")]
    Serialize {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    /// Failed to decode a document.
    #[error("Failed to parse '{path}': {source}")]
    Deserialize {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}
