//! Error types for the page generator

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for generator operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while generating checkpoint pages
///
/// Every variant is fatal for a run: nothing is retried or skipped, and
/// pages written before the failure are left on disk.
#[derive(Error, Debug)]
pub enum Error {
    /// Failed to retrieve or decode the checkpoint document
    #[error("Failed to fetch checkpoint document: {0}")]
    Fetch(String),

    /// The document does not have the expected shape
    #[error("Invalid checkpoint document: {0}")]
    Schema(String),

    /// Failed to produce the code graphic or the text label
    #[error("Rendering failed: {0}")]
    Render(String),

    /// Failed to write a page to storage
    #[error("Failed to write page to {}", path.display())]
    Persist {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    Config(String),
}
