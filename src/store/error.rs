//! Store errors.

use thiserror::Error;

/// Error opening or persisting a durable store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The backing file could not be read or written.
    #[error("preference file I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// The backing file exists but does not hold a JSON map of strings.
    #[error("preference file is malformed: {0}")]
    Malformed(#[from] serde_json::Error),
}
