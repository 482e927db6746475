//! Storage error types.

use crate::codec::{DecodeError, EncodeError};
use thiserror::Error;

/// Errors that can occur while reading or writing persisted snapshots
#[derive(Debug, Error)]
pub enum StorageError {
    /// The backing store could not be read or written
    #[error("Storage I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// The stored blob is not a valid document
    #[error("Stored snapshot is invalid: {0}")]
    Decode(#[from] DecodeError),

    /// The document could not be serialized
    #[error("Snapshot serialization failed: {0}")]
    Encode(#[from] EncodeError),
}
