//! Error types for ordered map operations.

use std::io;
use thiserror::Error;

/// Result type for ordered map operations.
pub type MapResult<T> = Result<T, MapError>;

/// Errors that can occur during ordered map operations.
///
/// The in-memory [`crate::BTreeOrderedMap`] never raises these; the surface
/// exists so that implementations backed by real resources (files, quotas)
/// can fail, and so callers propagate such failures unmodified.
#[derive(Debug, Error)]
pub enum MapError {
    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The map ran out of an internal resource.
    #[error("resource exhausted: {message}")]
    ResourceExhausted {
        /// Description of the exhausted resource.
        message: String,
    },

    /// The map's internal state is corrupted.
    #[error("map corrupted: {message}")]
    Corrupted {
        /// Description of the corruption.
        message: String,
    },
}

impl MapError {
    /// Creates a resource exhausted error.
    pub fn resource_exhausted(message: impl Into<String>) -> Self {
        Self::ResourceExhausted {
            message: message.into(),
        }
    }

    /// Creates a corruption error.
    pub fn corrupted(message: impl Into<String>) -> Self {
        Self::Corrupted {
            message: message.into(),
        }
    }
}
