//! Error types for FoldKV core.

use crate::transaction::TransactionStatus;
use thiserror::Error;

/// Result type for core operations.
pub type KvResult<T> = Result<T, KvError>;

/// Errors that can occur in FoldKV core operations.
///
/// The in-memory core has no intrinsic failure modes: operations on present
/// or absent keys succeed deterministically, and absence is reported as
/// `None` rather than an error. What remains is the ordered map
/// collaborator's error surface, passed through unmodified, and misuse of a
/// closed transaction.
#[derive(Debug, Error)]
pub enum KvError {
    /// Ordered map collaborator error.
    #[error("ordered map error: {0}")]
    Map(#[from] foldkv_ordmap::MapError),

    /// The transaction has already been committed or rolled back.
    #[error("transaction already {status}")]
    TransactionClosed {
        /// The status the transaction terminated in.
        status: TransactionStatus,
    },
}
