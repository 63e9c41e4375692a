//! Error types for transaction submission.

use thiserror::Error;

/// Result type for submit operations.
pub type SubmitResult<T> = Result<T, SubmitError>;

/// Errors that can occur when submitting a staged transaction.
#[derive(Debug, Error)]
pub enum SubmitError {
    /// A submit is already outstanding; this attempt was rejected with no
    /// side effect. At most one submit is in flight at a time.
    #[error("a transaction submit is already in flight")]
    InFlight,

    /// The backend rejected the batch. The staged list is untouched and
    /// the submitter is back at idle, so an unmodified retry is valid.
    /// The underlying error passes through verbatim for display.
    #[error(transparent)]
    Backend(#[from] anyhow::Error),
}
