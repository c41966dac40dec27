use std::io;

use thiserror::Error;

/// Errors reported by [`ProgressTracker`](crate::ProgressTracker) operations.
///
/// None of these are fatal to the tracker. After a [`ProgressError::MaximumExceeded`] or a
/// [`ProgressError::WriteFailure`] the tracker keeps the state produced by the failing call and
/// can continue to be used.
#[derive(Debug, Error)]
pub enum ProgressError {
    /// The tracker was built with a maximum of zero, so no ratio can be computed.
    #[error("max must be greater than 0")]
    InvalidConfiguration,

    /// The cumulative count went past the maximum.
    ///
    /// The count that triggered this is already stored in the tracker, it is not rolled back.
    #[error("current number {count} exceeds max {max}")]
    MaximumExceeded { count: u64, max: u64 },

    /// The output sink rejected a write or flush.
    #[error("failed to write progress bar")]
    WriteFailure(#[from] io::Error),
}

pub type Result<T, E = ProgressError> = std::result::Result<T, E>;
