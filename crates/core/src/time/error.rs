//! Time difference error types.

use thiserror::Error;

/// Errors raised while computing a time difference.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimeError {
    /// The input is not a recognized datetime.
    #[error("cannot parse datetime: {0:?}")]
    Parse(String),
}
