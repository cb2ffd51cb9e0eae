//! Money formatting error types.

use thiserror::Error;

/// Errors raised while formatting money.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// The amount text is not a number.
    #[error("invalid amount: {0:?}")]
    InvalidAmount(String),

    /// The currency code is not in the registry.
    #[error("unknown currency: {0}")]
    UnknownCurrency(String),
}
