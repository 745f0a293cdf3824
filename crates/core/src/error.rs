//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Every failure is raised at the point of violation and nothing is committed
/// before it: a rejected ticket does not consume a sequence number, a rejected
/// sale does not touch the ledger.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// An argument failed validation (non-positive price, absent ticket, ...).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// An operation was called in a state that does not allow it.
    #[error("precondition violated: {0}")]
    PreconditionViolated(String),

    /// Process configuration could not be read or was out of range.
    #[error("invalid configuration: {0}")]
    Configuration(String),
}

impl DomainError {
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    pub fn precondition(msg: impl Into<String>) -> Self {
        Self::PreconditionViolated(msg.into())
    }

    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }
}
