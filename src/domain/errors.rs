// src/domain/errors.rs
use thiserror::Error;

pub type DomainResult<T> = Result<T, DomainError>;

/// Failure taxonomy shared by every ledger and catalog operation. The HTTP
/// layer maps these one-to-one onto status codes; `Persistence` never leaks
/// its message to callers.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("validation error: {0}")]
    Validation(String),
    /// State-dependent rejection: insufficient stock, occupied identifier,
    /// same-zone move.
    #[error("conflict: {0}")]
    Conflict(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("persistence error: {0}")]
    Persistence(String),
}
