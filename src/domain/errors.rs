// src/domain/errors.rs
use thiserror::Error;

pub type DomainResult<T> = Result<T, DomainError>;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("conflict: {0}")]
    Conflict(String),
    /// A unique slug constraint rejected the write. Callers may re-resolve and retry.
    #[error("slug already taken: {0}")]
    SlugTaken(String),
    #[error("slug search exhausted: {0}")]
    SlugExhausted(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("persistence error: {0}")]
    Persistence(String),
}
