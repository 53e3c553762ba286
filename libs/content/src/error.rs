//! Custom error types for the content library
//!
//! Lookups that find nothing are not errors: repositories report them as
//! `Ok(None)`. This module covers failures of the storage backend itself.

use thiserror::Error;

/// Custom error type for repository operations
#[derive(Error, Debug)]
pub enum RepositoryError {
    /// Error raised by the storage backend
    #[error("Repository backend error: {0}")]
    Backend(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl RepositoryError {
    /// Wrap a backend error
    pub fn backend(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Backend(Box::new(err))
    }
}

/// Type alias for Result with RepositoryError
pub type RepositoryResult<T> = Result<T, RepositoryError>;
