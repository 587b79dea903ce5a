//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic, business/domain failures (validation,
/// missing ids, conflicts). A missing `get_by_id` result is `Ok(None)`, not an
/// error; `NotFound` is reserved for update/delete against an unknown id.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value failed validation (e.g. empty name, malformed URL).
    #[error("validation failed: {0}")]
    Validation(String),

    /// An identifier was invalid (e.g. parse failure at the API edge).
    #[error("invalid identifier: {0}")]
    InvalidId(String),

    /// Update/delete targeted an id unknown to the repository.
    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: i64 },

    /// A business rule was violated (e.g. double category assignment).
    #[error("conflict: {0}")]
    Conflict(String),

    /// The storage adapter failed (poisoned lock, database error).
    #[error("storage error: {0}")]
    Storage(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    pub fn not_found(entity: &'static str, id: i64) -> Self {
        Self::NotFound { entity, id }
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }

    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_message_references_the_id() {
        let err = DomainError::not_found("category", 999);
        assert_eq!(err.to_string(), "category with id 999 not found");
    }
}
