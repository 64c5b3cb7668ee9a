//! Error types for registry operations.

use ring_core::DomainError;
use thiserror::Error;

/// Common result type for registry operations.
pub type Result<T> = std::result::Result<T, RegistryError>;

/// Errors surfaced by repository operations.
///
/// Validation and conflict errors are the caller's fault and safe to
/// surface verbatim; storage errors propagate unchanged and are fatal to
/// the current operation.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// Malformed or out-of-range input.
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Another boxer already holds this name.
    #[error("boxer '{0}' already exists")]
    NameTaken(String),

    /// No boxer with this id.
    #[error("boxer with id {0} not found")]
    NotFoundById(i64),

    /// No boxer with this name.
    #[error("boxer '{0}' not found")]
    NotFoundByName(String),

    /// Underlying database failure, propagated unchanged.
    #[error("database error: {0}")]
    Storage(#[from] rusqlite::Error),
}

impl RegistryError {
    /// True for malformed-input errors the caller should fix, not retry.
    pub fn is_validation(&self) -> bool {
        matches!(self, RegistryError::Domain(_))
    }

    /// True when a referenced boxer does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            RegistryError::NotFoundById(_) | RegistryError::NotFoundByName(_)
        )
    }

    /// True for duplicate-name conflicts, however they were detected.
    pub fn is_conflict(&self) -> bool {
        matches!(self, RegistryError::NameTaken(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kinds() {
        let err = RegistryError::Domain(DomainError::InvalidWeight(100));
        assert!(err.is_validation());
        assert!(!err.is_not_found());
        assert!(!err.is_conflict());

        let err = RegistryError::NameTaken("Ali".to_string());
        assert!(err.is_conflict());
        assert!(!err.is_validation());

        assert!(RegistryError::NotFoundById(7).is_not_found());
        assert!(RegistryError::NotFoundByName("Ali".to_string()).is_not_found());
    }

    #[test]
    fn test_domain_error_message_passes_through() {
        let err = RegistryError::from(DomainError::InvalidAge(41));
        assert_eq!(
            err.to_string(),
            "invalid age: 41, must be between 18 and 40"
        );
    }

    #[test]
    fn test_not_found_messages() {
        assert_eq!(
            RegistryError::NotFoundById(3).to_string(),
            "boxer with id 3 not found"
        );
        assert_eq!(
            RegistryError::NameTaken("Ali".to_string()).to_string(),
            "boxer 'Ali' already exists"
        );
    }
}
