//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic, business/domain failures (validation,
/// bad catalog codes). Infrastructure concerns belong elsewhere.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value failed validation (e.g. negative weight, non-positive price).
    #[error("validation failed: {0}")]
    Validation(String),

    /// A catalog code was not recognized (e.g. parse failure on a gold type).
    #[error("invalid code: {0}")]
    InvalidCode(String),

    /// A requested resource was not found (domain-level).
    #[error("not found")]
    NotFound,
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invalid_code(msg: impl Into<String>) -> Self {
        Self::InvalidCode(msg.into())
    }

    pub fn not_found() -> Self {
        Self::NotFound
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructor_helpers_build_matching_variants() {
        assert_eq!(
            DomainError::validation("weight"),
            DomainError::Validation("weight".to_string())
        );
        assert_eq!(
            DomainError::invalid_code("gold type XYZ"),
            DomainError::InvalidCode("gold type XYZ".to_string())
        );
        assert_eq!(DomainError::not_found(), DomainError::NotFound);
    }

    #[test]
    fn display_includes_message() {
        let err = DomainError::validation("stone value must be non-negative");
        assert_eq!(
            err.to_string(),
            "validation failed: stone value must be non-negative"
        );
    }
}
