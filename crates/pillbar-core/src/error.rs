//! Error types for the filter bar

use thiserror::Error;

/// Main error type for filter bar operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PillError {
    /// Title does not name any item in the catalog
    #[error("Unknown filter: {0}")]
    UnknownTitle(String),

    /// Two catalog entries share a title
    #[error("Duplicate filter title: {0}")]
    DuplicateTitle(String),

    /// Catalog entry with an empty title
    #[error("Filter title must not be empty")]
    EmptyTitle,

    /// Spring parameters that cannot produce a curve
    #[error("Invalid spring: {0}")]
    InvalidSpring(String),

    /// Appearance name other than light/dark
    #[error("Invalid appearance mode: {0} (expected \"light\" or \"dark\")")]
    InvalidAppearance(String),
}

/// Result type alias using PillError
pub type PillResult<T> = Result<T, PillError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = PillError::UnknownTitle("Vision Pro".to_string());
        assert_eq!(format!("{}", err), "Unknown filter: Vision Pro");
    }

    #[test]
    fn test_invalid_appearance_display() {
        let err = PillError::InvalidAppearance("sepia".to_string());
        assert!(err.to_string().contains("sepia"));
    }
}
