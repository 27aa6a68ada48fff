//! Error types for store operations.

use thiserror::Error;

use crate::translate::TranslateError;

/// Caller errors reported by the store. State is unchanged when one is returned.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Page size must be a positive integer.
    #[error("invalid page size '{0}': expected a positive integer")]
    InvalidPageSize(String),

    /// A translation batch needs at least one selected row.
    #[error("select at least one row to translate")]
    NothingSelected,

    /// A translation batch needs a target language.
    #[error("target language is required")]
    MissingTargetLanguage,

    /// Translator answered with a different number of texts than requested.
    #[error("translator returned {actual} texts for {expected} rows")]
    TranslationCountMismatch { expected: usize, actual: usize },

    /// Translator failed.
    #[error(transparent)]
    Translate(#[from] TranslateError),

    /// A host thread panicked while holding the shared store.
    #[error("row store lock poisoned")]
    Poisoned,
}

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = StoreError::TranslationCountMismatch {
            expected: 3,
            actual: 2,
        };
        assert_eq!(err.to_string(), "translator returned 2 texts for 3 rows");
        assert_eq!(
            StoreError::InvalidPageSize("0".to_string()).to_string(),
            "invalid page size '0': expected a positive integer"
        );
    }
}
