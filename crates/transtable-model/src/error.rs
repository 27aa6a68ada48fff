//! Error types for the translation table model.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while parsing, validating, or persisting model values.
#[derive(Debug, Error)]
pub enum ModelError {
    // === Field Errors ===
    /// Field name is not one of the editable row fields.
    #[error("unknown row field '{0}' (expected key, value, or reference)")]
    UnknownField(String),

    /// Row id text is not 32 lowercase hex characters.
    #[error("invalid row id '{0}'")]
    InvalidRowId(String),

    // === Record Validation ===
    /// A record submitted for saving has a blank section.
    #[error("each row must have a non-empty section (key '{key}')")]
    EmptySection { key: String },

    /// A record submitted for saving has a blank key.
    #[error("each row must have a non-empty key (section '{section}')")]
    EmptyKey { section: String },

    /// Nothing to save.
    #[error("no rows provided to save")]
    NoRows,

    // === Document Errors ===
    /// Document root is not a JSON object.
    #[error("invalid JSON format: expected object at root")]
    InvalidRoot,

    /// Document is not valid JSON.
    #[error("failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// File name cannot name a language or document.
    #[error("invalid file name '{0}'")]
    InvalidFileName(String),

    // === File System Errors ===
    /// Failed to read a document or directory.
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to write a document.
    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type for model operations.
pub type Result<T> = std::result::Result<T, ModelError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ModelError::EmptyKey {
            section: "home".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "each row must have a non-empty key (section 'home')"
        );
    }

    #[test]
    fn test_error_from_json() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: ModelError = json_err.into();
        assert!(matches!(err, ModelError::Json(_)));
    }
}
