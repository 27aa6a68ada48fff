//! Boundary records exchanged with loaders and exporters.

use serde::{Deserialize, Serialize};

/// One `{section, key, text}` entry as loaded from, or submitted to, a backend.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationRecord {
    #[serde(default)]
    pub section: String,
    pub key: String,
    #[serde(default)]
    pub text: String,
    /// Source-language text, when the loader pairs entries with a reference file.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
}

impl TranslationRecord {
    pub fn new(
        section: impl Into<String>,
        key: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            section: section.into(),
            key: key.into(),
            text: text.into(),
            reference: None,
        }
    }

    pub fn with_reference(mut self, reference: impl Into<String>) -> Self {
        self.reference = Some(reference.into());
        self
    }
}
