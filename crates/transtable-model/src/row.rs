#![deny(unsafe_code)]

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{ModelError, RowId, TranslationRecord};

/// One editable translation entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Row {
    pub id: RowId,
    /// Grouping label; empty when the source has no sections.
    pub section: String,
    pub key: String,
    /// Translated (target) text.
    pub value: String,
    /// Source text shown for context.
    pub reference: Option<String>,
    pub selected: bool,
}

impl Row {
    /// Build a row from a loaded record.
    pub fn from_record(id: RowId, record: TranslationRecord, selected: bool) -> Self {
        Self {
            id,
            section: record.section,
            key: record.key,
            value: record.text,
            reference: record.reference,
            selected,
        }
    }

    /// Current text of an editable field. An absent reference reads as "".
    pub fn field(&self, field: RowField) -> &str {
        match field {
            RowField::Key => &self.key,
            RowField::Value => &self.value,
            RowField::Reference => self.reference.as_deref().unwrap_or(""),
        }
    }

    /// Overwrite one editable field. Identity and section never change here.
    pub fn set_field(&mut self, field: RowField, text: impl Into<String>) {
        let text = text.into();
        match field {
            RowField::Key => self.key = text,
            RowField::Value => self.value = text,
            RowField::Reference => self.reference = Some(text),
        }
    }

    /// Case-insensitive substring match over section, key, value, and reference.
    ///
    /// `needle` must already be lowercase.
    pub fn matches(&self, needle: &str) -> bool {
        if needle.is_empty() {
            return true;
        }
        [
            self.key.as_str(),
            self.value.as_str(),
            self.section.as_str(),
            self.reference.as_deref().unwrap_or(""),
        ]
        .iter()
        .any(|text| text.to_lowercase().contains(needle))
    }

    pub fn to_record(&self) -> TranslationRecord {
        TranslationRecord {
            section: self.section.clone(),
            key: self.key.clone(),
            text: self.value.clone(),
            reference: self.reference.clone(),
        }
    }
}

/// Editable row fields addressed by host edit events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RowField {
    Key,
    #[serde(alias = "text")]
    Value,
    Reference,
}

impl RowField {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Key => "key",
            Self::Value => "value",
            Self::Reference => "reference",
        }
    }
}

impl FromStr for RowField {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "key" => Ok(Self::Key),
            "value" | "text" => Ok(Self::Value),
            "reference" => Ok(Self::Reference),
            _ => Err(ModelError::UnknownField(s.to_string())),
        }
    }
}

impl fmt::Display for RowField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Initial field values for a row created by the host.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewRow {
    pub section: String,
    pub key: String,
    pub value: String,
    pub reference: Option<String>,
}

impl NewRow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_section(mut self, section: impl Into<String>) -> Self {
        self.section = section.into();
        self
    }

    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = key.into();
        self
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    pub fn with_reference(mut self, reference: impl Into<String>) -> Self {
        self.reference = Some(reference.into());
        self
    }

    pub fn into_row(self, id: RowId, selected: bool) -> Row {
        Row {
            id,
            section: self.section,
            key: self.key,
            value: self.value,
            reference: self.reference,
            selected,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Row {
        Row {
            id: RowId::for_entry("billing", "title"),
            section: "billing".to_string(),
            key: "title".to_string(),
            value: "Bills and Payments".to_string(),
            reference: None,
            selected: true,
        }
    }

    #[test]
    fn matches_is_case_insensitive() {
        let row = sample();
        assert!(row.matches("payments"));
        assert!(row.matches("bill"));
        assert!(row.matches("tit"));
        assert!(!row.matches("invoice"));
    }

    #[test]
    fn empty_needle_matches_everything() {
        assert!(sample().matches(""));
    }

    #[test]
    fn reference_participates_in_matching() {
        let mut row = sample();
        assert!(!row.matches("factures"));
        row.set_field(RowField::Reference, "Factures et Paiements");
        assert!(row.matches("factures"));
    }

    #[test]
    fn set_field_keeps_identity() {
        let mut row = sample();
        let id = row.id;
        row.set_field(RowField::Key, "heading");
        assert_eq!(row.id, id);
        assert_eq!(row.section, "billing");
        assert_eq!(row.field(RowField::Key), "heading");
    }

    #[test]
    fn field_names_parse() {
        assert_eq!("key".parse::<RowField>().unwrap(), RowField::Key);
        assert_eq!("Text".parse::<RowField>().unwrap(), RowField::Value);
        assert_eq!(
            "reference".parse::<RowField>().unwrap(),
            RowField::Reference
        );
        assert!("id".parse::<RowField>().is_err());
    }
}
