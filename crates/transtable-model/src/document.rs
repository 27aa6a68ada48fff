//! Section-map translation documents.
//!
//! The on-disk format is a JSON object of sections, each an object of
//! `key -> text`:
//!
//! ```json
//! { "billing": { "title": "Bills and Payments", "due": "Due date" } }
//! ```
//!
//! Document order is significant and preserved on read and write.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::{ModelError, Result, TranslationRecord};

/// One `key -> text` pair inside a section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub key: String,
    pub text: String,
}

/// A named group of entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub name: String,
    pub entries: Vec<Entry>,
}

impl Section {
    fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            entries: Vec::new(),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|entry| entry.key == key)
            .map(|entry| entry.text.as_str())
    }

    fn insert(&mut self, key: String, text: String) {
        match self.entries.iter_mut().find(|entry| entry.key == key) {
            Some(entry) => entry.text = text,
            None => self.entries.push(Entry { key, text }),
        }
    }
}

/// Ordered `section -> key -> text` document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SectionMap {
    sections: Vec<Section>,
}

impl SectionMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn section(&self, name: &str) -> Option<&Section> {
        self.sections.iter().find(|section| section.name == name)
    }

    pub fn get(&self, section: &str, key: &str) -> Option<&str> {
        self.section(section).and_then(|s| s.get(key))
    }

    /// Total number of entries across all sections.
    pub fn len(&self) -> usize {
        self.sections.iter().map(|s| s.entries.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Insert or overwrite an entry. Existing entries keep their position.
    pub fn insert(
        &mut self,
        section: impl Into<String>,
        key: impl Into<String>,
        text: impl Into<String>,
    ) {
        let section = section.into();
        let index = match self.sections.iter().position(|s| s.name == section) {
            Some(index) => index,
            None => {
                self.sections.push(Section::new(section));
                self.sections.len() - 1
            }
        };
        self.sections[index].insert(key.into(), text.into());
    }

    // =========================================================================
    // JSON
    // =========================================================================

    /// Parse a document from a JSON value.
    ///
    /// Sections whose value is not an object are skipped. Non-string texts are
    /// kept as their JSON text, and `null` becomes an empty string.
    pub fn from_json_value(value: Value) -> Result<Self> {
        let Value::Object(top) = value else {
            return Err(ModelError::InvalidRoot);
        };
        let mut map = Self::new();
        for (name, section_value) in top {
            let Value::Object(entries) = section_value else {
                debug!(section = %name, "skipping non-object section");
                continue;
            };
            let mut section = Section::new(name);
            for (key, text) in entries {
                let text = match text {
                    Value::String(text) => text,
                    Value::Null => String::new(),
                    other => other.to_string(),
                };
                section.insert(key, text);
            }
            map.sections.push(section);
        }
        Ok(map)
    }

    pub fn from_json_str(text: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(text)?;
        Self::from_json_value(value)
    }

    pub fn to_json_value(&self) -> Value {
        let mut top = Map::new();
        for section in &self.sections {
            let entries: Map<String, Value> = section
                .entries
                .iter()
                .map(|entry| (entry.key.clone(), Value::String(entry.text.clone())))
                .collect();
            top.insert(section.name.clone(), Value::Object(entries));
        }
        Value::Object(top)
    }

    pub fn to_json_string_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.to_json_value())?)
    }

    // =========================================================================
    // FILES
    // =========================================================================

    pub fn from_path(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|source| ModelError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&text)
    }

    /// Like [`SectionMap::from_path`], but a missing file is an empty document.
    pub fn from_path_or_empty(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "document missing, using empty map");
            return Ok(Self::new());
        }
        Self::from_path(path)
    }

    pub fn write_path(&self, path: &Path) -> Result<()> {
        let mut text = self.to_json_string_pretty()?;
        text.push('\n');
        fs::write(path, text).map_err(|source| ModelError::Write {
            path: path.to_path_buf(),
            source,
        })
    }

    // =========================================================================
    // RECORDS
    // =========================================================================

    /// Flatten into records in document order.
    ///
    /// When `reference` is given, every record carries the reference text for
    /// the same section and key, or an empty string when it has none.
    pub fn to_records(&self, reference: Option<&SectionMap>) -> Vec<TranslationRecord> {
        let lookup: Option<HashMap<(&str, &str), &str>> = reference.map(|reference| {
            reference
                .sections
                .iter()
                .flat_map(|section| {
                    section.entries.iter().map(move |entry| {
                        (
                            (section.name.as_str(), entry.key.as_str()),
                            entry.text.as_str(),
                        )
                    })
                })
                .collect()
        });

        let mut records = Vec::with_capacity(self.len());
        for section in &self.sections {
            for entry in &section.entries {
                let mut record =
                    TranslationRecord::new(&section.name, &entry.key, &entry.text);
                if let Some(lookup) = &lookup {
                    let text = lookup
                        .get(&(section.name.as_str(), entry.key.as_str()))
                        .copied()
                        .unwrap_or_default();
                    record.reference = Some(text.to_string());
                }
                records.push(record);
            }
        }
        records
    }

    /// Group records into a document, validating them for saving.
    ///
    /// Sections and keys are trimmed and must be non-empty. Sections appear in
    /// order of first use; a repeated key overwrites the earlier text in place.
    pub fn from_records(records: &[TranslationRecord]) -> Result<Self> {
        if records.is_empty() {
            return Err(ModelError::NoRows);
        }
        let mut map = Self::new();
        for record in records {
            let section = record.section.trim();
            let key = record.key.trim();
            if section.is_empty() {
                warn!(key = %key, "rejecting record without section");
                return Err(ModelError::EmptySection {
                    key: key.to_string(),
                });
            }
            if key.is_empty() {
                warn!(section = %section, "rejecting record without key");
                return Err(ModelError::EmptyKey {
                    section: section.to_string(),
                });
            }
            map.insert(section, key, record.text.as_str());
        }
        Ok(map)
    }

    /// Merge an incoming document into the order of an existing one.
    ///
    /// Only incoming sections and keys survive. Those already present in
    /// `existing` keep its order; new ones follow in incoming order.
    pub fn merge_with_existing_order(existing: &SectionMap, incoming: &SectionMap) -> SectionMap {
        let mut merged = SectionMap::new();

        for existing_section in &existing.sections {
            let Some(incoming_section) = incoming.section(&existing_section.name) else {
                continue;
            };
            let mut section = Section::new(existing_section.name.clone());
            for entry in &existing_section.entries {
                if let Some(text) = incoming_section.get(&entry.key) {
                    section.insert(entry.key.clone(), text.to_string());
                }
            }
            for entry in &incoming_section.entries {
                if section.get(&entry.key).is_none() {
                    section.insert(entry.key.clone(), entry.text.clone());
                }
            }
            merged.sections.push(section);
        }

        for incoming_section in &incoming.sections {
            if merged.section(&incoming_section.name).is_none() {
                merged.sections.push(incoming_section.clone());
            }
        }

        merged
    }

    /// Flatten to `section.key` paths for comparison.
    pub fn flatten(&self) -> Vec<(String, &str)> {
        self.sections
            .iter()
            .flat_map(|section| {
                section.entries.iter().map(move |entry| {
                    (
                        format!("{}.{}", section.name, entry.key),
                        entry.text.as_str(),
                    )
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_keeps_document_order() {
        let map = SectionMap::from_json_str(r#"{"z":{"b":"2","a":"1"},"a":{"x":"y"}}"#).unwrap();
        let names: Vec<&str> = map.sections().iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["z", "a"]);
        let keys: Vec<&str> = map.sections()[0]
            .entries
            .iter()
            .map(|e| e.key.as_str())
            .collect();
        assert_eq!(keys, ["b", "a"]);
    }

    #[test]
    fn non_object_root_is_rejected() {
        let err = SectionMap::from_json_str("[1, 2]").unwrap_err();
        assert!(matches!(err, ModelError::InvalidRoot));
    }

    #[test]
    fn scalar_sections_are_skipped_and_values_stringified() {
        let map =
            SectionMap::from_json_str(r#"{"version":3,"home":{"n":1,"empty":null}}"#).unwrap();
        assert!(map.section("version").is_none());
        assert_eq!(map.get("home", "n"), Some("1"));
        assert_eq!(map.get("home", "empty"), Some(""));
    }

    #[test]
    fn insert_overwrites_in_place() {
        let mut map = SectionMap::new();
        map.insert("home", "a", "1");
        map.insert("home", "b", "2");
        map.insert("home", "a", "3");
        assert_eq!(map.len(), 2);
        assert_eq!(map.sections()[0].entries[0].text, "3");
    }
}
