//! Entry-level comparison of two section-map documents.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::SectionMap;

/// How an entry differs between the two documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DifferenceStatus {
    /// Present only in the right-hand document.
    MissingInLeft,
    /// Present only in the left-hand document.
    MissingInRight,
    /// Present in both with different text.
    DifferentValues,
}

impl DifferenceStatus {
    pub fn label(&self) -> &'static str {
        match self {
            Self::MissingInLeft => "Missing in file 1",
            Self::MissingInRight => "Missing in file 2",
            Self::DifferentValues => "Different values",
        }
    }
}

impl fmt::Display for DifferenceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One differing `section.key` path. Missing sides read as "".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Difference {
    pub key_path: String,
    pub left: String,
    pub right: String,
    pub status: DifferenceStatus,
}

/// Differences between two documents, sorted by key path.
pub fn compare(left: &SectionMap, right: &SectionMap) -> Vec<Difference> {
    let mut paths: BTreeMap<String, (Option<&str>, Option<&str>)> = BTreeMap::new();
    for (path, text) in left.flatten() {
        paths.entry(path).or_default().0 = Some(text);
    }
    for (path, text) in right.flatten() {
        paths.entry(path).or_default().1 = Some(text);
    }

    paths
        .into_iter()
        .filter_map(|(key_path, sides)| {
            let status = match sides {
                (Some(l), Some(r)) if l == r => return None,
                (None, _) => DifferenceStatus::MissingInLeft,
                (_, None) => DifferenceStatus::MissingInRight,
                _ => DifferenceStatus::DifferentValues,
            };
            Some(Difference {
                key_path,
                left: sides.0.unwrap_or_default().to_string(),
                right: sides.1.unwrap_or_default().to_string(),
                status,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_documents_have_no_differences() {
        let map = SectionMap::from_json_str(r#"{"home":{"title":"Home"}}"#).unwrap();
        assert!(compare(&map, &map).is_empty());
    }

    #[test]
    fn status_labels() {
        assert_eq!(DifferenceStatus::MissingInLeft.to_string(), "Missing in file 1");
        assert_eq!(DifferenceStatus::MissingInRight.to_string(), "Missing in file 2");
    }
}
