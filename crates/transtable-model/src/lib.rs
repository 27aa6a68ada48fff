//! Data model for translation table editing.
//!
//! - [`Row`] / [`RowId`]: editable entries with stable identity
//! - [`TranslationRecord`]: the `{section, key, text}` boundary shape
//! - [`SectionMap`]: the nested JSON document loaders and exporters read and write
//! - [`compare`]: entry-level differences between two documents

pub mod compare;
pub mod document;
pub mod error;
pub mod files;
pub mod ids;
pub mod record;
pub mod row;

pub use compare::{Difference, DifferenceStatus, compare};
pub use document::{Entry, Section, SectionMap};
pub use error::{ModelError, Result};
pub use files::{list_json_files, source_language_from_file_name};
pub use ids::RowId;
pub use record::TranslationRecord;
pub use row::{NewRow, Row, RowField};
