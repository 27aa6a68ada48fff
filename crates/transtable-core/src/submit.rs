//! Outbound payloads: submit records and translation batches.

use tracing::{debug, info, warn};
use transtable_model::{RowField, RowId, TranslationRecord};

use crate::{Result, RowStore, StoreError};

/// Which rows a submit reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitMode {
    /// Rows with `selected = true`.
    #[default]
    Selected,
    /// Every row, for hosts without selection.
    All,
}

/// Snapshot of the selected rows handed to a translator.
///
/// Rows are remembered by id so the answer can be written back after the
/// (possibly asynchronous) translator call, even if rows were deleted or
/// reordered in the meantime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationBatch {
    source_language: String,
    target_language: String,
    entries: Vec<(RowId, TranslationRecord)>,
}

impl TranslationBatch {
    pub fn source_language(&self) -> &str {
        &self.source_language
    }

    pub fn target_language(&self) -> &str {
        &self.target_language
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = RowId> + '_ {
        self.entries.iter().map(|(id, _)| *id)
    }

    pub fn records(&self) -> impl Iterator<Item = &TranslationRecord> {
        self.entries.iter().map(|(_, record)| record)
    }

    /// Texts to translate, in batch order.
    pub fn texts(&self) -> Vec<String> {
        self.records().map(|record| record.text.clone()).collect()
    }
}

impl RowStore {
    /// Records for an outbound submit, in store order.
    pub fn submit(&self, mode: SubmitMode) -> Vec<TranslationRecord> {
        let records: Vec<TranslationRecord> = self
            .rows()
            .iter()
            .filter(|row| mode == SubmitMode::All || row.selected)
            .map(|row| row.to_record())
            .collect();
        info!(mode = ?mode, rows = records.len(), "submit payload built");
        records
    }

    /// Snapshot the selected rows for translation.
    ///
    /// # Errors
    ///
    /// [`StoreError::MissingTargetLanguage`] for a blank target and
    /// [`StoreError::NothingSelected`] when no row is selected.
    pub fn translation_batch(&self, source: &str, target: &str) -> Result<TranslationBatch> {
        let target = target.trim();
        if target.is_empty() {
            warn!("translation requested without target language");
            return Err(StoreError::MissingTargetLanguage);
        }
        let entries: Vec<(RowId, TranslationRecord)> = self
            .rows()
            .iter()
            .filter(|row| row.selected)
            .map(|row| (row.id, row.to_record()))
            .collect();
        if entries.is_empty() {
            warn!("translation requested with no rows selected");
            return Err(StoreError::NothingSelected);
        }
        debug!(rows = entries.len(), target, "translation batch built");
        Ok(TranslationBatch {
            source_language: source.trim().to_string(),
            target_language: target.to_string(),
            entries,
        })
    }

    /// Write translated texts back into the batch's rows.
    ///
    /// Rows deleted since the batch was built are skipped. Returns the number
    /// of rows updated.
    ///
    /// # Errors
    ///
    /// [`StoreError::TranslationCountMismatch`] when `texts` does not have one
    /// entry per batch row; nothing is written in that case.
    pub fn apply_translations(
        &mut self,
        batch: &TranslationBatch,
        texts: Vec<String>,
    ) -> Result<usize> {
        if texts.len() != batch.len() {
            return Err(StoreError::TranslationCountMismatch {
                expected: batch.len(),
                actual: texts.len(),
            });
        }
        let mut updated = 0;
        for (id, text) in batch.ids().zip(texts) {
            if self.update_field(id, RowField::Value, text) {
                updated += 1;
            }
        }
        Ok(updated)
    }
}
