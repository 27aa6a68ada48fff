//! Translation collaborators.
//!
//! Machine translation lives outside the store. A [`Translator`] receives the
//! texts of a [`crate::TranslationBatch`] and answers with one translated text
//! per input, in order.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

use crate::{Result, RowStore};

/// Errors reported by a translation provider.
#[derive(Debug, Error)]
pub enum TranslateError {
    /// Provider has nothing for the requested target language.
    #[error("no translations available for language '{0}'")]
    UnsupportedLanguage(String),

    /// Provider call failed.
    #[error("translation provider failed: {0}")]
    Provider(String),
}

/// External translation service.
pub trait Translator {
    /// Translate `texts` from `source` to `target`, one output per input.
    fn translate(
        &self,
        source: &str,
        target: &str,
        texts: &[String],
    ) -> std::result::Result<Vec<String>, TranslateError>;
}

/// Phrase-table translator: exact text lookups per target language.
///
/// Texts without an entry are returned unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DictionaryTranslator {
    /// target language -> source text -> translated text
    phrases: BTreeMap<String, BTreeMap<String, String>>,
}

impl DictionaryTranslator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_phrase(
        mut self,
        target: impl Into<String>,
        source_text: impl Into<String>,
        translated: impl Into<String>,
    ) -> Self {
        self.insert(target, source_text, translated);
        self
    }

    pub fn insert(
        &mut self,
        target: impl Into<String>,
        source_text: impl Into<String>,
        translated: impl Into<String>,
    ) {
        self.phrases
            .entry(target.into())
            .or_default()
            .insert(source_text.into(), translated.into());
    }

    pub fn languages(&self) -> impl Iterator<Item = &str> {
        self.phrases.keys().map(String::as_str)
    }
}

impl Translator for DictionaryTranslator {
    fn translate(
        &self,
        _source: &str,
        target: &str,
        texts: &[String],
    ) -> std::result::Result<Vec<String>, TranslateError> {
        let table = self
            .phrases
            .get(target)
            .ok_or_else(|| TranslateError::UnsupportedLanguage(target.to_string()))?;
        Ok(texts
            .iter()
            .map(|text| table.get(text).cloned().unwrap_or_else(|| text.clone()))
            .collect())
    }
}

/// Translate the selected rows of `store` in place.
///
/// Builds a batch, asks the translator, and writes the answers back into each
/// row's value. Returns the number of rows updated.
///
/// # Errors
///
/// Fails without touching the store when nothing is selected, the target is
/// blank, the translator fails, or it answers with the wrong number of texts.
pub fn translate_selected(
    store: &mut RowStore,
    translator: &dyn Translator,
    source: &str,
    target: &str,
) -> Result<usize> {
    let batch = store.translation_batch(source, target)?;
    let texts = translator.translate(
        batch.source_language(),
        batch.target_language(),
        &batch.texts(),
    )?;
    let updated = store.apply_translations(&batch, texts)?;
    info!(
        source = %batch.source_language(),
        target = %batch.target_language(),
        rows = updated,
        "translation applied"
    );
    Ok(updated)
}
