//! Editing sessions driven from the command line.
//!
//! Each command loads a document into a [`RowStore`], replays the requested
//! host events (search, page, select, translate) and reads back the views.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use tracing::{info, info_span, trace, warn};
use transtable_core::{
    DictionaryTranslator, LoadOutcome, RowStore, StoreOptions, SubmitMode, translate_selected,
};
use transtable_model::{Difference, RowId, SectionMap, compare, source_language_from_file_name};

use crate::logging::redact_value;

/// Load `path` into a fresh store, pairing entries with `reference` texts.
pub fn open_store(
    path: &Path,
    reference: Option<&Path>,
    options: StoreOptions,
) -> Result<RowStore> {
    let document =
        SectionMap::from_path(path).with_context(|| format!("load {}", path.display()))?;
    let reference = reference
        .map(|path| {
            SectionMap::from_path_or_empty(path)
                .with_context(|| format!("load reference {}", path.display()))
        })
        .transpose()?;

    let mut store = RowStore::with_options(options);
    let ticket = store.begin_load();
    let records = document.to_records(reference.as_ref());
    for record in &records {
        trace!(
            section = %record.section,
            key = %record.key,
            text = redact_value(&record.text),
            "loaded entry"
        );
    }
    match store.finish_load(ticket, records) {
        LoadOutcome::Applied { rows } => {
            info!(path = %path.display(), rows, "document opened");
        }
        LoadOutcome::Stale => bail!("load of {} was superseded", path.display()),
    }
    Ok(store)
}

/// Apply a search query and move to `page` (clamped).
pub fn browse(store: &mut RowStore, query: Option<&str>, page: usize) {
    if let Some(query) = query {
        store.set_query(query);
    }
    store.go_to_page(page);
}

/// Select exactly the rows matching `query`, whatever the select-all scope.
pub fn select_matching(store: &mut RowStore, query: Option<&str>) {
    let ids: Vec<RowId> = store.rows().iter().map(|row| row.id).collect();
    for id in ids {
        store.set_selected(id, false);
    }
    store.set_query(query.unwrap_or_default());
    let matching: Vec<RowId> = store.filtered_rows().iter().map(|row| row.id).collect();
    for id in matching {
        store.set_selected(id, true);
    }
}

/// Read a phrase table: `{ "<lang>": { "<source text>": "<translation>" } }`.
pub fn load_dictionary(path: &Path) -> Result<DictionaryTranslator> {
    let content =
        fs::read_to_string(path).with_context(|| format!("read dictionary {}", path.display()))?;
    serde_json::from_str(&content).with_context(|| format!("parse dictionary {}", path.display()))
}

/// Machine translation applied to the exported rows.
#[derive(Debug, Clone)]
pub struct TranslationPlan {
    /// Source language; derived from the input file name when absent.
    pub source: Option<String>,
    pub target: String,
    pub dictionary: DictionaryTranslator,
}

#[derive(Debug, Clone)]
pub struct ExportRequest {
    pub input: PathBuf,
    pub reference: Option<PathBuf>,
    pub output: PathBuf,
    pub query: Option<String>,
    pub translation: Option<TranslationPlan>,
}

/// What an export wrote.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportSummary {
    pub output: PathBuf,
    pub exported: usize,
    pub translated: Option<usize>,
    /// Entries in the written document.
    pub entries: usize,
}

/// Export the rows matching the query, optionally translated, into the output
/// document.
///
/// The output is replaced by the exported rows. Sections and keys it already
/// had keep their order; everything else in it is dropped.
pub fn export(request: &ExportRequest, options: StoreOptions) -> Result<ExportSummary> {
    let span = info_span!("export", input = %request.input.display());
    let _guard = span.enter();

    let mut store = open_store(&request.input, request.reference.as_deref(), options)?;
    select_matching(&mut store, request.query.as_deref());
    if store.selected_count() == 0 {
        warn!(query = ?request.query, "no rows matched");
        bail!("no rows to export from {}", request.input.display());
    }

    let translated = match &request.translation {
        Some(plan) => {
            let source = match &plan.source {
                Some(source) => source.clone(),
                None => source_language_from_file_name(&request.input.to_string_lossy())?,
            };
            let updated = translate_selected(&mut store, &plan.dictionary, &source, &plan.target)
                .with_context(|| format!("translate to {}", plan.target))?;
            Some(updated)
        }
        None => None,
    };

    let records = store.submit(SubmitMode::Selected);
    let incoming = SectionMap::from_records(&records).context("build export document")?;
    let existing = SectionMap::from_path_or_empty(&request.output)
        .with_context(|| format!("load {}", request.output.display()))?;
    let merged = SectionMap::merge_with_existing_order(&existing, &incoming);
    merged
        .write_path(&request.output)
        .with_context(|| format!("write {}", request.output.display()))?;

    info!(
        output = %request.output.display(),
        rows = records.len(),
        "export written"
    );
    Ok(ExportSummary {
        output: request.output.clone(),
        exported: records.len(),
        translated,
        entries: merged.len(),
    })
}

/// Entry differences between two documents, sorted by `section.key`.
pub fn compare_files(left: &Path, right: &Path) -> Result<Vec<Difference>> {
    let left_doc =
        SectionMap::from_path(left).with_context(|| format!("load {}", left.display()))?;
    let right_doc =
        SectionMap::from_path(right).with_context(|| format!("load {}", right.display()))?;
    let differences = compare(&left_doc, &right_doc);
    info!(differences = differences.len(), "documents compared");
    Ok(differences)
}
