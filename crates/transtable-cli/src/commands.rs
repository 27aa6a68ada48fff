use std::path::Path;

use anyhow::{Context, Result};
use transtable_core::StoreOptions;
use transtable_model::list_json_files;

use transtable_cli::config::with_overrides;
use transtable_cli::session::{
    ExportRequest, TranslationPlan, browse, compare_files, export, load_dictionary, open_store,
};
use transtable_cli::summary::{
    difference_table, export_table, files_table, page_footer, page_table,
};

use crate::cli::{ExportArgs, ShowArgs};

pub fn run_files(dir: &Path) -> Result<()> {
    let names = list_json_files(dir).with_context(|| format!("list {}", dir.display()))?;
    if names.is_empty() {
        println!("No JSON documents in {}", dir.display());
        return Ok(());
    }
    println!("{}", files_table(&names));
    Ok(())
}

pub fn run_show(args: &ShowArgs, options: StoreOptions) -> Result<()> {
    let options = with_overrides(options, args.page_size);
    let mut store = open_store(&args.file, args.reference.as_deref(), options)?;
    browse(&mut store, args.query.as_deref(), args.page);
    if store.filtered_count() == 0 {
        println!("No matching rows");
    } else {
        println!("{}", page_table(&store));
    }
    println!("{}", page_footer(&store));
    Ok(())
}

/// Returns true when the documents differ.
pub fn run_compare(left: &Path, right: &Path) -> Result<bool> {
    let differences = compare_files(left, right)?;
    if differences.is_empty() {
        println!("Documents are identical");
        return Ok(false);
    }
    println!("{}", difference_table(&differences));
    println!("{} differences", differences.len());
    Ok(true)
}

pub fn run_export(args: &ExportArgs, options: StoreOptions) -> Result<()> {
    let translation = match (&args.target, &args.dictionary) {
        (Some(target), Some(dictionary)) => Some(TranslationPlan {
            source: args.source.clone(),
            target: target.clone(),
            dictionary: load_dictionary(dictionary)?,
        }),
        _ => None,
    };
    let request = ExportRequest {
        input: args.file.clone(),
        reference: args.reference.clone(),
        output: args.output.clone(),
        query: args.query.clone(),
        translation,
    };
    let summary = export(&request, options)?;
    println!("{}", export_table(&summary));
    Ok(())
}
