//! Document file naming and discovery.

use std::fs;
use std::path::Path;

use crate::{ModelError, Result};

const JSON_EXTENSION: &str = ".json";

fn has_json_extension(name: &str) -> bool {
    name.len() >= JSON_EXTENSION.len()
        && name
            .get(name.len() - JSON_EXTENSION.len()..)
            .is_some_and(|ext| ext.eq_ignore_ascii_case(JSON_EXTENSION))
}

/// Names of the `.json` documents directly inside `dir`, sorted.
pub fn list_json_files(dir: &Path) -> Result<Vec<String>> {
    let read_error = |source| ModelError::Read {
        path: dir.to_path_buf(),
        source,
    };
    let mut names = Vec::new();
    for entry in fs::read_dir(dir).map_err(read_error)? {
        let entry = entry.map_err(read_error)?;
        if !entry.file_type().map_err(read_error)?.is_file() {
            continue;
        }
        let name = entry.file_name().to_string_lossy().into_owned();
        if has_json_extension(&name) {
            names.push(name);
        }
    }
    names.sort();
    Ok(names)
}

/// Language code named by a document file: `"locales/en.json"` is `"en"`.
pub fn source_language_from_file_name(file_name: &str) -> Result<String> {
    let base = Path::new(file_name.trim())
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    let language = if has_json_extension(&base) {
        &base[..base.len() - JSON_EXTENSION.len()]
    } else {
        base.as_str()
    };
    if language.trim().is_empty() {
        return Err(ModelError::InvalidFileName(file_name.to_string()));
    }
    Ok(language.to_string())
}
