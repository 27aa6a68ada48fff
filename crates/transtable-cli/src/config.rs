//! Store options from a TOML file plus command-line overrides.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;
use transtable_core::{PageSize, StoreOptions};

/// Read [`StoreOptions`] from `path`, or defaults when no file is given.
///
/// Keys missing from the file keep their defaults.
pub fn load_options(path: Option<&Path>) -> Result<StoreOptions> {
    let Some(path) = path else {
        return Ok(StoreOptions::default());
    };
    let content =
        fs::read_to_string(path).with_context(|| format!("read config {}", path.display()))?;
    let options: StoreOptions =
        toml::from_str(&content).with_context(|| format!("parse config {}", path.display()))?;
    info!(path = %path.display(), page_size = %options.page_size, "loaded store options");
    Ok(options)
}

/// Apply flags that take precedence over the config file.
pub fn with_overrides(options: StoreOptions, page_size: Option<PageSize>) -> StoreOptions {
    match page_size {
        Some(size) => options.with_page_size(size),
        None => options,
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use transtable_core::SelectAllScope;

    use super::*;

    #[test]
    fn missing_path_uses_defaults() {
        assert_eq!(load_options(None).unwrap(), StoreOptions::default());
    }

    #[test]
    fn file_values_and_flag_override() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "page_size = 5\nselect_all_scope = \"all\"").unwrap();

        let options = load_options(Some(file.path())).unwrap();
        assert_eq!(options.page_size.get(), 5);
        assert_eq!(options.select_all_scope, SelectAllScope::All);

        let options = with_overrides(options, Some(PageSize::new(20).unwrap()));
        assert_eq!(options.page_size.get(), 20);
    }

    #[test]
    fn zero_page_size_is_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "page_size = 0").unwrap();
        let err = load_options(Some(file.path())).unwrap_err();
        assert!(format!("{err:#}").contains("invalid page size"));
    }
}
