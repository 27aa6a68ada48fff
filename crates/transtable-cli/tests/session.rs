//! End-to-end command sessions against documents on disk.

use std::fs;
use std::path::Path;

use tempfile::TempDir;
use transtable_cli::session::{
    ExportRequest, TranslationPlan, browse, compare_files, export, load_dictionary, open_store,
};
use transtable_core::{DictionaryTranslator, SelectAllScope, StoreOptions};
use transtable_model::{DifferenceStatus, SectionMap};

const EN: &str = r#"{
  "billing": { "title": "Bills and Payments", "due": "Due date" },
  "home": { "title": "Welcome" }
}"#;

const FR: &str = r#"{
  "home": { "title": "Accueil" },
  "billing": { "due": "Échéance", "title": "Factures" }
}"#;

fn workspace() -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("en.json"), EN).unwrap();
    fs::write(dir.path().join("fr.json"), FR).unwrap();
    dir
}

fn request(dir: &Path, query: Option<&str>) -> ExportRequest {
    ExportRequest {
        input: dir.join("en.json"),
        reference: None,
        output: dir.join("out.json"),
        query: query.map(str::to_string),
        translation: None,
    }
}

#[test]
fn open_pairs_rows_with_reference_texts() {
    let dir = workspace();
    let mut store = open_store(
        &dir.path().join("fr.json"),
        Some(&dir.path().join("en.json")),
        StoreOptions::default(),
    )
    .unwrap();

    browse(&mut store, Some("payments"), 1);
    let rows = store.page_rows();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].value, "Factures");
    assert_eq!(rows[0].reference.as_deref(), Some("Bills and Payments"));
}

#[test]
fn missing_reference_file_leaves_references_empty() {
    let dir = workspace();
    let store = open_store(
        &dir.path().join("en.json"),
        Some(&dir.path().join("de.json")),
        StoreOptions::default(),
    )
    .unwrap();
    assert_eq!(store.len(), 3);
    assert!(store.rows().iter().all(|row| row.reference.as_deref() == Some("")));
}

#[test]
fn browse_clamps_out_of_range_pages() {
    let dir = workspace();
    let options = StoreOptions::default().with_page_size("2".parse().unwrap());
    let mut store = open_store(&dir.path().join("en.json"), None, options).unwrap();

    browse(&mut store, None, 9);
    assert_eq!(store.page(), 2);
    assert_eq!(store.page_rows()[0].key, "title");
    assert_eq!(store.page_rows()[0].section, "home");
}

#[test]
fn export_writes_matching_rows() {
    let dir = workspace();
    let summary = export(&request(dir.path(), Some("home")), StoreOptions::default()).unwrap();

    assert_eq!(summary.exported, 1);
    assert_eq!(summary.translated, None);
    let written = fs::read_to_string(dir.path().join("out.json")).unwrap();
    insta::assert_snapshot!(written.trim_end(), @r#"
    {
      "home": {
        "title": "Welcome"
      }
    }
    "#);
}

#[test]
fn export_translates_into_existing_order() {
    let dir = workspace();
    let dictionary = DictionaryTranslator::new()
        .with_phrase("fr", "Bills and Payments", "Factures et Paiements")
        .with_phrase("fr", "Due date", "Date d'échéance");
    let request = ExportRequest {
        output: dir.path().join("fr.json"),
        translation: Some(TranslationPlan {
            source: None,
            target: "fr".to_string(),
            dictionary,
        }),
        ..request(dir.path(), Some("billing"))
    };

    let summary = export(&request, StoreOptions::default()).unwrap();
    assert_eq!(summary.exported, 2);
    assert_eq!(summary.translated, Some(2));
    assert_eq!(summary.entries, 2);

    let written = fs::read_to_string(dir.path().join("fr.json")).unwrap();
    insta::assert_snapshot!(written.trim_end(), @r#"
    {
      "billing": {
        "due": "Date d'échéance",
        "title": "Factures et Paiements"
      }
    }
    "#);
}

#[test]
fn export_query_applies_with_all_rows_select_scope() {
    let dir = workspace();
    let options = StoreOptions::default().with_select_all_scope(SelectAllScope::All);
    let summary = export(&request(dir.path(), Some("billing")), options).unwrap();

    assert_eq!(summary.exported, 2);
    let written = SectionMap::from_path(&dir.path().join("out.json")).unwrap();
    let sections: Vec<_> = written.sections().iter().map(|s| s.name.as_str()).collect();
    assert_eq!(sections, ["billing"]);
}

#[test]
fn export_replaces_entries_outside_the_query() {
    let dir = workspace();
    let summary = export(
        &ExportRequest {
            output: dir.path().join("fr.json"),
            ..request(dir.path(), Some("home"))
        },
        StoreOptions::default(),
    )
    .unwrap();

    assert_eq!(summary.entries, 1);
    let written = SectionMap::from_path(&dir.path().join("fr.json")).unwrap();
    assert_eq!(written.get("home", "title"), Some("Welcome"));
    assert!(written.section("billing").is_none());
}

#[test]
fn export_without_matches_fails_and_writes_nothing() {
    let dir = workspace();
    let err = export(&request(dir.path(), Some("xyz")), StoreOptions::default()).unwrap_err();

    assert!(err.to_string().contains("no rows to export"));
    assert!(!dir.path().join("out.json").exists());
}

#[test]
fn export_with_unknown_language_reports_translator_error() {
    let dir = workspace();
    let request = ExportRequest {
        translation: Some(TranslationPlan {
            source: Some("en".to_string()),
            target: "de".to_string(),
            dictionary: DictionaryTranslator::new().with_phrase("fr", "Welcome", "Bienvenue"),
        }),
        ..request(dir.path(), None)
    };

    let err = export(&request, StoreOptions::default()).unwrap_err();
    assert!(format!("{err:#}").contains("no translations available for language 'de'"));
    assert!(!dir.path().join("out.json").exists());
}

#[test]
fn dictionary_loads_from_json() {
    let dir = workspace();
    let path = dir.path().join("phrases.json");
    fs::write(&path, r#"{"fr": {"Welcome": "Bienvenue"}}"#).unwrap();

    let dictionary = load_dictionary(&path).unwrap();
    assert_eq!(dictionary.languages().collect::<Vec<_>>(), ["fr"]);
}

#[test]
fn compare_reports_sorted_differences() {
    let dir = workspace();
    let differences =
        compare_files(&dir.path().join("en.json"), &dir.path().join("fr.json")).unwrap();

    let summary: Vec<_> = differences
        .iter()
        .map(|difference| (difference.key_path.as_str(), difference.status))
        .collect();
    assert_eq!(
        summary,
        [
            ("billing.due", DifferenceStatus::DifferentValues),
            ("billing.title", DifferenceStatus::DifferentValues),
            ("home.title", DifferenceStatus::DifferentValues),
        ]
    );
}

#[test]
fn compare_missing_file_is_an_error() {
    let dir = workspace();
    let err = compare_files(&dir.path().join("en.json"), &dir.path().join("nope.json"))
        .unwrap_err();
    assert!(err.to_string().contains("nope.json"));
}
