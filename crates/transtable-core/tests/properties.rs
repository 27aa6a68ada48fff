//! Invariants that hold after any sequence of host events.

use proptest::prelude::*;
use transtable_core::{RowStore, StoreOptions};
use transtable_model::{NewRow, RowField, TranslationRecord};

#[derive(Debug, Clone)]
enum Op {
    Add(String),
    Update(usize, String),
    Delete(usize),
    Toggle(usize),
    Query(String),
    PageSize(usize),
    GoTo(usize),
    Next,
    Previous,
    SelectAll(bool),
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        "[a-c]{0,3}".prop_map(Op::Add),
        (any::<usize>(), "[a-c]{0,3}").prop_map(|(i, text)| Op::Update(i, text)),
        any::<usize>().prop_map(Op::Delete),
        any::<usize>().prop_map(Op::Toggle),
        "[a-c]{0,2}".prop_map(Op::Query),
        (0usize..6).prop_map(Op::PageSize),
        (0usize..12).prop_map(Op::GoTo),
        Just(Op::Next),
        Just(Op::Previous),
        any::<bool>().prop_map(Op::SelectAll),
    ]
}

fn record() -> impl Strategy<Value = TranslationRecord> {
    (
        "[a-c]{1,2}",
        "[a-c]{1,3}",
        "[a-c]{0,3}",
        proptest::option::of("[a-dA-D]{0,4}"),
    )
        .prop_map(|(section, key, text, reference)| TranslationRecord {
            reference,
            ..TranslationRecord::new(section, key, text)
        })
}

fn apply(store: &mut RowStore, op: Op) {
    let id_at = |store: &RowStore, i: usize| {
        (!store.is_empty()).then(|| store.rows()[i % store.len()].id)
    };
    match op {
        Op::Add(key) => {
            store.add_row(NewRow::new().with_key(key));
        }
        Op::Update(i, text) => {
            if let Some(id) = id_at(store, i) {
                store.update_field(id, RowField::Value, text);
            }
        }
        Op::Delete(i) => {
            if let Some(id) = id_at(store, i) {
                store.delete_row(id);
            }
        }
        Op::Toggle(i) => {
            if let Some(id) = id_at(store, i) {
                store.toggle_select(id);
            }
        }
        Op::Query(text) => store.set_query(text),
        Op::PageSize(rows) => {
            let _ = store.set_page_size(rows);
        }
        Op::GoTo(page) => store.go_to_page(page),
        Op::Next => store.next_page(),
        Op::Previous => store.previous_page(),
        Op::SelectAll(selected) => store.select_all(selected),
    }
}

proptest! {
    #[test]
    fn empty_query_is_identity(rows in proptest::collection::vec(record(), 0..30)) {
        let mut store = RowStore::new();
        store.replace_all(rows);
        let all: Vec<_> = store.rows().iter().map(|row| row.id).collect();
        let filtered: Vec<_> = store.filtered_rows().iter().map(|row| row.id).collect();
        prop_assert_eq!(all, filtered);
    }

    #[test]
    fn filtered_rows_are_an_ordered_subset(
        rows in proptest::collection::vec(record(), 0..30),
        query in "[a-dA-D]{0,2}",
    ) {
        let mut store = RowStore::new();
        store.replace_all(rows);
        store.set_query(query.clone());

        let needle = query.to_lowercase();
        let expected: Vec<_> = store
            .rows()
            .iter()
            .filter(|row| {
                [
                    row.key.as_str(),
                    row.value.as_str(),
                    row.section.as_str(),
                    row.reference.as_deref().unwrap_or_default(),
                ]
                .iter()
                .any(|text| text.to_lowercase().contains(&needle))
            })
            .map(|row| row.id)
            .collect();
        let filtered: Vec<_> = store.filtered_rows().iter().map(|row| row.id).collect();
        prop_assert_eq!(filtered, expected);
    }

    #[test]
    fn page_stays_in_bounds(
        rows in proptest::collection::vec(record(), 0..40),
        ops in proptest::collection::vec(op(), 1..40),
    ) {
        let mut store = RowStore::with_options(StoreOptions::default());
        store.replace_all(rows);

        for op in ops {
            apply(&mut store, op);

            let total = store.total_pages();
            prop_assert!(total >= 1);
            prop_assert!(store.page() >= 1);
            prop_assert!(store.page() <= total);
            prop_assert!(store.page_rows().len() <= store.page_size().get());
            prop_assert_eq!(store.filtered_rows().len(), store.filtered_count());

            let mut ids: Vec<_> = store.rows().iter().map(|row| row.id).collect();
            ids.sort();
            ids.dedup();
            prop_assert_eq!(ids.len(), store.len());
        }
    }

    #[test]
    fn pages_partition_the_filtered_rows(
        rows in proptest::collection::vec(record(), 0..40),
        page_size in 1usize..8,
    ) {
        let mut store = RowStore::new();
        store.replace_all(rows);
        store.set_page_size(page_size).unwrap();

        let mut seen = Vec::new();
        for page in 1..=store.total_pages() {
            store.go_to_page(page);
            seen.extend(store.page_rows().iter().map(|row| row.id));
        }
        let filtered: Vec<_> = store.filtered_rows().iter().map(|row| row.id).collect();
        prop_assert_eq!(seen, filtered);
    }
}
