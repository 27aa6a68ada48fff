//! The row store: authoritative row collection plus derived views.
//!
//! The store owns the ordered rows, the search query, and the pagination
//! settings. Every view the host renders (filtered rows, page slice, page
//! count, select-all state) is recomputed from that state on each call; no
//! derived result is cached across a mutation.
//!
//! Rows are addressed by [`RowId`]. Operations naming an id that is no longer
//! present (a host callback racing a delete) are no-ops, and page navigation
//! clamps instead of failing.

use std::collections::HashSet;

use tracing::{debug, info};
use transtable_model::{NewRow, Row, RowField, RowId, TranslationRecord};

use crate::load::{LoadOutcome, LoadTicket};
use crate::options::{NewRowPlacement, PageSize, SelectAllScope, StoreOptions};
use crate::view::PageView;
use crate::Result;

/// In-memory edit state for one translation table session.
#[derive(Debug, Clone)]
pub struct RowStore {
    items: Vec<Row>,
    query: String,
    /// 1-based.
    page: usize,
    options: StoreOptions,
    /// Last synthetic id sequence handed out.
    next_seq: u64,
    /// Generation of the most recent load request.
    load_generation: u64,
}

impl Default for RowStore {
    fn default() -> Self {
        Self::new()
    }
}

impl RowStore {
    /// Create an empty store with default options.
    pub fn new() -> Self {
        Self::with_options(StoreOptions::default())
    }

    /// Create an empty store with the given options.
    pub fn with_options(options: StoreOptions) -> Self {
        Self {
            items: Vec::new(),
            query: String::new(),
            page: 1,
            options,
            next_seq: 0,
            load_generation: 0,
        }
    }

    // =========================================================================
    // ACCESSORS
    // =========================================================================

    pub fn options(&self) -> &StoreOptions {
        &self.options
    }

    /// All rows in display order, ignoring the query.
    pub fn rows(&self) -> &[Row] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: RowId) -> Option<&Row> {
        self.items.iter().find(|row| row.id == id)
    }

    pub fn contains(&self, id: RowId) -> bool {
        self.get(id).is_some()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// Current page, 1-based.
    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> PageSize {
        self.options.page_size
    }

    // =========================================================================
    // LOADING
    // =========================================================================

    /// Replace every row with rows built from `records`.
    ///
    /// Ids come from section + key; duplicates fall back to synthetic ids.
    /// The query is cleared and the view returns to page 1. Any load still in
    /// flight is superseded.
    pub fn replace_all<I>(&mut self, records: I)
    where
        I: IntoIterator<Item = TranslationRecord>,
    {
        let selected = self.options.new_row_selected;
        let mut seen = HashSet::new();
        let mut items = Vec::new();
        for record in records {
            let mut id = RowId::for_entry(&record.section, &record.key);
            while !seen.insert(id) {
                id = self.next_synthetic_id();
            }
            items.push(Row::from_record(id, record, selected));
        }

        self.items = items;
        self.query.clear();
        self.page = 1;
        self.load_generation += 1;
        info!(
            rows = self.items.len(),
            generation = self.load_generation,
            "rows replaced"
        );
    }

    /// Start a load. Only the most recently issued ticket may apply its result.
    pub fn begin_load(&mut self) -> LoadTicket {
        self.load_generation += 1;
        debug!(generation = self.load_generation, "load started");
        LoadTicket::new(self.load_generation)
    }

    /// Apply the result of a load if `ticket` is still the latest one.
    ///
    /// A stale ticket leaves the store untouched.
    pub fn finish_load<I>(&mut self, ticket: LoadTicket, records: I) -> LoadOutcome
    where
        I: IntoIterator<Item = TranslationRecord>,
    {
        if ticket.generation() != self.load_generation {
            debug!(
                ticket = ticket.generation(),
                current = self.load_generation,
                "discarding stale load"
            );
            return LoadOutcome::Stale;
        }
        self.replace_all(records);
        LoadOutcome::Applied {
            rows: self.items.len(),
        }
    }

    /// Generation of the most recent load request or replacement.
    pub fn load_generation(&self) -> u64 {
        self.load_generation
    }

    // =========================================================================
    // ROW OPERATIONS
    // =========================================================================

    /// Add a row with a fresh id and return that id.
    pub fn add_row(&mut self, initial: NewRow) -> RowId {
        let id = self.fresh_id();
        let row = initial.into_row(id, self.options.new_row_selected);
        match self.options.new_row_placement {
            NewRowPlacement::Append => {
                self.items.push(row);
                self.clamp_page();
            }
            NewRowPlacement::Prepend => {
                self.items.insert(0, row);
                self.page = 1;
            }
        }
        debug!(row_id = %id, rows = self.items.len(), "row added");
        id
    }

    /// Set one editable field. Returns false when the row no longer exists.
    pub fn update_field(&mut self, id: RowId, field: RowField, text: impl Into<String>) -> bool {
        let Some(row) = self.items.iter_mut().find(|row| row.id == id) else {
            debug!(row_id = %id, field = %field, "update for missing row ignored");
            return false;
        };
        row.set_field(field, text);
        debug!(row_id = %id, field = %field, "row field updated");
        // An edit can move the row in or out of the filtered set.
        self.clamp_page();
        true
    }

    /// Remove a row and return it. The page is clamped to the new bounds.
    pub fn delete_row(&mut self, id: RowId) -> Option<Row> {
        let Some(index) = self.items.iter().position(|row| row.id == id) else {
            debug!(row_id = %id, "delete for missing row ignored");
            return None;
        };
        let row = self.items.remove(index);
        self.clamp_page();
        debug!(row_id = %id, rows = self.items.len(), page = self.page, "row deleted");
        Some(row)
    }

    // =========================================================================
    // QUERY & PAGINATION
    // =========================================================================

    /// Replace the search query and return to page 1.
    pub fn set_query(&mut self, text: impl Into<String>) {
        self.query = text.into();
        self.page = 1;
        debug!(filtered = self.filtered_count(), "query changed");
    }

    /// Change rows per page and return to page 1.
    ///
    /// # Errors
    ///
    /// Returns [`crate::StoreError::InvalidPageSize`] for zero; the store is
    /// left unchanged.
    pub fn set_page_size(&mut self, rows: usize) -> Result<()> {
        let size = PageSize::new(rows)?;
        self.options.page_size = size;
        self.page = 1;
        debug!(page_size = rows, "page size changed");
        Ok(())
    }

    /// Navigate to `page`, clamped into `[1, total_pages]`.
    pub fn go_to_page(&mut self, page: usize) {
        self.page = page.clamp(1, self.total_pages());
    }

    pub fn next_page(&mut self) {
        self.go_to_page(self.page.saturating_add(1));
    }

    pub fn previous_page(&mut self) {
        self.go_to_page(self.page.saturating_sub(1));
    }

    // =========================================================================
    // SELECTION
    // =========================================================================

    /// Flip one row's selection. Returns false when the row no longer exists.
    pub fn toggle_select(&mut self, id: RowId) -> bool {
        match self.items.iter_mut().find(|row| row.id == id) {
            Some(row) => {
                row.selected = !row.selected;
                true
            }
            None => {
                debug!(row_id = %id, "toggle for missing row ignored");
                false
            }
        }
    }

    /// Set one row's selection. Returns false when the row no longer exists.
    pub fn set_selected(&mut self, id: RowId, selected: bool) -> bool {
        match self.items.iter_mut().find(|row| row.id == id) {
            Some(row) => {
                row.selected = selected;
                true
            }
            None => {
                debug!(row_id = %id, "selection for missing row ignored");
                false
            }
        }
    }

    /// Set the selection of every row in the configured select-all scope.
    pub fn select_all(&mut self, selected: bool) {
        let needle = self.scope_needle();
        let mut touched = 0usize;
        for row in self.items.iter_mut().filter(|row| row.matches(&needle)) {
            row.selected = selected;
            touched += 1;
        }
        debug!(selected, rows = touched, "select all");
    }

    /// True when the select-all scope is non-empty and fully selected.
    pub fn is_all_selected(&self) -> bool {
        let needle = self.scope_needle();
        let mut scope = self.items.iter().filter(|row| row.matches(&needle)).peekable();
        scope.peek().is_some() && scope.all(|row| row.selected)
    }

    /// Number of selected rows across the whole store.
    pub fn selected_count(&self) -> usize {
        self.items.iter().filter(|row| row.selected).count()
    }

    // =========================================================================
    // DERIVED VIEWS
    // =========================================================================

    /// Rows matching the query, in display order.
    pub fn filtered_rows(&self) -> Vec<&Row> {
        self.filtered().collect()
    }

    pub fn filtered_count(&self) -> usize {
        self.filtered().count()
    }

    /// `max(1, ceil(filtered / page_size))`.
    pub fn total_pages(&self) -> usize {
        self.filtered_count()
            .div_ceil(self.options.page_size.get())
            .max(1)
    }

    /// The current page's slice of the filtered rows.
    pub fn page_rows(&self) -> Vec<&Row> {
        let size = self.options.page_size.get();
        let start = (self.page - 1).saturating_mul(size);
        self.filtered().skip(start).take(size).collect()
    }

    /// Pagination summary for the current page.
    pub fn page_view(&self) -> PageView {
        PageView::new(self.page, self.options.page_size.get(), self.filtered_count())
    }

    // =========================================================================
    // INTERNALS
    // =========================================================================

    fn filtered(&self) -> impl Iterator<Item = &Row> {
        let needle = self.query.to_lowercase();
        self.items.iter().filter(move |row| row.matches(&needle))
    }

    fn clamp_page(&mut self) {
        self.page = self.page.clamp(1, self.total_pages());
    }

    /// Lowercased filter defining the select-all scope ("" matches every row).
    fn scope_needle(&self) -> String {
        match self.options.select_all_scope {
            SelectAllScope::Filtered => self.query.to_lowercase(),
            SelectAllScope::All => String::new(),
        }
    }

    fn next_synthetic_id(&mut self) -> RowId {
        self.next_seq += 1;
        RowId::synthetic(self.next_seq)
    }

    fn fresh_id(&mut self) -> RowId {
        loop {
            let id = self.next_synthetic_id();
            if !self.contains(id) {
                return id;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_with(count: usize) -> RowStore {
        let mut store = RowStore::new();
        store.replace_all(
            (1..=count)
                .map(|i| TranslationRecord::new("home", format!("key{i}"), format!("text {i}"))),
        );
        store
    }

    #[test]
    fn new_store_is_on_page_one_of_one() {
        let store = RowStore::new();
        assert_eq!(store.page(), 1);
        assert_eq!(store.total_pages(), 1);
        assert!(store.page_rows().is_empty());
        assert!(!store.is_all_selected());
    }

    #[test]
    fn replace_all_resets_query_and_page() {
        let mut store = store_with(30);
        store.set_query("text");
        store.go_to_page(3);
        store.replace_all(vec![TranslationRecord::new("home", "a", "b")]);
        assert_eq!(store.query(), "");
        assert_eq!(store.page(), 1);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn duplicate_entries_get_distinct_ids() {
        let mut store = RowStore::new();
        store.replace_all(vec![
            TranslationRecord::new("home", "title", "One"),
            TranslationRecord::new("home", "title", "Two"),
        ]);
        assert_eq!(store.len(), 2);
        assert_ne!(store.rows()[0].id, store.rows()[1].id);
        assert_eq!(store.rows()[0].id, RowId::for_entry("home", "title"));
    }

    #[test]
    fn prepend_returns_to_first_page() {
        let mut store = RowStore::with_options(
            StoreOptions::default().with_new_row_placement(NewRowPlacement::Prepend),
        );
        store.replace_all((0..25).map(|i| TranslationRecord::new("s", format!("k{i}"), "v")));
        store.go_to_page(3);
        let id = store.add_row(NewRow::new());
        assert_eq!(store.page(), 1);
        assert_eq!(store.page_rows()[0].id, id);
    }

    #[test]
    fn append_keeps_current_page() {
        let mut store = store_with(25);
        store.go_to_page(2);
        let id = store.add_row(NewRow::new().with_key("extra"));
        assert_eq!(store.page(), 2);
        assert_eq!(store.rows().last().map(|row| row.id), Some(id));
        assert!(store.get(id).is_some_and(|row| row.selected));
    }

    #[test]
    fn next_and_previous_page_clamp() {
        let mut store = store_with(15);
        store.previous_page();
        assert_eq!(store.page(), 1);
        store.next_page();
        store.next_page();
        assert_eq!(store.page(), 2);
    }

    #[test]
    fn invalid_page_size_leaves_state_unchanged() {
        let mut store = store_with(25);
        store.go_to_page(2);
        assert!(store.set_page_size(0).is_err());
        assert_eq!(store.page(), 2);
        assert_eq!(store.page_size().get(), 10);
    }

    #[test]
    fn edit_that_empties_the_last_page_clamps() {
        let mut store = store_with(11);
        store.set_query("text");
        store.go_to_page(2);
        let last = store.page_rows()[0].id;
        assert!(store.update_field(last, RowField::Value, "changed"));
        assert_eq!(store.total_pages(), 1);
        assert_eq!(store.page(), 1);
    }
}
