//! Configuration options for the row store.

use std::fmt;
use std::num::NonZeroUsize;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::StoreError;

/// Rows per page. Always at least one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub struct PageSize(NonZeroUsize);

impl PageSize {
    pub const DEFAULT: PageSize = PageSize(NonZeroUsize::MIN.saturating_add(9));

    pub fn new(rows: usize) -> Result<Self, StoreError> {
        NonZeroUsize::new(rows)
            .map(Self)
            .ok_or_else(|| StoreError::InvalidPageSize(rows.to_string()))
    }

    pub fn get(self) -> usize {
        self.0.get()
    }
}

impl Default for PageSize {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<usize> for PageSize {
    type Error = StoreError;

    fn try_from(rows: usize) -> Result<Self, Self::Error> {
        Self::new(rows)
    }
}

impl From<PageSize> for usize {
    fn from(size: PageSize) -> Self {
        size.get()
    }
}

impl FromStr for PageSize {
    type Err = StoreError;

    /// Parse host input such as a rows-per-page selector value.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows: usize = s
            .trim()
            .parse()
            .map_err(|_| StoreError::InvalidPageSize(s.to_string()))?;
        Self::new(rows)
    }
}

impl fmt::Display for PageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Which rows "select all" acts on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectAllScope {
    /// Only rows matching the current query.
    #[default]
    Filtered,
    /// Every row in the store.
    All,
}

/// Where `add_row` places a new row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NewRowPlacement {
    /// After the last row; the current page is kept.
    #[default]
    Append,
    /// Before the first row; the view returns to page 1 so the row is visible.
    Prepend,
}

/// Options controlling row store behavior.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreOptions {
    /// Rows per page.
    pub page_size: PageSize,

    /// Scope of `select_all` and `is_all_selected`.
    pub select_all_scope: SelectAllScope,

    /// Placement of rows created by the host.
    pub new_row_placement: NewRowPlacement,

    /// Initial selection flag of created and loaded rows.
    pub new_row_selected: bool,
}

impl Default for StoreOptions {
    fn default() -> Self {
        Self {
            page_size: PageSize::DEFAULT,
            select_all_scope: SelectAllScope::default(),
            new_row_placement: NewRowPlacement::default(),
            new_row_selected: true,
        }
    }
}

impl StoreOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_page_size(mut self, page_size: PageSize) -> Self {
        self.page_size = page_size;
        self
    }

    pub fn with_select_all_scope(mut self, scope: SelectAllScope) -> Self {
        self.select_all_scope = scope;
        self
    }

    pub fn with_new_row_placement(mut self, placement: NewRowPlacement) -> Self {
        self.new_row_placement = placement;
        self
    }

    pub fn with_new_row_selected(mut self, selected: bool) -> Self {
        self.new_row_selected = selected;
        self
    }
}
