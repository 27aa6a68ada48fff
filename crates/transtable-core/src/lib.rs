//! Edit-state engine for translation tables.
//!
//! [`RowStore`] owns the rows of one editing session and answers every view a
//! host renders: the filtered rows, the current page, page counts, and the
//! select-all state. Hosts forward user events (typing in the search box,
//! ticking a checkbox, editing a cell) as method calls and re-read the views.
//!
//! ```
//! use transtable_core::RowStore;
//! use transtable_model::TranslationRecord;
//!
//! let mut store = RowStore::new();
//! store.replace_all((1..=12).map(|i| {
//!     TranslationRecord::new("home", format!("k{i}"), format!("Text {i}"))
//! }));
//! assert_eq!(store.total_pages(), 2);
//! store.go_to_page(2);
//! assert_eq!(store.page_rows().len(), 2);
//! ```

#![deny(unsafe_code)]

pub mod error;
pub mod load;
pub mod options;
pub mod shared;
pub mod store;
pub mod submit;
pub mod translate;
pub mod view;

pub use error::{Result, StoreError};
pub use load::{LoadOutcome, LoadTicket};
pub use options::{NewRowPlacement, PageSize, SelectAllScope, StoreOptions};
pub use shared::SharedRowStore;
pub use store::RowStore;
pub use submit::{SubmitMode, TranslationBatch};
pub use translate::{DictionaryTranslator, TranslateError, Translator, translate_selected};
pub use view::PageView;
