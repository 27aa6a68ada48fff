//! Load generations.
//!
//! Hosts fetch rows asynchronously. Each request takes a [`LoadTicket`] from
//! [`crate::RowStore::begin_load`]; when the response arrives it is handed to
//! [`crate::RowStore::finish_load`] together with its ticket. Only the newest
//! ticket is honoured, so a slow response cannot overwrite rows from a newer
//! request. A failed request never calls `finish_load` and the current rows stay.

/// Token identifying one load request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub struct LoadTicket {
    generation: u64,
}

impl LoadTicket {
    pub(crate) fn new(generation: u64) -> Self {
        Self { generation }
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// What happened to a finished load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// Rows were replaced.
    Applied { rows: usize },
    /// A newer load or replacement superseded this one; nothing changed.
    Stale,
}

impl LoadOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, Self::Applied { .. })
    }
}
