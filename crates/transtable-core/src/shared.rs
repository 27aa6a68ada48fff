//! Thread-safe handle for hosts that dispatch events from several threads.

use std::sync::{Arc, Mutex};

use transtable_model::TranslationRecord;

use crate::{LoadOutcome, LoadTicket, Result, RowStore, StoreError};

/// A [`RowStore`] behind one mutex.
///
/// Each closure passed to [`SharedRowStore::with_mut`] runs to completion
/// under the lock, so one host event is one atomic step.
#[derive(Debug, Clone, Default)]
pub struct SharedRowStore {
    inner: Arc<Mutex<RowStore>>,
}

impl SharedRowStore {
    pub fn new(store: RowStore) -> Self {
        Self {
            inner: Arc::new(Mutex::new(store)),
        }
    }

    /// Read the store under the lock.
    pub fn with<R>(&self, f: impl FnOnce(&RowStore) -> R) -> Result<R> {
        let guard = self.inner.lock().map_err(|_| StoreError::Poisoned)?;
        Ok(f(&guard))
    }

    /// Mutate the store under the lock.
    pub fn with_mut<R>(&self, f: impl FnOnce(&mut RowStore) -> R) -> Result<R> {
        let mut guard = self.inner.lock().map_err(|_| StoreError::Poisoned)?;
        Ok(f(&mut guard))
    }

    pub fn begin_load(&self) -> Result<LoadTicket> {
        self.with_mut(RowStore::begin_load)
    }

    pub fn finish_load(
        &self,
        ticket: LoadTicket,
        records: Vec<TranslationRecord>,
    ) -> Result<LoadOutcome> {
        self.with_mut(|store| store.finish_load(ticket, records))
    }
}
