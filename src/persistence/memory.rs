//! In-process stores.

use super::{HistoryStore, PersistenceError};
use crate::core::History;
use std::sync::{Arc, PoisonError, RwLock};

/// Store that keeps the last saved history in memory.
///
/// Clones share the same slot, so a test can hand one clone to an engine
/// and inspect what was persisted through another.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    slot: Arc<RwLock<History>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with `history`, as if it had been saved earlier.
    pub fn with_history(history: History) -> Self {
        Self {
            slot: Arc::new(RwLock::new(history)),
        }
    }

    /// Copy of the last saved history.
    pub fn saved(&self) -> History {
        self.slot
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl HistoryStore for MemoryStore {
    fn load(&self) -> Result<History, PersistenceError> {
        Ok(self.saved())
    }

    fn save(&self, history: &History) -> Result<(), PersistenceError> {
        *self.slot.write().unwrap_or_else(PoisonError::into_inner) = history.clone();
        Ok(())
    }
}

/// Store that persists nothing and always loads an empty history.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullStore;

impl HistoryStore for NullStore {
    fn load(&self) -> Result<History, PersistenceError> {
        Ok(History::new())
    }

    fn save(&self, _history: &History) -> Result<(), PersistenceError> {
        Ok(())
    }
}
