//! Builder for constructing engines.

use super::Engine;
use crate::core::History;
use crate::persistence::{HistoryStore, NullStore};

/// Fluent construction of an [`Engine`].
///
/// Without a store the engine persists nothing. An initial history, when
/// given, replaces whatever the store would have loaded.
///
/// # Example
///
/// ```rust
/// use rps_predictor::core::{History, Symbol};
/// use rps_predictor::engine::EngineBuilder;
/// use rps_predictor::persistence::MemoryStore;
///
/// let engine = EngineBuilder::new()
///     .store(MemoryStore::new())
///     .initial_history(History::from_symbols(vec![Symbol::Stone; 3]))
///     .build();
///
/// assert_eq!(engine.len(), 3);
/// ```
pub struct EngineBuilder<P: HistoryStore = NullStore> {
    store: P,
    initial: Option<History>,
}

impl EngineBuilder<NullStore> {
    pub fn new() -> Self {
        Self {
            store: NullStore,
            initial: None,
        }
    }
}

impl<P: HistoryStore> EngineBuilder<P> {
    /// Set the persistence backend.
    pub fn store<Q: HistoryStore>(self, store: Q) -> EngineBuilder<Q> {
        EngineBuilder {
            store,
            initial: self.initial,
        }
    }

    /// Seed the engine instead of loading from the store.
    pub fn initial_history(mut self, history: History) -> Self {
        self.initial = Some(history);
        self
    }

    /// Build the engine.
    pub fn build(self) -> Engine<P> {
        match self.initial {
            Some(history) => Engine::with_history(self.store, history),
            None => Engine::new(self.store),
        }
    }
}

impl Default for EngineBuilder<NullStore> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Symbol;
    use crate::persistence::MemoryStore;

    #[test]
    fn default_builder_persists_nothing() {
        let engine = EngineBuilder::default().build();
        engine.record_observation("stone").unwrap();
        assert_eq!(engine.len(), 1);
    }

    #[test]
    fn builder_loads_from_store() {
        let store = MemoryStore::with_history(History::from_symbols(vec![Symbol::Paper; 2]));
        let engine = EngineBuilder::new().store(store).build();
        assert_eq!(engine.snapshot(), vec![Symbol::Paper; 2]);
    }

    #[test]
    fn initial_history_overrides_store() {
        let store = MemoryStore::with_history(History::from_symbols(vec![Symbol::Paper; 2]));
        let engine = EngineBuilder::new()
            .initial_history(History::from_symbols(vec![Symbol::Scissor]))
            .store(store.clone())
            .build();

        assert_eq!(engine.snapshot(), vec![Symbol::Scissor]);
        // store untouched until the first mutation
        assert_eq!(store.saved().len(), 2);
    }
}
