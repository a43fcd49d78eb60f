//! The history and prediction engine.
//!
//! This module is the stateful shell around the pure core: it owns the
//! history behind a lock, persists it through a [`HistoryStore`] after every
//! mutation, and hands snapshots to [`predict`](crate::predict::predict).
//!
//! # Key Concepts
//!
//! - **Owned state**: each `Engine` holds its own history; no globals
//! - **Serialized access**: mutations take the write lock, reads copy the
//!   history under the read lock and compute outside it
//! - **Best-effort persistence**: store failures are logged, never returned

mod builder;

pub use builder::EngineBuilder;

use crate::core::{History, ObservationError, Symbol};
use crate::persistence::HistoryStore;
use crate::predict::{predict, Prediction};
use serde::{Deserialize, Serialize};
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use stillwater::NonEmptyVec;
use tracing::{debug, info, warn};

/// Outcome label carried by receipts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Ok,
    Cleared,
}

/// Acknowledgement of a recorded observation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordReceipt {
    pub status: Status,
    /// History length after the record
    pub total: usize,
}

/// Acknowledgement of a reset.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResetReceipt {
    pub status: Status,
}

/// Stateful predictor over one observation history.
///
/// # Example
///
/// ```rust
/// use rps_predictor::engine::Engine;
/// use rps_predictor::persistence::MemoryStore;
///
/// let engine = Engine::new(MemoryStore::new());
/// for raw in ["stone", "paper", "scissor", "stone", "paper"] {
///     engine.record_observation(raw).unwrap();
/// }
///
/// let prediction = engine.predict_next();
/// assert_eq!(prediction.symbol().name(), "scissor");
/// assert!(engine.record_observation("rock").is_err());
/// assert_eq!(engine.len(), 5);
/// ```
pub struct Engine<P: HistoryStore> {
    history: RwLock<History>,
    store: P,
}

impl<P: HistoryStore> Engine<P> {
    /// Create an engine whose history is loaded from `store`.
    ///
    /// A failed load is logged and treated as an empty history.
    pub fn new(store: P) -> Self {
        let history = match store.load() {
            Ok(history) => {
                info!(total = history.len(), "loaded observation history");
                history
            }
            Err(e) => {
                warn!(error = %e, "failed to load observation history, starting empty");
                History::new()
            }
        };
        Self::with_history(store, history)
    }

    /// Create an engine seeded with `history`; the store is not read.
    pub fn with_history(store: P, history: History) -> Self {
        Self {
            history: RwLock::new(history),
            store,
        }
    }

    /// Parse and append one observation.
    pub fn record_observation(&self, raw: &str) -> Result<RecordReceipt, ObservationError> {
        let symbol = raw.parse::<Symbol>().inspect_err(|e| {
            warn!(error = %e, "rejected observation");
        })?;
        Ok(self.record_symbol(symbol))
    }

    /// Append an already-typed observation.
    pub fn record_symbol(&self, symbol: Symbol) -> RecordReceipt {
        let mut history = self.write();
        let total = history.push(symbol);
        debug!(%symbol, total, "recorded observation");
        self.persist(&history);
        RecordReceipt {
            status: Status::Ok,
            total,
        }
    }

    /// Append every observation in `raw`, or none if any is invalid.
    pub fn record_batch<T: AsRef<str>>(
        &self,
        raw: &[T],
    ) -> Result<RecordReceipt, NonEmptyVec<ObservationError>> {
        let mut history = self.write();
        let total = history.record_all(raw).inspect_err(|errors| {
            warn!(invalid = errors.len(), "rejected observation batch");
        })?;
        debug!(added = raw.len(), total, "recorded observation batch");
        self.persist(&history);
        Ok(RecordReceipt {
            status: Status::Ok,
            total,
        })
    }

    /// Predict the next observation from the current history.
    pub fn predict_next(&self) -> Prediction {
        let snapshot = self.snapshot();
        let prediction = predict(&snapshot);
        debug!(
            total = prediction.total(),
            prediction = %prediction.symbol(),
            method = prediction.method().map(|m| m.label()).unwrap_or("cold_start"),
            "computed prediction"
        );
        prediction
    }

    /// Remove every observation.
    pub fn reset_history(&self) -> ResetReceipt {
        let mut history = self.write();
        history.clear();
        info!("cleared observation history");
        self.persist(&history);
        ResetReceipt {
            status: Status::Cleared,
        }
    }

    /// Owned copy of the current history.
    pub fn snapshot(&self) -> Vec<Symbol> {
        self.read().snapshot()
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    pub fn store(&self) -> &P {
        &self.store
    }

    fn persist(&self, history: &History) {
        if let Err(e) = self.store.save(history) {
            warn!(error = %e, total = history.len(), "failed to persist observation history");
        }
    }

    // Mutations are a single push or clear, so a poisoned lock never holds
    // a half-applied change.
    fn read(&self) -> RwLockReadGuard<'_, History> {
        self.history.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, History> {
        self.history.write().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::{MemoryStore, PersistenceError};
    use crate::predict::Method;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    struct FailingStore {
        saves: AtomicUsize,
    }

    impl HistoryStore for FailingStore {
        fn load(&self) -> Result<History, PersistenceError> {
            Err(PersistenceError::DeserializationFailed("corrupt".to_string()))
        }

        fn save(&self, _history: &History) -> Result<(), PersistenceError> {
            self.saves.fetch_add(1, Ordering::SeqCst);
            Err(PersistenceError::SerializationFailed("disk full".to_string()))
        }
    }

    fn engine_with(names: &[&str]) -> Engine<MemoryStore> {
        let engine = Engine::new(MemoryStore::new());
        for name in names {
            engine.record_observation(name).unwrap();
        }
        engine
    }

    #[test]
    fn record_returns_running_total() {
        let engine = Engine::new(MemoryStore::new());
        assert_eq!(
            engine.record_observation("stone").unwrap(),
            RecordReceipt {
                status: Status::Ok,
                total: 1
            }
        );
        assert_eq!(engine.record_observation("paper").unwrap().total, 2);
    }

    #[test]
    fn invalid_observation_changes_nothing() {
        let engine = engine_with(&["stone", "paper"]);
        let err = engine.record_observation("rock").unwrap_err();

        assert!(matches!(err, ObservationError::InvalidObservation { .. }));
        assert_eq!(engine.len(), 2);
        assert_eq!(engine.store().saved().len(), 2);
    }

    #[test]
    fn every_mutation_is_persisted() {
        let store = MemoryStore::new();
        let engine = Engine::new(store.clone());

        engine.record_observation("scissor").unwrap();
        engine.record_observation("paper").unwrap();
        assert_eq!(store.saved().symbols(), &[Symbol::Scissor, Symbol::Paper]);

        engine.reset_history();
        assert!(store.saved().is_empty());
    }

    #[test]
    fn engine_loads_initial_history_from_store() {
        let store = MemoryStore::with_history(History::from_symbols(vec![Symbol::Paper; 6]));
        let engine = Engine::new(store);

        assert_eq!(engine.len(), 6);
        assert_eq!(engine.predict_next().symbol(), Symbol::Paper);
    }

    #[test]
    fn failed_load_starts_empty() {
        let engine = Engine::new(FailingStore {
            saves: AtomicUsize::new(0),
        });
        assert!(engine.is_empty());
    }

    #[test]
    fn failed_save_keeps_in_memory_history() {
        let engine = Engine::new(FailingStore {
            saves: AtomicUsize::new(0),
        });

        for _ in 0..5 {
            engine.record_observation("stone").unwrap();
        }

        assert_eq!(engine.len(), 5);
        assert_eq!(engine.store().saves.load(Ordering::SeqCst), 5);
        assert_eq!(engine.predict_next().method(), Some(Method::Markov2));
    }

    #[test]
    fn reset_restores_cold_start() {
        let engine = engine_with(&["stone", "paper", "scissor", "stone", "paper"]);
        let fresh = Engine::new(MemoryStore::new());

        assert!(!engine.predict_next().is_cold_start());
        assert_eq!(
            engine.reset_history(),
            ResetReceipt {
                status: Status::Cleared
            }
        );
        assert_eq!(engine.predict_next(), fresh.predict_next());
    }

    #[test]
    fn reset_on_empty_history_succeeds() {
        let engine = Engine::new(MemoryStore::new());
        assert_eq!(engine.reset_history().status, Status::Cleared);
        assert!(engine.is_empty());
    }

    #[test]
    fn snapshot_does_not_alias_history() {
        let engine = engine_with(&["stone"]);
        let snapshot = engine.snapshot();
        engine.record_observation("paper").unwrap();

        assert_eq!(snapshot, vec![Symbol::Stone]);
        assert_eq!(engine.len(), 2);
    }

    #[test]
    fn batch_is_all_or_nothing() {
        let engine = engine_with(&["stone"]);

        let errors = engine.record_batch(&["paper", "rock"]).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(engine.len(), 1);

        let receipt = engine.record_batch(&["paper", "scissor"]).unwrap();
        assert_eq!(receipt.total, 3);
        assert_eq!(engine.store().saved().len(), 3);
    }

    #[test]
    fn receipts_serialize_with_status_labels() {
        let record = RecordReceipt {
            status: Status::Ok,
            total: 4,
        };
        assert_eq!(
            serde_json::to_value(record).unwrap(),
            serde_json::json!({ "status": "ok", "total": 4 })
        );
        assert_eq!(
            serde_json::to_value(ResetReceipt {
                status: Status::Cleared
            })
            .unwrap(),
            serde_json::json!({ "status": "cleared" })
        );
    }

    #[test]
    fn concurrent_records_are_all_kept() {
        let engine = Arc::new(Engine::new(MemoryStore::new()));
        let handles: Vec<_> = (0..8)
            .map(|i| {
                let engine = Arc::clone(&engine);
                std::thread::spawn(move || {
                    let symbol = Symbol::ALL[i % 3];
                    for _ in 0..25 {
                        engine.record_symbol(symbol);
                        let _ = engine.predict_next();
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(engine.len(), 200);
        assert_eq!(engine.store().saved().len(), 200);
    }
}
