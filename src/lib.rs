//! rps-predictor: next-move prediction for stone/scissor/paper
//!
//! The crate follows a "pure core, imperative shell" layout. Scoring is a
//! pure function of the observation history; the engine wraps that core
//! with locking and best-effort persistence.
//!
//! # Core Concepts
//!
//! - **Symbol**: one of `stone`, `scissor`, `paper`, in that canonical order
//! - **History**: append-only sequence of observed symbols
//! - **Prediction**: frequency, second-order Markov and recency scores
//!   blended with fixed weights
//! - **Store**: pluggable load/save backend for the history
//!
//! # Example
//!
//! ```rust
//! use rps_predictor::{Engine, MemoryStore, Method, Symbol};
//!
//! let engine = Engine::new(MemoryStore::new());
//!
//! // Fewer than five observations: fixed cold-start answer
//! let prediction = engine.predict_next();
//! assert_eq!(prediction.symbol(), Symbol::Stone);
//! assert_eq!(prediction.confidence(), 0.33);
//!
//! for raw in ["stone", "paper", "scissor", "stone", "paper"] {
//!     engine.record_observation(raw).unwrap();
//! }
//!
//! let prediction = engine.predict_next();
//! assert_eq!(prediction.symbol(), Symbol::Scissor);
//! assert_eq!(prediction.method(), Some(Method::Markov2));
//! ```

pub mod core;
pub mod effects;
pub mod engine;
pub mod persistence;
pub mod predict;

// Re-export commonly used types
pub use self::core::{History, ObservationError, Symbol};
pub use engine::{Engine, EngineBuilder, RecordReceipt, ResetReceipt, Status};
pub use persistence::{HistoryStore, JsonFileStore, MemoryStore, PersistenceError};
pub use predict::{predict, Method, Prediction};
