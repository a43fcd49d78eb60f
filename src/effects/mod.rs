//! Effectful engine operations using Stillwater 0.11.0.
//!
//! This module is the seam a transport layer plugs into. Each operation is
//! an `Effect` whose environment is a shared engine handle, so requests can
//! be described first and executed later with `run(&engine).await`.
//!
//! # Example
//!
//! ```rust
//! use rps_predictor::effects::{dispatch, Command, Response};
//! use rps_predictor::engine::Engine;
//! use rps_predictor::persistence::MemoryStore;
//! use std::sync::Arc;
//! use stillwater::effect::Effect;
//!
//! # tokio_test_block_on(async {
//! let engine = Arc::new(Engine::new(MemoryStore::new()));
//! let response = dispatch::<MemoryStore>(Command::Predict).run(&engine).await.unwrap();
//! assert!(matches!(response, Response::Predicted(p) if p.is_cold_start()));
//! # });
//! # fn tokio_test_block_on<F: std::future::Future>(f: F) -> F::Output {
//! #     tokio::runtime::Runtime::new().unwrap().block_on(f)
//! # }
//! ```

mod commands;

pub use commands::{dispatch, predict, record, reset, Command, Response, SharedEngine};
