//! Core data model.
//!
//! This module contains the pure data types of the predictor:
//! - `Symbol`, the three valid moves in canonical order
//! - `History`, the append-only observation sequence
//! - `ObservationError`, raised for values outside the symbol set
//!
//! Nothing in this module performs I/O or locking.

mod error;
mod history;
mod symbol;

pub use error::ObservationError;
pub use history::{parse_all, History};
pub use symbol::Symbol;
