//! Observation history tracking.
//!
//! The history is an ordered, append-only sequence of symbols. Insertion
//! order encodes time, so elements are never removed individually or
//! reordered; the only destructive operation is a full `clear`.

use super::error::ObservationError;
use super::symbol::Symbol;
use serde::{Deserialize, Serialize};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Ordered sequence of observed symbols.
///
/// Serializes transparently as a JSON array of lowercase names, which is
/// also the on-disk format of the JSON file store.
///
/// # Example
///
/// ```rust
/// use rps_predictor::core::{History, Symbol};
///
/// let mut history = History::new();
/// assert_eq!(history.push(Symbol::Stone), 1);
/// assert_eq!(history.record_all(&["paper", "scissor"]).unwrap(), 3);
/// assert!(history.record_all(&["stone", "lizard"]).is_err());
///
/// assert_eq!(history.len(), 3);
/// assert_eq!(history.symbols()[1], Symbol::Paper);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct History {
    observations: Vec<Symbol>,
}

impl History {
    /// Create a new empty history.
    pub fn new() -> Self {
        Self {
            observations: Vec::new(),
        }
    }

    /// Build a history from already-validated symbols, oldest first.
    pub fn from_symbols(observations: Vec<Symbol>) -> Self {
        Self { observations }
    }

    /// Append a symbol, returning the new total count.
    pub fn push(&mut self, symbol: Symbol) -> usize {
        self.observations.push(symbol);
        self.observations.len()
    }

    /// Parse and append every raw observation, or none of them.
    ///
    /// All values are validated before anything is appended; the failure
    /// carries one error per invalid value, in input order.
    pub fn record_all<T: AsRef<str>>(
        &mut self,
        raw: &[T],
    ) -> Result<usize, NonEmptyVec<ObservationError>> {
        match parse_all(raw) {
            Validation::Success(symbols) => {
                self.observations.extend(symbols);
                Ok(self.observations.len())
            }
            Validation::Failure(errors) => Err(errors),
        }
    }

    /// Remove every observation. Clearing an empty history is a no-op.
    pub fn clear(&mut self) {
        self.observations.clear();
    }

    pub fn len(&self) -> usize {
        self.observations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }

    /// Borrow the observations in order.
    pub fn symbols(&self) -> &[Symbol] {
        &self.observations
    }

    /// Owned copy of the observations; later mutations do not affect it.
    pub fn snapshot(&self) -> Vec<Symbol> {
        self.observations.clone()
    }
}

impl From<Vec<Symbol>> for History {
    fn from(observations: Vec<Symbol>) -> Self {
        Self::from_symbols(observations)
    }
}

/// Validate a batch of raw observations, accumulating every invalid entry.
pub fn parse_all<T: AsRef<str>>(
    raw: &[T],
) -> Validation<Vec<Symbol>, NonEmptyVec<ObservationError>> {
    let checks: Vec<Validation<Symbol, NonEmptyVec<ObservationError>>> = raw
        .iter()
        .map(|value| match value.as_ref().parse::<Symbol>() {
            Ok(symbol) => Validation::success(symbol),
            Err(err) => Validation::fail(err),
        })
        .collect();

    Validation::all_vec(checks)
}
