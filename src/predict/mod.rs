//! Hybrid next-move prediction.
//!
//! A prediction blends three statistics computed from scratch over the
//! current history on every request:
//!
//! - **Frequency**: share of each symbol across the whole history
//! - **Markov**: most likely successor of the last two symbols
//! - **Recency**: most frequent symbol among the last ten
//!
//! The blend uses fixed weights; nothing is learned or cached.
//!
//! # Example
//!
//! ```rust
//! use rps_predictor::core::Symbol;
//! use rps_predictor::predict::{predict, Method};
//!
//! use Symbol::*;
//! let prediction = predict(&[Stone, Paper, Scissor, Stone, Paper]);
//!
//! assert_eq!(prediction.symbol(), Scissor);
//! assert_eq!(prediction.method(), Some(Method::Markov2));
//! assert_eq!(prediction.confidence(), 0.58);
//! ```

pub mod frequency;
pub mod markov;
mod outcome;
pub mod recency;
mod tally;

pub use frequency::Frequency;
pub use markov::{markov_candidate, MarkovCandidate, TransitionTable};
pub use outcome::{ColdStart, Method, Prediction, RankedPrediction};
pub use recency::{recent_most, recent_window};

use crate::core::Symbol;
use serde::{Deserialize, Serialize};

/// Histories shorter than this get the cold-start answer.
pub const COLD_START_THRESHOLD: usize = 5;

/// Number of most recent observations considered for recency.
pub const RECENT_WINDOW: usize = 10;

pub const COLD_START_SYMBOL: Symbol = Symbol::Stone;
pub const COLD_START_CONFIDENCE: f64 = 0.33;
pub const COLD_START_REASON: &str = "not enough data";

pub const FREQUENCY_WEIGHT: f64 = 0.4;
pub const MARKOV_WEIGHT: f64 = 0.5;
pub const RECENCY_BONUS: f64 = 0.1;

/// One value per symbol, serialized in canonical order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PerSymbol<T> {
    pub stone: T,
    pub scissor: T,
    pub paper: T,
}

impl<T> PerSymbol<T> {
    /// Build by evaluating `f` for each symbol in canonical order.
    pub fn from_fn(mut f: impl FnMut(Symbol) -> T) -> Self {
        Self {
            stone: f(Symbol::Stone),
            scissor: f(Symbol::Scissor),
            paper: f(Symbol::Paper),
        }
    }

    pub fn get(&self, symbol: Symbol) -> &T {
        match symbol {
            Symbol::Stone => &self.stone,
            Symbol::Scissor => &self.scissor,
            Symbol::Paper => &self.paper,
        }
    }

    pub fn get_mut(&mut self, symbol: Symbol) -> &mut T {
        match symbol {
            Symbol::Stone => &mut self.stone,
            Symbol::Scissor => &mut self.scissor,
            Symbol::Paper => &mut self.paper,
        }
    }

    /// Entries in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (Symbol, &T)> {
        Symbol::ALL.into_iter().map(move |symbol| (symbol, self.get(symbol)))
    }
}

/// Predict the next symbol from `history`, oldest first.
///
/// Pure: the same slice always yields the same result.
pub fn predict(history: &[Symbol]) -> Prediction {
    if history.len() < COLD_START_THRESHOLD {
        return Prediction::ColdStart(cold_start(history.len()));
    }

    let frequency = Frequency::count(history);
    let markov = markov_candidate(history);
    let recent = recent_window(history);
    let recent_most = recent_most(history);

    let raw = combine(&frequency, markov, recent_most);
    let scores = normalize(raw);
    let (prediction, confidence) = select(&scores);

    Prediction::Ranked(RankedPrediction {
        prediction,
        confidence,
        method: if markov.is_some() {
            Method::Markov2
        } else {
            Method::FallbackFrequency
        },
        total: history.len(),
        recent: recent.to_vec(),
        freq: *frequency.counts(),
        scores,
        markov,
    })
}

/// The fixed cold-start answer for a history of `total` observations.
pub fn cold_start(total: usize) -> ColdStart {
    ColdStart {
        prediction: COLD_START_SYMBOL,
        confidence: COLD_START_CONFIDENCE,
        reason: COLD_START_REASON.to_string(),
        total,
    }
}

/// Weighted, unnormalized score of every symbol.
pub fn combine(
    frequency: &Frequency,
    markov: Option<MarkovCandidate>,
    recent_most: Option<Symbol>,
) -> PerSymbol<f64> {
    PerSymbol::from_fn(|symbol| {
        let mut score = frequency.score(symbol) * FREQUENCY_WEIGHT;
        if let Some(candidate) = markov.filter(|c| c.symbol == symbol) {
            score += candidate.confidence * MARKOV_WEIGHT;
        }
        if recent_most == Some(symbol) {
            score += RECENCY_BONUS;
        }
        score
    })
}

/// Scale scores to sum to 1 and round each to three decimals.
///
/// An all-zero vector is divided by 1 and stays zero.
pub fn normalize(scores: PerSymbol<f64>) -> PerSymbol<f64> {
    let total: f64 = scores.iter().map(|(_, score)| *score).sum();
    let divisor = if total == 0.0 { 1.0 } else { total };
    PerSymbol::from_fn(|symbol| round3(*scores.get(symbol) / divisor))
}

/// Highest-scoring symbol; ties go to the earliest in [`Symbol::ALL`].
pub fn select(scores: &PerSymbol<f64>) -> (Symbol, f64) {
    let mut best = (Symbol::ALL[0], *scores.get(Symbol::ALL[0]));
    for (symbol, score) in scores.iter().skip(1) {
        if *score > best.1 {
            best = (symbol, *score);
        }
    }
    best
}

// Rounds the exact binary value; scaling by 1000 first would round twice.
fn round3(value: f64) -> f64 {
    format!("{:.3}", value).parse().unwrap_or(value)
}
