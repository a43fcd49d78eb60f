//! Global frequency scoring.

use super::PerSymbol;
use crate::core::Symbol;

/// Occurrence counts over an entire history.
#[derive(Clone, Debug, PartialEq)]
pub struct Frequency {
    counts: PerSymbol<usize>,
    total: usize,
}

impl Frequency {
    /// Count every symbol in `symbols`.
    pub fn count(symbols: &[Symbol]) -> Self {
        let mut counts = PerSymbol::<usize>::default();
        for &symbol in symbols {
            *counts.get_mut(symbol) += 1;
        }
        Self {
            counts,
            total: symbols.len(),
        }
    }

    pub fn counts(&self) -> &PerSymbol<usize> {
        &self.counts
    }

    pub fn total(&self) -> usize {
        self.total
    }

    /// `count(symbol) / total`; zero for an empty history.
    ///
    /// Over a non-empty history the three scores sum to 1.
    pub fn score(&self, symbol: Symbol) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        *self.counts.get(symbol) as f64 / self.total as f64
    }
}
