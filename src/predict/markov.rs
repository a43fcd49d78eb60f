//! Second-order Markov transition statistics.
//!
//! The transition table maps every pair of consecutive symbols to the
//! symbols that immediately followed that pair, in the order they were
//! observed. It is a derived view: it is rebuilt from the full history on
//! every prediction and never stored.

use super::tally::most_common;
use crate::core::Symbol;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Pair of consecutive symbols used to look up successors.
pub type PairKey = (Symbol, Symbol);

/// Successor lists keyed by the preceding pair.
#[derive(Clone, Debug, Default)]
pub struct TransitionTable {
    successors: HashMap<PairKey, Vec<Symbol>>,
}

impl TransitionTable {
    /// Build the table from every triple `(h[i], h[i+1]) -> h[i+2]`.
    pub fn build(symbols: &[Symbol]) -> Self {
        let mut successors: HashMap<PairKey, Vec<Symbol>> = HashMap::new();
        for window in symbols.windows(3) {
            successors
                .entry((window[0], window[1]))
                .or_default()
                .push(window[2]);
        }
        Self { successors }
    }

    /// Successors recorded for `key`, in encounter order.
    pub fn successors(&self, key: PairKey) -> Option<&[Symbol]> {
        self.successors.get(&key).map(Vec::as_slice)
    }

    /// Number of distinct pair keys.
    pub fn len(&self) -> usize {
        self.successors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.successors.is_empty()
    }

    /// Most likely successor of `key`, if the pair has been followed before.
    pub fn candidate(&self, key: PairKey) -> Option<MarkovCandidate> {
        let successors = self.successors(key)?;
        let (symbol, count) = most_common(successors)?;
        Some(MarkovCandidate {
            symbol,
            confidence: count as f64 / successors.len() as f64,
        })
    }
}

/// The Markov step's pick and the share of successors that agree with it.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct MarkovCandidate {
    pub symbol: Symbol,
    pub confidence: f64,
}

/// Look up the candidate for the last two symbols of `symbols`.
pub fn markov_candidate(symbols: &[Symbol]) -> Option<MarkovCandidate> {
    let key = match symbols {
        [.., a, b] => (*a, *b),
        _ => return None,
    };
    TransitionTable::build(symbols).candidate(key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use Symbol::*;

    #[test]
    fn build_records_every_triple() {
        let table = TransitionTable::build(&[Stone, Paper, Scissor, Stone, Paper]);

        assert_eq!(table.len(), 3);
        assert_eq!(table.successors((Stone, Paper)), Some(&[Scissor][..]));
        assert_eq!(table.successors((Paper, Scissor)), Some(&[Stone][..]));
        assert_eq!(table.successors((Scissor, Stone)), Some(&[Paper][..]));
    }

    #[test]
    fn short_history_has_no_transitions() {
        assert!(TransitionTable::build(&[Stone, Paper]).is_empty());
        assert!(markov_candidate(&[Stone, Paper]).is_none());
        assert!(markov_candidate(&[]).is_none());
    }

    #[test]
    fn candidate_uses_last_pair() {
        let candidate = markov_candidate(&[Stone, Paper, Scissor, Stone, Paper]).unwrap();
        assert_eq!(candidate.symbol, Scissor);
        assert_eq!(candidate.confidence, 1.0);
    }

    #[test]
    fn unseen_last_pair_has_no_candidate() {
        // (paper, paper) only appears as the final pair
        assert!(markov_candidate(&[Stone, Scissor, Stone, Paper, Paper]).is_none());
    }

    #[test]
    fn confidence_is_share_of_successors() {
        // (stone, stone) -> paper, paper, scissor
        let history = [
            Stone, Stone, Paper, Stone, Stone, Paper, Stone, Stone, Scissor, Stone, Stone,
        ];
        let candidate = markov_candidate(&history).unwrap();
        assert_eq!(candidate.symbol, Paper);
        assert!((candidate.confidence - 2.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn successor_ties_go_to_first_encountered() {
        // (stone, stone) -> paper, scissor
        let history = [Stone, Stone, Paper, Stone, Stone, Scissor, Stone, Stone];
        let candidate = markov_candidate(&history).unwrap();
        assert_eq!(candidate.symbol, Paper);
        assert_eq!(candidate.confidence, 0.5);
    }
}
