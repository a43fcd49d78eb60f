//! Encounter-ordered symbol counting.

use super::PerSymbol;
use crate::core::Symbol;

/// Most common symbol in `symbols` with its count.
///
/// Ties go to the symbol encountered first in the slice, not to the
/// canonical order. Returns `None` for an empty slice.
pub(crate) fn most_common(symbols: &[Symbol]) -> Option<(Symbol, usize)> {
    let mut counts = PerSymbol::<usize>::default();
    let mut first_seen: Vec<Symbol> = Vec::with_capacity(Symbol::ALL.len());

    for &symbol in symbols {
        if *counts.get(symbol) == 0 {
            first_seen.push(symbol);
        }
        *counts.get_mut(symbol) += 1;
    }

    let mut best: Option<(Symbol, usize)> = None;
    for symbol in first_seen {
        let count = *counts.get(symbol);
        if best.is_none_or(|(_, top)| count > top) {
            best = Some((symbol, count));
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use Symbol::*;

    #[test]
    fn empty_slice_has_no_winner() {
        assert_eq!(most_common(&[]), None);
    }

    #[test]
    fn picks_highest_count() {
        assert_eq!(most_common(&[Paper, Stone, Paper]), Some((Paper, 2)));
    }

    #[test]
    fn ties_go_to_first_encountered() {
        assert_eq!(most_common(&[Paper, Stone, Stone, Paper]), Some((Paper, 2)));
        assert_eq!(most_common(&[Scissor, Stone]), Some((Scissor, 1)));
    }
}
