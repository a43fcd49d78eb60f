//! Short-term recency scoring.

use super::tally::most_common;
use super::RECENT_WINDOW;
use crate::core::Symbol;

/// The last [`RECENT_WINDOW`] symbols, or all of them when fewer exist.
pub fn recent_window(symbols: &[Symbol]) -> &[Symbol] {
    let start = symbols.len().saturating_sub(RECENT_WINDOW);
    &symbols[start..]
}

/// Most frequent symbol in the recency window, ties to the first seen.
pub fn recent_most(symbols: &[Symbol]) -> Option<Symbol> {
    most_common(recent_window(symbols)).map(|(symbol, _)| symbol)
}
