//! The three observable moves.
//!
//! A `Symbol` is the atomic unit of a history. Parsing from text is the only
//! place an observation can be rejected, so every `Symbol` value that exists
//! is valid by construction.

use super::error::ObservationError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One move of the game.
///
/// The declaration order is the canonical enumeration order used for
/// deterministic tie-breaking: `stone`, `scissor`, `paper`.
///
/// # Example
///
/// ```rust
/// use rps_predictor::core::Symbol;
///
/// let symbol: Symbol = "scissor".parse().unwrap();
/// assert_eq!(symbol, Symbol::Scissor);
/// assert_eq!(symbol.name(), "scissor");
/// assert!("rock".parse::<Symbol>().is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Symbol {
    Stone,
    Scissor,
    Paper,
}

impl Symbol {
    /// All symbols in canonical order.
    pub const ALL: [Symbol; 3] = [Symbol::Stone, Symbol::Scissor, Symbol::Paper];

    /// Lowercase name, identical to the serialized form.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Stone => "stone",
            Self::Scissor => "scissor",
            Self::Paper => "paper",
        }
    }

    /// Position in [`Symbol::ALL`].
    pub fn index(&self) -> usize {
        match self {
            Self::Stone => 0,
            Self::Scissor => 1,
            Self::Paper => 2,
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Symbol {
    type Err = ObservationError;

    /// Exact, case-sensitive match on the lowercase name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "stone" => Ok(Self::Stone),
            "scissor" => Ok(Self::Scissor),
            "paper" => Ok(Self::Paper),
            other => Err(ObservationError::InvalidObservation {
                value: other.to_string(),
            }),
        }
    }
}
