//! Prediction results.

use super::markov::MarkovCandidate;
use super::PerSymbol;
use crate::core::Symbol;
use serde::{Deserialize, Serialize};

/// Which statistic drove the Markov part of the score.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Method {
    /// The last pair had been followed before
    #[serde(rename = "markov2")]
    Markov2,

    /// No Markov candidate; frequency and recency only
    #[serde(rename = "fallback_freq")]
    FallbackFrequency,
}

impl Method {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Markov2 => "markov2",
            Self::FallbackFrequency => "fallback_freq",
        }
    }
}

/// Fixed answer for a history too short for statistics.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ColdStart {
    pub prediction: Symbol,
    pub confidence: f64,
    pub reason: String,
    pub total: usize,
}

/// Full warm-path result, including the intermediate statistics.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RankedPrediction {
    /// Symbol with the highest normalized score
    pub prediction: Symbol,

    /// Normalized score of the predicted symbol
    pub confidence: f64,

    pub method: Method,

    /// Number of observations the prediction was computed from
    pub total: usize,

    /// Recency window, oldest first
    pub recent: Vec<Symbol>,

    /// Raw occurrence counts over the whole history
    pub freq: PerSymbol<usize>,

    /// Normalized scores, rounded to three decimals
    pub scores: PerSymbol<f64>,

    /// Markov pick before combination, when one exists
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub markov: Option<MarkovCandidate>,
}

/// Result of a prediction request.
///
/// Serializes without a tag, so each variant produces the flat object a
/// transport layer returns as-is.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Prediction {
    Ranked(RankedPrediction),
    ColdStart(ColdStart),
}

impl Prediction {
    /// Predicted next symbol.
    pub fn symbol(&self) -> Symbol {
        match self {
            Self::Ranked(ranked) => ranked.prediction,
            Self::ColdStart(cold) => cold.prediction,
        }
    }

    pub fn confidence(&self) -> f64 {
        match self {
            Self::Ranked(ranked) => ranked.confidence,
            Self::ColdStart(cold) => cold.confidence,
        }
    }

    /// Number of observations at the time of the prediction.
    pub fn total(&self) -> usize {
        match self {
            Self::Ranked(ranked) => ranked.total,
            Self::ColdStart(cold) => cold.total,
        }
    }

    /// Scoring method, `None` on cold start.
    pub fn method(&self) -> Option<Method> {
        match self {
            Self::Ranked(ranked) => Some(ranked.method),
            Self::ColdStart(_) => None,
        }
    }

    pub fn is_cold_start(&self) -> bool {
        matches!(self, Self::ColdStart(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn method_serializes_with_wire_labels() {
        assert_eq!(
            serde_json::to_string(&Method::Markov2).unwrap(),
            "\"markov2\""
        );
        assert_eq!(
            serde_json::to_string(&Method::FallbackFrequency).unwrap(),
            "\"fallback_freq\""
        );
        assert_eq!(Method::Markov2.label(), "markov2");
    }

    #[test]
    fn cold_start_serializes_flat() {
        let prediction = Prediction::ColdStart(ColdStart {
            prediction: Symbol::Stone,
            confidence: 0.33,
            reason: "not enough data".to_string(),
            total: 2,
        });

        let json = serde_json::to_value(&prediction).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "prediction": "stone",
                "confidence": 0.33,
                "reason": "not enough data",
                "total": 2,
            })
        );
    }

    #[test]
    fn untagged_round_trip_keeps_variant() {
        let prediction = Prediction::ColdStart(ColdStart {
            prediction: Symbol::Stone,
            confidence: 0.33,
            reason: "not enough data".to_string(),
            total: 0,
        });
        let json = serde_json::to_string(&prediction).unwrap();
        let restored: Prediction = serde_json::from_str(&json).unwrap();

        assert!(restored.is_cold_start());
        assert_eq!(restored, prediction);
    }
}
