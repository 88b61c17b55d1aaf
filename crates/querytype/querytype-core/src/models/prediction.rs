use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::constants;

/// One output record. Field order is part of the wire format: `id`, `type`, `score`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    /// Copied verbatim from the query, null when the query had none.
    pub id: Value,
    /// Predicted type label.
    #[serde(rename = "type")]
    pub label: String,
    /// Confidence in `label`.
    pub score: f64,
}

impl Prediction {
    pub fn new(id: Value, label: impl Into<String>, score: f64) -> Self {
        Self {
            id,
            label: label.into(),
            score,
        }
    }

    /// The stub's answer for any query: type "any", score 0.0.
    pub fn placeholder(id: Value) -> Self {
        Self::new(id, constants::PLACEHOLDER_TYPE, constants::PLACEHOLDER_SCORE)
    }
}
