use serde::{Deserialize, Serialize};

use super::{Prediction, Query};

/// The decoded stdin document. A missing `queries` key means no queries.
///
/// Built only by the engine's codec, which checks the shape of every query.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PredictionRequest {
    pub queries: Vec<Query>,
}

impl PredictionRequest {
    pub fn new(queries: Vec<Query>) -> Self {
        Self { queries }
    }

    pub fn len(&self) -> usize {
        self.queries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queries.is_empty()
    }
}

/// The stdout document. `predictions[i]` answers `queries[i]`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PredictionResponse {
    pub predictions: Vec<Prediction>,
}

impl PredictionResponse {
    pub fn new(predictions: Vec<Prediction>) -> Self {
        Self { predictions }
    }

    pub fn len(&self) -> usize {
        self.predictions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.predictions.is_empty()
    }
}
