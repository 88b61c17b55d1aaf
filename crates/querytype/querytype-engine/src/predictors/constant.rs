use querytype_core::constants;
use querytype_core::errors::PredictResult;
use querytype_core::models::{Prediction, Query};
use querytype_core::traits::IPredictor;

/// Answers every query with type "any" and score 0.0, echoing its id.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConstantPredictor;

impl ConstantPredictor {
    pub fn new() -> Self {
        Self
    }
}

impl IPredictor for ConstantPredictor {
    fn name(&self) -> &str {
        constants::CONSTANT_PREDICTOR
    }

    fn predict(&self, query: &Query) -> PredictResult<Prediction> {
        Ok(Prediction::placeholder(query.id_or_null()))
    }
}
