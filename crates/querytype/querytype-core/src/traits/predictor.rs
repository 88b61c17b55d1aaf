use crate::errors::PredictResult;
use crate::models::{Prediction, Query};

/// Maps queries to predictions.
///
/// Implementations must answer positionally: `predict_batch` returns one
/// prediction per query, in query order.
pub trait IPredictor: Send + Sync {
    /// Stable name, as written in `[predictor].kind`.
    fn name(&self) -> &str;

    /// Predict a single query.
    fn predict(&self, query: &Query) -> PredictResult<Prediction>;

    /// Predict a batch of queries in order.
    fn predict_batch(&self, queries: &[Query]) -> PredictResult<Vec<Prediction>> {
        queries.iter().map(|query| self.predict(query)).collect()
    }
}
