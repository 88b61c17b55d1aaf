//! Request-scoped data model: queries in, predictions out.

pub mod document;
pub mod model;
pub mod prediction;
pub mod query;

pub use document::{PredictionRequest, PredictionResponse};
pub use model::Model;
pub use prediction::Prediction;
pub use query::Query;
