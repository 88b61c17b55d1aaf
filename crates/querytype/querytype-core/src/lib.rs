//! # querytype-core
//!
//! Foundation crate for the query type predictor.
//! Defines the request/response types, the `IPredictor` trait, errors,
//! config, tracing setup, and constants. The engine and CLI crates depend on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;
pub mod tracing_setup;

// Re-export the most commonly used types at the crate root.
pub use config::{OutputStyle, QuerytypeConfig};
pub use errors::{ErrorCode, PredictError, PredictResult};
pub use models::{Model, Prediction, PredictionRequest, PredictionResponse, Query};
pub use traits::IPredictor;
