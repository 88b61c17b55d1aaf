//! # querytype-engine
//!
//! Turns one request document into one response document.
//!
//! ## Pipeline
//!
//! | Stage | Module |
//! |-------|--------|
//! | Decode stdin bytes into `PredictionRequest` | `codec::decode` |
//! | Load the (placeholder) model | `model_loader` |
//! | Map each query to a prediction, in order | `predictors` |
//! | Encode `PredictionResponse` for stdout | `codec::encode` |
//!
//! The only predictor today is `ConstantPredictor`: every query gets
//! type "any" with score 0.0.

pub mod codec;
pub mod engine;
pub mod model_loader;
pub mod predictors;

pub use codec::{decode_request, encode_response, PythonFormatter};
pub use engine::PredictionEngine;
pub use model_loader::load_model;
pub use predictors::{build_predictor, ConstantPredictor};
