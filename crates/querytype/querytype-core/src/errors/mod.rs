//! Error handling for the query type predictor.
//! One error enum per subsystem, `thiserror` only, aggregated by `PredictError`.

pub mod config_error;
pub mod error_code;
pub mod input_error;
pub mod model_error;
pub mod predict_error;

pub use config_error::ConfigError;
pub use error_code::ErrorCode;
pub use input_error::{value_kind, InputError};
pub use model_error::ModelError;
pub use predict_error::{PredictError, PredictResult};
