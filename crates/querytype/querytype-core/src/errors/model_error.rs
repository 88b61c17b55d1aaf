//! Model and predictor errors.

use super::error_code::{self, ErrorCode};

/// Errors raised while loading the model or running a predictor.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ModelError {
    #[error("model load failed: {path}: {reason}")]
    LoadFailed { path: String, reason: String },

    #[error("predictor {predictor} returned {actual} predictions for {expected} queries")]
    BatchLengthMismatch {
        predictor: String,
        expected: usize,
        actual: usize,
    },
}

impl ErrorCode for ModelError {
    fn error_code(&self) -> &'static str {
        error_code::MODEL_ERROR
    }
}
