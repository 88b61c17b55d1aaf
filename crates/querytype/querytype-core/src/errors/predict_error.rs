//! Top-level error for one predictor invocation.

use super::error_code::{self, ErrorCode};
use super::{ConfigError, InputError, ModelError};

/// Errors that can end an invocation.
/// Aggregates subsystem errors via `From` conversions.
#[derive(Debug, thiserror::Error)]
pub enum PredictError {
    #[error("Input error: {0}")]
    Input(#[from] InputError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Model error: {0}")]
    Model(#[from] ModelError),

    #[error("I/O error while {context}: {source}")]
    Io {
        context: &'static str,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to encode response: {message}")]
    Encode { message: String },
}

impl PredictError {
    pub fn io(context: &'static str, source: std::io::Error) -> Self {
        Self::Io { context, source }
    }
}

impl ErrorCode for PredictError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Input(e) => e.error_code(),
            Self::Config(e) => e.error_code(),
            Self::Model(e) => e.error_code(),
            Self::Io { .. } => error_code::IO_ERROR,
            Self::Encode { .. } => error_code::ENCODE_ERROR,
        }
    }

    fn exit_code(&self) -> u8 {
        match self {
            Self::Input(e) => e.exit_code(),
            Self::Config(e) => e.exit_code(),
            Self::Model(e) => e.exit_code(),
            Self::Io { .. } | Self::Encode { .. } => error_code::EXIT_FAILURE,
        }
    }
}

/// Convenience alias used across the workspace.
pub type PredictResult<T> = Result<T, PredictError>;
