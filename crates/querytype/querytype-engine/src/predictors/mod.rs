//! Predictor implementations and selection by configured kind.

mod constant;

pub use constant::ConstantPredictor;

use querytype_core::config::PredictorConfig;
use querytype_core::constants;
use querytype_core::errors::ConfigError;
use querytype_core::traits::IPredictor;

/// Build the predictor named by `config.kind`.
pub fn build_predictor(config: &PredictorConfig) -> Result<Box<dyn IPredictor>, ConfigError> {
    match config.kind.as_str() {
        constants::CONSTANT_PREDICTOR => Ok(Box::new(ConstantPredictor::new())),
        other => Err(ConfigError::UnknownPredictor {
            kind: other.to_string(),
        }),
    }
}
