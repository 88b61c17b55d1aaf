use serde::{Deserialize, Serialize};

use super::defaults;

/// Predictor selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PredictorConfig {
    /// Predictor kind. Only "constant" exists today.
    pub kind: String,
    /// Path to a model file. The placeholder model only checks that it exists.
    pub model_path: Option<String>,
}

impl Default for PredictorConfig {
    fn default() -> Self {
        Self {
            kind: defaults::DEFAULT_PREDICTOR_KIND.to_string(),
            model_path: None,
        }
    }
}
