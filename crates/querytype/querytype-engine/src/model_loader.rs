//! Model loading. Today this only produces the inert placeholder.

use std::path::Path;

use querytype_core::config::PredictorConfig;
use querytype_core::errors::ModelError;
use querytype_core::models::Model;

/// Load the model described by `config`.
///
/// Without a `model_path` this returns the placeholder. With one, the path
/// must exist; its contents are not read.
pub fn load_model(config: &PredictorConfig) -> Result<Model, ModelError> {
    let Some(ref model_path) = config.model_path else {
        tracing::debug!("no model path configured, using placeholder model");
        return Ok(Model::placeholder());
    };

    let path = Path::new(model_path);
    if !path.exists() {
        return Err(ModelError::LoadFailed {
            path: model_path.clone(),
            reason: "file does not exist".to_string(),
        });
    }

    tracing::debug!(path = %path.display(), "model path bound to placeholder model, weights not read");
    Ok(Model::from_source(path))
}
