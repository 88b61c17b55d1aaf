//! Response encoding in the configured output style.

use serde::Serialize;
use serde_json::Serializer;

use querytype_core::config::OutputStyle;
use querytype_core::errors::{PredictError, PredictResult};
use querytype_core::models::PredictionResponse;

use super::PythonFormatter;

/// Encode the response document. No trailing newline is added.
pub fn encode_response(response: &PredictionResponse, style: OutputStyle) -> PredictResult<String> {
    match style {
        OutputStyle::Compact => serde_json::to_string(response).map_err(encode_error),
        OutputStyle::Python => {
            let mut buf = Vec::with_capacity(64 + response.len() * 48);
            let mut serializer = Serializer::with_formatter(&mut buf, PythonFormatter::new());
            response.serialize(&mut serializer).map_err(encode_error)?;
            // PythonFormatter only emits ASCII.
            String::from_utf8(buf).map_err(|e| PredictError::Encode {
                message: e.to_string(),
            })
        }
    }
}

fn encode_error(err: serde_json::Error) -> PredictError {
    PredictError::Encode {
        message: err.to_string(),
    }
}
