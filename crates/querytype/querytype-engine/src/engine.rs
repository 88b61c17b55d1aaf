//! PredictionEngine: decode → predict → encode for one invocation.

use std::io::{Read, Write};

use querytype_core::config::{OutputStyle, QuerytypeConfig};
use querytype_core::errors::{ModelError, PredictError, PredictResult};
use querytype_core::models::{Model, PredictionRequest, PredictionResponse};
use querytype_core::traits::IPredictor;
use querytype_core::{decode_span, encode_span, predict_span};

use crate::codec;
use crate::model_loader::load_model;
use crate::predictors::build_predictor;

/// Runs the configured predictor over a request document.
pub struct PredictionEngine {
    predictor: Box<dyn IPredictor>,
    model: Model,
    style: OutputStyle,
}

impl PredictionEngine {
    pub fn new(predictor: Box<dyn IPredictor>, model: Model, style: OutputStyle) -> Self {
        Self {
            predictor,
            model,
            style,
        }
    }

    /// Load the model and build the predictor named in `config`.
    pub fn from_config(config: &QuerytypeConfig) -> PredictResult<Self> {
        let model = load_model(&config.predictor)?;
        let predictor = build_predictor(&config.predictor)?;
        tracing::debug!(
            predictor = predictor.name(),
            style = %config.output.style,
            "prediction engine ready"
        );
        Ok(Self::new(predictor, model, config.output.style))
    }

    pub fn predictor_name(&self) -> &str {
        self.predictor.name()
    }

    pub fn model(&self) -> &Model {
        &self.model
    }

    pub fn style(&self) -> OutputStyle {
        self.style
    }

    pub fn decode_request(&self, input: &[u8]) -> PredictResult<PredictionRequest> {
        let span = decode_span!(input.len());
        let _guard = span.enter();
        Ok(codec::decode_request(input)?)
    }

    /// Predict every query, keeping positional correspondence.
    pub fn predict(&self, request: &PredictionRequest) -> PredictResult<PredictionResponse> {
        let span = predict_span!(self.predictor.name(), request.len());
        let _guard = span.enter();

        let predictions = self.predictor.predict_batch(&request.queries)?;
        if predictions.len() != request.len() {
            return Err(ModelError::BatchLengthMismatch {
                predictor: self.predictor.name().to_string(),
                expected: request.len(),
                actual: predictions.len(),
            }
            .into());
        }
        Ok(PredictionResponse::new(predictions))
    }

    pub fn encode_response(&self, response: &PredictionResponse) -> PredictResult<String> {
        let span = encode_span!(self.style);
        let _guard = span.enter();
        codec::encode_response(response, self.style)
    }

    /// The whole pipeline on an in-memory document. Pure: the same input
    /// always yields the same output.
    pub fn run(&self, input: impl AsRef<[u8]>) -> PredictResult<String> {
        let request = self.decode_request(input.as_ref())?;
        let response = self.predict(&request)?;
        self.encode_response(&response)
    }

    /// Read `reader` to completion, then write the response to `writer`
    /// once. Consumes the engine: one engine serves one invocation.
    /// Nothing is written when any stage fails.
    pub fn run_io<R, W>(self, mut reader: R, mut writer: W) -> PredictResult<()>
    where
        R: Read,
        W: Write,
    {
        let mut input = Vec::new();
        reader
            .read_to_end(&mut input)
            .map_err(|e| PredictError::io("reading input", e))?;

        let output = self.run(&input)?;

        writer
            .write_all(output.as_bytes())
            .and_then(|()| writer.flush())
            .map_err(|e| PredictError::io("writing output", e))?;

        tracing::debug!(bytes_in = input.len(), bytes_out = output.len(), "invocation done");
        Ok(())
    }
}
