//! Request decoding: bytes → JSON value → `PredictionRequest`.
//!
//! Parsing goes through `serde_json::Value` first so every shape problem
//! can be reported precisely instead of as a generic serde mismatch.

use serde_json::Value;

use querytype_core::constants;
use querytype_core::errors::{value_kind, InputError};
use querytype_core::models::{PredictionRequest, Query};

/// Decode the raw stdin bytes.
pub fn decode_request(input: &[u8]) -> Result<PredictionRequest, InputError> {
    let value: Value = serde_json::from_slice(input).map_err(|e| InputError::parse(&e))?;
    request_from_value(value)
}

/// Shape an already-parsed JSON value into a request.
///
/// A missing `queries` key is an empty request. A present one must be an
/// array of objects; `null` counts as present.
pub fn request_from_value(value: Value) -> Result<PredictionRequest, InputError> {
    let mut root = match value {
        Value::Object(root) => root,
        other => {
            return Err(InputError::NotAnObject {
                found: value_kind(&other),
            })
        }
    };

    let queries = match root.remove(constants::QUERIES_KEY) {
        None => Vec::new(),
        Some(Value::Array(items)) => queries_from_items(items)?,
        Some(other) => {
            return Err(InputError::QueriesNotArray {
                found: value_kind(&other),
            })
        }
    };

    if !root.is_empty() {
        tracing::trace!(ignored_keys = root.len(), "ignoring extra top-level keys");
    }

    Ok(PredictionRequest::new(queries))
}

fn queries_from_items(items: Vec<Value>) -> Result<Vec<Query>, InputError> {
    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| match item {
            Value::Object(object) => Ok(Query::from_object(object)),
            other => Err(InputError::QueryNotObject {
                index,
                found: value_kind(&other),
            }),
        })
        .collect()
}
