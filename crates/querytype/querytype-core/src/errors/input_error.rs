//! Input errors: the request document could not be turned into queries.

use serde_json::Value;

use super::error_code::{self, ErrorCode};

/// Errors raised while decoding the request read from stdin.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
    #[error("Invalid JSON at line {line}, column {column}: {message}")]
    Parse {
        message: String,
        line: usize,
        column: usize,
    },

    #[error("Request must be a JSON object, found {found}")]
    NotAnObject { found: &'static str },

    #[error("`queries` must be an array, found {found}")]
    QueriesNotArray { found: &'static str },

    #[error("queries[{index}] must be an object, found {found}")]
    QueryNotObject { index: usize, found: &'static str },
}

impl InputError {
    /// Build a `Parse` error from a `serde_json` failure, keeping its position.
    pub fn parse(err: &serde_json::Error) -> Self {
        Self::Parse {
            message: err.to_string(),
            line: err.line(),
            column: err.column(),
        }
    }
}

impl ErrorCode for InputError {
    fn error_code(&self) -> &'static str {
        error_code::INPUT_ERROR
    }
}

/// Short name of a JSON value's kind, for diagnostics.
pub fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
