//! Span definitions per pipeline stage: decode, predict, encode.

/// Create a decode span.
#[macro_export]
macro_rules! decode_span {
    ($bytes:expr) => {
        tracing::debug_span!("querytype.decode", bytes = $bytes)
    };
}

/// Create a predict span.
#[macro_export]
macro_rules! predict_span {
    ($predictor:expr, $query_count:expr) => {
        tracing::debug_span!("querytype.predict", predictor = %$predictor, query_count = $query_count)
    };
}

/// Create an encode span.
#[macro_export]
macro_rules! encode_span {
    ($style:expr) => {
        tracing::debug_span!("querytype.encode", style = %$style)
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const DECODE: &str = "querytype.decode";
    pub const PREDICT: &str = "querytype.predict";
    pub const ENCODE: &str = "querytype.encode";
}
