/// Type label every placeholder prediction carries.
pub const PLACEHOLDER_TYPE: &str = "any";

/// Confidence score every placeholder prediction carries.
pub const PLACEHOLDER_SCORE: f64 = 0.0;

/// Name of the only predictor shipped today.
pub const CONSTANT_PREDICTOR: &str = "constant";

/// Predictor kinds accepted by `[predictor].kind`.
pub const KNOWN_PREDICTORS: &[&str] = &[CONSTANT_PREDICTOR];

/// Environment variable holding tracing filter directives.
pub const LOG_ENV_VAR: &str = "QUERYTYPE_LOG";

/// Top-level request key holding the query list.
pub const QUERIES_KEY: &str = "queries";

/// Per-query key copied into each prediction.
pub const ID_KEY: &str = "id";

/// Crate version, surfaced by `querytype --version`.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
