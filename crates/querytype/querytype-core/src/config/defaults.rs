// Single source of truth for all default values.

use super::OutputStyle;
use crate::constants;

// --- Predictor ---
pub const DEFAULT_PREDICTOR_KIND: &str = constants::CONSTANT_PREDICTOR;

// --- Output ---
pub const DEFAULT_OUTPUT_STYLE: OutputStyle = OutputStyle::Python;

// --- Observability ---
// Quiet by default: stderr stays empty on a successful run.
pub const DEFAULT_LOG_LEVEL: &str = "warn";
