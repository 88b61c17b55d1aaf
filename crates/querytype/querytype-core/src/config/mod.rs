//! Configuration system for the query type predictor.
//! TOML-based, 3-layer resolution: CLI > env > config file > defaults.

pub mod defaults;
pub mod observability_config;
pub mod output_config;
pub mod predictor_config;
pub mod querytype_config;

pub use observability_config::ObservabilityConfig;
pub use output_config::{OutputConfig, OutputStyle};
pub use predictor_config::PredictorConfig;
pub use querytype_config::{CliOverrides, QuerytypeConfig};
