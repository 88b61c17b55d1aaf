//! `querytype`: read a prediction request on stdin, write predictions to stdout.

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use querytype_core::config::{defaults, CliOverrides, OutputStyle, QuerytypeConfig};
use querytype_core::constants;
use querytype_core::errors::{ErrorCode, PredictError, PredictResult};
use querytype_core::tracing_setup::init_tracing;
use querytype_engine::PredictionEngine;

#[derive(Parser, Debug)]
#[command(
    name = "querytype",
    version = constants::VERSION,
    about = "Predict a type label for each query in a JSON request read from stdin"
)]
struct Cli {
    /// TOML config file. Without it, compiled defaults are used
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Output style: "python" (json.dumps-compatible) or "compact"
    #[arg(long, value_name = "STYLE")]
    style: Option<OutputStyle>,

    /// Tracing filter directives for stderr logs (overrides QUERYTYPE_LOG)
    #[arg(long, value_name = "FILTER")]
    log_level: Option<String>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let overrides = CliOverrides {
        output_style: cli.style,
        log_level: cli.log_level,
    };

    let config = match QuerytypeConfig::resolve(cli.config.as_deref(), Some(&overrides)) {
        Ok(config) => config,
        Err(e) => {
            init_tracing(defaults::DEFAULT_LOG_LEVEL);
            return report(&PredictError::from(e));
        }
    };
    init_tracing(&config.observability.log_level);

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => report(&e),
    }
}

fn run(config: &QuerytypeConfig) -> PredictResult<()> {
    let engine = PredictionEngine::from_config(config)?;
    engine.run_io(io::stdin().lock(), io::stdout().lock())
}

fn report(err: &PredictError) -> ExitCode {
    tracing::debug!(code = err.error_code(), error = ?err, "invocation failed");
    eprintln!("{}", err.diagnostic());
    ExitCode::from(err.exit_code())
}
