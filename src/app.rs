//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - loads `.env` and initializes logging
//! - parses CLI arguments
//! - runs read -> build -> solve -> evaluate
//! - prints the report
//! - writes optional exports

use clap::Parser;
use log::{LevelFilter, info};

use crate::cli::Cli;
use crate::domain::{ReadOptions, RegressionConfig};
use crate::error::AppError;

pub mod pipeline;

/// Entry point for the `olsfit` binary.
pub fn run() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    init_logging();

    let cli = Cli::parse();
    let config = config_from_args(&cli);

    let run = pipeline::run_regression(&config, &mut std::io::stderr())?;
    print!("{}", crate::report::format_report(&run.fit));

    if let Some(path) = &config.export_json {
        let export = crate::io::fit_export(&config.input, &run.design, &run.fit);
        crate::io::write_fit_json(path, &export)?;
        info!("wrote fit summary to '{}'", path.display());
    }
    if let Some(path) = &config.export_fitted {
        crate::io::write_fitted_csv(path, &run.design, &run.fitted)?;
        info!("wrote fitted values to '{}'", path.display());
    }

    Ok(())
}

/// Warnings and errors by default; `RUST_LOG` overrides.
fn init_logging() {
    // Ignore the error: a logger may already be installed (tests, embedding).
    let _ = pretty_env_logger::formatted_builder()
        .filter_level(LevelFilter::Warn)
        .parse_default_env()
        .try_init();
}

pub fn config_from_args(cli: &Cli) -> RegressionConfig {
    RegressionConfig {
        input: cli.input.clone(),
        read: ReadOptions {
            delimiters: cli.delimiters.clone(),
            verbose: cli.verbose,
        },
        width_policy: cli.width_policy,
        export_json: cli.export_json.clone(),
        export_fitted: cli.export_fitted.clone(),
    }
}
