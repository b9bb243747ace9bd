//! Command-line parsing for the OLS regression fitter.
//!
//! The goal of this module is to keep **argument parsing** separate from the
//! reading/solving code. `app::config_from_args` turns the parsed flags into a
//! plain `RegressionConfig`.

use std::path::PathBuf;

use clap::Parser;

use crate::domain::WidthPolicy;

/// Top-level CLI.
#[derive(Debug, Parser, Clone)]
#[command(
    name = "olsfit",
    version,
    about = "Fit an ordinary least-squares regression to a labeled delimited file"
)]
pub struct Cli {
    /// Training data file: `label,feature0,feature1,...` per line, no header.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Echo every parsed row as `label,f0,...,fn` on stderr.
    #[arg(short = 'v', long)]
    pub verbose: bool,

    /// Field delimiter characters; any one of them separates fields.
    #[arg(short = 'd', long, default_value = ",")]
    pub delimiters: String,

    /// How to treat rows whose feature count differs from the first row.
    #[arg(long, value_enum, default_value_t = WidthPolicy::ZeroFill)]
    pub width_policy: WidthPolicy,

    /// Write the fitted model and fit statistics to a JSON file.
    #[arg(long = "export-json", value_name = "JSON")]
    pub export_json: Option<PathBuf>,

    /// Write per-row fitted values and residuals to a CSV file.
    #[arg(long = "export-fitted", value_name = "CSV")]
    pub export_fitted: Option<PathBuf>,
}
