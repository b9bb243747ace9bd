//! Shared regression pipeline used by the binary and the tests.
//!
//! Keeping this in one place avoids duplicating the core workflow:
//! read dataset -> build design matrix -> solve normal equations -> evaluate fit
//!
//! The binary then only deals with presentation (printing and exports).

use std::io::Write;

use log::debug;
use nalgebra::DVector;

use crate::domain::{Dataset, FitResult, RegressionConfig};
use crate::error::AppError;
use crate::io::{open_input, read_opened};
use crate::math::{Design, build_design, evaluate, fitted_values, solve_normal_equations};

/// All computed outputs of a single run.
#[derive(Debug, Clone)]
pub struct RunOutput {
    pub dataset: Dataset,
    pub design: Design,
    /// Raw coefficient vector: features first, intercept last.
    pub coefficients: DVector<f64>,
    pub fitted: DVector<f64>,
    pub fit: FitResult,
}

/// Execute the full pipeline for `config`.
///
/// An input file that cannot be opened is reported on stderr and treated as an
/// empty dataset, so the run fails with the invalid-data error of the matrix
/// builder. Errors after opening (read failures, echo writes) end the run with
/// their own exit code. Verbose row echo goes to `echo`.
pub fn run_regression(config: &RegressionConfig, echo: &mut dyn Write) -> Result<RunOutput, AppError> {
    let dataset = match open_input(&config.input) {
        Ok(reader) => read_opened(reader, &config.input, &config.read, echo)?,
        Err(err) => {
            eprintln!("{err}");
            Dataset::default()
        }
    };

    let design = build_design(&dataset, config.width_policy)?;
    let (coefficients, fit) = fit_design(&design)?;
    let fitted = fitted_values(&design.x, &coefficients);

    Ok(RunOutput {
        dataset,
        design,
        coefficients,
        fitted,
        fit,
    })
}

/// Solve and evaluate an already built design.
pub fn fit_design(design: &Design) -> Result<(DVector<f64>, FitResult), AppError> {
    let a = solve_normal_equations(&design.x, &design.y)?;
    let quality = evaluate(&design.y, &design.x, &a);
    debug!(
        "fit n={} r2={:.6} r2_residual={:.6} sse={:.6} rmse={:.6}",
        quality.n, quality.r2, quality.r2_residual, quality.sse, quality.rmse
    );

    let fit = crate::report::fit_result(&a, quality);
    Ok((a, fit))
}
