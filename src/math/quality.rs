//! Goodness-of-fit statistics.
//!
//! The reported R² is the explained-over-total ratio
//!
//! ```text
//! R² = SSreg / SStot
//! SSreg = Σ (ŷ_i - ȳ)²
//! SStot = Σ (y_i - ȳ)²
//! ```
//!
//! For an OLS fit with an intercept this equals `1 - SSres / SStot`. For any
//! other coefficient vector the two differ, and `r_squared` always returns the
//! SSreg/SStot value. A constant response (`SStot = 0`) yields NaN or infinity.

use nalgebra::{DMatrix, DVector};

use crate::domain::FitQuality;

/// Fitted values `ŷ = X·A`.
pub fn fitted_values(x: &DMatrix<f64>, a: &DVector<f64>) -> DVector<f64> {
    x * a
}

/// `SSreg / SStot` for observed `y` and fitted `y_hat`.
pub fn r_squared(y: &DVector<f64>, y_hat: &DVector<f64>) -> f64 {
    let mean = y.mean();
    let ss_tot: f64 = y.iter().map(|v| (v - mean).powi(2)).sum();
    let ss_reg: f64 = y_hat.iter().map(|v| (v - mean).powi(2)).sum();
    ss_reg / ss_tot
}

/// Compute every fit statistic for a solved model.
pub fn evaluate(y: &DVector<f64>, x: &DMatrix<f64>, a: &DVector<f64>) -> FitQuality {
    let y_hat = fitted_values(x, a);
    let n = y.len();

    let mean = y.mean();
    let ss_tot: f64 = y.iter().map(|v| (v - mean).powi(2)).sum();
    let sse = (y - &y_hat).norm_squared();

    FitQuality {
        r2: r_squared(y, &y_hat),
        r2_residual: 1.0 - sse / ss_tot,
        sse,
        rmse: (sse / n as f64).sqrt(),
        n,
    }
}
