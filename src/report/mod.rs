//! Reporting utilities: assembling fit results and formatting terminal output.

use nalgebra::DVector;

use crate::domain::{FitQuality, FitResult};

pub mod format;

pub use format::*;

/// Split a solved coefficient vector (features first, intercept last) into a
/// `FitResult`.
pub fn fit_result(a: &DVector<f64>, quality: FitQuality) -> FitResult {
    let n_features = a.len().saturating_sub(1);
    FitResult {
        coefficients: a.iter().take(n_features).copied().collect(),
        intercept: a.get(n_features).copied().unwrap_or(0.0),
        quality,
    }
}
