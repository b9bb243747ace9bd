//! Ordinary least squares via the normal equations.
//!
//! For a response `Y` and design matrix `X` (intercept column included) we solve
//!
//! ```text
//! A = (XᵀX)⁻¹ XᵀY
//! ```
//!
//! which minimizes `‖Y - XA‖²` whenever the Gram matrix `XᵀX` is invertible.
//! Collinear or constant feature columns make `XᵀX` singular; that case is
//! reported as `SolveError::Singular` and never regularized away.

use log::debug;
use nalgebra::{DMatrix, DVector};

use crate::math::linalg::{SolveError, invert_square};

/// Solve the normal equations for the coefficient vector `A` (length `X.ncols()`).
pub fn solve_normal_equations(x: &DMatrix<f64>, y: &DVector<f64>) -> Result<DVector<f64>, SolveError> {
    if x.nrows() != y.len() {
        return Err(SolveError::DimensionMismatch {
            rows: x.nrows(),
            len: y.len(),
        });
    }

    let gram = x.tr_mul(x);
    let gram_inv = invert_square(&gram)?;
    let a = gram_inv * x.tr_mul(y);

    if !a.iter().all(|v| v.is_finite()) {
        return Err(SolveError::NonFinite);
    }
    debug!("solved {}x{} normal equations", gram.nrows(), gram.ncols());
    Ok(a)
}
