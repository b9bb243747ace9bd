//! Dense square-matrix inversion with explicit failure reporting.
//!
//! The normal equations need `(XᵀX)⁻¹`. We invert through an LU decomposition
//! with partial pivoting and treat a pivot that is negligible relative to the
//! largest entry of the input as singular, instead of letting huge or
//! non-finite values flow into the coefficients.

use nalgebra::DMatrix;

/// Failure of a linear solve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolveError {
    NotSquare { rows: usize, cols: usize },
    DimensionMismatch { rows: usize, len: usize },
    Singular,
    NonFinite,
}

impl std::fmt::Display for SolveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SolveError::NotSquare { rows, cols } => {
                write!(f, "matrix is not square ({rows}x{cols})")
            }
            SolveError::DimensionMismatch { rows, len } => {
                write!(f, "design matrix has {rows} rows but response has {len} values")
            }
            SolveError::Singular => write!(
                f,
                "Gram matrix XᵀX is singular (features are collinear or constant)"
            ),
            SolveError::NonFinite => write!(f, "non-finite values in linear solve"),
        }
    }
}

impl std::error::Error for SolveError {}

/// Invert a square matrix.
///
/// Returns `SolveError::Singular` when any LU pivot satisfies
/// `|u_ii| <= n * ε * max|m_ij|`.
pub fn invert_square(m: &DMatrix<f64>) -> Result<DMatrix<f64>, SolveError> {
    let (rows, cols) = m.shape();
    if rows != cols {
        return Err(SolveError::NotSquare { rows, cols });
    }
    if !m.iter().all(|v| v.is_finite()) {
        return Err(SolveError::NonFinite);
    }

    let scale = m.amax();
    if rows == 0 || scale == 0.0 {
        return Err(SolveError::Singular);
    }

    let lu = m.clone().lu();
    let tol = rows as f64 * f64::EPSILON * scale;
    if lu.u().diagonal().iter().any(|p| p.abs() <= tol) {
        return Err(SolveError::Singular);
    }

    let inv = lu.try_inverse().ok_or(SolveError::Singular)?;
    if !inv.iter().all(|v| v.is_finite()) {
        return Err(SolveError::NonFinite);
    }
    Ok(inv)
}
