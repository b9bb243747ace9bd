//! Design-matrix construction.
//!
//! A dataset of `N` rows whose first row has `W` features becomes:
//!
//! ```text
//! Y: N × 1          Y[i]    = label of row i
//! X: N × (W + 1)    X[i, j] = feature j of row i, X[i, W] = 1.0
//! ```
//!
//! The trailing all-ones column carries the intercept, so the last element of
//! the solved coefficient vector is the intercept.

use log::warn;
use nalgebra::{DMatrix, DVector};

use crate::domain::{Dataset, WidthPolicy};
use crate::error::{AppError, EXIT_INVALID_DATA};

/// Response vector and augmented design matrix for one dataset.
#[derive(Debug, Clone, PartialEq)]
pub struct Design {
    pub y: DVector<f64>,
    pub x: DMatrix<f64>,
    /// Feature count `W` (the intercept column is not included).
    pub n_features: usize,
}

impl Design {
    pub fn n_rows(&self) -> usize {
        self.y.len()
    }
}

/// Build `Y` and `X` from `dataset`.
///
/// Fails with an invalid-data error when the dataset has no rows or its first
/// row has no features. Rows of a different width are zero-filled/truncated or
/// rejected depending on `policy`.
pub fn build_design(dataset: &Dataset, policy: WidthPolicy) -> Result<Design, AppError> {
    let n = dataset.len();
    let w = dataset.width();

    if n == 0 {
        return Err(AppError::new(
            EXIT_INVALID_DATA,
            "ERROR : invalid data format (dataset has no rows).",
        ));
    }
    if w == 0 {
        return Err(AppError::new(
            EXIT_INVALID_DATA,
            "ERROR : invalid data format (first row has no feature columns).",
        ));
    }

    let mismatched: Vec<usize> = dataset
        .features
        .iter()
        .enumerate()
        .filter(|(_, row)| row.len() != w)
        .map(|(i, _)| i)
        .collect();

    if let Some(&first) = mismatched.first() {
        match policy {
            WidthPolicy::Strict => {
                return Err(AppError::new(
                    EXIT_INVALID_DATA,
                    format!(
                        "ERROR : invalid data format (row {} has {} feature(s), expected {w}).",
                        first + 1,
                        dataset.features[first].len()
                    ),
                ));
            }
            WidthPolicy::ZeroFill => {
                warn!(
                    "{} row(s) differ from the first row width {w}; missing cells are zero-filled, extra cells ignored",
                    mismatched.len()
                );
            }
        }
    }

    let y = DVector::from_iterator(n, dataset.labels.iter().map(|&label| label as f64));
    let x = DMatrix::from_fn(n, w + 1, |i, j| {
        if j == w {
            1.0
        } else {
            dataset.features[i].get(j).copied().unwrap_or(0.0)
        }
    });

    Ok(Design { y, x, n_features: w })
}
