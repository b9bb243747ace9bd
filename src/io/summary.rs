//! Write fit summary JSON files.
//!
//! The summary is the portable representation of a fitted model:
//! - coefficients and intercept
//! - fit quality statistics
//! - run metadata (input path, dimensions, fit timestamp)
//!
//! The schema is defined by `domain::FitExport`.

use std::fs::File;
use std::path::Path;

use chrono::Utc;

use crate::domain::{FitExport, FitResult};
use crate::error::{AppError, EXIT_IO};
use crate::math::Design;

/// Build the export record for a finished run.
pub fn fit_export(input: &Path, design: &Design, fit: &FitResult) -> FitExport {
    FitExport {
        tool: "olsfit".to_string(),
        input: input.to_path_buf(),
        fitted_at: Utc::now(),
        n_rows: design.n_rows(),
        n_features: design.n_features,
        intercept: fit.intercept,
        coefficients: fit.coefficients.clone(),
        quality: fit.quality.clone(),
    }
}

/// Write a fit summary JSON file.
pub fn write_fit_json(path: &Path, export: &FitExport) -> Result<(), AppError> {
    let file = File::create(path)
        .map_err(|e| AppError::new(EXIT_IO, format!("Failed to create fit JSON '{}': {e}", path.display())))?;

    serde_json::to_writer_pretty(file, export)
        .map_err(|e| AppError::new(EXIT_IO, format!("Failed to write fit JSON: {e}")))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::FitQuality;
    use nalgebra::{DMatrix, DVector};

    #[test]
    fn summary_is_written_as_readable_json() {
        let design = Design {
            y: DVector::from_row_slice(&[1.0, 2.0, 3.0]),
            x: DMatrix::from_row_slice(3, 2, &[1.0, 1.0, 2.0, 1.0, 3.0, 1.0]),
            n_features: 1,
        };
        let fit = FitResult {
            coefficients: vec![1.0],
            intercept: 0.0,
            quality: FitQuality {
                r2: 1.0,
                r2_residual: 1.0,
                sse: 0.0,
                rmse: 0.0,
                n: 3,
            },
        };
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("fit.json");

        let export = fit_export(Path::new("data.csv"), &design, &fit);
        write_fit_json(&path, &export).unwrap();
        let file = File::open(&path).expect("open");
        let loaded: FitExport = serde_json::from_reader(file).expect("parse");

        assert_eq!(loaded.tool, "olsfit");
        assert_eq!(loaded.n_rows, 3);
        assert_eq!(loaded.n_features, 1);
        assert_eq!(loaded.coefficients, vec![1.0]);
        assert_eq!(loaded.quality, fit.quality);
        assert_eq!(loaded.fitted_at, export.fitted_at);
    }
}
