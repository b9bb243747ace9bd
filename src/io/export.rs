//! Export per-row fitted values to CSV.
//!
//! The export is meant to be easy to consume in spreadsheets or downstream scripts.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use nalgebra::DVector;

use crate::error::{AppError, EXIT_IO};
use crate::math::Design;

/// Write `row,label,fitted,residual` for every dataset row.
pub fn write_fitted_csv(path: &Path, design: &Design, fitted: &DVector<f64>) -> Result<(), AppError> {
    let file = File::create(path)
        .map_err(|e| AppError::new(EXIT_IO, format!("Failed to create export CSV '{}': {e}", path.display())))?;
    let mut out = BufWriter::new(file);

    writeln!(out, "row,label,fitted,residual")
        .map_err(|e| AppError::new(EXIT_IO, format!("Failed to write export CSV header: {e}")))?;

    for (i, (y, y_hat)) in design.y.iter().zip(fitted.iter()).enumerate() {
        writeln!(out, "{},{},{:.10},{:.10}", i + 1, y, y_hat, y - y_hat)
            .map_err(|e| AppError::new(EXIT_IO, format!("Failed to write export CSV row: {e}")))?;
    }

    out.flush()
        .map_err(|e| AppError::new(EXIT_IO, format!("Failed to flush export CSV: {e}")))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::DMatrix;

    #[test]
    fn writes_one_line_per_row() {
        let design = Design {
            y: DVector::from_row_slice(&[1.0, 2.0]),
            x: DMatrix::from_row_slice(2, 2, &[1.0, 1.0, 2.0, 1.0]),
            n_features: 1,
        };
        let fitted = DVector::from_row_slice(&[1.5, 2.0]);
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("fitted.csv");

        write_fitted_csv(&path, &design, &fitted).unwrap();

        let text = std::fs::read_to_string(&path).expect("read");
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "row,label,fitted,residual");
        assert_eq!(lines[1], "1,1,1.5000000000,-0.5000000000");
        assert_eq!(lines[2], "2,2,2.0000000000,0.0000000000");
        assert_eq!(lines.len(), 3);
    }
}
