//! Shared domain types.
//!
//! These types are intentionally kept lightweight so they can be:
//!
//! - built once by the reader and consumed by the matrix builder
//! - exported to JSON after fitting
//! - reloaded later for inspection

use std::path::PathBuf;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// How rows whose feature count differs from the first row are handled.
///
/// The feature count of the first row fixes the design-matrix width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum WidthPolicy {
    /// Fill missing trailing cells with `0.0` and ignore surplus cells.
    #[default]
    ZeroFill,
    /// Reject the dataset if any row width differs from the first row.
    Strict,
}

/// One parsed input line: an integer label followed by its features.
#[derive(Debug, Clone, PartialEq)]
pub struct RawRow {
    pub label: i64,
    pub features: Vec<f64>,
}

/// Rows accumulated by the reader, in input order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    pub labels: Vec<i64>,
    pub features: Vec<Vec<f64>>,
}

impl Dataset {
    pub fn push(&mut self, row: RawRow) {
        self.labels.push(row.label);
        self.features.push(row.features);
    }

    /// Number of rows (`datasetNum`).
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Feature count of the first row (`variableNum`), or 0 when empty.
    pub fn width(&self) -> usize {
        self.features.first().map_or(0, Vec::len)
    }
}

/// Reader options threaded explicitly into the dataset reader.
#[derive(Debug, Clone)]
pub struct ReadOptions {
    /// Every character in this string is a field separator.
    pub delimiters: String,
    /// Echo each parsed row as `label,f0,...,fn`.
    pub verbose: bool,
}

impl Default for ReadOptions {
    fn default() -> Self {
        Self {
            delimiters: ",".to_string(),
            verbose: false,
        }
    }
}

/// Fully resolved run configuration.
#[derive(Debug, Clone)]
pub struct RegressionConfig {
    pub input: PathBuf,
    pub read: ReadOptions,
    pub width_policy: WidthPolicy,
    pub export_json: Option<PathBuf>,
    pub export_fitted: Option<PathBuf>,
}

/// Goodness-of-fit statistics for a solved model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FitQuality {
    /// Explained over total sum of squares, `SSreg / SStot`.
    pub r2: f64,
    /// Residual-based coefficient of determination, `1 - SSres / SStot`.
    pub r2_residual: f64,
    pub sse: f64,
    pub rmse: f64,
    pub n: usize,
}

/// Solved regression model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FitResult {
    /// One coefficient per feature column, in input order.
    pub coefficients: Vec<f64>,
    pub intercept: f64,
    pub quality: FitQuality,
}

/// Schema of the JSON fit summary written by `--export-json`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FitExport {
    pub tool: String,
    pub input: PathBuf,
    pub fitted_at: chrono::DateTime<chrono::Utc>,
    pub n_rows: usize,
    pub n_features: usize,
    pub intercept: f64,
    pub coefficients: Vec<f64>,
    pub quality: FitQuality,
}
