//! Domain types used throughout the pipeline.
//!
//! This module defines:
//!
//! - parsed input rows and the accumulated `Dataset`
//! - run configuration (`RegressionConfig`, `ReadOptions`, `WidthPolicy`)
//! - fit outputs (`FitResult`, `FitQuality`, `FitExport`)

pub mod types;

pub use types::*;
