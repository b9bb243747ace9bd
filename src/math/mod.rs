//! Numerical core: design matrices, normal-equation solves and fit quality.

pub mod design;
pub mod linalg;
pub mod ols;
pub mod quality;

pub use design::*;
pub use linalg::*;
pub use ols::*;
pub use quality::*;
