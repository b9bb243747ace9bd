//! `ols-fit` library crate.
//!
//! The binary (`olsfit`) is a thin wrapper around this library so that:
//!
//! - the regression pipeline is testable without spawning processes
//! - parsing, solving and reporting stay in separate, reusable modules

pub mod app;
pub mod cli;
pub mod domain;
pub mod error;
pub mod io;
pub mod math;
pub mod report;
