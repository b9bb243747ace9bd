//! Process-level error type.
//!
//! Every failure that can end a run carries the exit code the binary should
//! return, so `main` only has to print and exit.
//!
//! Exit codes:
//! - `2`: I/O failures (input cannot be read, export cannot be written)
//! - `3`: invalid data format (empty dataset, zero-width rows, width mismatch)
//! - `4`: numerical failure (singular Gram matrix, non-finite results)

use crate::math::SolveError;

pub const EXIT_IO: u8 = 2;
pub const EXIT_INVALID_DATA: u8 = 3;
pub const EXIT_NUMERIC: u8 = 4;

#[derive(Clone)]
pub struct AppError {
    exit_code: u8,
    message: String,
}

impl AppError {
    pub fn new(exit_code: u8, message: impl Into<String>) -> Self {
        Self {
            exit_code,
            message: message.into(),
        }
    }

    pub fn exit_code(&self) -> u8 {
        self.exit_code
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::fmt::Debug for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppError")
            .field("exit_code", &self.exit_code)
            .field("message", &self.message)
            .finish()
    }
}

impl std::error::Error for AppError {}

impl From<SolveError> for AppError {
    fn from(err: SolveError) -> Self {
        AppError::new(EXIT_NUMERIC, format!("Regression failed: {err}"))
    }
}
