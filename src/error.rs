//! Application-level error type.
//!
//! Every failure that reaches `main` carries the process exit code it maps to:
//!
//! - `2` usage errors (clap reports its own parse failures with this code too)
//! - `3` invalid dataset (empty or mismatched x/y)
//! - `4` fit failures (too few points for a degree, solver breakdown)
//! - `5` rendering/output failures (terminal, SVG, JSON export)

use thiserror::Error;

use crate::fit::FitError;

#[derive(Clone, Error)]
#[error("{message}")]
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
}

impl std::fmt::Debug for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppError")
            .field("exit_code", &self.exit_code)
            .field("message", &self.message)
            .finish()
    }
}

impl From<FitError> for AppError {
    fn from(err: FitError) -> Self {
        AppError::new(4, err.to_string())
    }
}
