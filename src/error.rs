//! Error types.
//!
//! Pipeline stages return [`ForecastError`]; the application boundary works with
//! [`AppError`], which pairs a message with the process exit code.

use thiserror::Error;

/// Failures raised by the forecasting pipeline.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ForecastError {
    /// Start after end, or one of the two dates missing.
    #[error("invalid date range: {0}")]
    InvalidRange(String),
    /// Model artifact missing, unreadable, or structurally invalid.
    #[error("failed to load model artifact: {0}")]
    ArtifactLoad(String),
    /// Feature schema rejected by the predictor, or output length mismatch.
    #[error("prediction failed: {0}")]
    Prediction(String),
    /// A series with zero points reached a stage that needs at least one.
    #[error("empty forecast series: {0}")]
    EmptySeries(String),
}

impl ForecastError {
    /// Exit code used when this error terminates the binary.
    pub fn exit_code(&self) -> u8 {
        match self {
            ForecastError::InvalidRange(_) => 2,
            ForecastError::ArtifactLoad(_) => 3,
            ForecastError::Prediction(_) => 4,
            ForecastError::EmptySeries(_) => 5,
        }
    }
}

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

impl From<ForecastError> for AppError {
    fn from(err: ForecastError) -> Self {
        AppError::new(err.exit_code(), err.to_string())
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
