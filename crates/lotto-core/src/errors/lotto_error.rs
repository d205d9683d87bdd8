//! Top-level error aggregating every subsystem error.

use super::error_code::LottoErrorCode;
use super::{CombinationError, ConfigError, FeedbackError, HistoryError, PredictionError};

/// Errors surfaced by the engine's public operations.
#[derive(Debug, thiserror::Error)]
pub enum LottoError {
    #[error("Combination error: {0}")]
    Combination(#[from] CombinationError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("History error: {0}")]
    History(#[from] HistoryError),

    #[error("Prediction error: {0}")]
    Prediction(#[from] PredictionError),

    #[error("Feedback error: {0}")]
    Feedback(#[from] FeedbackError),
}

impl LottoErrorCode for LottoError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Combination(e) => e.error_code(),
            Self::Config(e) => e.error_code(),
            Self::History(e) => e.error_code(),
            Self::Prediction(e) => e.error_code(),
            Self::Feedback(e) => e.error_code(),
        }
    }
}

pub type LottoResult<T> = Result<T, LottoError>;
