//! Prediction errors.

use super::error_code::{self, LottoErrorCode};

/// Errors that can occur while producing a prediction.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PredictionError {
    /// Generation ran its whole attempt budget without accepting a candidate.
    #[error("no unique candidate for series {target_series} after {attempts} attempts")]
    EmptyCandidatePool { target_series: u32, attempts: usize },
}

impl LottoErrorCode for PredictionError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::EmptyCandidatePool { .. } => error_code::EMPTY_CANDIDATE_POOL,
        }
    }
}
