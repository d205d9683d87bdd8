//! Errors in outcome feedback.

use super::error_code::{self, LottoErrorCode};

/// Rejected `validate_and_learn` input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FeedbackError {
    #[error("series {series_id} has no observed events")]
    NoEvents { series_id: u32 },

    #[error("series {series_id} has {count} events, at most {max} allowed")]
    TooManyEvents {
        series_id: u32,
        count: usize,
        max: usize,
    },
}

impl LottoErrorCode for FeedbackError {
    fn error_code(&self) -> &'static str {
        error_code::FEEDBACK_ERROR
    }
}
