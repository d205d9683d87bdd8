//! Errors raised by the historical data collaborator.

use super::error_code::{self, LottoErrorCode};

/// Failures loading historical series.
#[derive(Debug, thiserror::Error)]
pub enum HistoryError {
    #[error("failed to load history before series {series_id}: {reason}")]
    LoadFailed { series_id: u32, reason: String },
}

impl LottoErrorCode for HistoryError {
    fn error_code(&self) -> &'static str {
        error_code::HISTORY_ERROR
    }
}
