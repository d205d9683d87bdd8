//! Combination shape errors.

use super::error_code::{self, LottoErrorCode};

/// A sequence of numbers that is not a valid 14-of-25 combination.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CombinationError {
    #[error("combination must have {expected} numbers, got {actual}")]
    WrongLength { expected: usize, actual: usize },

    #[error("number {number} is outside 1..=25")]
    OutOfRange { number: u8 },

    #[error("number {number} appears more than once")]
    Duplicate { number: u8 },
}

impl LottoErrorCode for CombinationError {
    fn error_code(&self) -> &'static str {
        error_code::INVALID_COMBINATION
    }
}
