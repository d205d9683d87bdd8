//! Combination: exactly 14 distinct numbers from 1..=25, kept sorted.
//!
//! A combination is also a 25-bit set: bit `n - 1` is set when `n` is present.
//! The mask is the canonical in-memory signature; `signature()` renders the
//! same identity as sorted comma-joined text.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::{MAX_NUMBER, MIN_NUMBER, PICK_SIZE};
use crate::errors::CombinationError;

/// Bits 0..25 set.
const POOL_MASK: u32 = (1 << MAX_NUMBER) - 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "Vec<u8>", into = "Vec<u8>")]
pub struct Combination([u8; PICK_SIZE]);

impl Combination {
    /// Validate and canonicalise a sequence of numbers in any order.
    pub fn new(numbers: &[u8]) -> Result<Self, CombinationError> {
        if numbers.len() != PICK_SIZE {
            return Err(CombinationError::WrongLength {
                expected: PICK_SIZE,
                actual: numbers.len(),
            });
        }
        let mut seen = 0u32;
        for &number in numbers {
            if !(MIN_NUMBER..=MAX_NUMBER).contains(&number) {
                return Err(CombinationError::OutOfRange { number });
            }
            let bit = bit_of(number);
            if seen & bit != 0 {
                return Err(CombinationError::Duplicate { number });
            }
            seen |= bit;
        }
        Ok(Self::from_valid_mask(seen))
    }

    /// Build from a 25-bit set with exactly 14 bits.
    pub fn from_mask(mask: u32) -> Result<Self, CombinationError> {
        if mask & !POOL_MASK != 0 {
            let number = (32 - mask.leading_zeros()) as u8;
            return Err(CombinationError::OutOfRange { number });
        }
        let count = mask.count_ones() as usize;
        if count != PICK_SIZE {
            return Err(CombinationError::WrongLength {
                expected: PICK_SIZE,
                actual: count,
            });
        }
        Ok(Self::from_valid_mask(mask))
    }

    fn from_valid_mask(mask: u32) -> Self {
        let mut numbers = [0u8; PICK_SIZE];
        let mut i = 0;
        for number in MIN_NUMBER..=MAX_NUMBER {
            if mask & bit_of(number) != 0 {
                numbers[i] = number;
                i += 1;
            }
        }
        Self(numbers)
    }

    /// The numbers in ascending order.
    pub fn numbers(&self) -> &[u8; PICK_SIZE] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = u8> + '_ {
        self.0.iter().copied()
    }

    pub fn contains(&self, number: u8) -> bool {
        self.0.binary_search(&number).is_ok()
    }

    pub fn mask(&self) -> u32 {
        self.0.iter().fold(0, |acc, &n| acc | bit_of(n))
    }

    pub fn sum(&self) -> u32 {
        self.0.iter().map(|&n| u32::from(n)).sum()
    }

    /// Canonical signature: sorted numbers joined by commas.
    pub fn signature(&self) -> String {
        self.0
            .iter()
            .map(|n| n.to_string())
            .collect::<Vec<_>>()
            .join(",")
    }

    /// Number of values shared with `other`.
    pub fn intersection_count(&self, other: &Combination) -> usize {
        (self.mask() & other.mask()).count_ones() as usize
    }

    pub fn to_vec(&self) -> Vec<u8> {
        self.0.to_vec()
    }
}

/// Bit for `number` in a combination mask.
pub fn bit_of(number: u8) -> u32 {
    1u32 << (number - MIN_NUMBER)
}

impl TryFrom<Vec<u8>> for Combination {
    type Error = CombinationError;

    fn try_from(numbers: Vec<u8>) -> Result<Self, Self::Error> {
        Self::new(&numbers)
    }
}

impl From<Combination> for Vec<u8> {
    fn from(combination: Combination) -> Self {
        combination.to_vec()
    }
}

impl fmt::Display for Combination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.signature())
    }
}
