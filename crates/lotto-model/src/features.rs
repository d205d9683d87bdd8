//! Heuristic pattern features of a single combination.

use lotto_core::constants::{
    HIGH_RANGE, LOW_RANGE, MID_RANGE, QUINTILE_COUNT, QUINTILE_WIDTH, SUM_RANGE,
};
use lotto_core::models::{Combination, PatternKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PatternFeatures {
    /// Adjacent pairs `(n, n + 1)` in the sorted combination.
    pub consecutive_pairs: usize,
    pub sum: u32,
    /// Populated quintiles out of five.
    pub quintiles_populated: usize,
    pub low: usize,
    pub mid: usize,
    pub high: usize,
}

fn in_range(number: u8, (lo, hi): (u8, u8)) -> bool {
    (lo..=hi).contains(&number)
}

impl PatternFeatures {
    pub fn of(combination: &Combination) -> Self {
        let numbers = combination.numbers();
        let consecutive_pairs = numbers.windows(2).filter(|w| w[1] == w[0] + 1).count();

        let mut quintiles = [false; QUINTILE_COUNT];
        for &n in numbers {
            quintiles[usize::from((n - 1) / QUINTILE_WIDTH)] = true;
        }

        Self {
            consecutive_pairs,
            sum: combination.sum(),
            quintiles_populated: quintiles.iter().filter(|q| **q).count(),
            low: numbers.iter().filter(|n| in_range(**n, LOW_RANGE)).count(),
            mid: numbers.iter().filter(|n| in_range(**n, MID_RANGE)).count(),
            high: numbers.iter().filter(|n| in_range(**n, HIGH_RANGE)).count(),
        }
    }

    pub fn has_consecutive_run(&self) -> bool {
        self.consecutive_pairs > 1 && self.consecutive_pairs <= 3
    }

    pub fn in_sum_range(&self) -> bool {
        (SUM_RANGE.0..=SUM_RANGE.1).contains(&self.sum)
    }

    pub fn is_distributed(&self) -> bool {
        self.quintiles_populated >= 3
    }

    pub fn is_balanced(&self) -> bool {
        self.low >= 2 && self.mid >= 4 && self.high >= 2
    }

    pub fn is_low_cluster(&self) -> bool {
        self.low >= 4
    }

    /// Fraction of quintiles populated.
    pub fn distribution_score(&self) -> f64 {
        self.quintiles_populated as f64 / QUINTILE_COUNT as f64
    }

    pub fn min_range_count(&self) -> usize {
        self.low.min(self.mid).min(self.high)
    }

    /// Pattern weights a learning pass should reinforce for this combination.
    pub fn matching_patterns(&self) -> Vec<PatternKind> {
        let checks = [
            (self.has_consecutive_run(), PatternKind::Consecutive),
            (self.in_sum_range(), PatternKind::SumRange),
            (self.is_distributed(), PatternKind::Distribution),
            (self.is_balanced(), PatternKind::BalancedRange),
            (self.is_low_cluster(), PatternKind::LowCluster),
        ];
        checks
            .into_iter()
            .filter_map(|(hit, kind)| hit.then_some(kind))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn combo(numbers: &[u8]) -> Combination {
        Combination::new(numbers).unwrap()
    }

    #[test]
    fn low_block_features() {
        let f = PatternFeatures::of(&combo(&(1..=14).collect::<Vec<_>>()));
        assert_eq!(f.consecutive_pairs, 13);
        assert_eq!(f.sum, 105);
        assert_eq!(f.quintiles_populated, 3);
        assert_eq!((f.low, f.mid, f.high), (8, 6, 0));
        assert!(!f.has_consecutive_run());
        assert!(!f.in_sum_range());
        assert!(!f.is_balanced());
        assert!(f.is_low_cluster());
        assert_eq!(f.min_range_count(), 0);
    }

    #[test]
    fn spread_combination_matches_most_patterns() {
        // Runs 1-2-3 and 23-24, odd numbers between.
        let c = combo(&[1, 2, 5, 7, 9, 11, 13, 15, 17, 19, 21, 23, 24, 3]);
        let f = PatternFeatures::of(&c);
        assert_eq!(f.consecutive_pairs, 3);
        assert!(f.has_consecutive_run());
        assert_eq!(f.quintiles_populated, 5);
        assert!((f.distribution_score() - 1.0).abs() < f64::EPSILON);
        assert!(f.is_balanced());
        let kinds = f.matching_patterns();
        assert!(kinds.contains(&PatternKind::Consecutive));
        assert!(kinds.contains(&PatternKind::Distribution));
        assert!(kinds.contains(&PatternKind::BalancedRange));
    }
}
