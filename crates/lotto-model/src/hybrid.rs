//! Hybrid cold/hot sets: the least- and most-frequent numbers over the most
//! recent training series. Both are over-weighted during generation to push
//! sampling toward statistical extremes.
//!
//! Only observed numbers are ranked. A number absent from every recent event
//! belongs to neither set and keeps its learned sampling weight.

use std::collections::BTreeSet;

use lotto_core::constants::{MAX_NUMBER, MIN_NUMBER, POOL_SIZE};
use lotto_core::models::SeriesPattern;
use serde::{Deserialize, Serialize};

use crate::weights::slot;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HybridSets {
    cold: BTreeSet<u8>,
    hot: BTreeSet<u8>,
}

impl HybridSets {
    /// Rank numbers by occurrence across every event of `recent`.
    ///
    /// Ties break toward the lower number. The hot set is chosen first and the
    /// cold set never overlaps it. Numbers with no occurrence are left out of
    /// both, so the cold set is smaller when few numbers were observed. Empty
    /// input yields empty sets.
    pub fn compute<'a, I>(recent: I, set_size: usize) -> Self
    where
        I: IntoIterator<Item = &'a SeriesPattern>,
    {
        let mut counts = [0usize; POOL_SIZE];
        let mut observed = false;
        for pattern in recent {
            for combination in &pattern.combinations {
                observed = true;
                for n in combination.iter() {
                    counts[slot(n)] += 1;
                }
            }
        }
        if !observed {
            return Self::default();
        }

        let mut ranked: Vec<u8> = (MIN_NUMBER..=MAX_NUMBER)
            .filter(|n| counts[slot(*n)] > 0)
            .collect();
        ranked.sort_by(|a, b| counts[slot(*b)].cmp(&counts[slot(*a)]).then(a.cmp(b)));
        let hot: BTreeSet<u8> = ranked.iter().take(set_size).copied().collect();

        ranked.sort_by(|a, b| counts[slot(*a)].cmp(&counts[slot(*b)]).then(a.cmp(b)));
        let cold: BTreeSet<u8> = ranked
            .iter()
            .filter(|n| !hot.contains(n))
            .take(set_size)
            .copied()
            .collect();

        Self { cold, hot }
    }

    pub fn cold(&self) -> &BTreeSet<u8> {
        &self.cold
    }

    pub fn hot(&self) -> &BTreeSet<u8> {
        &self.hot
    }

    pub fn contains(&self, number: u8) -> bool {
        self.cold.contains(&number) || self.hot.contains(&number)
    }

    pub fn is_empty(&self) -> bool {
        self.cold.is_empty() && self.hot.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lotto_core::models::Combination;

    fn block(start: u8) -> Combination {
        Combination::new(&(start..start + 14).collect::<Vec<_>>()).unwrap()
    }

    #[test]
    fn empty_history_gives_empty_sets() {
        let sets = HybridSets::compute(std::iter::empty(), 7);
        assert!(sets.is_empty());
        assert!(!sets.contains(1));
    }

    #[test]
    fn picks_extremes_without_overlap() {
        // 1..=14 twice, 12..=25 once: 12..=14 appear three times.
        let pattern = SeriesPattern::new(1, vec![block(1), block(1), block(12)]);
        let sets = HybridSets::compute([&pattern], 7);
        let hot: Vec<u8> = sets.hot().iter().copied().collect();
        assert_eq!(hot, vec![1, 2, 3, 4, 12, 13, 14]);
        let cold: Vec<u8> = sets.cold().iter().copied().collect();
        assert_eq!(cold, vec![15, 16, 17, 18, 19, 20, 21]);
        assert!(sets.hot().is_disjoint(sets.cold()));
    }

    #[test]
    fn unobserved_numbers_are_never_cold() {
        let pattern = SeriesPattern::new(1, vec![block(1), block(2)]);
        let sets = HybridSets::compute([&pattern], 7);
        // 1 and 15 appear once, 2..=14 twice, 16..=25 never.
        let cold: Vec<u8> = sets.cold().iter().copied().collect();
        assert_eq!(cold, vec![1, 9, 10, 11, 12, 13, 15]);
        assert!((16..=25).all(|n| !sets.contains(n)));
    }
}
