//! SignatureWindow: the indexed set of combinations inside one lookback window.

use std::collections::HashSet;

use lotto_core::models::{Combination, HistoricalSeries, SeriesId};

/// Canonical signatures of every combination observed in a lookback window.
///
/// Signatures are stored as 25-bit masks, which identify a combination
/// exactly as its sorted comma-joined text does.
#[derive(Debug, Clone, Default)]
pub struct SignatureWindow {
    start: SeriesId,
    end: SeriesId,
    series_analyzed: usize,
    signatures: HashSet<u32>,
}

impl SignatureWindow {
    /// Inclusive series bounds for `target`. The start is clamped to 1; the
    /// window is empty when `end < start`.
    pub fn bounds(target: SeriesId, lookback: u32) -> (SeriesId, SeriesId) {
        let start = target.saturating_sub(lookback).max(1);
        let end = target.saturating_sub(1);
        (start, end)
    }

    /// An empty window with the bounds of `target`.
    pub fn empty(target: SeriesId, lookback: u32) -> Self {
        let (start, end) = Self::bounds(target, lookback);
        Self {
            start,
            end,
            ..Default::default()
        }
    }

    /// Index every series of `history` that falls inside the window of `target`.
    pub fn build(history: &[HistoricalSeries], target: SeriesId, lookback: u32) -> Self {
        let mut window = Self::empty(target, lookback);
        for series in history
            .iter()
            .filter(|s| s.series_id >= window.start && s.series_id <= window.end)
        {
            window.series_analyzed += 1;
            window
                .signatures
                .extend(series.combinations.iter().map(Combination::mask));
        }
        window
    }

    pub fn contains(&self, combination: &Combination) -> bool {
        self.signatures.contains(&combination.mask())
    }

    pub fn is_unique(&self, combination: &Combination) -> bool {
        !self.contains(combination)
    }

    /// Keep the combinations absent from the window, in input order.
    pub fn filter_unique(&self, combinations: &[Combination]) -> Vec<Combination> {
        combinations
            .iter()
            .filter(|c| self.is_unique(c))
            .copied()
            .collect()
    }

    pub fn start(&self) -> SeriesId {
        self.start
    }

    pub fn end(&self) -> SeriesId {
        self.end
    }

    pub fn series_analyzed(&self) -> usize {
        self.series_analyzed
    }

    /// Distinct combinations in the window.
    pub fn len(&self) -> usize {
        self.signatures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.signatures.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn combo(start: u8) -> Combination {
        Combination::new(&(start..start + 14).collect::<Vec<_>>()).unwrap()
    }

    fn series(series_id: SeriesId, combinations: Vec<Combination>) -> HistoricalSeries {
        HistoricalSeries {
            series_id,
            drawn_on: None,
            combinations,
        }
    }

    #[test]
    fn bounds_clamp_at_one() {
        assert_eq!(SignatureWindow::bounds(1, 151), (1, 0));
        assert_eq!(SignatureWindow::bounds(100, 151), (1, 99));
        assert_eq!(SignatureWindow::bounds(200, 151), (49, 199));
    }

    #[test]
    fn only_series_inside_window_are_indexed() {
        let history = vec![
            series(1, vec![combo(1)]),
            series(2, vec![combo(2)]),
            series(3, vec![combo(3)]),
        ];
        let window = SignatureWindow::build(&history, 4, 2);
        assert_eq!((window.start(), window.end()), (2, 3));
        assert_eq!(window.series_analyzed(), 2);
        assert!(window.is_unique(&combo(1)));
        assert!(window.contains(&combo(2)));
        assert!(window.contains(&combo(3)));
    }

    #[test]
    fn repeated_combinations_count_once() {
        let history = vec![series(1, vec![combo(5), combo(5)]), series(2, vec![combo(5)])];
        let window = SignatureWindow::build(&history, 3, 151);
        assert_eq!(window.len(), 1);
        assert_eq!(window.series_analyzed(), 2);
    }
}
