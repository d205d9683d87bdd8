use std::collections::HashSet;

use lotto_core::models::Combination;
use lotto_uniqueness::SignatureWindow;
use proptest::prelude::*;
use proptest::sample::subsequence;
use test_fixtures::series;

fn arb_combination() -> impl Strategy<Value = Combination> {
    subsequence((1u8..=25).collect::<Vec<_>>(), 14)
        .prop_shuffle()
        .prop_map(|numbers| Combination::new(&numbers).unwrap())
}

proptest! {
    #[test]
    fn filter_preserves_order_and_drops_exactly_collisions(
        drawn in prop::collection::vec(arb_combination(), 0..10),
        candidates in prop::collection::vec(arb_combination(), 0..20),
        extra in prop::collection::vec(0usize..10, 0..5),
    ) {
        // Mix some drawn combinations into the candidates.
        let mut candidates = candidates;
        for i in extra {
            if let Some(c) = drawn.get(i) {
                candidates.push(*c);
            }
        }
        let window = SignatureWindow::build(&[series(1, drawn.clone())], 2, 151);
        let kept = window.filter_unique(&candidates);

        let drawn_set: HashSet<Combination> = drawn.iter().copied().collect();
        let expected: Vec<Combination> = candidates
            .iter()
            .filter(|c| !drawn_set.contains(c))
            .copied()
            .collect();
        prop_assert_eq!(kept, expected);
    }

    #[test]
    fn unique_iff_absent_from_window(
        drawn in prop::collection::vec(arb_combination(), 1..10),
        probe in arb_combination(),
    ) {
        let window = SignatureWindow::build(&[series(3, drawn.clone())], 4, 151);
        prop_assert_eq!(window.is_unique(&probe), !drawn.contains(&probe));
        for c in &drawn {
            prop_assert!(window.contains(c));
        }
    }

    #[test]
    fn window_bounds_stay_in_range(target in 1u32..10_000, lookback in 1u32..500) {
        let (start, end) = SignatureWindow::bounds(target, lookback);
        prop_assert!(start >= 1);
        prop_assert_eq!(end, target - 1);
        prop_assert!(target - start <= lookback);
    }

    #[test]
    fn first_series_window_is_empty(lookback in 1u32..1_000) {
        let window = SignatureWindow::build(&[], 1, lookback);
        prop_assert_eq!(window.start(), 1);
        prop_assert_eq!(window.series_analyzed(), 0);
        prop_assert!(window.is_empty());
    }
}
