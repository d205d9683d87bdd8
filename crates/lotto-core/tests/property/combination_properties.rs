use lotto_core::models::Combination;
use proptest::prelude::*;
use proptest::sample::subsequence;

fn arb_numbers() -> impl Strategy<Value = Vec<u8>> {
    subsequence((1u8..=25).collect::<Vec<_>>(), 14).prop_shuffle()
}

proptest! {
    #[test]
    fn construction_sorts_and_keeps_members(numbers in arb_numbers()) {
        let combination = Combination::new(&numbers).unwrap();
        prop_assert!(combination.numbers().windows(2).all(|w| w[0] < w[1]));
        for n in &numbers {
            prop_assert!(combination.contains(*n));
        }
        prop_assert_eq!(combination.mask().count_ones(), 14);
    }

    #[test]
    fn mask_identifies_the_combination(numbers in arb_numbers()) {
        let combination = Combination::new(&numbers).unwrap();
        prop_assert_eq!(Combination::from_mask(combination.mask()).unwrap(), combination);
    }

    #[test]
    fn signature_matches_sorted_text(numbers in arb_numbers()) {
        let mut sorted = numbers.clone();
        sorted.sort_unstable();
        let expected = sorted.iter().map(|n| n.to_string()).collect::<Vec<_>>().join(",");
        prop_assert_eq!(Combination::new(&numbers).unwrap().signature(), expected);
    }

    #[test]
    fn overlap_is_symmetric(a in arb_numbers(), b in arb_numbers()) {
        let a = Combination::new(&a).unwrap();
        let b = Combination::new(&b).unwrap();
        prop_assert_eq!(a.intersection_count(&b), b.intersection_count(&a));
        // Two 14-subsets of 25 share at least 3 numbers.
        prop_assert!(a.intersection_count(&b) >= 3);
    }

    #[test]
    fn wrong_lengths_are_rejected(len in 0usize..25) {
        prop_assume!(len != 14);
        let numbers: Vec<u8> = (1..=len as u8).collect();
        prop_assert!(Combination::new(&numbers).is_err());
    }
}
