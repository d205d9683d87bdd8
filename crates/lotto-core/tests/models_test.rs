use lotto_core::constants::COMBINATION_SPACE;
use lotto_core::errors::CombinationError;
use lotto_core::models::*;

fn range(lo: u8, hi: u8) -> Combination {
    Combination::new(&(lo..=hi).collect::<Vec<_>>()).unwrap()
}

#[test]
fn combination_space_is_25_choose_14() {
    let mut c: u64 = 1;
    for i in 0..14u64 {
        c = c * (25 - i) / (i + 1);
    }
    assert_eq!(c, COMBINATION_SPACE);
}

#[test]
fn low_and_high_blocks_overlap_in_three_numbers() {
    let prediction = range(1, 14);
    let event = range(12, 25);
    assert_eq!(prediction.intersection_count(&event), 3);
    let shared: Vec<u8> = prediction.iter().filter(|n| event.contains(*n)).collect();
    assert_eq!(shared, vec![12, 13, 14]);
}

#[test]
fn signature_is_order_independent() {
    let a = Combination::new(&[25, 1, 3, 5, 7, 9, 11, 13, 15, 17, 19, 21, 23, 2]).unwrap();
    let b = Combination::new(&[1, 2, 3, 5, 7, 9, 11, 13, 15, 17, 19, 21, 23, 25]).unwrap();
    assert_eq!(a, b);
    assert_eq!(a.signature(), "1,2,3,5,7,9,11,13,15,17,19,21,23,25");
    assert_eq!(a.mask(), b.mask());
}

#[test]
fn invalid_shapes_are_rejected() {
    assert_eq!(
        Combination::new(&[1, 2, 3]),
        Err(CombinationError::WrongLength {
            expected: 14,
            actual: 3
        })
    );
    let mut numbers: Vec<u8> = (1..=13).collect();
    numbers.push(0);
    assert_eq!(
        Combination::new(&numbers),
        Err(CombinationError::OutOfRange { number: 0 })
    );
    let mut numbers: Vec<u8> = (1..=13).collect();
    numbers.push(13);
    assert_eq!(
        Combination::new(&numbers),
        Err(CombinationError::Duplicate { number: 13 })
    );
}

#[test]
fn historical_series_deserializes_with_and_without_date() {
    let json = r#"{
        "series_id": 7,
        "drawn_on": "2025-03-01",
        "combinations": [[14,13,12,11,10,9,8,7,6,5,4,3,2,1]]
    }"#;
    let series: HistoricalSeries = serde_json::from_str(json).unwrap();
    assert_eq!(series.series_id, 7);
    assert!(series.drawn_on.is_some());
    assert_eq!(series.combinations[0], range(1, 14));

    let json = r#"{"series_id": 8, "combinations": []}"#;
    let series: HistoricalSeries = serde_json::from_str(json).unwrap();
    assert_eq!(series.drawn_on, None);
    assert!(SeriesPattern::from(series).is_empty());
}

#[test]
fn invalid_combination_fails_deserialization() {
    let json = r#"{"series_id": 1, "combinations": [[1,2,3]]}"#;
    assert!(serde_json::from_str::<HistoricalSeries>(json).is_err());
}

#[test]
fn pattern_kinds_serialize_snake_case() {
    let json = serde_json::to_string(&PatternKind::TripletAffinity).unwrap();
    assert_eq!(json, "\"triplet_affinity\"");
    assert_eq!(PatternKind::SumRange.to_string(), "sum_range");
}

#[test]
fn breakdown_total_sums_every_term() {
    let breakdown = ScoreBreakdown {
        frequency: 14.0,
        consecutive: 2.0,
        sum_range: 1.5,
        distribution: 1.2,
        balanced_range: 0.5,
        low_cluster: 0.25,
        pair_affinity: 3.0,
        triplet_affinity: 4.0,
        critical: 10.0,
    };
    assert!((breakdown.total() - 36.45).abs() < 1e-9);
}
