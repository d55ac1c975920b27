use super::*;
use crate::model::identity::{FixedClock, SequentialIds};
use crate::test_support::{fixed_time, full, rec};

fn with_scorer<T>(f: impl FnOnce(&Scorer<'_>) -> T) -> T {
    let clock = FixedClock(fixed_time());
    let ids = SequentialIds::new("t");
    let scorer = Scorer::new(&clock, &ids, CategoryThresholds::standard_v1());
    f(&scorer)
}

#[test]
fn test_all_nines_sangat_baik() {
    let s = with_scorer(|sc| sc.score(full([9, 9, 9, 9, 9, 9])));
    assert_eq!(s.score(), 9.0);
    assert_eq!(s.category(), Category::SangatBaik);
}

#[test]
fn test_partial_record_busuk() {
    let s = with_scorer(|sc| sc.score(rec(Some(3), Some(3), None, None, None, None)));
    assert_eq!(s.score(), 3.0);
    assert_eq!(s.category(), Category::Busuk);
}

#[test]
fn test_empty_record_is_invalid_sentinel() {
    let s = with_scorer(|sc| sc.score(ParameterRecord::default()));
    assert_eq!(s.score(), 0.0);
    assert_eq!(s.category(), Category::Invalid);
    assert!(!s.is_valid());
}

#[test]
fn test_mean_rounded_to_two_decimals() {
    let (score, category) = compute_score(
        &full([9, 7, 7, 6, 5, 4]),
        &CategoryThresholds::standard_v1(),
    );
    assert_eq!(score, 6.33);
    assert_eq!(category, Category::Baik);

    let (score, _) = compute_score(
        &rec(Some(8), Some(7), Some(7), None, None, None),
        &CategoryThresholds::standard_v1(),
    );
    assert_eq!(score, 7.33);
}

#[test]
fn test_mean_matches_sum_over_count() {
    let t = CategoryThresholds::standard_v1();
    let cases = [
        rec(Some(1), None, None, None, None, None),
        rec(Some(2), Some(9), None, None, None, None),
        rec(None, Some(5), Some(6), Some(8), None, None),
        rec(Some(7), Some(8), Some(9), Some(1), Some(2), None),
        full([1, 2, 3, 5, 7, 9]),
    ];
    for r in cases {
        let present = r.present();
        let sum: i32 = present.iter().map(|&(_, v)| v).sum();
        let expected = round2(sum as f64 / present.len() as f64);
        assert_eq!(compute_score(&r, &t).0, expected);
    }
}

#[test]
fn test_out_of_range_values_are_averaged() {
    let (score, category) = compute_score(
        &rec(Some(-3), Some(9), None, None, None, None),
        &CategoryThresholds::standard_v1(),
    );
    assert_eq!(score, 3.0);
    assert_eq!(category, Category::Busuk);
}

#[test]
fn test_identity_and_timestamp_injected() {
    let (a, b) = with_scorer(|sc| (sc.score(full([5; 6])), sc.score(full([6; 6]))));
    assert_eq!(a.id(), "t-1");
    assert_eq!(b.id(), "t-2");
    assert_eq!(a.timestamp(), fixed_time());
    assert_eq!(a.params(), &full([5; 6]));
}

#[test]
fn test_notes_pass_through() {
    let s = with_scorer(|sc| {
        sc.score_named(
            full([8; 6]),
            SampleNotes {
                fish_name: Some("Tongkol".to_string()),
                ai_response: Some("mata jernih, insang merah".to_string()),
                extra: BTreeMap::new(),
            },
        )
    });
    assert_eq!(s.fish_name(), Some("Tongkol"));
    assert_eq!(s.ai_response(), Some("mata jernih, insang merah"));
}

#[test]
fn test_strict_policy_rejects_excluded_and_out_of_range() {
    with_scorer(|sc| {
        let err = sc
            .score_checked(full([9, 4, 9, 9, 9, 9]), SampleNotes::default(), ValidationPolicy::Strict)
            .unwrap_err();
        assert_eq!(
            err,
            ValidationError::ExcludedValue {
                parameter: crate::model::params::Parameter::Gills
            }
        );

        let err = sc
            .score_checked(
                rec(Some(10), None, None, None, None, None),
                SampleNotes::default(),
                ValidationPolicy::Strict,
            )
            .unwrap_err();
        assert!(matches!(err, ValidationError::OutOfRange { value: 10, .. }));

        let ok = sc
            .score_checked(full([9, 4, 9, 9, 9, 9]), SampleNotes::default(), ValidationPolicy::Permissive)
            .unwrap();
        assert_eq!(ok.score(), 8.17);
    });
}

#[test]
fn test_empty_notes_become_absent() {
    let s = with_scorer(|sc| {
        sc.score_named(
            full([6; 6]),
            SampleNotes {
                fish_name: Some(String::new()),
                ai_response: Some(String::new()),
                extra: BTreeMap::new(),
            },
        )
    });
    assert_eq!(s.fish_name(), None);
    assert_eq!(s.ai_response(), None);
}
