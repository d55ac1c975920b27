use super::*;

#[test]
fn test_band_boundaries_are_inclusive_lower() {
    let t = CategoryThresholds::standard_v1();
    assert_eq!(Category::from_score(8.0, &t), Category::SangatBaik);
    assert_eq!(Category::from_score(7.99, &t), Category::Baik);
    assert_eq!(Category::from_score(6.0, &t), Category::Baik);
    assert_eq!(Category::from_score(5.99, &t), Category::Sedang);
    assert_eq!(Category::from_score(4.0, &t), Category::Sedang);
    assert_eq!(Category::from_score(3.99, &t), Category::Busuk);
    assert_eq!(Category::from_score(0.0, &t), Category::Busuk);
    assert_eq!(Category::from_score(9.0, &t), Category::SangatBaik);
}

#[test]
fn test_partition_has_no_gaps() {
    let t = CategoryThresholds::standard_v1();
    let mut prev = Category::Busuk;
    let rank = |c: Category| category_order().iter().position(|&x| x == c).unwrap();
    for step in 0..=900 {
        let s = step as f64 / 100.0;
        let c = Category::from_score(s, &t);
        assert_ne!(c, Category::Invalid);
        assert!(rank(c) <= rank(prev));
        prev = c;
    }
}

#[test]
fn test_names_roundtrip_and_serde() {
    for &c in category_order() {
        assert_eq!(Category::from_name(c.name()), Some(c));
    }
    let json = serde_json::to_string(&Category::SangatBaik).unwrap();
    assert_eq!(json, "\"Sangat Baik\"");
    assert_eq!(Category::Busuk.to_string(), "Busuk");
}
