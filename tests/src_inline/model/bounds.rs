use super::*;

fn uniform_row(value: f64) -> [f64; FEATURE_COUNT] {
    [value; FEATURE_COUNT]
}

fn dataset(rows: Vec<[f64; FEATURE_COUNT]>) -> ReferenceDataset {
    let labels = vec![0u8; rows.len()];
    ReferenceDataset {
        rows: rows.into_iter().map(FeatureVector::new).collect(),
        labels,
    }
}

#[test]
fn test_min_maps_to_zero_and_max_to_one() {
    let data = dataset(vec![uniform_row(6.98), uniform_row(28.11)]);
    let bounds = BoundsTable::from_dataset(&data);

    let at_min = scale(&FeatureVector::new(uniform_row(6.98)), &bounds);
    let at_max = scale(&FeatureVector::new(uniform_row(28.11)), &bounds);
    for idx in 0..FEATURE_COUNT {
        assert_eq!(at_min.get(idx), 0.0);
        assert_eq!(at_max.get(idx), 1.0);
    }
}

#[test]
fn test_reference_mean_scenario() {
    // radius_mean with min=6.98, max=28.11, mean=14.13.
    let data = dataset(vec![uniform_row(6.98), uniform_row(28.11), uniform_row(7.3)]);
    let bounds = BoundsTable::from_dataset(&data);

    let idx = schema::feature_index("radius_mean").unwrap();
    let b = bounds.get(idx);
    assert!((b.mean - 14.13).abs() < 1e-9);

    let scaled = scale(&FeatureVector::new(uniform_row(14.13)), &bounds);
    assert!((scaled.get(idx) - 0.3385).abs() < 1e-3);
}

#[test]
fn test_degenerate_column_scales_to_zero() {
    let data = dataset(vec![uniform_row(5.0), uniform_row(5.0), uniform_row(5.0)]);
    let bounds = BoundsTable::from_dataset(&data);
    assert!(bounds.get(0).degenerate);

    let scaled = scale(&FeatureVector::new(uniform_row(7.0)), &bounds);
    for idx in 0..FEATURE_COUNT {
        assert_eq!(scaled.get(idx), 0.0);
    }
}

#[test]
fn test_no_clamping_outside_reference_range() {
    let data = dataset(vec![uniform_row(1.0), uniform_row(2.0)]);
    let bounds = BoundsTable::from_dataset(&data);

    let above = scale(&FeatureVector::new(uniform_row(3.0)), &bounds);
    let below = scale(&FeatureVector::new(uniform_row(0.0)), &bounds);
    assert_eq!(above.get(0), 2.0);
    assert_eq!(below.get(0), -1.0);
}

#[test]
fn test_scaling_is_deterministic() {
    let data = dataset(vec![uniform_row(1.0), uniform_row(4.0), uniform_row(2.5)]);
    let bounds = BoundsTable::from_dataset(&data);
    let input = FeatureVector::new(uniform_row(3.2));

    let a = scale(&input, &bounds);
    let b = scale(&input, &bounds);
    assert_eq!(a, b);
}

#[test]
fn test_bounds_per_feature_are_independent() {
    let mut low = uniform_row(0.0);
    let mut high = uniform_row(10.0);
    low[3] = 100.0;
    high[3] = 200.0;
    let data = dataset(vec![low, high]);
    let bounds = BoundsTable::from_dataset(&data);

    assert_eq!(bounds.get(0).min, 0.0);
    assert_eq!(bounds.get(0).max, 10.0);
    assert_eq!(bounds.get(3).min, 100.0);
    assert_eq!(bounds.get(3).max, 200.0);
    assert_eq!(bounds.get(3).mean, 150.0);
}
