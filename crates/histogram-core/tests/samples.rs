// File: crates/histogram-core/tests/samples.rs
// Purpose: Validate sample sequence invariants (length, finiteness, sign).

use histogram_core::{ChartError, Samples, BUCKETS};

fn invalid(values: Vec<f64>) -> bool {
    matches!(Samples::try_new(values), Err(ChartError::InvalidInput(_)))
}

#[test]
fn accepts_exactly_48_non_negative_values() {
    let s = Samples::try_new(vec![1.5; BUCKETS]).expect("valid samples");
    assert_eq!(s.len(), 48);
    assert_eq!(s.max(), 1.5);
    assert_eq!(s.get(47), Some(1.5));
    assert_eq!(s.get(48), None);
}

#[test]
fn rejects_empty_and_single_element() {
    assert!(invalid(vec![]));
    assert!(invalid(vec![4.0]));
}

#[test]
fn rejects_wrong_lengths() {
    assert!(invalid(vec![1.0; 47]));
    assert!(invalid(vec![1.0; 49]));
}

#[test]
fn rejects_negative_and_non_finite() {
    let mut v = vec![1.0; 48];
    v[3] = -0.5;
    assert!(invalid(v));

    let mut v = vec![1.0; 48];
    v[10] = f64::NAN;
    assert!(invalid(v));

    let mut v = vec![1.0; 48];
    v[47] = f64::INFINITY;
    assert!(invalid(v));
}

#[test]
fn all_zero_max_is_zero() {
    let s = Samples::try_from(&[0.0; 48][..]).unwrap();
    assert_eq!(s.max(), 0.0);
    assert_eq!(s, Samples::zeros());
}
