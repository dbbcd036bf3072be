// File: crates/histogram-core/tests/support/mod.rs
// Purpose: Shared fixtures for integration tests (fixed clock instant, sample builders).

#![allow(dead_code)]

use chrono::{NaiveDate, NaiveDateTime};

/// 2024-03-10 14:30:00, the instant every deterministic test renders at.
pub fn afternoon() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 3, 10).unwrap().and_hms_opt(14, 30, 0).unwrap()
}

/// Index 0 = 5, remaining 47 buckets = 3.
pub fn five_then_threes() -> Vec<f64> {
    let mut v = vec![3.0; 48];
    v[0] = 5.0;
    v
}

/// A gently varying day/night curve.
pub fn wave() -> Vec<f64> {
    (0..48).map(|i| ((i as f64) * 0.3).sin().abs() * 10.0 + 1.0).collect()
}

pub fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-3
}
