//! Shared utilities for integration tests

#![allow(dead_code)]

/// Grid of `count` points spanning `[lo, hi]`
pub fn linspace(lo: f64, hi: f64, count: usize) -> Vec<f64> {
    let step = (hi - lo) / (count - 1) as f64;
    (0..count).map(|i| lo + step * i as f64).collect()
}

/// Grid of `count` points spanning `[10^lo, 10^hi]` logarithmically
pub fn logspace(lo: f64, hi: f64, count: usize) -> Vec<f64> {
    linspace(lo, hi, count).into_iter().map(|e| 10f64.powf(e)).collect()
}

/// Assert `|actual - expected| <= tol * max(|expected|, floor)`
pub fn assert_close(actual: f64, expected: f64, tol: f64, floor: f64, context: &str) {
    let scale = expected.abs().max(floor);
    assert!(
        (actual - expected).abs() <= tol * scale,
        "{context}: got {actual:e}, expected {expected:e} (tolerance {tol:e})"
    );
}
