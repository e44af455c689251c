//! Shared utilities for the distribution integration tests

#![allow(dead_code)]

/// Grid of `count` points spanning `[lo, hi]`
pub fn linspace(lo: f64, hi: f64, count: usize) -> Vec<f64> {
    let step = (hi - lo) / (count - 1) as f64;
    (0..count).map(|i| lo + step * i as f64).collect()
}

/// Interior probabilities, avoiding the saturated endpoints
pub fn probabilities() -> Vec<f64> {
    vec![1e-6, 1e-3, 0.01, 0.1, 0.25, 0.5, 0.75, 0.9, 0.99, 0.999]
}

/// Assert `|actual - expected| <= tol * max(|expected|, floor)`
pub fn assert_close(actual: f64, expected: f64, tol: f64, floor: f64, context: &str) {
    let scale = expected.abs().max(floor);
    assert!(
        (actual - expected).abs() <= tol * scale,
        "{context}: got {actual:e}, expected {expected:e} (tolerance {tol:e})"
    );
}

/// Route library logs to the test harness; `RUST_LOG=numkit_dists=debug`
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
