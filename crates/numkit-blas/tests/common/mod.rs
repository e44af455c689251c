//! Shared utilities for integration tests

#![allow(dead_code)]

pub use approx::assert_relative_eq;

/// Sentinel written into buffer slots a strided view never visits
pub const UNTOUCHED: f64 = -777.0;

/// Lengths straddling every unroll factor (3, 4, 5, 6, 8) and its remainder
pub fn edge_case_lengths() -> Vec<usize> {
    vec![
        0,   // Empty
        1,   // Single element
        2,   // Below every unroll factor
        3,   // swap block
        4,   // axpy block
        5,   // scal/dot block
        7,   // One short of copy/fill block
        8,   // copy/fill block
        9,   // Block + 1
        15,  // Remainders for every factor
        16,  // Power of 2
        17,  // Power of 2 + 1
        31,  // Prime
        32,  // Power of 2
        63,  // Almost 64
        64,  // Power of 2
        100, // Round number
        127, // Mersenne prime
        128, // Power of 2
    ]
}

/// Generate test data with specific patterns
pub fn generate_test_data(len: usize) -> Vec<f64> {
    (0..len).map(|i| i as f64 + 0.1).collect()
}

/// Generate complementary test data for binary operations
pub fn generate_test_data_complement(len: usize) -> Vec<f64> {
    (0..len).map(|i| (len - i) as f64 + 0.2).collect()
}

/// Lay out `values` as a strided view with the default offset, padding with [`UNTOUCHED`]
pub fn spread(values: &[f64], stride: isize) -> Vec<f64> {
    let n = values.len();
    if n == 0 {
        return Vec::new();
    }
    let step = stride.unsigned_abs();
    let mut buf = vec![UNTOUCHED; (n - 1) * step + 1];
    let offset = numkit_core::stride2offset(n, stride) as isize;
    for (i, &v) in values.iter().enumerate() {
        buf[(offset + i as isize * stride) as usize] = v;
    }
    buf
}

/// Read the logical elements of a default-offset strided view back out
pub fn gather(buf: &[f64], n: usize, stride: isize) -> Vec<f64> {
    let offset = numkit_core::stride2offset(n, stride) as isize;
    (0..n)
        .map(|i| buf[(offset + i as isize * stride) as usize])
        .collect()
}

/// Assert two vectors are bitwise equal (NaN-aware)
pub fn assert_bitwise_equal(actual: &[f64], expected: &[f64], context: &str) {
    assert_eq!(actual.len(), expected.len(), "length mismatch for {context}");
    for (i, (a, e)) in actual.iter().zip(expected).enumerate() {
        assert_eq!(a.to_bits(), e.to_bits(), "{context}: index {i}: {a} != {e}");
    }
}
