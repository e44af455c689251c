//! Shared utilities for integration tests

#![allow(dead_code)]

pub use approx::assert_relative_eq;

/// Lengths around the unroll factors (3, 4, 5, 6, 8) and their remainders
pub fn edge_case_lengths() -> Vec<usize> {
    vec![0, 1, 2, 3, 4, 5, 7, 8, 9, 15, 16, 17, 31, 32, 63, 64, 100, 127, 128]
}

/// Strides exercised by parity tests, including reverse traversal
pub fn edge_case_strides() -> Vec<isize> {
    vec![1, 2, 3, -1, -2, -3]
}

/// Buffer length needed to hold `n` elements at `stride`
pub fn buffer_len(n: usize, stride: isize) -> usize {
    if n == 0 {
        0
    } else {
        (n - 1) * stride.unsigned_abs() + 1
    }
}
