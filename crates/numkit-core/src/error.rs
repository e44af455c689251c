//! Error types for numkit
//!
//! Kernels and evaluators never fail: they return NaN or leave buffers
//! untouched. This error type is used by the checked wrappers that validate
//! strided views and by the strict distribution constructors.

use thiserror::Error;

/// Core error type for numkit operations
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid parameter provided to a function
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Invalid input data
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A strided view would touch an element outside its buffer
    #[error("Index out of bounds: index {index} for buffer of length {len}")]
    OutOfBounds { index: isize, len: usize },

    /// Other errors
    #[error("Other error: {0}")]
    Other(#[from] anyhow::Error),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create an error for a parameter violating its constraint
    pub fn invalid_parameter(name: &str, value: f64, constraint: &str) -> Self {
        Self::InvalidParameter(format!("{name} = {value} must satisfy {constraint}"))
    }

    /// Create an error for an index outside `[0, len)`
    pub fn out_of_bounds(index: isize, len: usize) -> Self {
        Self::OutOfBounds { index, len }
    }

    /// Create an error for size mismatch
    pub fn size_mismatch(expected: usize, actual: usize, context: &str) -> Self {
        Self::InvalidInput(format!(
            "Size mismatch in {context}: expected {expected}, got {actual}"
        ))
    }

    /// Create an error for a zero stride on a view with more than one element
    pub fn zero_stride(len: usize) -> Self {
        Self::InvalidInput(format!("stride must be non-zero for a view of {len} elements"))
    }
}
