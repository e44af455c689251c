//! Core types for the numkit numeric-kernel workspace
//!
//! This crate holds what every kernel family shares:
//!
//! - [`Real`]: the element trait the strided kernels are generic over
//! - [`math`]: Horner polynomial and rational evaluation for coefficient tables
//! - [`float`]: `frexp`/`ldexp` and other IEEE-754 bit helpers
//! - [`strided`]: offset conventions and bounds-checked strided views
//! - [`Error`]: the error type of the checked wrappers and strict constructors
//!
//! # Example
//!
//! ```rust
//! use numkit_core::{stride2offset, StridedView};
//!
//! let data = [1.0, 2.0, 3.0, 4.0];
//! let view = StridedView::from_stride(&data, 2, -2).unwrap();
//! assert_eq!(view.offset(), stride2offset(2, -2));
//! assert_eq!(view.iter().copied().collect::<Vec<_>>(), vec![3.0, 1.0]);
//! ```

pub mod error;
pub mod float;
pub mod math;
pub mod numeric;
pub mod strided;

pub use error::{Error, Result};
pub use math::{evalpoly, evalrational};
pub use numeric::Real;
pub use strided::{check_bounds, stride2offset, StridedIndices, StridedView, StridedViewMut};
