//! Real-valued element types for the generic kernels
//!
//! Kernels are written once over [`Real`] and exposed under their
//! precision-prefixed names (`s*` for `f32`, `d*` for `f64`).
//!
//! # Design Philosophy
//!
//! - **Pure type constraints**: `Real` only ties `num_traits::Float` to the
//!   `bytemuck::Pod` layout guarantee needed for interleaved complex views
//! - **No computational layer**: arithmetic comes from `Float`

use bytemuck::Pod;
use num_traits::Float;
use std::fmt::Debug;

/// Floating-point element type usable in strided kernels
pub trait Real: Float + Pod + Default + Debug + Send + Sync + 'static {}

impl Real for f64 {}

impl Real for f32 {}
