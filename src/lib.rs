//! # numkit
//!
//! Strided vector kernels, streaming accumulators, special functions and
//! distribution factories for `f32`/`f64` numerics.
//!
//! This crate re-exports the workspace crates:
//!
//! | Module | Crate | Contents |
//! |---|---|---|
//! | [`core`] | `numkit-core` | errors, polynomial evaluation, float bit helpers, strided views |
//! | [`blas`] | `numkit-blas` | BLAS level 1 kernels over strided real and complex vectors |
//! | [`incr`] | `numkit-incr` | incremental sum, product, mean, variance, covariance, moving-window covariance |
//! | [`special`] | `numkit-special` | erf family, gamma family, Fresnel integrals, trig helpers |
//! | [`dists`] | `numkit-dists` | exponential, gamma, chi-square and normal evaluators |
//!
//! ## Quick start
//!
//! ```rust
//! use numkit::dists;
//! use numkit::prelude::*;
//!
//! let x = [1.0f32, 2.0, 3.0, 4.0, 5.0];
//! let mut y = [1.0f32; 5];
//! saxpy(5, 2.0, &x, 1, &mut y, 1);
//! assert_eq!(y, [3.0, 5.0, 7.0, 9.0, 11.0]);
//!
//! let mut prod = incrprod();
//! prod.update(5e300);
//! assert_eq!(prod.update(1e300), f64::INFINITY);
//! assert!(prod.update(2e-302).is_finite());
//!
//! let mut sum = incrsum();
//! sum.update(1e308);
//! assert_eq!(sum.update(1e308), f64::INFINITY);
//! assert_eq!(sum.update(-1e308), 1e308);
//!
//! assert_eq!(fresnel(0.0), [0.0, 0.0]);
//! assert_eq!(fresnel(f64::INFINITY), [0.5, 0.5]);
//! assert_eq!(wrap(13.0, 0.0, 5.0), 3.0);
//! assert!(wrap(1.0, 5.0, 0.0).is_nan());
//!
//! assert!(acot(f64::INFINITY) == 0.0 && acot(f64::INFINITY).is_sign_positive());
//! assert!(acot(f64::NEG_INFINITY) == 0.0 && acot(f64::NEG_INFINITY).is_sign_negative());
//!
//! // Invalid parameters give a NaN evaluator; the strict constructor errors
//! assert!(dists::exponential::cdf(1.0, -1.0).is_nan());
//! assert!(Exponential::new(-1.0).is_err());
//! ```
//!
//! ## Features
//!
//! - `unroll` (default): unrolled loops for contiguous BLAS inputs
//! - `serde`: serialization of accumulators, options and evaluators

pub use numkit_blas as blas;
pub use numkit_core as core;
pub use numkit_dists as dists;
pub use numkit_incr as incr;
pub use numkit_special as special;

pub use numkit_core::{Error, Result};

/// Commonly used items from every workspace crate
pub mod prelude {
    pub use numkit_core::{evalpoly, evalrational, stride2offset, Error, Real, Result, StridedView, StridedViewMut};

    pub use numkit_blas::{
        dasum, daxpy, dcopy, ddot, dfill, dnrm2, drev, drot, drotg, dscal, dswap, idamax, isamax, sasum, saxpy,
        scopy, sdot, sfill, snrm2, srev, srot, srotg, sscal, sswap, Complex32, Complex64,
    };

    pub use numkit_incr::{
        incrcovariance, incrmcovariance, incrmean, incrmpcorr, incrpcorr, incrprod, incrstdev, incrsum,
        incrvariance, Accumulator, AccumulatorState, CovarianceOptions, VarianceOptions,
    };

    pub use numkit_special::{
        acot, acoth, acsc, asec, cospi, erf, erfc, erfcinv, erfinv, fresnel, fresnelc, fresnels, gamma, gammainc,
        gammaincinv, gammaln, sinpi, wrap, GammaincOptions,
    };

    pub use numkit_dists::{ChiSquare, Exponential, Gamma, Moments, Normal, UnivariateFunction};
}
