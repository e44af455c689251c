//! Incremental (streaming) accumulators
//!
//! Each accumulator owns a small private state, folds one datum per
//! [`Accumulator::update`] and can be read at any time with
//! [`Accumulator::value`]. The state machine is shared:
//!
//! - `Empty`: no data yet, `value()` is `None`
//! - `Active`: at least one datum, `value()` is the current statistic
//! - `Poisoned`: a NaN was seen, or the internal state turned NaN; every
//!   later `update` returns NaN and the state never recovers
//!
//! The moving-window accumulators ([`IncrMCovariance`], [`IncrMPcorr`]) are
//! the exception: a NaN makes the statistic NaN only while it is inside the
//! window.
//!
//! # Example
//!
//! ```rust
//! use numkit_incr::{incrcovariance, incrmcovariance, incrprod, Accumulator, CovarianceOptions};
//!
//! let mut cov = incrcovariance(CovarianceOptions::default());
//! cov.update((1.0, 2.0));
//! cov.update((2.0, 4.0));
//! assert_eq!(cov.value(), Some(1.0));
//!
//! let mut prod = incrprod();
//! prod.update(5e300);
//! assert_eq!(prod.update(1e300), f64::INFINITY);
//! assert!(prod.update(2e-302).is_finite());
//!
//! let mut moving = incrmcovariance(2, CovarianceOptions::default())?;
//! moving.update((1.0, 1.0));
//! moving.update((f64::NAN, 0.0));
//! assert!(moving.update((2.0, 2.0)).is_nan());
//! assert_eq!(moving.update((4.0, 6.0)), 4.0);
//! # Ok::<(), numkit_core::Error>(())
//! ```

pub mod covariance;
pub mod mean;
pub mod moving;
pub mod prod;
pub mod sum;
pub mod traits;
pub mod variance;
mod wide;

use numkit_core::Result;

pub use covariance::{CovarianceOptions, IncrCovariance, IncrPcorr};
pub use mean::IncrMean;
pub use moving::{IncrMCovariance, IncrMPcorr};
pub use prod::IncrProd;
pub use sum::IncrSum;
pub use traits::{Accumulator, AccumulatorState};
pub use variance::{IncrStdev, IncrVariance, VarianceOptions};

/// Compensated running sum
pub fn incrsum() -> IncrSum {
    IncrSum::new()
}

/// Overflow-safe running product
pub fn incrprod() -> IncrProd {
    IncrProd::new()
}

/// Running arithmetic mean
pub fn incrmean() -> IncrMean {
    IncrMean::new()
}

/// Running variance, unbiased unless a known mean is supplied
pub fn incrvariance(options: VarianceOptions) -> IncrVariance {
    IncrVariance::new(options)
}

/// Running standard deviation
pub fn incrstdev(options: VarianceOptions) -> IncrStdev {
    IncrStdev::new(options)
}

/// Running covariance of paired data
pub fn incrcovariance(options: CovarianceOptions) -> IncrCovariance {
    IncrCovariance::new(options)
}

/// Running Pearson correlation of paired data
pub fn incrpcorr(options: CovarianceOptions) -> IncrPcorr {
    IncrPcorr::new(options)
}

/// Covariance over a moving window of `window` pairs
pub fn incrmcovariance(window: usize, options: CovarianceOptions) -> Result<IncrMCovariance> {
    IncrMCovariance::new(window, options)
}

/// Pearson correlation over a moving window of `window` pairs
pub fn incrmpcorr(window: usize, options: CovarianceOptions) -> Result<IncrMPcorr> {
    IncrMPcorr::new(window, options)
}
