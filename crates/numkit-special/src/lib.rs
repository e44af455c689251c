//! Special-function evaluators
//!
//! Every evaluator is a plain `fn(f64) -> f64` (or a small tuple of
//! arguments) that never fails: arguments outside the domain return NaN and
//! IEEE-754 limits are reproduced exactly. Most functions split the domain
//! by magnitude and evaluate a fixed minimax rational approximation per range
//! with Horner's rule ([`numkit_core::math`]).
//!
//! | Function | Method |
//! |----------|--------|
//! | [`erf`], [`erfc`] | FreeBSD minimax tables |
//! | [`erfinv`], [`erfcinv`] | Boost rational tables |
//! | [`gammaln`], [`gamma`] | Sun `lgamma` tables, reflection for `x < 0` |
//! | [`gammainc`] | series / continued fraction |
//! | [`gammaincinv`] | Wilson-Hilferty start, Halley refinement |
//! | [`fresnel`] | series / complex continued fraction / asymptotic |
//! | [`sinpi`], [`cospi`] | exact argument reduction |
//! | [`acot`], [`acoth`], [`asec`], [`acsc`] | reciprocal identities |
//! | [`wrap`] | range reduction into `[min, max)` |
//!
//! # Example
//!
//! ```rust
//! use numkit_special::{fresnel_into, gammainc, gammaincinv, GammaincOptions};
//!
//! let p = gammainc(3.0, 2.0, GammaincOptions::default());
//! let x = gammaincinv(p, 2.0, false);
//! assert!((x - 3.0).abs() < 1e-12);
//!
//! let mut out = [0.0; 2];
//! let [s, c] = *fresnel_into(&mut out, -1.0);
//! assert!(s < 0.0 && c < 0.0);
//! ```

pub mod erf;
pub mod erfinv;
pub mod fresnel;
pub mod gammainc;
pub mod gammaincinv;
pub mod gammaln;
pub mod trig;
pub mod wrap;

pub use erf::{erf, erfc};
pub use erfinv::{erfcinv, erfinv};
pub use fresnel::{fresnel, fresnel_into, fresnelc, fresnels};
pub use gammainc::{gammainc, GammaincOptions};
pub use gammaincinv::gammaincinv;
pub use gammaln::{gamma, gammaln};
pub use trig::{acot, acoth, acsc, asec, cospi, sinpi};
pub use wrap::wrap;
