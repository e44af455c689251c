//! Distribution function factories
//!
//! Every distribution module exposes, per statistical function, a small
//! immutable evaluator struct built once from the parameters:
//!
//! ```rust
//! use numkit_dists::{exponential, UnivariateFunction};
//!
//! let cdf = exponential::Cdf::factory(0.5);
//! assert_eq!(cdf.eval(0.0), 0.0);
//! assert_eq!(cdf.eval(f64::INFINITY), 1.0);
//!
//! // Free function form, same result
//! assert_eq!(exponential::cdf(2.0, 0.5), cdf.eval(2.0));
//!
//! // Invalid parameters never fail; the evaluator returns NaN instead
//! assert!(exponential::Cdf::factory(-1.0).eval(2.0).is_nan());
//! ```
//!
//! Callers who prefer errors over NaN use the strict constructors, which also
//! expose the moments through [`Moments`]:
//!
//! ```rust
//! use numkit_dists::{gamma::Gamma, Moments};
//!
//! let g = Gamma::new(2.0, 4.0)?;
//! assert_eq!(g.mean(), 0.5);
//! assert!(Gamma::new(0.0, 1.0).is_err());
//! # Ok::<(), numkit_core::Error>(())
//! ```
//!
//! Boundary conventions shared by all distributions: the pdf is exactly `0`
//! outside the support, the cdf saturates to `0`/`1` at `∓∞`, the quantile
//! of `p ∉ [0, 1]` is NaN and the mgf outside its domain of existence is NaN.

/// Define an evaluator struct, its `factory`, its `UnivariateFunction` impl
/// and the matching free function, from a validated parameter type and a
/// private `fn(&Params, f64) -> f64`.
macro_rules! univariate_function {
    (
        $(#[$meta:meta])*
        $name:ident, $free:ident, $params:ty, ($($arg:ident),+), $eval:path
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        pub struct $name {
            params: Option<$params>,
        }

        impl $name {
            /// Validate the parameters once; invalid parameters yield an
            /// evaluator that returns NaN for every argument
            pub fn factory($($arg: f64),+) -> Self {
                let params = <$params>::new($($arg),+);
                if params.is_none() {
                    tracing::debug!(
                        module = module_path!(),
                        function = stringify!($free),
                        $($arg,)+
                        "invalid parameters, falling back to the NaN evaluator"
                    );
                }
                Self { params }
            }

            /// `false` when the factory received invalid parameters
            pub fn is_valid(&self) -> bool {
                self.params.is_some()
            }
        }

        impl $crate::UnivariateFunction for $name {
            #[inline]
            fn eval(&self, x: f64) -> f64 {
                match &self.params {
                    Some(params) => $eval(params, x),
                    None => f64::NAN,
                }
            }
        }

        $(#[$meta])*
        pub fn $free(x: f64, $($arg: f64),+) -> f64 {
            $crate::UnivariateFunction::eval(&$name::factory($($arg),+), x)
        }
    };
}

pub mod chisquare;
pub mod exponential;
pub mod gamma;
pub mod normal;
pub mod traits;

mod digamma;

pub use chisquare::ChiSquare;
pub use exponential::Exponential;
pub use gamma::Gamma;
pub use normal::Normal;
pub use traits::{Moments, UnivariateFunction};
