//! Overflow-safe running product
//!
//! The product is held as a mantissa in `[0.5, 1)` and a wide binary
//! exponent. Multiplying two mantissas can neither overflow nor underflow,
//! so an intermediate product far outside the `f64` range is tracked
//! exactly and reported as `±inf`/`±0` only when read out.

use crate::traits::{log_poisoned, report, Accumulator, AccumulatorState};
use numkit_core::float::{frexp, ldexp};

/// Running product with a split mantissa/exponent representation
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IncrProd {
    mantissa: f64,
    exponent: i64,
    count: u64,
    state: AccumulatorState,
}

impl Default for IncrProd {
    fn default() -> Self {
        Self {
            mantissa: 1.0,
            exponent: 0,
            count: 0,
            state: AccumulatorState::Empty,
        }
    }
}

impl IncrProd {
    pub fn new() -> Self {
        Self::default()
    }

    fn current(&self) -> f64 {
        let exp = self.exponent.clamp(i32::MIN as i64, i32::MAX as i64) as i32;
        ldexp(self.mantissa, exp)
    }

    fn poison(&mut self) -> f64 {
        self.state = AccumulatorState::Poisoned;
        log_poisoned("incrprod", self.count);
        f64::NAN
    }
}

impl Accumulator for IncrProd {
    type Input = f64;
    type Output = f64;

    fn update(&mut self, x: f64) -> f64 {
        if self.state == AccumulatorState::Poisoned {
            return f64::NAN;
        }
        if x.is_nan() {
            return self.poison();
        }
        let (fm, fe) = frexp(x);
        let product = self.mantissa * fm;
        // 0 * inf
        if product.is_nan() {
            return self.poison();
        }
        let (m, me) = frexp(product);
        self.mantissa = m;
        self.exponent += i64::from(fe) + i64::from(me);
        self.count += 1;
        self.state = AccumulatorState::Active;
        self.current()
    }

    fn value(&self) -> Option<f64> {
        report(self.state, || self.current())
    }

    fn state(&self) -> AccumulatorState {
        self.state
    }

    fn count(&self) -> u64 {
        self.count
    }
}
