//! Compensated running sum

use crate::traits::{log_poisoned, report, Accumulator, AccumulatorState};
use crate::wide::WideSum;

/// Running sum with Kahan-Babuska-Neumaier compensation
///
/// The sum is kept with a floating binary exponent: a partial sum beyond
/// `f64::MAX` reads as `±inf` and becomes finite again once later data bring
/// it back into range. Adding `+inf` and `-inf` poisons the accumulator.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IncrSum {
    total: WideSum,
    count: u64,
    state: AccumulatorState,
}

impl IncrSum {
    pub fn new() -> Self {
        Self::default()
    }

    fn current(&self) -> f64 {
        self.total.value()
    }
}

impl Accumulator for IncrSum {
    type Input = f64;
    type Output = f64;

    fn update(&mut self, x: f64) -> f64 {
        if self.state == AccumulatorState::Poisoned {
            return f64::NAN;
        }
        if x.is_nan() {
            self.state = AccumulatorState::Poisoned;
            log_poisoned("incrsum", self.count);
            return f64::NAN;
        }
        self.total.add(x);
        if self.total.is_nan() {
            self.state = AccumulatorState::Poisoned;
            log_poisoned("incrsum", self.count);
            return f64::NAN;
        }
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
