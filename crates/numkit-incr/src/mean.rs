//! Running arithmetic mean

use crate::traits::{log_poisoned, report, Accumulator, AccumulatorState};
use crate::wide::shift_mean;

/// Running mean using Welford's update `mu += (x - mu) / n`
///
/// The update divides before subtracting whenever `x - mu` overflows, so the
/// mean of finite data is always finite.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IncrMean {
    mu: f64,
    count: u64,
    state: AccumulatorState,
}

impl IncrMean {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Accumulator for IncrMean {
    type Input = f64;
    type Output = f64;

    fn update(&mut self, x: f64) -> f64 {
        if self.state == AccumulatorState::Poisoned {
            return f64::NAN;
        }
        if x.is_nan() {
            self.state = AccumulatorState::Poisoned;
            log_poisoned("incrmean", self.count);
            return f64::NAN;
        }
        let mu = shift_mean(self.mu, x, (self.count + 1) as f64);
        if mu.is_nan() {
            self.state = AccumulatorState::Poisoned;
            log_poisoned("incrmean", self.count);
            return f64::NAN;
        }
        self.mu = mu;
        self.count += 1;
        self.state = AccumulatorState::Active;
        self.mu
    }

    fn value(&self) -> Option<f64> {
        report(self.state, || self.mu)
    }

    fn state(&self) -> AccumulatorState {
        self.state
    }

    fn count(&self) -> u64 {
        self.count
    }
}
