//! Running variance and standard deviation

use crate::traits::{log_poisoned, report, Accumulator, AccumulatorState};
use crate::wide::{deviation_product, shift_mean, WideSum};

/// Configuration for [`IncrVariance`] and [`IncrStdev`]
///
/// With `mean: None` (the default) the mean is estimated from the data and
/// the unbiased estimator `M2 / (n - 1)` is returned. With a known mean the
/// estimator is `sum((x - mean)^2) / n`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VarianceOptions {
    pub mean: Option<f64>,
}

impl VarianceOptions {
    /// Use a known population mean
    pub fn with_mean(mut self, mean: f64) -> Self {
        self.mean = Some(mean);
        self
    }
}

/// Running variance (Welford)
///
/// The second moment is a [`WideSum`], so squared deviations beyond
/// `f64::MAX` read as `inf` and the variance becomes finite again once the
/// divisor catches up.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IncrVariance {
    known_mean: Option<f64>,
    mu: f64,
    m2: WideSum,
    count: u64,
    state: AccumulatorState,
}

impl Default for IncrVariance {
    fn default() -> Self {
        Self::new(VarianceOptions::default())
    }
}

impl IncrVariance {
    /// A NaN known mean yields an accumulator that is poisoned from the start
    pub fn new(options: VarianceOptions) -> Self {
        let mut acc = Self {
            known_mean: options.mean,
            mu: options.mean.unwrap_or(0.0),
            m2: WideSum::default(),
            count: 0,
            state: AccumulatorState::Empty,
        };
        if options.mean.is_some_and(f64::is_nan) {
            acc.state = AccumulatorState::Poisoned;
            log_poisoned("incrvariance", 0);
        }
        acc
    }

    fn current(&self) -> f64 {
        let n = self.count as f64;
        match self.known_mean {
            Some(_) => self.m2.ratio(n),
            None if self.count == 1 => 0.0,
            None => self.m2.ratio(n - 1.0),
        }
    }
}

impl Accumulator for IncrVariance {
    type Input = f64;
    type Output = f64;

    fn update(&mut self, x: f64) -> f64 {
        if self.state == AccumulatorState::Poisoned {
            return f64::NAN;
        }
        if x.is_nan() {
            self.state = AccumulatorState::Poisoned;
            log_poisoned("incrvariance", self.count);
            return f64::NAN;
        }
        self.count += 1;
        let (p, scale) = match self.known_mean {
            Some(mean) => deviation_product(x, mean, x, mean),
            None => {
                let old = self.mu;
                self.mu = shift_mean(old, x, self.count as f64);
                deviation_product(x, old, x, self.mu)
            }
        };
        self.m2.add_scaled(p, scale);
        if self.mu.is_nan() || self.m2.is_nan() {
            self.count -= 1;
            self.state = AccumulatorState::Poisoned;
            log_poisoned("incrvariance", self.count);
            return f64::NAN;
        }
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

/// Running standard deviation, the square root of [`IncrVariance`]
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IncrStdev {
    variance: IncrVariance,
}

impl IncrStdev {
    pub fn new(options: VarianceOptions) -> Self {
        Self {
            variance: IncrVariance::new(options),
        }
    }
}

impl Accumulator for IncrStdev {
    type Input = f64;
    type Output = f64;

    fn update(&mut self, x: f64) -> f64 {
        self.variance.update(x).sqrt()
    }

    fn value(&self) -> Option<f64> {
        self.variance.value().map(f64::sqrt)
    }

    fn state(&self) -> AccumulatorState {
        self.variance.state()
    }

    fn count(&self) -> u64 {
        self.variance.count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_incrvariance_unknown_mean() {
        let mut acc = IncrVariance::default();
        assert_eq!(acc.value(), None);
        assert_eq!(acc.update(2.0), 0.0);
        assert_eq!(acc.update(3.0), 0.5);
        assert_relative_eq!(acc.update(-2.0), 7.0, epsilon = 1e-14);
        assert_relative_eq!(acc.update(4.0), 6.916666666666667, epsilon = 1e-14);
    }

    #[test]
    fn test_incrvariance_known_mean() {
        let mut acc = IncrVariance::new(VarianceOptions::default().with_mean(3.0));
        assert_eq!(acc.update(2.0), 1.0);
        assert_eq!(acc.update(3.0), 0.5);
        assert_relative_eq!(acc.update(-2.0), 26.0 / 3.0, epsilon = 1e-14);
    }

    #[test]
    fn test_incrvariance_known_mean_overflow_recovers() {
        let mut acc = IncrVariance::new(VarianceOptions::default().with_mean(0.0));
        assert_eq!(acc.update(2e154), f64::INFINITY);
        assert_eq!(acc.update(0.0), f64::INFINITY);
        assert_relative_eq!(acc.update(0.0), 4e308 / 3.0, max_relative = 1e-12);
        assert_relative_eq!(acc.update(0.0), 1e308, max_relative = 1e-12);
    }

    #[test]
    fn test_incrvariance_unknown_mean_overflow_recovers() {
        let mut acc = IncrVariance::default();
        assert_eq!(acc.update(1e154), 0.0);
        assert_eq!(acc.update(-1e154), f64::INFINITY);
        assert_relative_eq!(acc.update(1e154), 4e308 / 3.0, max_relative = 1e-12);
        assert_relative_eq!(acc.update(-1e154), 4e308 / 3.0, max_relative = 1e-12);
        assert!(!acc.is_poisoned());
    }

    #[test]
    fn test_incrvariance_infinite_datum_poisons() {
        let mut acc = IncrVariance::default();
        acc.update(1.0);
        assert!(acc.update(f64::INFINITY).is_nan());
        assert!(acc.is_poisoned());
        assert_eq!(acc.count(), 1);

        let mut known = IncrVariance::new(VarianceOptions::default().with_mean(0.0));
        assert_eq!(known.update(f64::NEG_INFINITY), f64::INFINITY);
        assert!(!known.is_poisoned());
    }

    #[test]
    fn test_incrvariance_nan_known_mean_is_poisoned() {
        let mut acc = IncrVariance::new(VarianceOptions { mean: Some(f64::NAN) });
        assert!(acc.is_poisoned());
        assert!(acc.update(1.0).is_nan());
    }

    #[test]
    fn test_incrstdev() {
        let mut acc = IncrStdev::new(VarianceOptions::default());
        acc.update(2.0);
        acc.update(4.0);
        acc.update(4.0);
        acc.update(4.0);
        acc.update(5.0);
        acc.update(5.0);
        acc.update(7.0);
        let sd = acc.update(9.0);
        assert_relative_eq!(sd, (32.0f64 / 7.0).sqrt(), epsilon = 1e-14);
        assert_eq!(acc.count(), 8);

        let mut known = IncrStdev::new(VarianceOptions { mean: Some(5.0) });
        let sd = known.accumulate([2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]).unwrap();
        assert_relative_eq!(sd, 2.0, epsilon = 1e-14);
    }
}
