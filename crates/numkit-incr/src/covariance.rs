//! Running covariance and Pearson correlation of paired data

use crate::traits::{log_poisoned, report, Accumulator, AccumulatorState};
use crate::wide::{self, deviation_product, shift_mean, WideSum};

/// Configuration for [`IncrCovariance`] and [`IncrPcorr`]
///
/// `means: Some((mx, my))` switches both accumulators to the known-means
/// estimators, which divide by `n` instead of `n - 1`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CovarianceOptions {
    pub means: Option<(f64, f64)>,
}

impl CovarianceOptions {
    /// Use known population means for `x` and `y`
    pub fn with_means(mut self, mean_x: f64, mean_y: f64) -> Self {
        self.means = Some((mean_x, mean_y));
        self
    }
}

/// Co-moment state shared by the covariance and correlation accumulators
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
struct CoMoments {
    known: bool,
    mx: f64,
    my: f64,
    m2x: WideSum,
    m2y: WideSum,
    c: WideSum,
    count: u64,
    state: AccumulatorState,
}

impl CoMoments {
    fn new(options: CovarianceOptions, name: &'static str) -> Self {
        let (mx, my) = options.means.unwrap_or((0.0, 0.0));
        let mut m = Self {
            known: options.means.is_some(),
            mx,
            my,
            ..Self::default()
        };
        if mx.is_nan() || my.is_nan() {
            m.state = AccumulatorState::Poisoned;
            log_poisoned(name, 0);
        }
        m
    }

    /// Returns `false` when the update poisoned the state
    fn push(&mut self, x: f64, y: f64, name: &'static str) -> bool {
        if self.state == AccumulatorState::Poisoned {
            return false;
        }
        if x.is_nan() || y.is_nan() {
            self.state = AccumulatorState::Poisoned;
            log_poisoned(name, self.count);
            return false;
        }
        self.count += 1;
        if self.known {
            let (mx, my) = (self.mx, self.my);
            self.add(
                deviation_product(x, mx, x, mx),
                deviation_product(y, my, y, my),
                deviation_product(x, mx, y, my),
            );
        } else {
            let n = self.count as f64;
            let (mx, my) = (self.mx, self.my);
            self.mx = shift_mean(mx, x, n);
            self.my = shift_mean(my, y, n);
            self.add(
                deviation_product(x, mx, x, self.mx),
                deviation_product(y, my, y, self.my),
                deviation_product(x, mx, y, self.my),
            );
        }
        if self.is_nan() {
            self.count -= 1;
            self.state = AccumulatorState::Poisoned;
            log_poisoned(name, self.count);
            return false;
        }
        self.state = AccumulatorState::Active;
        true
    }

    fn add(&mut self, (px, sx): (f64, i32), (py, sy): (f64, i32), (pc, sc): (f64, i32)) {
        self.m2x.add_scaled(px, sx);
        self.m2y.add_scaled(py, sy);
        self.c.add_scaled(pc, sc);
    }

    fn is_nan(&self) -> bool {
        self.mx.is_nan()
            || self.my.is_nan()
            || self.m2x.is_nan()
            || self.m2y.is_nan()
            || self.c.is_nan()
    }

    /// Divisor of the second moments: `n` with known means, `n - 1` otherwise
    fn dof(&self) -> f64 {
        let n = self.count as f64;
        if self.known {
            n
        } else {
            n - 1.0
        }
    }

    fn covariance(&self) -> f64 {
        if !self.known && self.count == 1 {
            return 0.0;
        }
        self.c.ratio(self.dof())
    }

    fn correlation(&self) -> f64 {
        if !self.known && self.count == 1 {
            return 0.0;
        }
        // the divisors cancel
        wide::correlation(&self.c, &self.m2x, &self.m2y)
    }
}

/// Running covariance of `(x, y)` pairs
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IncrCovariance {
    moments: CoMoments,
}

impl Default for IncrCovariance {
    fn default() -> Self {
        Self::new(CovarianceOptions::default())
    }
}

impl IncrCovariance {
    pub fn new(options: CovarianceOptions) -> Self {
        Self {
            moments: CoMoments::new(options, "incrcovariance"),
        }
    }
}

impl Accumulator for IncrCovariance {
    type Input = (f64, f64);
    type Output = f64;

    fn update(&mut self, (x, y): (f64, f64)) -> f64 {
        if !self.moments.push(x, y, "incrcovariance") {
            return f64::NAN;
        }
        self.moments.covariance()
    }

    fn value(&self) -> Option<f64> {
        report(self.moments.state, || self.moments.covariance())
    }

    fn state(&self) -> AccumulatorState {
        self.moments.state
    }

    fn count(&self) -> u64 {
        self.moments.count
    }
}

/// Running Pearson product-moment correlation of `(x, y)` pairs
///
/// Constant input on either side has zero spread and yields NaN.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IncrPcorr {
    moments: CoMoments,
}

impl Default for IncrPcorr {
    fn default() -> Self {
        Self::new(CovarianceOptions::default())
    }
}

impl IncrPcorr {
    pub fn new(options: CovarianceOptions) -> Self {
        Self {
            moments: CoMoments::new(options, "incrpcorr"),
        }
    }
}

impl Accumulator for IncrPcorr {
    type Input = (f64, f64);
    type Output = f64;

    fn update(&mut self, (x, y): (f64, f64)) -> f64 {
        if !self.moments.push(x, y, "incrpcorr") {
            return f64::NAN;
        }
        self.moments.correlation()
    }

    fn value(&self) -> Option<f64> {
        report(self.moments.state, || self.moments.correlation())
    }

    fn state(&self) -> AccumulatorState {
        self.moments.state
    }

    fn count(&self) -> u64 {
        self.moments.count
    }
}
