//! Normal distribution with mean `μ` and standard deviation `σ`
//!
//! The factories accept `σ = 0` as a point mass at `μ`: the density is `+∞`
//! at `μ` and `0` elsewhere, the cdf is a unit step at `μ`, and every
//! probability maps to `μ` under the quantile. The strict [`Normal::new`]
//! constructor requires `σ > 0`.

use std::f64::consts::{PI, SQRT_2};

use numkit_core::math::evalpoly;
use numkit_core::{Error, Result};
use numkit_special::{erfc, erfcinv};

use crate::traits::Moments;

/// `ln(sqrt(2π))`
const LN_SQRT_2PI: f64 = 0.918_938_533_204_672_8;

/// Below this standardised value `ln(Φ(z))` switches to the tail expansion
const LOGCDF_TAIL: f64 = -20.0;

/// `1 - 1/z² + 3/z⁴ - 15/z⁶ + 105/z⁸` in powers of `1/z²`
const MILLS_SERIES: [f64; 5] = [1.0, -1.0, 3.0, -15.0, 105.0];

/// Validated location and scale
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Params {
    mu: f64,
    sigma: f64,
    ln_sigma: f64,
}

impl Params {
    fn new(mu: f64, sigma: f64) -> Option<Self> {
        if !mu.is_finite() || !(sigma >= 0.0 && sigma.is_finite()) {
            return None;
        }
        Some(Self {
            mu,
            sigma,
            ln_sigma: sigma.ln(),
        })
    }

    #[inline]
    fn is_point_mass(&self) -> bool {
        self.sigma == 0.0
    }

    #[inline]
    fn standardize(&self, x: f64) -> f64 {
        (x - self.mu) / self.sigma
    }
}

fn logpdf_impl(p: &Params, x: f64) -> f64 {
    if x.is_nan() {
        return f64::NAN;
    }
    if p.is_point_mass() {
        return if x == p.mu { f64::INFINITY } else { f64::NEG_INFINITY };
    }
    let z = p.standardize(x);
    -0.5 * z * z - p.ln_sigma - LN_SQRT_2PI
}

fn pdf_impl(p: &Params, x: f64) -> f64 {
    if x.is_nan() {
        return f64::NAN;
    }
    if p.is_point_mass() {
        return if x == p.mu { f64::INFINITY } else { 0.0 };
    }
    let z = p.standardize(x);
    (-0.5 * z * z).exp() / (p.sigma * (2.0 * PI).sqrt())
}

fn cdf_impl(p: &Params, x: f64) -> f64 {
    if x.is_nan() {
        return f64::NAN;
    }
    if p.is_point_mass() {
        return if x < p.mu { 0.0 } else { 1.0 };
    }
    0.5 * erfc(-p.standardize(x) / SQRT_2)
}

fn logcdf_impl(p: &Params, x: f64) -> f64 {
    if x.is_nan() {
        return f64::NAN;
    }
    if p.is_point_mass() {
        return if x < p.mu { f64::NEG_INFINITY } else { 0.0 };
    }
    let z = p.standardize(x);
    if z < LOGCDF_TAIL {
        // Φ(z) ~ φ(z)/|z| * (1 - 1/z² + 3/z⁴ - ...)
        if z == f64::NEG_INFINITY {
            return f64::NEG_INFINITY;
        }
        let w = 1.0 / (z * z);
        return -0.5 * z * z - (-z).ln() - LN_SQRT_2PI + evalpoly(&MILLS_SERIES, w).ln();
    }
    (0.5 * erfc(-z / SQRT_2)).ln()
}

fn mgf_impl(p: &Params, t: f64) -> f64 {
    if t.is_nan() {
        return f64::NAN;
    }
    (p.mu * t + 0.5 * p.sigma * p.sigma * t * t).exp()
}

fn quantile_impl(p: &Params, prob: f64) -> f64 {
    if prob.is_nan() || !(0.0..=1.0).contains(&prob) {
        return f64::NAN;
    }
    if p.is_point_mass() {
        return p.mu;
    }
    p.mu - p.sigma * SQRT_2 * erfcinv(2.0 * prob)
}

univariate_function!(
    /// Normal probability density
    Pdf, pdf, Params, (mu, sigma), pdf_impl
);
univariate_function!(
    /// Natural logarithm of the normal probability density
    LogPdf, logpdf, Params, (mu, sigma), logpdf_impl
);
univariate_function!(
    /// Normal cumulative distribution function
    Cdf, cdf, Params, (mu, sigma), cdf_impl
);
univariate_function!(
    /// Natural logarithm of the normal cumulative distribution function
    LogCdf, logcdf, Params, (mu, sigma), logcdf_impl
);
univariate_function!(
    /// Normal moment-generating function
    Mgf, mgf, Params, (mu, sigma), mgf_impl
);
univariate_function!(
    /// Normal quantile function
    Quantile, quantile, Params, (mu, sigma), quantile_impl
);

/// Normal distribution with validated, strictly positive scale
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Normal {
    params: Params,
}

impl Normal {
    /// Errors unless `mu` is finite and `sigma` is finite and positive
    pub fn new(mu: f64, sigma: f64) -> Result<Self> {
        if !mu.is_finite() {
            return Err(Error::invalid_parameter("mu", mu, "finite"));
        }
        if !(sigma > 0.0 && sigma.is_finite()) {
            return Err(Error::invalid_parameter("sigma", sigma, "0 < sigma < inf"));
        }
        let params = Params::new(mu, sigma)
            .ok_or_else(|| Error::InvalidParameter(format!("mu = {mu}, sigma = {sigma}")))?;
        Ok(Self { params })
    }

    /// Standard normal, `μ = 0` and `σ = 1`
    pub fn standard() -> Self {
        Self {
            params: Params {
                mu: 0.0,
                sigma: 1.0,
                ln_sigma: 0.0,
            },
        }
    }

    pub fn location(&self) -> f64 {
        self.params.mu
    }

    pub fn scale(&self) -> f64 {
        self.params.sigma
    }

    pub fn pdf(&self, x: f64) -> f64 {
        pdf_impl(&self.params, x)
    }

    pub fn logpdf(&self, x: f64) -> f64 {
        logpdf_impl(&self.params, x)
    }

    pub fn cdf(&self, x: f64) -> f64 {
        cdf_impl(&self.params, x)
    }

    pub fn logcdf(&self, x: f64) -> f64 {
        logcdf_impl(&self.params, x)
    }

    pub fn mgf(&self, t: f64) -> f64 {
        mgf_impl(&self.params, t)
    }

    pub fn quantile(&self, p: f64) -> f64 {
        quantile_impl(&self.params, p)
    }
}

impl Moments for Normal {
    fn mean(&self) -> f64 {
        self.params.mu
    }

    fn variance(&self) -> f64 {
        self.params.sigma * self.params.sigma
    }

    fn stdev(&self) -> f64 {
        self.params.sigma
    }

    fn mode(&self) -> f64 {
        self.params.mu
    }

    fn entropy(&self) -> f64 {
        // 0.5 * ln(2πe σ²)
        0.5 + LN_SQRT_2PI + self.params.ln_sigma
    }

    fn skewness(&self) -> f64 {
        0.0
    }
}
