//! Gamma distribution with shape `α > 0` and rate `β > 0`

use numkit_core::{Error, Result};
use numkit_special::{gammainc, gammaincinv, gammaln, GammaincOptions};

use crate::digamma::digamma;
use crate::traits::Moments;

/// Validated shape and rate with the log-normalisation precomputed
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Params {
    pub(crate) alpha: f64,
    pub(crate) beta: f64,
    /// `α ln β - ln Γ(α)`
    ln_norm: f64,
    ln_beta: f64,
}

impl Params {
    pub(crate) fn new(alpha: f64, beta: f64) -> Option<Self> {
        let valid = |v: f64| v > 0.0 && v.is_finite();
        if !(valid(alpha) && valid(beta)) {
            return None;
        }
        let ln_beta = beta.ln();
        Some(Self {
            alpha,
            beta,
            ln_norm: alpha * ln_beta - gammaln(alpha),
            ln_beta,
        })
    }
}

pub(crate) fn logpdf_impl(p: &Params, x: f64) -> f64 {
    if x.is_nan() {
        return f64::NAN;
    }
    if x < 0.0 || x == f64::INFINITY {
        return f64::NEG_INFINITY;
    }
    if x == 0.0 {
        return if p.alpha < 1.0 {
            f64::INFINITY
        } else if p.alpha == 1.0 {
            p.ln_beta
        } else {
            f64::NEG_INFINITY
        };
    }
    p.ln_norm + (p.alpha - 1.0) * x.ln() - p.beta * x
}

pub(crate) fn pdf_impl(p: &Params, x: f64) -> f64 {
    if x.is_nan() {
        return f64::NAN;
    }
    if x < 0.0 {
        return 0.0;
    }
    logpdf_impl(p, x).exp()
}

pub(crate) fn cdf_impl(p: &Params, x: f64) -> f64 {
    if x.is_nan() {
        return f64::NAN;
    }
    if x <= 0.0 {
        return 0.0;
    }
    gammainc(p.beta * x, p.alpha, GammaincOptions::default())
}

fn logcdf_impl(p: &Params, x: f64) -> f64 {
    cdf_impl(p, x).ln()
}

pub(crate) fn mgf_impl(p: &Params, t: f64) -> f64 {
    if t.is_nan() || t >= p.beta {
        return f64::NAN;
    }
    (-p.alpha * (-t / p.beta).ln_1p()).exp()
}

pub(crate) fn quantile_impl(p: &Params, prob: f64) -> f64 {
    if prob.is_nan() || !(0.0..=1.0).contains(&prob) {
        return f64::NAN;
    }
    gammaincinv(prob, p.alpha, false) / p.beta
}

univariate_function!(
    /// Gamma probability density
    Pdf, pdf, Params, (alpha, beta), pdf_impl
);
univariate_function!(
    /// Natural logarithm of the gamma probability density
    LogPdf, logpdf, Params, (alpha, beta), logpdf_impl
);
univariate_function!(
    /// Gamma cumulative distribution function
    Cdf, cdf, Params, (alpha, beta), cdf_impl
);
univariate_function!(
    /// Natural logarithm of the gamma cumulative distribution function
    LogCdf, logcdf, Params, (alpha, beta), logcdf_impl
);
univariate_function!(
    /// Gamma moment-generating function; NaN for `t >= β`
    Mgf, mgf, Params, (alpha, beta), mgf_impl
);
univariate_function!(
    /// Gamma quantile function
    Quantile, quantile, Params, (alpha, beta), quantile_impl
);

/// Gamma distribution with validated shape and rate
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Gamma {
    params: Params,
}

impl Gamma {
    /// Errors unless both `alpha` (shape) and `beta` (rate) are finite and positive
    pub fn new(alpha: f64, beta: f64) -> Result<Self> {
        if !(alpha > 0.0 && alpha.is_finite()) {
            return Err(Error::invalid_parameter("alpha", alpha, "0 < alpha < inf"));
        }
        if !(beta > 0.0 && beta.is_finite()) {
            return Err(Error::invalid_parameter("beta", beta, "0 < beta < inf"));
        }
        let params = Params::new(alpha, beta)
            .ok_or_else(|| Error::InvalidParameter(format!("alpha = {alpha}, beta = {beta}")))?;
        Ok(Self { params })
    }

    pub fn shape(&self) -> f64 {
        self.params.alpha
    }

    pub fn rate(&self) -> f64 {
        self.params.beta
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

/// Entropy of a gamma law, shared with the chi-square distribution
pub(crate) fn entropy_of(alpha: f64, beta: f64) -> f64 {
    alpha - beta.ln() + gammaln(alpha) + (1.0 - alpha) * digamma(alpha)
}

impl Moments for Gamma {
    fn mean(&self) -> f64 {
        self.params.alpha / self.params.beta
    }

    fn variance(&self) -> f64 {
        self.params.alpha / (self.params.beta * self.params.beta)
    }

    fn mode(&self) -> f64 {
        if self.params.alpha < 1.0 {
            f64::NAN
        } else {
            (self.params.alpha - 1.0) / self.params.beta
        }
    }

    fn entropy(&self) -> f64 {
        entropy_of(self.params.alpha, self.params.beta)
    }

    fn skewness(&self) -> f64 {
        2.0 / self.params.alpha.sqrt()
    }
}
