//! Chi-square distribution with `k > 0` degrees of freedom
//!
//! Evaluated as a gamma law with shape `k/2` and rate `1/2`.

use numkit_core::{Error, Result};

use crate::gamma;
use crate::traits::Moments;

/// Validated degrees of freedom and the equivalent gamma parameters
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Params {
    k: f64,
    gamma: gamma::Params,
}

impl Params {
    fn new(k: f64) -> Option<Self> {
        let gamma = gamma::Params::new(0.5 * k, 0.5)?;
        Some(Self { k, gamma })
    }
}

fn pdf_impl(p: &Params, x: f64) -> f64 {
    gamma::pdf_impl(&p.gamma, x)
}

fn logpdf_impl(p: &Params, x: f64) -> f64 {
    gamma::logpdf_impl(&p.gamma, x)
}

fn cdf_impl(p: &Params, x: f64) -> f64 {
    gamma::cdf_impl(&p.gamma, x)
}

fn mgf_impl(p: &Params, t: f64) -> f64 {
    gamma::mgf_impl(&p.gamma, t)
}

fn quantile_impl(p: &Params, prob: f64) -> f64 {
    gamma::quantile_impl(&p.gamma, prob)
}

univariate_function!(
    /// Chi-square probability density
    Pdf, pdf, Params, (k), pdf_impl
);
univariate_function!(
    /// Natural logarithm of the chi-square probability density
    LogPdf, logpdf, Params, (k), logpdf_impl
);
univariate_function!(
    /// Chi-square cumulative distribution function
    Cdf, cdf, Params, (k), cdf_impl
);
univariate_function!(
    /// Chi-square moment-generating function; NaN for `t >= 1/2`
    Mgf, mgf, Params, (k), mgf_impl
);
univariate_function!(
    /// Chi-square quantile function
    Quantile, quantile, Params, (k), quantile_impl
);

/// Chi-square distribution with validated degrees of freedom
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChiSquare {
    params: Params,
}

impl ChiSquare {
    /// Errors unless `k` is finite and positive
    pub fn new(k: f64) -> Result<Self> {
        let params = Params::new(k).ok_or_else(|| Error::invalid_parameter("k", k, "0 < k < inf"))?;
        Ok(Self { params })
    }

    pub fn dof(&self) -> f64 {
        self.params.k
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

    pub fn mgf(&self, t: f64) -> f64 {
        mgf_impl(&self.params, t)
    }

    pub fn quantile(&self, p: f64) -> f64 {
        quantile_impl(&self.params, p)
    }
}

impl Moments for ChiSquare {
    fn mean(&self) -> f64 {
        self.params.k
    }

    fn variance(&self) -> f64 {
        2.0 * self.params.k
    }

    fn mode(&self) -> f64 {
        (self.params.k - 2.0).max(0.0)
    }

    fn entropy(&self) -> f64 {
        gamma::entropy_of(0.5 * self.params.k, 0.5)
    }

    fn skewness(&self) -> f64 {
        (8.0 / self.params.k).sqrt()
    }
}
