//! Exponential distribution with rate `λ > 0`

use numkit_core::{Error, Result};

use crate::traits::Moments;

/// Validated rate with its reciprocal precomputed
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Params {
    lambda: f64,
    scale: f64,
    ln_lambda: f64,
}

impl Params {
    fn new(lambda: f64) -> Option<Self> {
        if !(lambda > 0.0 && lambda.is_finite()) {
            return None;
        }
        Some(Self {
            lambda,
            scale: 1.0 / lambda,
            ln_lambda: lambda.ln(),
        })
    }
}

/// `ln(1 - e^-t)` for `t > 0`
pub(crate) fn ln_one_minus_exp(t: f64) -> f64 {
    if t < std::f64::consts::LN_2 {
        (-(-t).exp_m1()).ln()
    } else {
        (-(-t).exp()).ln_1p()
    }
}

fn pdf_impl(p: &Params, x: f64) -> f64 {
    if x.is_nan() {
        return f64::NAN;
    }
    if x < 0.0 {
        return 0.0;
    }
    p.lambda * (-p.lambda * x).exp()
}

fn logpdf_impl(p: &Params, x: f64) -> f64 {
    if x.is_nan() {
        return f64::NAN;
    }
    if x < 0.0 {
        return f64::NEG_INFINITY;
    }
    p.ln_lambda - p.lambda * x
}

fn cdf_impl(p: &Params, x: f64) -> f64 {
    if x.is_nan() {
        return f64::NAN;
    }
    if x <= 0.0 {
        return 0.0;
    }
    -(-p.lambda * x).exp_m1()
}

fn logcdf_impl(p: &Params, x: f64) -> f64 {
    if x.is_nan() {
        return f64::NAN;
    }
    if x <= 0.0 {
        return f64::NEG_INFINITY;
    }
    ln_one_minus_exp(p.lambda * x)
}

fn mgf_impl(p: &Params, t: f64) -> f64 {
    if t.is_nan() || t >= p.lambda {
        return f64::NAN;
    }
    p.lambda / (p.lambda - t)
}

fn quantile_impl(p: &Params, prob: f64) -> f64 {
    if prob.is_nan() || !(0.0..=1.0).contains(&prob) {
        return f64::NAN;
    }
    -(-prob).ln_1p() * p.scale
}

univariate_function!(
    /// Exponential probability density
    Pdf, pdf, Params, (lambda), pdf_impl
);
univariate_function!(
    /// Natural logarithm of the exponential probability density
    LogPdf, logpdf, Params, (lambda), logpdf_impl
);
univariate_function!(
    /// Exponential cumulative distribution function
    Cdf, cdf, Params, (lambda), cdf_impl
);
univariate_function!(
    /// Natural logarithm of the exponential cumulative distribution function
    LogCdf, logcdf, Params, (lambda), logcdf_impl
);
univariate_function!(
    /// Exponential moment-generating function; NaN for `t >= λ`
    Mgf, mgf, Params, (lambda), mgf_impl
);
univariate_function!(
    /// Exponential quantile function
    Quantile, quantile, Params, (lambda), quantile_impl
);

/// Exponential distribution with validated rate
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Exponential {
    params: Params,
}

impl Exponential {
    /// Errors unless `lambda` is finite and positive
    pub fn new(lambda: f64) -> Result<Self> {
        let params =
            Params::new(lambda).ok_or_else(|| Error::invalid_parameter("lambda", lambda, "0 < lambda < inf"))?;
        Ok(Self { params })
    }

    pub fn rate(&self) -> f64 {
        self.params.lambda
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

impl Moments for Exponential {
    fn mean(&self) -> f64 {
        self.params.scale
    }

    fn variance(&self) -> f64 {
        self.params.scale * self.params.scale
    }

    fn mode(&self) -> f64 {
        0.0
    }

    fn entropy(&self) -> f64 {
        1.0 - self.params.ln_lambda
    }

    fn skewness(&self) -> f64 {
        2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::UnivariateFunction;
    use approx::assert_relative_eq;

    #[test]
    fn test_exponential_pdf_cdf() {
        assert_eq!(pdf(-1.0, 2.0), 0.0);
        assert_eq!(pdf(0.0, 2.0), 2.0);
        assert_relative_eq!(pdf(1.0, 2.0), 2.0 * (-2.0f64).exp(), max_relative = 1e-15);
        assert_eq!(cdf(-1.0, 2.0), 0.0);
        assert_eq!(cdf(f64::NEG_INFINITY, 2.0), 0.0);
        assert_eq!(cdf(f64::INFINITY, 2.0), 1.0);
        assert_relative_eq!(cdf(1.0, 2.0), 1.0 - (-2.0f64).exp(), max_relative = 1e-15);
        assert_relative_eq!(logpdf(1.0, 2.0), 2.0f64.ln() - 2.0, max_relative = 1e-15);
        assert_eq!(logpdf(-1.0, 2.0), f64::NEG_INFINITY);
    }

    #[test]
    fn test_exponential_logcdf_small_and_large() {
        assert_relative_eq!(logcdf(1e-10, 1.0), (1e-10f64).ln(), max_relative = 1e-9);
        assert_relative_eq!(logcdf(40.0, 1.0), -(-40.0f64).exp(), max_relative = 1e-14);
        assert_eq!(logcdf(0.0, 1.0), f64::NEG_INFINITY);
    }

    #[test]
    fn test_exponential_quantile() {
        let q = Quantile::factory(0.5);
        assert_eq!(q.eval(0.0), 0.0);
        assert_eq!(q.eval(1.0), f64::INFINITY);
        assert!(q.eval(1.5).is_nan());
        assert!(q.eval(-0.5).is_nan());
        assert_relative_eq!(q.eval(0.5), 2.0 * std::f64::consts::LN_2, max_relative = 1e-15);
        assert_relative_eq!(cdf(q.eval(0.3), 0.5), 0.3, max_relative = 1e-15);
    }

    #[test]
    fn test_exponential_mgf() {
        assert_relative_eq!(mgf(1.0, 3.0), 1.5, max_relative = 1e-15);
        assert!(mgf(3.0, 3.0).is_nan());
        assert!(mgf(4.0, 3.0).is_nan());
    }

    #[test]
    fn test_exponential_invalid_parameters() {
        for lambda in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let f = Cdf::factory(lambda);
            assert!(!f.is_valid());
            assert!(f.eval(1.0).is_nan());
            assert!(pdf(1.0, lambda).is_nan());
            assert!(Exponential::new(lambda).is_err());
        }
        assert!(cdf(f64::NAN, 1.0).is_nan());
    }

    #[test]
    fn test_exponential_moments() {
        let d = Exponential::new(4.0).unwrap();
        assert_eq!(d.mean(), 0.25);
        assert_eq!(d.variance(), 0.0625);
        assert_eq!(d.stdev(), 0.25);
        assert_eq!(d.mode(), 0.0);
        assert_eq!(d.skewness(), 2.0);
        assert_relative_eq!(d.entropy(), 1.0 - 4.0f64.ln(), max_relative = 1e-15);
        assert_eq!(d.cdf(1.0), cdf(1.0, 4.0));
    }
}
