//! Overflow-safe building blocks shared by the accumulators
//!
//! A [`WideSum`] holds a compensated sum as `(sum + comp) * 2^exponent`.
//! When adding a term would overflow, both parts are shifted down by `2^64`
//! and the exponent grows, so the running value survives excursions beyond
//! `f64::MAX`. Reading it back reports `±inf` while the true value is out of
//! range and a finite value again once it returns.

use numkit_core::float::{frexp, ldexp};

/// Exponent step applied on every rescale
const STEP: i32 = 64;

/// A rescaled sum below `2^896` is moved back toward unit scale
const SHRINK_BELOW: f64 = 5.282_945_311_356_653e269;

/// Kahan-Babuska-Neumaier sum with a floating binary exponent
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub(crate) struct WideSum {
    sum: f64,
    comp: f64,
    exponent: i32,
}

impl WideSum {
    #[inline]
    pub(crate) fn add(&mut self, x: f64) {
        self.add_scaled(x, 0);
    }

    /// Add `term * 2^scale`
    pub(crate) fn add_scaled(&mut self, term: f64, scale: i32) {
        let mut x = ldexp(term, scale - self.exponent);
        let mut t = self.sum + x;
        while t.is_infinite() && term.is_finite() && self.sum.is_finite() {
            self.grow();
            x = ldexp(term, scale - self.exponent);
            t = self.sum + x;
        }
        if t.is_finite() {
            if self.sum.abs() >= x.abs() {
                self.comp += (self.sum - t) + x;
            } else {
                self.comp += (x - t) + self.sum;
            }
        }
        self.sum = t;
        self.shrink();
    }

    /// Current value divided by `divisor`, rescaled only after the division
    #[inline]
    pub(crate) fn ratio(&self, divisor: f64) -> f64 {
        ldexp((self.sum + self.comp) / divisor, self.exponent)
    }

    #[inline]
    pub(crate) fn value(&self) -> f64 {
        self.ratio(1.0)
    }

    #[inline]
    pub(crate) fn is_nan(&self) -> bool {
        self.sum.is_nan() || self.comp.is_nan()
    }

    /// `(m, e)` with the value equal to `m * 2^e` and `|m|` in `[0.5, 1)`
    fn normalized(&self) -> (f64, i32) {
        let (m, e) = frexp(self.sum + self.comp);
        (m, e + self.exponent)
    }

    fn grow(&mut self) {
        self.sum = ldexp(self.sum, -STEP);
        self.comp = ldexp(self.comp, -STEP);
        self.exponent += STEP;
    }

    fn shrink(&mut self) {
        while self.exponent > 0 && self.sum.abs() < SHRINK_BELOW {
            self.sum = ldexp(self.sum, STEP);
            self.comp = ldexp(self.comp, STEP);
            self.exponent -= STEP;
        }
    }
}

/// `mu + (x - mu) / n`, dividing before subtracting when the difference overflows
#[inline]
pub(crate) fn shift_mean(mu: f64, x: f64, n: f64) -> f64 {
    let delta = x - mu;
    if delta.is_finite() {
        mu + delta / n
    } else {
        mu + (x / n - mu / n)
    }
}

/// `a - b` as `(d, s)` with the difference equal to `d * 2^s`
#[inline]
fn difference(a: f64, b: f64) -> (f64, i32) {
    let d = a - b;
    if d.is_finite() || !(a.is_finite() && b.is_finite()) {
        (d, 0)
    } else {
        (0.25 * a - 0.25 * b, 2)
    }
}

/// `(a - b) * (c - d)` as `(p, s)` with the product equal to `p * 2^s`
pub(crate) fn deviation_product(a: f64, b: f64, c: f64, d: f64) -> (f64, i32) {
    let (u, su) = difference(a, b);
    let (v, sv) = difference(c, d);
    let p = u * v;
    if p.is_finite() || !(u.is_finite() && v.is_finite()) {
        return (p, su + sv);
    }
    let (fu, eu) = frexp(u);
    let (fv, ev) = frexp(v);
    (fu * fv, su + sv + eu + ev)
}

/// `c / sqrt(x * y)` evaluated on normalised parts, so that neither the
/// co-moment nor the second moments need to be representable
pub(crate) fn correlation(c: &WideSum, x: &WideSum, y: &WideSum) -> f64 {
    let (cm, ce) = c.normalized();
    let (xm, xe) = even_exponent(x.normalized());
    let (ym, ye) = even_exponent(y.normalized());
    ldexp(cm / (xm.sqrt() * ym.sqrt()), ce - (xe + ye) / 2)
}

#[inline]
fn even_exponent((m, e): (f64, i32)) -> (f64, i32) {
    if e % 2 == 0 {
        (m, e)
    } else {
        (2.0 * m, e - 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_widesum_matches_plain_sum_in_range() {
        let mut s = WideSum::default();
        for x in [1.5, -0.25, 3.0, 0.125] {
            s.add(x);
        }
        assert_eq!(s.value(), 4.375);
        assert_eq!(s.exponent, 0);
    }

    #[test]
    fn test_widesum_survives_overflow() {
        let mut s = WideSum::default();
        s.add(f64::MAX);
        s.add(f64::MAX);
        assert_eq!(s.value(), f64::INFINITY);
        assert_eq!(s.ratio(4.0), f64::MAX / 2.0);
        s.add(-f64::MAX);
        assert_eq!(s.value(), f64::MAX);
        s.add(-f64::MAX);
        assert_eq!(s.value(), 0.0);
        assert_eq!(s.exponent, 0);
    }

    #[test]
    fn test_widesum_scaled_terms() {
        let mut s = WideSum::default();
        s.add_scaled(0.75, 1100);
        assert_eq!(s.value(), f64::INFINITY);
        assert_eq!(s.ratio(2f64.powi(200)), ldexp(0.75, 900));
        s.add_scaled(-0.75, 1100);
        s.add(2.0);
        assert_eq!(s.value(), 2.0);
    }

    #[test]
    fn test_shift_mean_avoids_overflow() {
        assert_eq!(shift_mean(f64::MAX, -f64::MAX, 2.0), 0.0);
        assert_eq!(shift_mean(1.0, 3.0, 2.0), 2.0);
        assert_eq!(shift_mean(0.0, f64::INFINITY, 3.0), f64::INFINITY);
    }

    #[test]
    fn test_deviation_product_is_exact_in_scale() {
        assert_eq!(deviation_product(3.0, 1.0, 5.0, 2.0), (6.0, 0));
        let (p, s) = deviation_product(1e308, -1e308, 1e308, 0.0);
        assert!(p.is_finite());
        // log2(2e308 * 1e308)
        let expected = 2f64.log2() + 616.0 * 10f64.log2();
        assert_relative_eq!(p.log2() + s as f64, expected, max_relative = 1e-12);
    }

    #[test]
    fn test_correlation_of_huge_moments() {
        let wide = |m: f64, e: i32| {
            let mut s = WideSum::default();
            s.add_scaled(m, e);
            s
        };
        let x = wide(0.5, 2000);
        assert_relative_eq!(correlation(&x, &x, &x), 1.0, max_relative = 1e-15);
        // -2^2000 / sqrt(2^2002 * 2^1999)
        let r = correlation(&wide(-0.5, 2001), &wide(0.5, 2003), &x);
        assert_relative_eq!(r, -std::f64::consts::FRAC_1_SQRT_2, max_relative = 1e-15);
    }
}
