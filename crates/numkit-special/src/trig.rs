//! Trigonometric helpers: `sin(πx)`, `cos(πx)` and the inverse reciprocal functions

use std::f64::consts::PI;

use numkit_core::float::is_integer;

/// Compute `sin(πx)` with exact argument reduction
///
/// Integers (including every `|x| >= 2^52`) return a signed zero. Infinite or
/// NaN input returns NaN.
///
/// # Examples
///
/// ```rust
/// use numkit_special::sinpi;
///
/// assert_eq!(sinpi(0.5), 1.0);
/// assert_eq!(sinpi(1.0), 0.0);
/// assert_eq!(sinpi(-2.0).to_bits(), (-0.0f64).to_bits());
/// ```
pub fn sinpi(x: f64) -> f64 {
    if !x.is_finite() {
        return f64::NAN;
    }
    if is_integer(x) {
        return 0.0f64.copysign(x);
    }
    let r = x.abs() % 2.0;
    let y = if r <= 0.25 {
        (PI * r).sin()
    } else if r <= 0.75 {
        (PI * (r - 0.5)).cos()
    } else if r <= 1.25 {
        (PI * (1.0 - r)).sin()
    } else if r <= 1.75 {
        -(PI * (r - 1.5)).cos()
    } else {
        (PI * (r - 2.0)).sin()
    };
    if x < 0.0 {
        -y
    } else {
        y
    }
}

/// Compute `cos(πx)` with exact argument reduction
///
/// Half-integers return exactly `0`.
pub fn cospi(x: f64) -> f64 {
    if !x.is_finite() {
        return f64::NAN;
    }
    let r = x.abs() % 2.0;
    if r == 0.5 || r == 1.5 {
        return 0.0;
    }
    if r < 0.25 {
        (PI * r).cos()
    } else if r < 0.75 {
        (PI * (0.5 - r)).sin()
    } else if r < 1.25 {
        -(PI * (1.0 - r)).cos()
    } else if r < 1.75 {
        (PI * (r - 1.5)).sin()
    } else {
        (PI * (2.0 - r)).cos()
    }
}

/// Inverse cotangent, `atan(1/x)`
///
/// `acot(±∞) = ±0` and `acot(±0) = ±π/2`.
///
/// # Examples
///
/// ```rust
/// use numkit_special::acot;
///
/// assert_eq!(acot(f64::INFINITY).to_bits(), 0.0f64.to_bits());
/// assert_eq!(acot(f64::NEG_INFINITY).to_bits(), (-0.0f64).to_bits());
/// assert!((acot(0.0) - std::f64::consts::FRAC_PI_2).abs() < 1e-15);
/// ```
#[inline]
pub fn acot(x: f64) -> f64 {
    (1.0 / x).atan()
}

/// Inverse hyperbolic cotangent, `atanh(1/x)`; NaN for `|x| < 1`
#[inline]
pub fn acoth(x: f64) -> f64 {
    (1.0 / x).atanh()
}

/// Inverse secant, `acos(1/x)`; NaN for `|x| < 1`
#[inline]
pub fn asec(x: f64) -> f64 {
    (1.0 / x).acos()
}

/// Inverse cosecant, `asin(1/x)`; NaN for `|x| < 1`
#[inline]
pub fn acsc(x: f64) -> f64 {
    (1.0 / x).asin()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_3, FRAC_PI_4, FRAC_PI_6};

    #[test]
    fn test_sinpi_exact_points() {
        assert_eq!(sinpi(0.0), 0.0);
        assert_eq!(sinpi(0.5), 1.0);
        assert_eq!(sinpi(1.5), -1.0);
        assert_eq!(sinpi(-0.5), -1.0);
        assert_eq!(sinpi(1e20), 0.0);
        assert_eq!(sinpi(-3.0).to_bits(), (-0.0f64).to_bits());
        assert!(sinpi(f64::INFINITY).is_nan());
        assert!(sinpi(f64::NAN).is_nan());
    }

    #[test]
    fn test_sinpi_matches_sin() {
        for &x in &[0.1, 0.3, 0.7, 1.1, 1.3, 1.6, 1.9, -0.42, 12.25] {
            assert_relative_eq!(sinpi(x), (PI * x).sin(), epsilon = 1e-13);
        }
    }

    #[test]
    fn test_cospi() {
        assert_eq!(cospi(0.0), 1.0);
        assert_eq!(cospi(1.0), -1.0);
        assert_eq!(cospi(0.5), 0.0);
        assert_eq!(cospi(-1.5), 0.0);
        assert_eq!(cospi(1e20), 1.0);
        for &x in &[0.1, 0.3, 0.7, 1.1, 1.3, 1.6, 1.9, -0.42, 12.25] {
            assert_relative_eq!(cospi(x), (PI * x).cos(), epsilon = 1e-13);
        }
        assert!(cospi(f64::NEG_INFINITY).is_nan());
    }

    #[test]
    fn test_acot_limits() {
        assert_eq!(acot(f64::INFINITY).to_bits(), 0.0f64.to_bits());
        assert_eq!(acot(f64::NEG_INFINITY).to_bits(), (-0.0f64).to_bits());
        assert_eq!(acot(0.0), FRAC_PI_2);
        assert_eq!(acot(-0.0), -FRAC_PI_2);
        assert!(acot(f64::NAN).is_nan());
        assert_relative_eq!(acot(1.0), FRAC_PI_4);
    }

    #[test]
    fn test_reciprocal_inverses() {
        assert_relative_eq!(asec(2.0), FRAC_PI_3, epsilon = 1e-15);
        assert_relative_eq!(acsc(2.0), FRAC_PI_6, epsilon = 1e-15);
        assert_relative_eq!(acoth(2.0), 0.5493061443340549, epsilon = 1e-15);
        assert!(asec(0.5).is_nan());
        assert!(acsc(-0.5).is_nan());
        assert!(acoth(0.5).is_nan());
        assert_eq!(acoth(f64::INFINITY), 0.0);
    }
}
