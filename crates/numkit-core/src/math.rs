//! Polynomial and rational function evaluation
//!
//! Coefficient tables throughout the workspace are stored in ascending
//! degree order, `c[0] + c[1]*x + c[2]*x^2 + ...`, and evaluated with
//! Horner's rule.

/// Evaluate a polynomial with ascending-degree coefficients using Horner's rule
///
/// An empty coefficient table evaluates to `0`.
///
/// # Examples
///
/// ```rust
/// use numkit_core::math::evalpoly;
///
/// // 1 + 2x + 3x^2 at x = 10
/// assert_eq!(evalpoly(&[1.0, 2.0, 3.0], 10.0), 321.0);
/// ```
#[inline]
pub fn evalpoly(c: &[f64], x: f64) -> f64 {
    let mut iter = c.iter().rev();
    let Some(&last) = iter.next() else {
        return 0.0;
    };
    iter.fold(last, |acc, &ci| ci + x * acc)
}

/// Evaluate a polynomial with descending-degree coefficients
#[inline]
fn evalpoly_reversed(c: &[f64], x: f64) -> f64 {
    let mut iter = c.iter();
    let Some(&first) = iter.next() else {
        return 0.0;
    };
    iter.fold(first, |acc, &ci| ci + x * acc)
}

/// Evaluate the rational function `P(x) / Q(x)`
///
/// Both tables are ascending-degree. For `|x| > 1` the polynomials are
/// evaluated in `1/x` with reversed coefficients, which keeps the
/// intermediate powers bounded for large arguments.
///
/// # Examples
///
/// ```rust
/// use numkit_core::math::evalrational;
///
/// let p = [1.0, 1.0];
/// let q = [2.0, 1.0];
/// assert!((evalrational(&p, &q, 0.5) - 0.6).abs() < 1e-15);
/// assert!((evalrational(&p, &q, 8.0) - 0.9).abs() < 1e-15);
/// ```
pub fn evalrational(p: &[f64], q: &[f64], x: f64) -> f64 {
    if q.is_empty() {
        return f64::NAN;
    }
    if p.is_empty() {
        return 0.0;
    }
    if x.abs() <= 1.0 {
        return evalpoly(p, x) / evalpoly(q, x);
    }
    let z = 1.0 / x;
    let ratio = evalpoly_reversed(p, z) / evalpoly_reversed(q, z);
    let shift = p.len() as i32 - q.len() as i32;
    if shift == 0 {
        ratio
    } else {
        ratio * x.powi(shift)
    }
}
