//! Digamma function for positive arguments, used by the gamma-family entropies

use numkit_core::math::evalpoly;

/// Coefficients of the asymptotic series in `1/x^2`: `B_2k / (2k)`
const ASYMPTOTIC: [f64; 7] = [
    1.0 / 12.0,
    -1.0 / 120.0,
    1.0 / 252.0,
    -1.0 / 240.0,
    1.0 / 132.0,
    -691.0 / 32760.0,
    1.0 / 12.0,
];

/// `ψ(x)` for `x > 0`
///
/// Shifts the argument above `10` with `ψ(x) = ψ(x + 1) - 1/x`, then uses
/// `ln x - 1/(2x) - Σ B_2k / (2k x^2k)`.
pub(crate) fn digamma(x: f64) -> f64 {
    if x.is_nan() || x <= 0.0 {
        return f64::NAN;
    }
    if x == f64::INFINITY {
        return f64::INFINITY;
    }
    let mut x = x;
    let mut shift = 0.0;
    while x < 10.0 {
        shift += 1.0 / x;
        x += 1.0;
    }
    let z = 1.0 / (x * x);
    x.ln() - 0.5 / x - z * evalpoly(&ASYMPTOTIC, z) - shift
}
