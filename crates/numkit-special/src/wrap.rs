//! Range reduction into a half-open interval

/// Wrap `v` into `[min, max)`
///
/// Returns NaN when any argument is NaN or when `max <= min`. Negative zero
/// arguments are treated as positive zero.
///
/// # Examples
///
/// ```rust
/// use numkit_special::wrap;
///
/// assert_eq!(wrap(13.0, 0.0, 5.0), 3.0);
/// assert!((wrap(-3.15, 0.0, 5.0) - 1.85).abs() < 1e-12);
/// assert!(wrap(1.0, 5.0, 0.0).is_nan());
/// ```
pub fn wrap(v: f64, min: f64, max: f64) -> f64 {
    if v.is_nan() || min.is_nan() || max.is_nan() || max <= min {
        return f64::NAN;
    }
    // -0 + 0 == +0
    let mut v = v + 0.0;
    let min = min + 0.0;
    let max = max + 0.0;
    if min <= v && v < max {
        return v;
    }
    let delta = max - min;
    if v < min {
        v += delta * (((min - v) / delta).trunc() + 1.0);
    }
    min + (v - min) % delta
}
