//! IEEE-754 bit-level helpers for `f64`

const EXP_MASK: u64 = 0x7ff0_0000_0000_0000;
const EXP_BIAS: i32 = 1023;

/// 2^1023
const TWO_P1023: f64 = f64::from_bits(0x7fe0_0000_0000_0000);
/// 2^-969, i.e. 2^-1022 * 2^53
const TWO_M969: f64 = f64::from_bits(0x0360_0000_0000_0000);
/// 2^54, used to normalise subnormals
const TWO_P54: f64 = f64::from_bits(0x4350_0000_0000_0000);

/// Split a finite, non-zero `x` into a mantissa in `[0.5, 1)` and a power of two
///
/// `x == m * 2^e`. Zero, infinities and NaN are returned unchanged with `e == 0`.
///
/// # Examples
///
/// ```rust
/// use numkit_core::float::frexp;
///
/// assert_eq!(frexp(8.0), (0.5, 4));
/// assert_eq!(frexp(-3.0), (-0.75, 2));
/// ```
pub fn frexp(x: f64) -> (f64, i32) {
    if x == 0.0 || !x.is_finite() {
        return (x, 0);
    }
    let (mut bits, adjust) = if x.to_bits() & EXP_MASK == 0 {
        ((x * TWO_P54).to_bits(), -54)
    } else {
        (x.to_bits(), 0)
    };
    let biased = ((bits & EXP_MASK) >> 52) as i32;
    bits = (bits & !EXP_MASK) | (((EXP_BIAS - 1) as u64) << 52);
    (f64::from_bits(bits), biased - (EXP_BIAS - 1) + adjust)
}

/// Multiply `x` by `2^exp` without intermediate overflow or underflow
///
/// # Examples
///
/// ```rust
/// use numkit_core::float::ldexp;
///
/// assert_eq!(ldexp(0.5, 4), 8.0);
/// assert_eq!(ldexp(1.0, 2000), f64::INFINITY);
/// ```
pub fn ldexp(x: f64, exp: i32) -> f64 {
    if x == 0.0 || !x.is_finite() {
        return x;
    }
    let mut y = x;
    let mut n = exp;
    if n > 1023 {
        y *= TWO_P1023;
        n -= 1023;
        if n > 1023 {
            y *= TWO_P1023;
            n -= 1023;
            n = n.min(1023);
        }
    } else if n < -1022 {
        y *= TWO_M969;
        n += 1022 - 53;
        if n < -1022 {
            y *= TWO_M969;
            n += 1022 - 53;
            n = n.max(-1022);
        }
    }
    y * f64::from_bits(((EXP_BIAS + n) as u64) << 52)
}

/// Zero the low 32 bits of the significand
///
/// Used to split an argument into an exactly representable head for
/// `exp(-x*x)` style evaluations.
#[inline]
pub fn clear_low_word(x: f64) -> f64 {
    f64::from_bits(x.to_bits() & 0xffff_ffff_0000_0000)
}

/// `true` when `x` is a finite integer value
#[inline]
pub fn is_integer(x: f64) -> bool {
    x.is_finite() && x == x.trunc()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frexp_normal_values() {
        assert_eq!(frexp(1.0), (0.5, 1));
        assert_eq!(frexp(0.75), (0.75, 0));
        assert_eq!(frexp(1e300).1, 997);
        let (m, e) = frexp(123.456);
        assert!((0.5..1.0).contains(&m));
        assert_eq!(m * 2f64.powi(e), 123.456);
    }

    #[test]
    fn test_frexp_special_values() {
        assert_eq!(frexp(0.0), (0.0, 0));
        assert!(frexp(-0.0).0.is_sign_negative());
        assert_eq!(frexp(f64::INFINITY), (f64::INFINITY, 0));
        assert!(frexp(f64::NAN).0.is_nan());
    }

    #[test]
    fn test_frexp_subnormal() {
        let x = f64::MIN_POSITIVE / 8.0;
        let (m, e) = frexp(x);
        assert_eq!(m, 0.5);
        assert_eq!(e, -1024);
        assert_eq!(ldexp(m, e), x);
    }

    #[test]
    fn test_ldexp_extremes() {
        assert_eq!(ldexp(0.5, 1024), 2f64.powi(1023));
        assert_eq!(ldexp(0.5, 1025), f64::INFINITY);
        assert_eq!(ldexp(0.5, -1073), f64::from_bits(1));
        assert_eq!(ldexp(1.0, -5000), 0.0);
        assert_eq!(ldexp(-1.0, 5000), f64::NEG_INFINITY);
        assert_eq!(ldexp(0.75, 0), 0.75);
    }

    #[test]
    fn test_clear_low_word() {
        let x = 1.234_567_890_123_456_7;
        let hi = clear_low_word(x);
        assert_eq!(hi.to_bits() & 0xffff_ffff, 0);
        // Only the top 20 mantissa bits survive
        assert!((x - hi).abs() < 2f64.powi(-20));
        assert!(hi <= x);
    }

    #[test]
    fn test_is_integer() {
        assert!(is_integer(-3.0));
        assert!(!is_integer(2.5));
        assert!(!is_integer(f64::INFINITY));
        assert!(!is_integer(f64::NAN));
    }
}
