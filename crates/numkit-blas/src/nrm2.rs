//! Euclidean norm

use numkit_core::{stride2offset, Real};

/// Euclidean norm with an explicit offset
///
/// Keeps a running scale and a scaled sum of squares so that neither
/// intermediate overflows for large elements nor underflows for tiny ones.
/// Any NaN element yields NaN; otherwise any infinite element yields `+inf`.
pub fn nrm2_ndarray<T: Real>(n: usize, x: &[T], stride: isize, offset: usize) -> T {
    if n == 0 {
        return T::zero();
    }
    let mut scale = T::zero();
    let mut ssq = T::one();
    let mut saw_inf = false;
    let mut ix = offset as isize;
    for _ in 0..n {
        let v = x[ix as usize];
        ix += stride;
        if v.is_nan() {
            return T::nan();
        }
        if v.is_infinite() {
            saw_inf = true;
            continue;
        }
        if v != T::zero() {
            let av = v.abs();
            if scale < av {
                let r = scale / av;
                ssq = T::one() + ssq * r * r;
                scale = av;
            } else {
                let r = av / scale;
                ssq = ssq + r * r;
            }
        }
    }
    if saw_inf {
        return T::infinity();
    }
    scale * ssq.sqrt()
}

macro_rules! impl_nrm2 {
    ($name:ident, $ndarray:ident, $t:ty) => {
        #[doc = concat!("Euclidean norm of a `", stringify!($t), "` strided vector")]
        pub fn $name(n: usize, x: &[$t], stride: isize) -> $t {
            nrm2_ndarray(n, x, stride, stride2offset(n, stride))
        }

        #[doc = concat!("`", stringify!($name), "` with an explicit offset")]
        pub fn $ndarray(n: usize, x: &[$t], stride: isize, offset: usize) -> $t {
            nrm2_ndarray(n, x, stride, offset)
        }
    };
}

impl_nrm2!(snrm2, snrm2_ndarray, f32);
impl_nrm2!(dnrm2, dnrm2_ndarray, f64);

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_dnrm2() {
        let x = [3.0, -4.0, 12.0];
        assert_relative_eq!(dnrm2(3, &x, 1), 13.0, epsilon = 1e-13);
        assert_eq!(dnrm2(0, &x, 1), 0.0);
        assert_eq!(dnrm2(2, &[0.0, 0.0], 1), 0.0);
    }

    #[test]
    fn test_dnrm2_no_overflow_or_underflow() {
        let big = [3e200, 4e200];
        assert_relative_eq!(dnrm2(2, &big, 1), 5e200, max_relative = 1e-15);
        let tiny = [3e-200, 4e-200];
        assert_relative_eq!(dnrm2(2, &tiny, 1), 5e-200, max_relative = 1e-15);
        let big = [3e30f32, 4e30];
        assert_relative_eq!(snrm2(2, &big, 1), 5e30, max_relative = 1e-6);
    }

    #[test]
    fn test_dnrm2_special_values() {
        assert_eq!(dnrm2(3, &[1.0, f64::INFINITY, f64::NEG_INFINITY], 1), f64::INFINITY);
        assert!(dnrm2(3, &[f64::INFINITY, f64::NAN, 1.0], 1).is_nan());
    }

    #[test]
    fn test_snrm2_strided() {
        let x = [1.0f32, 100.0, 1.0, 100.0, 1.0, 100.0, 1.0];
        assert_relative_eq!(snrm2_ndarray(4, &x, 2, 0), 2.0, epsilon = 1e-6);
        assert_relative_eq!(snrm2(3, &x[1..], 2), 300.0f32.sqrt() * 10.0, max_relative = 1e-6);
    }
}
