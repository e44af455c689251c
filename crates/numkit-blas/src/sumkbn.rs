//! Compensated strided sums (Kahan-Babuska-Neumaier)
//!
//! These reductions are order dependent and never unrolled.

use numkit_core::{stride2offset, Real};

/// One Neumaier step: returns the new running sum and updates the compensation
#[inline]
pub(crate) fn kbn_step<T: Real>(sum: T, v: T, comp: &mut T) -> T {
    let t = sum + v;
    if sum.abs() >= v.abs() {
        *comp = *comp + ((sum - t) + v);
    } else {
        *comp = *comp + ((v - t) + sum);
    }
    t
}

/// Compensated sum of a strided vector, with an explicit offset
pub fn sumkbn_ndarray<T: Real>(n: usize, x: &[T], stride: isize, offset: usize) -> T {
    if n == 0 {
        return T::zero();
    }
    let mut sum = T::zero();
    let mut comp = T::zero();
    let mut ix = offset as isize;
    for _ in 0..n {
        sum = kbn_step(sum, x[ix as usize], &mut comp);
        ix += stride;
    }
    sum + comp
}

/// Compensated cumulative sum, with explicit offsets
///
/// `y[i] = sum + x[0] + ... + x[i]`. Returns `y`.
#[allow(clippy::too_many_arguments)]
pub fn cusumkbn_ndarray<'a, T: Real>(
    n: usize,
    sum: T,
    x: &[T],
    stride_x: isize,
    offset_x: usize,
    y: &'a mut [T],
    stride_y: isize,
    offset_y: usize,
) -> &'a mut [T] {
    if n == 0 {
        return y;
    }
    let mut s = sum;
    let mut comp = T::zero();
    let mut ix = offset_x as isize;
    let mut iy = offset_y as isize;
    for _ in 0..n {
        s = kbn_step(s, x[ix as usize], &mut comp);
        y[iy as usize] = s + comp;
        ix += stride_x;
        iy += stride_y;
    }
    y
}

macro_rules! impl_sumkbn {
    ($sum:ident, $sum_nd:ident, $cusum:ident, $cusum_nd:ident, $t:ty) => {
        #[doc = concat!("Compensated sum of a `", stringify!($t), "` strided vector")]
        ///
        /// Returns `0` when `n == 0`.
        pub fn $sum(n: usize, x: &[$t], stride: isize) -> $t {
            sumkbn_ndarray(n, x, stride, stride2offset(n, stride))
        }

        #[doc = concat!("`", stringify!($sum), "` with an explicit offset")]
        pub fn $sum_nd(n: usize, x: &[$t], stride: isize, offset: usize) -> $t {
            sumkbn_ndarray(n, x, stride, offset)
        }

        #[doc = concat!("Compensated cumulative sum of a `", stringify!($t), "` strided vector")]
        pub fn $cusum<'a>(
            n: usize,
            sum: $t,
            x: &[$t],
            stride_x: isize,
            y: &'a mut [$t],
            stride_y: isize,
        ) -> &'a mut [$t] {
            let offset_x = stride2offset(n, stride_x);
            let offset_y = stride2offset(n, stride_y);
            cusumkbn_ndarray(n, sum, x, stride_x, offset_x, y, stride_y, offset_y)
        }

        #[doc = concat!("`", stringify!($cusum), "` with explicit offsets")]
        #[allow(clippy::too_many_arguments)]
        pub fn $cusum_nd<'a>(
            n: usize,
            sum: $t,
            x: &[$t],
            stride_x: isize,
            offset_x: usize,
            y: &'a mut [$t],
            stride_y: isize,
            offset_y: usize,
        ) -> &'a mut [$t] {
            cusumkbn_ndarray(n, sum, x, stride_x, offset_x, y, stride_y, offset_y)
        }
    };
}

impl_sumkbn!(ssumkbn, ssumkbn_ndarray, scusumkbn, scusumkbn_ndarray, f32);
impl_sumkbn!(dsumkbn, dsumkbn_ndarray, dcusumkbn, dcusumkbn_ndarray, f64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dsumkbn_recovers_cancelled_terms() {
        let x = [1.0, 1e100, 1.0, -1e100];
        assert_eq!(dsumkbn(4, &x, 1), 2.0);

        let naive: f64 = x.iter().sum();
        assert_eq!(naive, 0.0);
    }

    #[test]
    fn test_dsumkbn_strided() {
        let x = [1.0, 99.0, 2.0, 99.0, 3.0];
        assert_eq!(dsumkbn(3, &x, 2), 6.0);
        assert_eq!(dsumkbn_ndarray(2, &x, -1, 1), 100.0);
        assert_eq!(dsumkbn(0, &x, 1), 0.0);
    }

    #[test]
    fn test_ssumkbn_many_small_terms() {
        let x = vec![0.1f32; 10_000];
        let s = ssumkbn(x.len(), &x, 1);
        assert!((s - 1000.0).abs() < 1e-3);
    }

    #[test]
    fn test_dcusumkbn() {
        let x = [1.0, 2.0, 3.0, 4.0];
        let mut y = [0.0; 4];
        dcusumkbn(4, 10.0, &x, 1, &mut y, 1);
        assert_eq!(y, [11.0, 13.0, 16.0, 20.0]);

        let mut y = [0.0; 4];
        dcusumkbn(4, 0.0, &x, 1, &mut y, -1);
        assert_eq!(y, [10.0, 6.0, 3.0, 1.0]);
    }

    #[test]
    fn test_scusumkbn_zero_length() {
        let mut y = [7.0f32; 2];
        scusumkbn(0, 1.0, &[1.0, 2.0], 1, &mut y, 1);
        assert_eq!(y, [7.0, 7.0]);
    }
}
