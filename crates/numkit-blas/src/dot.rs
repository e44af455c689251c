//! Dot product of two strided vectors

use crate::UNROLL;
use numkit_core::{stride2offset, Real};

const M: usize = 5;

/// Dot product with explicit offsets
///
/// The unrolled path accumulates in the same left-to-right order as the
/// strided path, so both produce identical sums.
pub fn dot_ndarray<T: Real>(
    n: usize,
    x: &[T],
    stride_x: isize,
    offset_x: usize,
    y: &[T],
    stride_y: isize,
    offset_y: usize,
) -> T {
    let mut acc = T::zero();
    if n == 0 {
        return acc;
    }
    if UNROLL && stride_x == 1 && stride_y == 1 {
        let xs = &x[offset_x..offset_x + n];
        let ys = &y[offset_y..offset_y + n];
        let m = n % M;
        for (&xi, &yi) in xs[..m].iter().zip(&ys[..m]) {
            acc = acc + xi * yi;
        }
        for (xc, yc) in xs[m..].chunks_exact(M).zip(ys[m..].chunks_exact(M)) {
            acc = acc + xc[0] * yc[0];
            acc = acc + xc[1] * yc[1];
            acc = acc + xc[2] * yc[2];
            acc = acc + xc[3] * yc[3];
            acc = acc + xc[4] * yc[4];
        }
        return acc;
    }
    let mut ix = offset_x as isize;
    let mut iy = offset_y as isize;
    for _ in 0..n {
        acc = acc + x[ix as usize] * y[iy as usize];
        ix += stride_x;
        iy += stride_y;
    }
    acc
}

macro_rules! impl_dot {
    ($name:ident, $ndarray:ident, $t:ty) => {
        #[doc = concat!("Dot product of two `", stringify!($t), "` strided vectors")]
        ///
        /// Returns `0` when `n == 0`.
        pub fn $name(n: usize, x: &[$t], stride_x: isize, y: &[$t], stride_y: isize) -> $t {
            let offset_x = stride2offset(n, stride_x);
            let offset_y = stride2offset(n, stride_y);
            dot_ndarray(n, x, stride_x, offset_x, y, stride_y, offset_y)
        }

        #[doc = concat!("`", stringify!($name), "` with explicit offsets")]
        pub fn $ndarray(
            n: usize,
            x: &[$t],
            stride_x: isize,
            offset_x: usize,
            y: &[$t],
            stride_y: isize,
            offset_y: usize,
        ) -> $t {
            dot_ndarray(n, x, stride_x, offset_x, y, stride_y, offset_y)
        }
    };
}

impl_dot!(sdot, sdot_ndarray, f32);
impl_dot!(ddot, ddot_ndarray, f64);
