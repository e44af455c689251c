//! `y = alpha*x + y`

use crate::UNROLL;
use numkit_core::{stride2offset, Real};

/// Unroll factor for contiguous inputs
const M: usize = 4;

/// Multiply `x` by `alpha` and add the result to `y`, with explicit offsets
///
/// Returns `y` untouched when `n == 0` or `alpha == 0`.
#[allow(clippy::too_many_arguments)]
pub fn axpy_ndarray<'a, T: Real>(
    n: usize,
    alpha: T,
    x: &[T],
    stride_x: isize,
    offset_x: usize,
    y: &'a mut [T],
    stride_y: isize,
    offset_y: usize,
) -> &'a mut [T] {
    if n == 0 || alpha == T::zero() {
        return y;
    }
    if UNROLL && stride_x == 1 && stride_y == 1 {
        let xs = &x[offset_x..offset_x + n];
        let ys = &mut y[offset_y..offset_y + n];
        let m = n % M;
        for (yi, &xi) in ys[..m].iter_mut().zip(&xs[..m]) {
            *yi = alpha * xi + *yi;
        }
        for (yc, xc) in ys[m..].chunks_exact_mut(M).zip(xs[m..].chunks_exact(M)) {
            yc[0] = alpha * xc[0] + yc[0];
            yc[1] = alpha * xc[1] + yc[1];
            yc[2] = alpha * xc[2] + yc[2];
            yc[3] = alpha * xc[3] + yc[3];
        }
        return y;
    }
    let mut ix = offset_x as isize;
    let mut iy = offset_y as isize;
    for _ in 0..n {
        let (i, j) = (ix as usize, iy as usize);
        y[j] = alpha * x[i] + y[j];
        ix += stride_x;
        iy += stride_y;
    }
    y
}

macro_rules! impl_axpy {
    ($name:ident, $ndarray:ident, $t:ty) => {
        #[doc = concat!("`y = alpha*x + y` over `", stringify!($t), "` strided vectors")]
        ///
        /// Offsets follow the [`stride2offset`] convention.
        pub fn $name<'a>(
            n: usize,
            alpha: $t,
            x: &[$t],
            stride_x: isize,
            y: &'a mut [$t],
            stride_y: isize,
        ) -> &'a mut [$t] {
            axpy_ndarray(
                n,
                alpha,
                x,
                stride_x,
                stride2offset(n, stride_x),
                y,
                stride_y,
                stride2offset(n, stride_y),
            )
        }

        #[doc = concat!("`", stringify!($name), "` with explicit offsets")]
        #[allow(clippy::too_many_arguments)]
        pub fn $ndarray<'a>(
            n: usize,
            alpha: $t,
            x: &[$t],
            stride_x: isize,
            offset_x: usize,
            y: &'a mut [$t],
            stride_y: isize,
            offset_y: usize,
        ) -> &'a mut [$t] {
            axpy_ndarray(n, alpha, x, stride_x, offset_x, y, stride_y, offset_y)
        }
    };
}

impl_axpy!(saxpy, saxpy_ndarray, f32);
impl_axpy!(daxpy, daxpy_ndarray, f64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_saxpy_contiguous() {
        let x = [1.0f32, 2.0, 3.0, 4.0, 5.0];
        let mut y = [1.0f32; 5];
        saxpy(5, 2.0, &x, 1, &mut y, 1);
        assert_eq!(y, [3.0, 5.0, 7.0, 9.0, 11.0]);
    }

    #[test]
    fn test_daxpy_negative_strides() {
        let x = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
        let mut y = [10.0, 20.0, 30.0];
        // x visited as 5, 3, 1; y visited as 30, 20, 10
        daxpy(3, 1.0, &x, -2, &mut y, -1);
        assert_eq!(y, [11.0, 23.0, 35.0]);
    }

    #[test]
    fn test_daxpy_ndarray_offsets() {
        let x = [0.0, 0.0, 1.0, 1.0];
        let mut y = [5.0, 5.0, 5.0, 5.0];
        daxpy_ndarray(2, 3.0, &x, 1, 2, &mut y, 2, 0);
        assert_eq!(y, [8.0, 5.0, 8.0, 5.0]);
    }

    #[test]
    fn test_axpy_short_circuits() {
        let x = [f64::NAN; 3];
        let mut y = [1.0, 2.0, 3.0];
        daxpy(3, 0.0, &x, 1, &mut y, 1);
        assert_eq!(y, [1.0, 2.0, 3.0]);
        daxpy(0, 2.0, &x, 1, &mut y, 1);
        assert_eq!(y, [1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_axpy_returns_output_for_chaining() {
        let x = [1.0; 9];
        let mut y = [0.0; 9];
        let out = daxpy(9, 0.5, &x, 1, &mut y, 1);
        out[0] = -1.0;
        assert_eq!(y[0], -1.0);
        assert_eq!(y[8], 0.5);
    }
}
