//! `y = x`

use crate::UNROLL;
use numkit_core::{stride2offset, Real};

const M: usize = 8;

/// Copy `x` into `y`, with explicit offsets
#[allow(clippy::too_many_arguments)]
pub fn copy_ndarray<'a, T: Real>(
    n: usize,
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
    if UNROLL && stride_x == 1 && stride_y == 1 {
        let xs = &x[offset_x..offset_x + n];
        let ys = &mut y[offset_y..offset_y + n];
        let m = n % M;
        ys[..m].copy_from_slice(&xs[..m]);
        for (yc, xc) in ys[m..].chunks_exact_mut(M).zip(xs[m..].chunks_exact(M)) {
            yc.copy_from_slice(xc);
        }
        return y;
    }
    let mut ix = offset_x as isize;
    let mut iy = offset_y as isize;
    for _ in 0..n {
        y[iy as usize] = x[ix as usize];
        ix += stride_x;
        iy += stride_y;
    }
    y
}

macro_rules! impl_copy {
    ($name:ident, $ndarray:ident, $t:ty) => {
        #[doc = concat!("Copy one `", stringify!($t), "` strided vector into another")]
        pub fn $name<'a>(
            n: usize,
            x: &[$t],
            stride_x: isize,
            y: &'a mut [$t],
            stride_y: isize,
        ) -> &'a mut [$t] {
            copy_ndarray(
                n,
                x,
                stride_x,
                stride2offset(n, stride_x),
                y,
                stride_y,
                stride2offset(n, stride_y),
            )
        }

        #[doc = concat!("`", stringify!($name), "` with explicit offsets")]
        pub fn $ndarray<'a>(
            n: usize,
            x: &[$t],
            stride_x: isize,
            offset_x: usize,
            y: &'a mut [$t],
            stride_y: isize,
            offset_y: usize,
        ) -> &'a mut [$t] {
            copy_ndarray(n, x, stride_x, offset_x, y, stride_y, offset_y)
        }
    };
}

impl_copy!(scopy, scopy_ndarray, f32);
impl_copy!(dcopy, dcopy_ndarray, f64);
