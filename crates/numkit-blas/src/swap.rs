//! `x <-> y`

use crate::UNROLL;
use numkit_core::{stride2offset, Real};

const M: usize = 3;

/// Interchange `x` and `y`, with explicit offsets
///
/// Returns `y`.
#[allow(clippy::too_many_arguments)]
pub fn swap_ndarray<'a, T: Real>(
    n: usize,
    x: &mut [T],
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
        let xs = &mut x[offset_x..offset_x + n];
        let ys = &mut y[offset_y..offset_y + n];
        let m = n % M;
        xs[..m].swap_with_slice(&mut ys[..m]);
        for (xc, yc) in xs[m..].chunks_exact_mut(M).zip(ys[m..].chunks_exact_mut(M)) {
            std::mem::swap(&mut xc[0], &mut yc[0]);
            std::mem::swap(&mut xc[1], &mut yc[1]);
            std::mem::swap(&mut xc[2], &mut yc[2]);
        }
        return y;
    }
    let mut ix = offset_x as isize;
    let mut iy = offset_y as isize;
    for _ in 0..n {
        std::mem::swap(&mut x[ix as usize], &mut y[iy as usize]);
        ix += stride_x;
        iy += stride_y;
    }
    y
}

macro_rules! impl_swap {
    ($name:ident, $ndarray:ident, $t:ty) => {
        #[doc = concat!("Interchange two `", stringify!($t), "` strided vectors")]
        pub fn $name<'a>(
            n: usize,
            x: &mut [$t],
            stride_x: isize,
            y: &'a mut [$t],
            stride_y: isize,
        ) -> &'a mut [$t] {
            let offset_x = stride2offset(n, stride_x);
            let offset_y = stride2offset(n, stride_y);
            swap_ndarray(n, x, stride_x, offset_x, y, stride_y, offset_y)
        }

        #[doc = concat!("`", stringify!($name), "` with explicit offsets")]
        pub fn $ndarray<'a>(
            n: usize,
            x: &mut [$t],
            stride_x: isize,
            offset_x: usize,
            y: &'a mut [$t],
            stride_y: isize,
            offset_y: usize,
        ) -> &'a mut [$t] {
            swap_ndarray(n, x, stride_x, offset_x, y, stride_y, offset_y)
        }
    };
}

impl_swap!(sswap, sswap_ndarray, f32);
impl_swap!(dswap, dswap_ndarray, f64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dswap_contiguous() {
        let mut x = [1.0, 2.0, 3.0, 4.0, 5.0];
        let mut y = [6.0, 7.0, 8.0, 9.0, 10.0];
        dswap(5, &mut x, 1, &mut y, 1);
        assert_eq!(x, [6.0, 7.0, 8.0, 9.0, 10.0]);
        assert_eq!(y, [1.0, 2.0, 3.0, 4.0, 5.0]);
    }

    #[test]
    fn test_sswap_mixed_strides() {
        let mut x = [1.0f32, 2.0, 3.0, 4.0];
        let mut y = [7.0f32, 8.0];
        sswap(2, &mut x, 2, &mut y, -1);
        assert_eq!(x, [8.0, 2.0, 7.0, 4.0]);
        assert_eq!(y, [3.0, 1.0]);
    }
}
