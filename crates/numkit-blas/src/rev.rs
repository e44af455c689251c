//! In-place reversal of a strided vector

use numkit_core::{stride2offset, Real};

/// Reverse `x` in place, with an explicit offset
pub fn rev_ndarray<T: Real>(n: usize, x: &mut [T], stride: isize, offset: usize) -> &mut [T] {
    if n == 0 {
        return x;
    }
    let mut ix = offset as isize;
    let mut iy = ix + (n as isize - 1) * stride;
    for _ in 0..n / 2 {
        x.swap(ix as usize, iy as usize);
        ix += stride;
        iy -= stride;
    }
    x
}

macro_rules! impl_rev {
    ($name:ident, $ndarray:ident, $t:ty) => {
        #[doc = concat!("Reverse a `", stringify!($t), "` strided vector in place")]
        pub fn $name(n: usize, x: &mut [$t], stride: isize) -> &mut [$t] {
            rev_ndarray(n, x, stride, stride2offset(n, stride))
        }

        #[doc = concat!("`", stringify!($name), "` with an explicit offset")]
        pub fn $ndarray(n: usize, x: &mut [$t], stride: isize, offset: usize) -> &mut [$t] {
            rev_ndarray(n, x, stride, offset)
        }
    };
}

impl_rev!(srev, srev_ndarray, f32);
impl_rev!(drev, drev_ndarray, f64);
