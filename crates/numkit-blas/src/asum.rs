//! Sum of absolute values

use crate::UNROLL;
use numkit_core::{stride2offset, Real};

const M: usize = 6;

/// Sum of `|x[i]|` with an explicit offset
pub fn asum_ndarray<T: Real>(n: usize, x: &[T], stride: isize, offset: usize) -> T {
    let mut acc = T::zero();
    if n == 0 {
        return acc;
    }
    if UNROLL && stride == 1 {
        let xs = &x[offset..offset + n];
        let m = n % M;
        for &xi in &xs[..m] {
            acc = acc + xi.abs();
        }
        for c in xs[m..].chunks_exact(M) {
            acc = acc + c[0].abs();
            acc = acc + c[1].abs();
            acc = acc + c[2].abs();
            acc = acc + c[3].abs();
            acc = acc + c[4].abs();
            acc = acc + c[5].abs();
        }
        return acc;
    }
    let mut ix = offset as isize;
    for _ in 0..n {
        acc = acc + x[ix as usize].abs();
        ix += stride;
    }
    acc
}

macro_rules! impl_asum {
    ($name:ident, $ndarray:ident, $t:ty) => {
        #[doc = concat!("Sum of absolute values of a `", stringify!($t), "` strided vector")]
        pub fn $name(n: usize, x: &[$t], stride: isize) -> $t {
            asum_ndarray(n, x, stride, stride2offset(n, stride))
        }

        #[doc = concat!("`", stringify!($name), "` with an explicit offset")]
        pub fn $ndarray(n: usize, x: &[$t], stride: isize, offset: usize) -> $t {
            asum_ndarray(n, x, stride, offset)
        }
    };
}

impl_asum!(sasum, sasum_ndarray, f32);
impl_asum!(dasum, dasum_ndarray, f64);
