//! `x = alpha*x`

use crate::UNROLL;
use numkit_core::{stride2offset, Real};

const M: usize = 5;

/// Scale `x` in place by `alpha`, with an explicit offset
pub fn scal_ndarray<T: Real>(
    n: usize,
    alpha: T,
    x: &mut [T],
    stride: isize,
    offset: usize,
) -> &mut [T] {
    if n == 0 {
        return x;
    }
    if UNROLL && stride == 1 {
        let xs = &mut x[offset..offset + n];
        let m = n % M;
        for xi in &mut xs[..m] {
            *xi = alpha * *xi;
        }
        for c in xs[m..].chunks_exact_mut(M) {
            c[0] = alpha * c[0];
            c[1] = alpha * c[1];
            c[2] = alpha * c[2];
            c[3] = alpha * c[3];
            c[4] = alpha * c[4];
        }
        return x;
    }
    let mut ix = offset as isize;
    for _ in 0..n {
        let i = ix as usize;
        x[i] = alpha * x[i];
        ix += stride;
    }
    x
}

macro_rules! impl_scal {
    ($name:ident, $ndarray:ident, $t:ty) => {
        #[doc = concat!("Scale a `", stringify!($t), "` strided vector by a constant")]
        pub fn $name(n: usize, alpha: $t, x: &mut [$t], stride: isize) -> &mut [$t] {
            scal_ndarray(n, alpha, x, stride, stride2offset(n, stride))
        }

        #[doc = concat!("`", stringify!($name), "` with an explicit offset")]
        pub fn $ndarray(n: usize, alpha: $t, x: &mut [$t], stride: isize, offset: usize) -> &mut [$t] {
            scal_ndarray(n, alpha, x, stride, offset)
        }
    };
}

impl_scal!(sscal, sscal_ndarray, f32);
impl_scal!(dscal, dscal_ndarray, f64);
