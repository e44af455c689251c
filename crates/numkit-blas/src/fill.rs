//! `x = alpha`

use crate::UNROLL;
use numkit_core::{stride2offset, Real};

const M: usize = 8;

/// Fill `x` with `alpha`, with an explicit offset
pub fn fill_ndarray<T: Real>(
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
        xs[..m].fill(alpha);
        for c in xs[m..].chunks_exact_mut(M) {
            c.fill(alpha);
        }
        return x;
    }
    let mut ix = offset as isize;
    for _ in 0..n {
        x[ix as usize] = alpha;
        ix += stride;
    }
    x
}

macro_rules! impl_fill {
    ($name:ident, $ndarray:ident, $t:ty) => {
        #[doc = concat!("Fill a `", stringify!($t), "` strided vector with a constant")]
        pub fn $name(n: usize, alpha: $t, x: &mut [$t], stride: isize) -> &mut [$t] {
            fill_ndarray(n, alpha, x, stride, stride2offset(n, stride))
        }

        #[doc = concat!("`", stringify!($name), "` with an explicit offset")]
        pub fn $ndarray(n: usize, alpha: $t, x: &mut [$t], stride: isize, offset: usize) -> &mut [$t] {
            fill_ndarray(n, alpha, x, stride, offset)
        }
    };
}

impl_fill!(sfill, sfill_ndarray, f32);
impl_fill!(dfill, dfill_ndarray, f64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dfill() {
        let mut x = [0.0; 10];
        dfill(10, 4.5, &mut x, 1);
        assert!(x.iter().all(|&v| v == 4.5));
    }

    #[test]
    fn test_sfill_ndarray_strided() {
        let mut x = [0.0f32; 6];
        sfill_ndarray(3, 1.0, &mut x, -2, 5);
        assert_eq!(x, [0.0, 1.0, 0.0, 1.0, 0.0, 1.0]);
    }
}
