//! Index of the element with the largest magnitude

use numkit_core::{stride2offset, Real};

/// Logical index of the first element with maximal `|x[i]|`, with an explicit offset
///
/// Returns `None` for an empty view.
pub fn iamax_ndarray<T: Real>(n: usize, x: &[T], stride: isize, offset: usize) -> Option<usize> {
    if n == 0 {
        return None;
    }
    let mut ix = offset as isize;
    let mut best = 0;
    let mut max = x[ix as usize].abs();
    for i in 1..n {
        ix += stride;
        let v = x[ix as usize].abs();
        if v > max {
            best = i;
            max = v;
        }
    }
    Some(best)
}

macro_rules! impl_iamax {
    ($name:ident, $ndarray:ident, $t:ty) => {
        #[doc = concat!("Index of the largest-magnitude element of a `", stringify!($t), "` strided vector")]
        pub fn $name(n: usize, x: &[$t], stride: isize) -> Option<usize> {
            iamax_ndarray(n, x, stride, stride2offset(n, stride))
        }

        #[doc = concat!("`", stringify!($name), "` with an explicit offset")]
        pub fn $ndarray(n: usize, x: &[$t], stride: isize, offset: usize) -> Option<usize> {
            iamax_ndarray(n, x, stride, offset)
        }
    };
}

impl_iamax!(isamax, isamax_ndarray, f32);
impl_iamax!(idamax, idamax_ndarray, f64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_idamax() {
        let x = [1.0, -7.0, 3.0, 7.0, -2.0];
        assert_eq!(idamax(5, &x, 1), Some(1));
        assert_eq!(idamax(0, &x, 1), None);
        assert_eq!(idamax(1, &x, 1), Some(0));
    }

    #[test]
    fn test_isamax_reverse_stride() {
        let x = [5.0f32, 1.0, -9.0, 2.0];
        // logical order: 2, -9, 1, 5
        assert_eq!(isamax(4, &x, -1), Some(1));
        assert_eq!(isamax_ndarray(2, &x, 3, 0), Some(0));
    }
}
