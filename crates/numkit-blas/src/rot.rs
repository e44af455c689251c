//! Plane rotation of two strided vectors

use numkit_core::{stride2offset, Real};

/// Apply the rotation `(c, s)` to the point pairs `(x[i], y[i])`, with explicit offsets
///
/// `x' = c*x + s*y` and `y' = c*y - s*x`. Returns `y`.
#[allow(clippy::too_many_arguments)]
pub fn rot_ndarray<'a, T: Real>(
    n: usize,
    x: &mut [T],
    stride_x: isize,
    offset_x: usize,
    y: &'a mut [T],
    stride_y: isize,
    offset_y: usize,
    c: T,
    s: T,
) -> &'a mut [T] {
    if n == 0 {
        return y;
    }
    let mut ix = offset_x as isize;
    let mut iy = offset_y as isize;
    for _ in 0..n {
        let (i, j) = (ix as usize, iy as usize);
        let (xi, yj) = (x[i], y[j]);
        x[i] = c * xi + s * yj;
        y[j] = c * yj - s * xi;
        ix += stride_x;
        iy += stride_y;
    }
    y
}

macro_rules! impl_rot {
    ($name:ident, $ndarray:ident, $t:ty) => {
        #[doc = concat!("Apply a plane rotation to two `", stringify!($t), "` strided vectors")]
        pub fn $name<'a>(
            n: usize,
            x: &mut [$t],
            stride_x: isize,
            y: &'a mut [$t],
            stride_y: isize,
            c: $t,
            s: $t,
        ) -> &'a mut [$t] {
            let offset_x = stride2offset(n, stride_x);
            let offset_y = stride2offset(n, stride_y);
            rot_ndarray(n, x, stride_x, offset_x, y, stride_y, offset_y, c, s)
        }

        #[doc = concat!("`", stringify!($name), "` with explicit offsets")]
        #[allow(clippy::too_many_arguments)]
        pub fn $ndarray<'a>(
            n: usize,
            x: &mut [$t],
            stride_x: isize,
            offset_x: usize,
            y: &'a mut [$t],
            stride_y: isize,
            offset_y: usize,
            c: $t,
            s: $t,
        ) -> &'a mut [$t] {
            rot_ndarray(n, x, stride_x, offset_x, y, stride_y, offset_y, c, s)
        }
    };
}

impl_rot!(srot, srot_ndarray, f32);
impl_rot!(drot, drot_ndarray, f64);
