//! Strided kernels over complex vectors
//!
//! A `&[Complex<T>]` buffer is reinterpreted as an interleaved real buffer
//! `[re0, im0, re1, im1, ...]` with a zero-copy `bytemuck` cast. Strides and
//! offsets are doubled on the real view and every logical element touches
//! two consecutive slots.
//!
//! Single-precision kernels use the `c` prefix, double-precision kernels the
//! `z` prefix. The real-rotation kernels follow BLAS naming: `csrot`, `zdrot`.

use bytemuck::{cast_slice, cast_slice_mut};
use num_complex::{Complex, Complex32, Complex64};
use numkit_core::{stride2offset, Real};

/// Fill `x` with `alpha`, with an explicit offset
pub fn fill_ndarray<T: Real>(
    n: usize,
    alpha: Complex<T>,
    x: &mut [Complex<T>],
    stride: isize,
    offset: usize,
) -> &mut [Complex<T>] {
    if n == 0 {
        return x;
    }
    let xr: &mut [T] = cast_slice_mut(x);
    let sx = stride * 2;
    let mut ix = offset as isize * 2;
    for _ in 0..n {
        let i = ix as usize;
        xr[i] = alpha.re;
        xr[i + 1] = alpha.im;
        ix += sx;
    }
    x
}

/// Copy `x` into `y`, with explicit offsets
pub fn copy_ndarray<'a, T: Real>(
    n: usize,
    x: &[Complex<T>],
    stride_x: isize,
    offset_x: usize,
    y: &'a mut [Complex<T>],
    stride_y: isize,
    offset_y: usize,
) -> &'a mut [Complex<T>] {
    if n == 0 {
        return y;
    }
    let xr: &[T] = cast_slice(x);
    let yr: &mut [T] = cast_slice_mut(y);
    let (sx, sy) = (stride_x * 2, stride_y * 2);
    let mut ix = offset_x as isize * 2;
    let mut iy = offset_y as isize * 2;
    for _ in 0..n {
        let (i, j) = (ix as usize, iy as usize);
        yr[j] = xr[i];
        yr[j + 1] = xr[i + 1];
        ix += sx;
        iy += sy;
    }
    y
}

/// Interchange `x` and `y`, with explicit offsets
pub fn swap_ndarray<'a, T: Real>(
    n: usize,
    x: &mut [Complex<T>],
    stride_x: isize,
    offset_x: usize,
    y: &'a mut [Complex<T>],
    stride_y: isize,
    offset_y: usize,
) -> &'a mut [Complex<T>] {
    if n == 0 {
        return y;
    }
    let xr: &mut [T] = cast_slice_mut(x);
    let yr: &mut [T] = cast_slice_mut(y);
    let (sx, sy) = (stride_x * 2, stride_y * 2);
    let mut ix = offset_x as isize * 2;
    let mut iy = offset_y as isize * 2;
    for _ in 0..n {
        let (i, j) = (ix as usize, iy as usize);
        std::mem::swap(&mut xr[i], &mut yr[j]);
        std::mem::swap(&mut xr[i + 1], &mut yr[j + 1]);
        ix += sx;
        iy += sy;
    }
    y
}

/// Scale `x` by the complex constant `alpha`, with an explicit offset
pub fn scal_ndarray<T: Real>(
    n: usize,
    alpha: Complex<T>,
    x: &mut [Complex<T>],
    stride: isize,
    offset: usize,
) -> &mut [Complex<T>] {
    if n == 0 {
        return x;
    }
    let xr: &mut [T] = cast_slice_mut(x);
    let sx = stride * 2;
    let mut ix = offset as isize * 2;
    for _ in 0..n {
        let i = ix as usize;
        let (re, im) = (xr[i], xr[i + 1]);
        xr[i] = alpha.re * re - alpha.im * im;
        xr[i + 1] = alpha.re * im + alpha.im * re;
        ix += sx;
    }
    x
}

/// `y = alpha*x + y` for complex vectors, with explicit offsets
///
/// Returns `y` untouched when `alpha == 0 + 0i`.
#[allow(clippy::too_many_arguments)]
pub fn axpy_ndarray<'a, T: Real>(
    n: usize,
    alpha: Complex<T>,
    x: &[Complex<T>],
    stride_x: isize,
    offset_x: usize,
    y: &'a mut [Complex<T>],
    stride_y: isize,
    offset_y: usize,
) -> &'a mut [Complex<T>] {
    if n == 0 || (alpha.re == T::zero() && alpha.im == T::zero()) {
        return y;
    }
    let xr: &[T] = cast_slice(x);
    let yr: &mut [T] = cast_slice_mut(y);
    let (sx, sy) = (stride_x * 2, stride_y * 2);
    let mut ix = offset_x as isize * 2;
    let mut iy = offset_y as isize * 2;
    for _ in 0..n {
        let (i, j) = (ix as usize, iy as usize);
        let (re, im) = (xr[i], xr[i + 1]);
        yr[j] = (alpha.re * re - alpha.im * im) + yr[j];
        yr[j + 1] = (alpha.re * im + alpha.im * re) + yr[j + 1];
        ix += sx;
        iy += sy;
    }
    y
}

/// Apply the real plane rotation `(c, s)` to complex vectors, with explicit offsets
///
/// Real and imaginary parts are rotated independently. Returns `y`.
#[allow(clippy::too_many_arguments)]
pub fn rot_ndarray<'a, T: Real>(
    n: usize,
    x: &mut [Complex<T>],
    stride_x: isize,
    offset_x: usize,
    y: &'a mut [Complex<T>],
    stride_y: isize,
    offset_y: usize,
    c: T,
    s: T,
) -> &'a mut [Complex<T>] {
    if n == 0 {
        return y;
    }
    let xr: &mut [T] = cast_slice_mut(x);
    let yr: &mut [T] = cast_slice_mut(y);
    let (sx, sy) = (stride_x * 2, stride_y * 2);
    let mut ix = offset_x as isize * 2;
    let mut iy = offset_y as isize * 2;
    for _ in 0..n {
        for k in 0..2 {
            let (i, j) = (ix as usize + k, iy as usize + k);
            let (xv, yv) = (xr[i], yr[j]);
            xr[i] = c * xv + s * yv;
            yr[j] = c * yv - s * xv;
        }
        ix += sx;
        iy += sy;
    }
    y
}

macro_rules! impl_complex_unary {
    ($generic:ident, $name:ident, $ndarray:ident, $c:ty, $what:literal) => {
        #[doc = concat!($what, " (`", stringify!($c), "`)")]
        pub fn $name(n: usize, alpha: $c, x: &mut [$c], stride: isize) -> &mut [$c] {
            $generic(n, alpha, x, stride, stride2offset(n, stride))
        }

        #[doc = concat!("`", stringify!($name), "` with an explicit offset")]
        pub fn $ndarray(n: usize, alpha: $c, x: &mut [$c], stride: isize, offset: usize) -> &mut [$c] {
            $generic(n, alpha, x, stride, offset)
        }
    };
}

impl_complex_unary!(fill_ndarray, cfill, cfill_ndarray, Complex32, "Fill a complex strided vector with a constant");
impl_complex_unary!(fill_ndarray, zfill, zfill_ndarray, Complex64, "Fill a complex strided vector with a constant");
impl_complex_unary!(scal_ndarray, cscal, cscal_ndarray, Complex32, "Scale a complex strided vector by a complex constant");
impl_complex_unary!(scal_ndarray, zscal, zscal_ndarray, Complex64, "Scale a complex strided vector by a complex constant");

macro_rules! impl_complex_binary {
    ($generic:ident, $name:ident, $ndarray:ident, $c:ty, $xref:ty, $what:literal) => {
        #[doc = concat!($what, " (`", stringify!($c), "`)")]
        pub fn $name<'a>(
            n: usize,
            x: $xref,
            stride_x: isize,
            y: &'a mut [$c],
            stride_y: isize,
        ) -> &'a mut [$c] {
            let offset_x = stride2offset(n, stride_x);
            let offset_y = stride2offset(n, stride_y);
            $generic(n, x, stride_x, offset_x, y, stride_y, offset_y)
        }

        #[doc = concat!("`", stringify!($name), "` with explicit offsets")]
        pub fn $ndarray<'a>(
            n: usize,
            x: $xref,
            stride_x: isize,
            offset_x: usize,
            y: &'a mut [$c],
            stride_y: isize,
            offset_y: usize,
        ) -> &'a mut [$c] {
            $generic(n, x, stride_x, offset_x, y, stride_y, offset_y)
        }
    };
}

impl_complex_binary!(copy_ndarray, ccopy, ccopy_ndarray, Complex32, &[Complex32], "Copy one complex strided vector into another");
impl_complex_binary!(copy_ndarray, zcopy, zcopy_ndarray, Complex64, &[Complex64], "Copy one complex strided vector into another");
impl_complex_binary!(swap_ndarray, cswap, cswap_ndarray, Complex32, &mut [Complex32], "Interchange two complex strided vectors");
impl_complex_binary!(swap_ndarray, zswap, zswap_ndarray, Complex64, &mut [Complex64], "Interchange two complex strided vectors");

macro_rules! impl_complex_axpy {
    ($name:ident, $ndarray:ident, $c:ty) => {
        #[doc = concat!("`y = alpha*x + y` over `", stringify!($c), "` strided vectors")]
        pub fn $name<'a>(
            n: usize,
            alpha: $c,
            x: &[$c],
            stride_x: isize,
            y: &'a mut [$c],
            stride_y: isize,
        ) -> &'a mut [$c] {
            let offset_x = stride2offset(n, stride_x);
            let offset_y = stride2offset(n, stride_y);
            axpy_ndarray(n, alpha, x, stride_x, offset_x, y, stride_y, offset_y)
        }

        #[doc = concat!("`", stringify!($name), "` with explicit offsets")]
        #[allow(clippy::too_many_arguments)]
        pub fn $ndarray<'a>(
            n: usize,
            alpha: $c,
            x: &[$c],
            stride_x: isize,
            offset_x: usize,
            y: &'a mut [$c],
            stride_y: isize,
            offset_y: usize,
        ) -> &'a mut [$c] {
            axpy_ndarray(n, alpha, x, stride_x, offset_x, y, stride_y, offset_y)
        }
    };
}

impl_complex_axpy!(caxpy, caxpy_ndarray, Complex32);
impl_complex_axpy!(zaxpy, zaxpy_ndarray, Complex64);

macro_rules! impl_complex_rot {
    ($name:ident, $ndarray:ident, $c:ty, $t:ty) => {
        #[doc = concat!("Apply a real plane rotation to two `", stringify!($c), "` strided vectors")]
        pub fn $name<'a>(
            n: usize,
            x: &mut [$c],
            stride_x: isize,
            y: &'a mut [$c],
            stride_y: isize,
            c: $t,
            s: $t,
        ) -> &'a mut [$c] {
            let offset_x = stride2offset(n, stride_x);
            let offset_y = stride2offset(n, stride_y);
            rot_ndarray(n, x, stride_x, offset_x, y, stride_y, offset_y, c, s)
        }

        #[doc = concat!("`", stringify!($name), "` with explicit offsets")]
        #[allow(clippy::too_many_arguments)]
        pub fn $ndarray<'a>(
            n: usize,
            x: &mut [$c],
            stride_x: isize,
            offset_x: usize,
            y: &'a mut [$c],
            stride_y: isize,
            offset_y: usize,
            c: $t,
            s: $t,
        ) -> &'a mut [$c] {
            rot_ndarray(n, x, stride_x, offset_x, y, stride_y, offset_y, c, s)
        }
    };
}

impl_complex_rot!(csrot, csrot_ndarray, Complex32, f32);
impl_complex_rot!(zdrot, zdrot_ndarray, Complex64, f64);
