//! Bounds-checked entry points over [`StridedView`]s
//!
//! The raw kernels trust their `(n, stride, offset)` arguments. These
//! wrappers take views whose constructors already validated the indices and
//! only add the length agreement between operands.

use numkit_core::{Error, Real, Result, StridedView, StridedViewMut};

fn same_len(expected: usize, actual: usize, context: &str) -> Result<()> {
    if expected != actual {
        return Err(Error::size_mismatch(expected, actual, context));
    }
    Ok(())
}

/// `y = alpha*x + y`
pub fn axpy<T: Real>(alpha: T, x: &StridedView<'_, T>, y: &mut StridedViewMut<'_, T>) -> Result<()> {
    same_len(x.len(), y.len(), "axpy")?;
    let (n, sy, oy) = (y.len(), y.stride(), y.offset());
    crate::axpy::axpy_ndarray(n, alpha, x.data(), x.stride(), x.offset(), y.data_mut(), sy, oy);
    Ok(())
}

/// `y = x`
pub fn copy<T: Real>(x: &StridedView<'_, T>, y: &mut StridedViewMut<'_, T>) -> Result<()> {
    same_len(x.len(), y.len(), "copy")?;
    let (n, sy, oy) = (y.len(), y.stride(), y.offset());
    crate::copy::copy_ndarray(n, x.data(), x.stride(), x.offset(), y.data_mut(), sy, oy);
    Ok(())
}

/// `x <-> y`
pub fn swap<T: Real>(x: &mut StridedViewMut<'_, T>, y: &mut StridedViewMut<'_, T>) -> Result<()> {
    same_len(x.len(), y.len(), "swap")?;
    let (n, sx, ox) = (x.len(), x.stride(), x.offset());
    let (sy, oy) = (y.stride(), y.offset());
    crate::swap::swap_ndarray(n, x.data_mut(), sx, ox, y.data_mut(), sy, oy);
    Ok(())
}

/// Plane rotation `x' = c*x + s*y`, `y' = c*y - s*x`
pub fn rot<T: Real>(
    x: &mut StridedViewMut<'_, T>,
    y: &mut StridedViewMut<'_, T>,
    c: T,
    s: T,
) -> Result<()> {
    same_len(x.len(), y.len(), "rot")?;
    let (n, sx, ox) = (x.len(), x.stride(), x.offset());
    let (sy, oy) = (y.stride(), y.offset());
    crate::rot::rot_ndarray(n, x.data_mut(), sx, ox, y.data_mut(), sy, oy, c, s);
    Ok(())
}

/// `sum x*y`
pub fn dot<T: Real>(x: &StridedView<'_, T>, y: &StridedView<'_, T>) -> Result<T> {
    same_len(x.len(), y.len(), "dot")?;
    Ok(crate::dot::dot_ndarray(
        x.len(),
        x.data(),
        x.stride(),
        x.offset(),
        y.data(),
        y.stride(),
        y.offset(),
    ))
}

/// `x = alpha*x`
pub fn scal<T: Real>(alpha: T, x: &mut StridedViewMut<'_, T>) {
    let (n, sx, ox) = (x.len(), x.stride(), x.offset());
    crate::scal::scal_ndarray(n, alpha, x.data_mut(), sx, ox);
}

/// `x = alpha`
pub fn fill<T: Real>(alpha: T, x: &mut StridedViewMut<'_, T>) {
    let (n, sx, ox) = (x.len(), x.stride(), x.offset());
    crate::fill::fill_ndarray(n, alpha, x.data_mut(), sx, ox);
}

/// `sum |x|`
pub fn asum<T: Real>(x: &StridedView<'_, T>) -> T {
    crate::asum::asum_ndarray(x.len(), x.data(), x.stride(), x.offset())
}

/// Euclidean norm
pub fn nrm2<T: Real>(x: &StridedView<'_, T>) -> T {
    crate::nrm2::nrm2_ndarray(x.len(), x.data(), x.stride(), x.offset())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checked_axpy() {
        let xs = [1.0, 2.0, 3.0, 4.0];
        let mut ys = [0.0; 4];
        let x = StridedView::from_stride(&xs, 2, 2).unwrap();
        let mut y = StridedViewMut::from_stride(&mut ys, 2, -1).unwrap();
        axpy(2.0, &x, &mut y).unwrap();
        assert_eq!(ys, [6.0, 2.0, 0.0, 0.0]);
    }

    #[test]
    fn test_checked_length_mismatch() {
        let xs = [1.0; 4];
        let mut ys = [0.0; 4];
        let x = StridedView::contiguous(&xs);
        let mut y = StridedViewMut::from_stride(&mut ys, 3, 1).unwrap();
        let err = copy(&x, &mut y).unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
        assert!(dot(&x, &y.as_view()).is_err());
    }

    #[test]
    fn test_checked_rot_swap_dot() {
        let mut a = [1.0, 2.0];
        let mut b = [3.0, 4.0];
        {
            let mut x = StridedViewMut::contiguous(&mut a);
            let mut y = StridedViewMut::contiguous(&mut b);
            swap(&mut x, &mut y).unwrap();
            rot(&mut x, &mut y, 1.0, 0.0).unwrap();
            assert_eq!(dot(&x.as_view(), &y.as_view()).unwrap(), 11.0);
        }
        assert_eq!(a, [3.0, 4.0]);
        assert_eq!(b, [1.0, 2.0]);
    }

    #[test]
    fn test_checked_unary() {
        let mut buf = [1.0f32, -2.0, 3.0];
        let mut x = StridedViewMut::contiguous(&mut buf);
        scal(2.0, &mut x);
        assert_eq!(asum(&x.as_view()), 12.0);
        fill(0.0, &mut x);
        assert_eq!(nrm2(&x.as_view()), 0.0);
    }
}
