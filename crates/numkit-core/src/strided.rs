//! Strided array views
//!
//! A strided view is the tuple `(len, stride, offset)` over a borrowed
//! buffer. Element `i` lives at `offset + i * stride`; a negative stride
//! walks the buffer backwards.
//!
//! The kernels in `numkit-blas` take these four values as loose arguments
//! and trust them. [`StridedView`] and [`StridedViewMut`] bundle the same
//! values behind a constructor that proves every index is in bounds.

use crate::error::{Error, Result};

/// Offset of the first element for a view of `n` elements with `stride`
///
/// Zero for positive strides, `(1 - n) * stride` for negative strides, so
/// that the last logical element sits at index `0`.
///
/// # Examples
///
/// ```rust
/// use numkit_core::strided::stride2offset;
///
/// assert_eq!(stride2offset(4, 2), 0);
/// assert_eq!(stride2offset(4, -2), 6);
/// assert_eq!(stride2offset(0, -3), 0);
/// ```
#[inline]
pub fn stride2offset(n: usize, stride: isize) -> usize {
    if stride > 0 || n == 0 {
        0
    } else {
        ((1 - n as isize) * stride) as usize
    }
}

/// Verify that `n` elements at `offset + i * stride` fit in a buffer of `buf_len`
pub fn check_bounds(buf_len: usize, n: usize, stride: isize, offset: usize) -> Result<()> {
    if n == 0 {
        return Ok(());
    }
    if n > 1 && stride == 0 {
        return Err(Error::zero_stride(n));
    }
    let first = offset as isize;
    let last = (n as isize - 1)
        .checked_mul(stride)
        .and_then(|span| first.checked_add(span))
        .ok_or_else(|| Error::out_of_bounds(isize::MAX, buf_len))?;
    for idx in [first, last] {
        if idx < 0 || idx as usize >= buf_len {
            return Err(Error::out_of_bounds(idx, buf_len));
        }
    }
    Ok(())
}

/// Iterator over the buffer positions of a strided view
#[derive(Debug, Clone)]
pub struct StridedIndices {
    next: isize,
    stride: isize,
    remaining: usize,
}

impl StridedIndices {
    pub fn new(n: usize, stride: isize, offset: usize) -> Self {
        Self {
            next: offset as isize,
            stride,
            remaining: n,
        }
    }
}

impl Iterator for StridedIndices {
    type Item = usize;

    #[inline]
    fn next(&mut self) -> Option<usize> {
        if self.remaining == 0 {
            return None;
        }
        let idx = self.next as usize;
        self.remaining -= 1;
        self.next += self.stride;
        Some(idx)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for StridedIndices {}

/// Read-only strided view with validated bounds
#[derive(Debug, Clone, Copy)]
pub struct StridedView<'a, T> {
    data: &'a [T],
    len: usize,
    stride: isize,
    offset: usize,
}

impl<'a, T> StridedView<'a, T> {
    /// Create a view with an explicit offset
    pub fn new(data: &'a [T], len: usize, stride: isize, offset: usize) -> Result<Self> {
        check_bounds(data.len(), len, stride, offset)?;
        Ok(Self {
            data,
            len,
            stride,
            offset,
        })
    }

    /// Create a view whose offset follows [`stride2offset`]
    pub fn from_stride(data: &'a [T], len: usize, stride: isize) -> Result<Self> {
        Self::new(data, len, stride, stride2offset(len, stride))
    }

    /// View the whole slice with unit stride
    pub fn contiguous(data: &'a [T]) -> Self {
        Self {
            data,
            len: data.len(),
            stride: 1,
            offset: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn stride(&self) -> isize {
        self.stride
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    /// The underlying buffer
    pub fn data(&self) -> &'a [T] {
        self.data
    }

    /// Logical element `i`
    pub fn get(&self, i: usize) -> Option<&'a T> {
        if i >= self.len {
            return None;
        }
        let idx = self.offset as isize + i as isize * self.stride;
        self.data.get(idx as usize)
    }

    pub fn indices(&self) -> StridedIndices {
        StridedIndices::new(self.len, self.stride, self.offset)
    }

    /// Iterate the logical elements in order
    pub fn iter(&self) -> impl Iterator<Item = &'a T> + 'a {
        let data = self.data;
        self.indices().map(move |i| &data[i])
    }
}

/// Mutable strided view with validated bounds
#[derive(Debug)]
pub struct StridedViewMut<'a, T> {
    data: &'a mut [T],
    len: usize,
    stride: isize,
    offset: usize,
}

impl<'a, T> StridedViewMut<'a, T> {
    /// Create a view with an explicit offset
    pub fn new(data: &'a mut [T], len: usize, stride: isize, offset: usize) -> Result<Self> {
        check_bounds(data.len(), len, stride, offset)?;
        Ok(Self {
            data,
            len,
            stride,
            offset,
        })
    }

    /// Create a view whose offset follows [`stride2offset`]
    pub fn from_stride(data: &'a mut [T], len: usize, stride: isize) -> Result<Self> {
        let offset = stride2offset(len, stride);
        Self::new(data, len, stride, offset)
    }

    /// View the whole slice with unit stride
    pub fn contiguous(data: &'a mut [T]) -> Self {
        let len = data.len();
        Self {
            data,
            len,
            stride: 1,
            offset: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn stride(&self) -> isize {
        self.stride
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn data(&self) -> &[T] {
        &*self.data
    }

    pub fn data_mut(&mut self) -> &mut [T] {
        &mut *self.data
    }

    /// Reborrow as a read-only view
    pub fn as_view(&self) -> StridedView<'_, T> {
        StridedView {
            data: &*self.data,
            len: self.len,
            stride: self.stride,
            offset: self.offset,
        }
    }

    /// Logical element `i`
    pub fn get_mut(&mut self, i: usize) -> Option<&mut T> {
        if i >= self.len {
            return None;
        }
        let idx = self.offset as isize + i as isize * self.stride;
        self.data.get_mut(idx as usize)
    }

    pub fn indices(&self) -> StridedIndices {
        StridedIndices::new(self.len, self.stride, self.offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stride2offset() {
        assert_eq!(stride2offset(5, 1), 0);
        assert_eq!(stride2offset(5, -1), 4);
        assert_eq!(stride2offset(3, -4), 8);
        assert_eq!(stride2offset(1, -7), 0);
        assert_eq!(stride2offset(0, 2), 0);
    }

    #[test]
    fn test_check_bounds() {
        assert!(check_bounds(10, 0, 0, 99).is_ok());
        assert!(check_bounds(10, 5, 2, 0).is_ok());
        assert!(check_bounds(10, 5, -2, 8).is_ok());
        assert!(check_bounds(10, 1, 0, 9).is_ok());

        assert!(matches!(
            check_bounds(10, 6, 2, 0),
            Err(Error::OutOfBounds { index: 10, len: 10 })
        ));
        assert!(matches!(
            check_bounds(10, 5, -2, 7),
            Err(Error::OutOfBounds { index: -1, len: 10 })
        ));
        assert!(matches!(check_bounds(10, 3, 0, 0), Err(Error::InvalidInput(_))));
        assert!(check_bounds(10, 3, isize::MAX, 0).is_err());
    }

    #[test]
    fn test_view_iteration() {
        let data = [0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
        let view = StridedView::new(&data, 3, 3, 0).unwrap();
        assert_eq!(view.iter().copied().collect::<Vec<_>>(), vec![0.0, 3.0, 6.0]);

        let rev = StridedView::from_stride(&data, 4, -2).unwrap();
        assert_eq!(rev.offset(), 6);
        assert_eq!(rev.iter().copied().collect::<Vec<_>>(), vec![6.0, 4.0, 2.0, 0.0]);
        assert_eq!(rev.get(1), Some(&4.0));
        assert_eq!(rev.get(4), None);
        assert_eq!(rev.indices().len(), 4);
    }

    #[test]
    fn test_view_mut() {
        let mut data = vec![0.0; 6];
        let mut view = StridedViewMut::from_stride(&mut data, 3, -2).unwrap();
        for (k, i) in (0..view.len()).enumerate() {
            *view.get_mut(i).unwrap() = k as f64 + 1.0;
        }
        assert_eq!(view.as_view().iter().copied().collect::<Vec<_>>(), vec![1.0, 2.0, 3.0]);
        assert_eq!(data, vec![3.0, 0.0, 2.0, 0.0, 1.0, 0.0]);

        let mut short = [1.0, 2.0];
        assert!(StridedViewMut::new(&mut short, 2, 1, 1).is_err());
        assert_eq!(StridedViewMut::contiguous(&mut short).len(), 2);
    }
}
