//! Strided BLAS level 1 kernels
//!
//! Every kernel operates on strided views passed as loose arguments:
//! a length `n`, a buffer, a stride and (in the `_ndarray` form) an offset.
//! Element `i` of a view lives at `offset + i * stride`.
//!
//! # Calling conventions
//!
//! - `dname(n, ..., x, stride_x, ...)` derives offsets with
//!   [`stride2offset`](numkit_core::stride2offset): `0` for positive
//!   strides and `(1 - n) * stride` for negative ones.
//! - `dname_ndarray(n, ..., x, stride_x, offset_x, ...)` takes offsets
//!   explicitly. Both forms give bit-identical results.
//! - `n == 0` returns the output buffer untouched.
//! - Kernels that write return the output slice for chaining.
//!
//! Kernels do not bounds-check their arguments beyond Rust's slice
//! indexing; [`checked`] offers the same operations over validated
//! [`StridedView`](numkit_core::StridedView)s.
//!
//! # Precision prefixes
//!
//! | Prefix | Element |
//! |---|---|
//! | `s` | `f32` |
//! | `d` | `f64` |
//! | `c` | `Complex32` |
//! | `z` | `Complex64` |
//!
//! # Example
//!
//! ```rust
//! use numkit_blas::{daxpy, ddot};
//!
//! let x = [1.0, 2.0, 3.0, 4.0, 5.0];
//! let mut y = [1.0; 5];
//! daxpy(5, 2.0, &x, 1, &mut y, 1);
//! assert_eq!(y, [3.0, 5.0, 7.0, 9.0, 11.0]);
//! assert_eq!(ddot(3, &x, 1, &y, -1), 7.0 * 1.0 + 5.0 * 2.0 + 3.0 * 3.0);
//! ```

/// Contiguous inputs take the unrolled path when the `unroll` feature is on
pub(crate) const UNROLL: bool = cfg!(feature = "unroll");

pub mod asum;
pub mod axpy;
pub mod checked;
pub mod complex;
pub mod copy;
pub mod dot;
pub mod fill;
pub mod iamax;
pub mod nrm2;
pub mod rev;
pub mod rot;
pub mod rotg;
pub mod scal;
pub mod sumkbn;
pub mod swap;

pub use asum::{dasum, dasum_ndarray, sasum, sasum_ndarray};
pub use axpy::{daxpy, daxpy_ndarray, saxpy, saxpy_ndarray};
pub use copy::{dcopy, dcopy_ndarray, scopy, scopy_ndarray};
pub use dot::{ddot, ddot_ndarray, sdot, sdot_ndarray};
pub use fill::{dfill, dfill_ndarray, sfill, sfill_ndarray};
pub use iamax::{idamax, idamax_ndarray, isamax, isamax_ndarray};
pub use nrm2::{dnrm2, dnrm2_ndarray, snrm2, snrm2_ndarray};
pub use rev::{drev, drev_ndarray, srev, srev_ndarray};
pub use rot::{drot, drot_ndarray, srot, srot_ndarray};
pub use rotg::{drotg, srotg, GivensRotation};
pub use scal::{dscal, dscal_ndarray, sscal, sscal_ndarray};
pub use sumkbn::{
    dcusumkbn, dcusumkbn_ndarray, dsumkbn, dsumkbn_ndarray, scusumkbn, scusumkbn_ndarray, ssumkbn,
    ssumkbn_ndarray,
};
pub use swap::{dswap, dswap_ndarray, sswap, sswap_ndarray};

pub use complex::{
    caxpy, caxpy_ndarray, ccopy, ccopy_ndarray, cfill, cfill_ndarray, cscal, cscal_ndarray, csrot,
    csrot_ndarray, cswap, cswap_ndarray, zaxpy, zaxpy_ndarray, zcopy, zcopy_ndarray, zdrot,
    zdrot_ndarray, zfill, zfill_ndarray, zscal, zscal_ndarray, zswap, zswap_ndarray,
};

pub use num_complex::{Complex32, Complex64};
