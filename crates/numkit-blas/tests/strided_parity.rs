//! Unrolled (unit stride) and strided paths must agree bit for bit

mod common;

use common::*;
use numkit_blas::*;
use proptest::prelude::*;

const STRIDES: [isize; 4] = [2, 3, -1, -2];

#[test]
fn test_axpy_unrolled_matches_strided() {
    for n in edge_case_lengths() {
        let x = generate_test_data(n);
        let y = generate_test_data_complement(n);

        let mut contiguous = y.clone();
        daxpy(n, 1.7, &x, 1, &mut contiguous, 1);

        for stride in STRIDES {
            let xs = spread(&x, stride);
            let mut ys = spread(&y, -stride);
            daxpy(n, 1.7, &xs, stride, &mut ys, -stride);
            assert_bitwise_equal(&gather(&ys, n, -stride), &contiguous, &format!("daxpy n={n} stride={stride}"));
        }
    }
}

#[test]
fn test_scal_fill_copy_unrolled_matches_strided() {
    for n in edge_case_lengths() {
        let x = generate_test_data(n);

        let mut scaled = x.clone();
        dscal(n, -0.3, &mut scaled, 1);
        let mut filled = x.clone();
        dfill(n, 2.5, &mut filled, 1);
        let mut copied = vec![0.0; n];
        dcopy(n, &x, 1, &mut copied, 1);
        assert_eq!(copied, x);

        for stride in STRIDES {
            let mut xs = spread(&x, stride);
            dscal(n, -0.3, &mut xs, stride);
            assert_bitwise_equal(&gather(&xs, n, stride), &scaled, &format!("dscal n={n}"));

            let mut xs = spread(&x, stride);
            dfill(n, 2.5, &mut xs, stride);
            assert_bitwise_equal(&gather(&xs, n, stride), &filled, &format!("dfill n={n}"));

            let mut ys = spread(&vec![0.0; n], stride);
            let xs = spread(&x, 1);
            dcopy(n, &xs, 1, &mut ys, stride);
            assert_bitwise_equal(&gather(&ys, n, stride), &x, &format!("dcopy n={n}"));
        }
    }
}

#[test]
fn test_swap_unrolled_matches_strided() {
    for n in edge_case_lengths() {
        let x = generate_test_data(n);
        let y = generate_test_data_complement(n);
        for stride in STRIDES {
            let mut xs = spread(&x, stride);
            let mut ys = y.clone();
            dswap(n, &mut xs, stride, &mut ys, 1);
            assert_bitwise_equal(&gather(&xs, n, stride), &y, "dswap x");
            assert_bitwise_equal(&ys, &x, "dswap y");
        }
    }
}

#[test]
fn test_reductions_unrolled_match_strided() {
    for n in edge_case_lengths() {
        let x: Vec<f64> = generate_test_data(n).iter().map(|v| v.sin() * 1e3).collect();
        let y: Vec<f64> = generate_test_data_complement(n).iter().map(|v| v.cos()).collect();
        let dot = ddot(n, &x, 1, &y, 1);
        let asum = dasum(n, &x, 1);
        for stride in STRIDES {
            let xs = spread(&x, stride);
            let ys = spread(&y, stride);
            assert_eq!(ddot(n, &xs, stride, &ys, stride).to_bits(), dot.to_bits());
            assert_eq!(dasum(n, &xs, stride).to_bits(), asum.to_bits());
        }
    }
}

#[test]
fn test_untouched_slots_stay_untouched() {
    let n = 17;
    let x = generate_test_data(n);
    let mut ys = spread(&generate_test_data_complement(n), 3);
    daxpy(n, 2.0, &x, 1, &mut ys, 3);
    for (i, v) in ys.iter().enumerate() {
        if i % 3 != 0 {
            assert_eq!(*v, UNTOUCHED);
        }
    }
}

#[test]
fn test_zero_length_leaves_buffers_unchanged() {
    let x = generate_test_data(8);
    let original = generate_test_data_complement(8);
    let mut y = original.clone();
    let mut z = original.clone();

    daxpy(0, 3.0, &x, 1, &mut y, 1);
    dscal(0, 3.0, &mut y, 1);
    dcopy(0, &x, 1, &mut y, 1);
    dswap(0, &mut z, 1, &mut y, 1);
    dfill(0, 3.0, &mut y, 1);
    drev(0, &mut y, 1);
    drot(0, &mut z, 1, &mut y, 1, 0.5, 0.5);
    dcusumkbn(0, 1.0, &x, 1, &mut y, 1);

    assert_bitwise_equal(&y, &original, "y");
    assert_bitwise_equal(&z, &original, "z");
    assert_eq!(dnrm2(0, &x, 1), 0.0);
    assert_eq!(idamax(0, &x, 1), None);
    assert_eq!(dsumkbn(0, &x, 1), 0.0);
}

#[test]
fn test_single_precision_matches_double_layout() {
    let x: Vec<f32> = (0..13).map(|i| i as f32 * 0.5).collect();
    let mut y = vec![1.0f32; 13];
    saxpy(13, 2.0, &x, 1, &mut y, 1);
    for (i, v) in y.iter().enumerate() {
        assert_eq!(*v, i as f32 + 1.0);
    }
}

proptest! {
    #[test]
    fn prop_main_and_ndarray_forms_agree(
        values in prop::collection::vec(-1e6f64..1e6, 0..50),
        alpha in -10.0f64..10.0,
        stride in prop_oneof![-4isize..=-1, 1isize..=4],
    ) {
        let n = values.len();
        let offset = numkit_core::stride2offset(n, stride);
        let ys = spread(&values, stride);

        let mut a = ys.clone();
        let mut b = ys.clone();
        daxpy(n, alpha, &values, 1, &mut a, stride);
        daxpy_ndarray(n, alpha, &values, 1, 0, &mut b, stride, offset);
        prop_assert_eq!(&a, &b);

        let mut a = ys.clone();
        let mut b = ys.clone();
        drev(n, &mut a, stride);
        drev_ndarray(n, &mut b, stride, offset);
        prop_assert_eq!(&a, &b);

        prop_assert_eq!(
            dnrm2(n, &ys, stride).to_bits(),
            dnrm2_ndarray(n, &ys, stride, offset).to_bits()
        );
        prop_assert_eq!(idamax(n, &ys, stride), idamax_ndarray(n, &ys, stride, offset));
    }

    #[test]
    fn prop_rev_twice_is_identity(values in prop::collection::vec(-1e3f64..1e3, 0..40), stride in 1isize..4) {
        let mut buf = spread(&values, stride);
        let original = buf.clone();
        drev(values.len(), &mut buf, stride);
        drev(values.len(), &mut buf, stride);
        prop_assert_eq!(buf, original);
    }

    #[test]
    fn prop_sumkbn_survives_catastrophic_cancellation(values in prop::collection::vec(-1e3f64..1e3, 1..200)) {
        // Values on a 2^-10 grid sum exactly in f64; the huge pair defeats naive summation
        let grid: Vec<f64> = values.iter().map(|v| (v * 1024.0).round() / 1024.0).collect();
        let exact: f64 = grid.iter().sum();

        let mut padded = Vec::with_capacity(grid.len() + 2);
        padded.push(1e16);
        padded.extend_from_slice(&grid);
        padded.push(-1e16);
        prop_assert_eq!(dsumkbn(padded.len(), &padded, 1), exact);
    }
}
