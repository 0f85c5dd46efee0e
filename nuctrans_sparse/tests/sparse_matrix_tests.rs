// SPDX-License-Identifier: MIT
// Copyright (c) 2025 The nuctrans Authors and Contributors. All Rights Reserved.

use nuctrans_num::{set_precision_digits, HighPrecReal, One, Zero};
use nuctrans_sparse::SparseMatrix;

fn hp(v: i64) -> HighPrecReal {
    HighPrecReal::from_i64(v)
}

#[test]
fn from_triplets_sums_duplicates() {
    set_precision_digits(50);
    let triplets = vec![(0, 0, hp(2)), (0, 0, hp(3)), (1, 1, hp(5))];
    let m = SparseMatrix::from_triplets(2, 2, &triplets).unwrap();
    assert_eq!(m.get_value_at(0, 0), hp(5));
    assert_eq!(m.get_value_at(1, 1), hp(5));
    assert_eq!(m.nnz(), 2);
}

#[test]
fn from_triplets_drops_zero_sums() {
    set_precision_digits(50);
    let triplets = vec![(0, 0, hp(4)), (0, 0, hp(-4))];
    let m = SparseMatrix::from_triplets(2, 2, &triplets).unwrap();
    assert_eq!(m.nnz(), 0);
    assert_eq!(m.get_value_at(0, 0), HighPrecReal::zero());
}

#[test]
fn from_triplets_rejects_out_of_bounds_row() {
    set_precision_digits(50);
    let err = SparseMatrix::from_triplets(2, 2, &[(5, 0, hp(1))]).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Index out of bounds: Index 5 is out of bounds for dimension of size 2."
    );
}

#[test]
fn get_value_at_out_of_bounds_is_zero() {
    set_precision_digits(50);
    let m: SparseMatrix<HighPrecReal> = SparseMatrix::new(2, 2);
    assert_eq!(m.get_value_at(9, 9), HighPrecReal::zero());
}

#[test]
fn identity_acts_as_multiplicative_identity() {
    set_precision_digits(50);
    let triplets = vec![(0, 1, hp(7)), (1, 0, hp(3))];
    let m = SparseMatrix::from_triplets(2, 2, &triplets).unwrap();
    let id = SparseMatrix::identity(2);
    let product = m.multiply_general(&id).unwrap();
    assert_eq!(product, m);
}

#[test]
fn add_matrix_rejects_shape_mismatch() {
    set_precision_digits(50);
    let a: SparseMatrix<HighPrecReal> = SparseMatrix::new(2, 2);
    let b: SparseMatrix<HighPrecReal> = SparseMatrix::new(3, 3);
    let err = a.add_matrix(&b).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Shape mismatch: Cannot perform operation on matrices with different shapes. Left: (2, 2), Right: (3, 3)"
    );
}

#[test]
fn multiply_general_rejects_dimension_mismatch() {
    set_precision_digits(50);
    let a: SparseMatrix<HighPrecReal> = SparseMatrix::new(2, 3);
    let b: SparseMatrix<HighPrecReal> = SparseMatrix::new(2, 2);
    let err = a.multiply_general(&b).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Dimension mismatch: Incompatible dimensions for matrix multiplication. Left columns: 3, Right rows: 2"
    );
}

#[test]
fn transpose_swaps_indices() {
    set_precision_digits(50);
    let m = SparseMatrix::from_triplets(2, 3, &[(0, 2, hp(9))]).unwrap();
    let t = m.transpose();
    assert_eq!(t.shape(), (3, 2));
    assert_eq!(t.get_value_at(2, 0), hp(9));
}

#[test]
fn vec_mult_matches_manual_dot_products() {
    set_precision_digits(50);
    let m = SparseMatrix::from_triplets(2, 2, &[(0, 0, hp(2)), (0, 1, hp(3)), (1, 1, hp(4))]).unwrap();
    let result = m.vec_mult(&[hp(5), hp(6)]);
    assert_eq!(result, vec![hp(2) * hp(5) + hp(3) * hp(6), hp(4) * hp(6)]);
}

#[test]
fn self_square_matches_manual_multiply() {
    set_precision_digits(50);
    let m = SparseMatrix::from_triplets(2, 2, &[(0, 0, hp(1)), (0, 1, hp(1)), (1, 1, hp(1))]).unwrap();
    let manual = m.multiply_general(&m).unwrap();
    let mut squared = m.clone();
    squared.self_square_in_place();
    assert_eq!(squared, manual);
}

#[test]
fn power_by_repeated_squaring_matches_repeated_self_square() {
    set_precision_digits(50);
    let m = SparseMatrix::from_triplets(2, 2, &[(0, 0, hp(1)), (0, 1, hp(1)), (1, 1, hp(1))]).unwrap();
    let mut via_helper = m.clone();
    via_helper.power_by_repeated_squaring(3);

    let mut via_loop = m.clone();
    for _ in 0..3 {
        via_loop.self_square_in_place();
    }
    assert_eq!(via_helper, via_loop);
}

#[test]
fn zero_and_one_identities_hold() {
    set_precision_digits(50);
    let zero: SparseMatrix<HighPrecReal> = Zero::zero();
    assert!(zero.is_zero());
    let one: SparseMatrix<HighPrecReal> = One::one();
    assert!(one.is_one());
}

#[test]
fn display_reports_empty_matrices_distinctly() {
    set_precision_digits(50);
    let empty: SparseMatrix<HighPrecReal> = SparseMatrix::new(0, 0);
    assert_eq!(format!("{}", empty), "SparseMatrix (0x0) [Empty]");
}

#[cfg(feature = "parallel")]
#[test]
fn parallel_self_square_matches_serial_result() {
    set_precision_digits(50);
    let mut triplets = Vec::new();
    for i in 0..16usize {
        triplets.push((i, i, hp(1)));
        triplets.push(((i + 1) % 16, i, hp(1)));
    }
    let base = SparseMatrix::from_triplets(16, 16, &triplets).unwrap();
    let mut a = base.clone();
    let mut b = base;
    a.self_square_in_place();
    b.self_square_in_place();
    assert_eq!(a, b);
}
