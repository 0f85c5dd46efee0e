// SPDX-License-Identifier: MIT
// Copyright (c) 2025 The nuctrans Authors and Contributors. All Rights Reserved.

use nuctrans_sparse::SparseMatrixError;
use std::error::Error;

#[test]
fn shape_mismatch_display() {
    let e = SparseMatrixError::ShapeMismatch((2, 3), (3, 2));
    assert_eq!(
        e.to_string(),
        "Shape mismatch: Cannot perform operation on matrices with different shapes. Left: (2, 3), Right: (3, 2)"
    );
}

#[test]
fn dimension_mismatch_display() {
    let e = SparseMatrixError::DimensionMismatch(3, 2);
    assert_eq!(
        e.to_string(),
        "Dimension mismatch: Incompatible dimensions for matrix multiplication. Left columns: 3, Right rows: 2"
    );
}

#[test]
fn index_out_of_bounds_display() {
    let e = SparseMatrixError::IndexOutOfBounds(5, 3);
    assert_eq!(
        e.to_string(),
        "Index out of bounds: Index 5 is out of bounds for dimension of size 3."
    );
}

#[test]
fn empty_matrix_display() {
    let e = SparseMatrixError::EmptyMatrix;
    assert_eq!(
        e.to_string(),
        "Empty matrix: Operation not supported on empty matrix."
    );
}

#[test]
fn errors_implement_error_trait_with_no_source() {
    let e = SparseMatrixError::EmptyMatrix;
    let as_error: &dyn Error = &e;
    assert!(as_error.source().is_none());
}

#[test]
fn errors_are_clone_and_partial_eq() {
    let a = SparseMatrixError::IndexOutOfBounds(1, 2);
    let b = a.clone();
    assert_eq!(a, b);
}
