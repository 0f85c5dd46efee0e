// SPDX-License-Identifier: MIT
// Copyright (c) 2025 The nuctrans Authors and Contributors. All Rights Reserved.

use std::error::Error;
use std::fmt;

/// Errors produced by [`crate::SparseMatrix`] operations.
#[derive(Debug, Clone, PartialEq)]
pub enum SparseMatrixError {
    /// The two operand shapes are incompatible for an elementwise op.
    ShapeMismatch((usize, usize), (usize, usize)),
    /// Left-hand column count does not match right-hand row count.
    DimensionMismatch(usize, usize),
    /// A row or column index fell outside `[0, size)`.
    IndexOutOfBounds(usize, usize),
    /// The operation is not defined on a 0x0 matrix.
    EmptyMatrix,
}

impl Error for SparseMatrixError {}

impl fmt::Display for SparseMatrixError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SparseMatrixError::ShapeMismatch(left, right) => write!(
                f,
                "Shape mismatch: Cannot perform operation on matrices with different shapes. Left: ({}, {}), Right: ({}, {})",
                left.0, left.1, right.0, right.1
            ),
            SparseMatrixError::DimensionMismatch(left_cols, right_rows) => write!(
                f,
                "Dimension mismatch: Incompatible dimensions for matrix multiplication. Left columns: {}, Right rows: {}",
                left_cols, right_rows
            ),
            SparseMatrixError::IndexOutOfBounds(index, size) => write!(
                f,
                "Index out of bounds: Index {} is out of bounds for dimension of size {}.",
                index, size
            ),
            SparseMatrixError::EmptyMatrix => {
                write!(f, "Empty matrix: Operation not supported on empty matrix.")
            }
        }
    }
}
