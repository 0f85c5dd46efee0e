// SPDX-License-Identifier: MIT
// Copyright (c) 2025 The nuctrans Authors and Contributors. All Rights Reserved.

use crate::error::SparseMatrixError;
use nuctrans_num::{One, Zero};
use std::collections::BTreeMap;
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

/// A generic matrix in compressed-row (CSR) form: `row_ptr[r]..row_ptr[r+1]`
/// indexes into `col_indices`/`values` for the nonzero entries of row `r`,
/// columns sorted ascending within each row.
#[derive(Debug, Clone)]
pub struct SparseMatrix<T> {
    rows: usize,
    cols: usize,
    row_ptr: Vec<usize>,
    col_indices: Vec<usize>,
    values: Vec<T>,
}

impl<T> SparseMatrix<T>
where
    T: Clone + PartialEq + Zero + One + Add<Output = T> + Mul<Output = T> + Neg<Output = T>,
{
    /// An empty `rows x cols` matrix with no stored entries.
    pub fn new(rows: usize, cols: usize) -> Self {
        SparseMatrix {
            rows,
            cols,
            row_ptr: vec![0; rows + 1],
            col_indices: Vec::new(),
            values: Vec::new(),
        }
    }

    /// An empty `rows x cols` matrix with storage reserved for `capacity`
    /// nonzero entries.
    pub fn with_capacity(rows: usize, cols: usize, capacity: usize) -> Self {
        SparseMatrix {
            rows,
            cols,
            row_ptr: vec![0; rows + 1],
            col_indices: Vec::with_capacity(capacity),
            values: Vec::with_capacity(capacity),
        }
    }

    /// The `rows x cols` zero matrix (no stored entries).
    pub fn zero_shaped(rows: usize, cols: usize) -> Self {
        Self::new(rows, cols)
    }

    /// The `n x n` identity matrix.
    pub fn identity(n: usize) -> Self {
        let mut triplets = Vec::with_capacity(n);
        for i in 0..n {
            triplets.push((i, i, T::one()));
        }
        Self::from_triplets(n, n, &triplets).expect("identity triplets are always in-bounds")
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// The row index of each stored nonzero, in storage order.
    pub fn row_indices(&self) -> Vec<usize> {
        let mut out = Vec::with_capacity(self.values.len());
        for r in 0..self.rows {
            out.extend(std::iter::repeat(r).take(self.row_ptr[r + 1] - self.row_ptr[r]));
        }
        out
    }

    pub fn col_indices(&self) -> &[usize] {
        &self.col_indices
    }

    pub fn values(&self) -> &[T] {
        &self.values
    }

    pub fn nnz(&self) -> usize {
        self.values.len()
    }

    /// Builds a matrix from `(row, col, value)` triplets, summing duplicate
    /// `(row, col)` entries and dropping entries that sum to zero.
    pub fn from_triplets(
        rows: usize,
        cols: usize,
        triplets: &[(usize, usize, T)],
    ) -> Result<Self, SparseMatrixError> {
        Self::from_triplets_with_zero(rows, cols, triplets, &T::zero())
    }

    /// As [`Self::from_triplets`], but entries are dropped when they equal
    /// the caller-supplied `zero_value` rather than `T::zero()`.
    pub fn from_triplets_with_zero(
        rows: usize,
        cols: usize,
        triplets: &[(usize, usize, T)],
        zero_value: &T,
    ) -> Result<Self, SparseMatrixError> {
        let mut accum: BTreeMap<(usize, usize), T> = BTreeMap::new();
        for (r, c, v) in triplets {
            if *r >= rows {
                return Err(SparseMatrixError::IndexOutOfBounds(*r, rows));
            }
            if *c >= cols {
                return Err(SparseMatrixError::IndexOutOfBounds(*c, cols));
            }
            accum
                .entry((*r, *c))
                .and_modify(|existing| *existing = existing.clone() + v.clone())
                .or_insert_with(|| v.clone());
        }

        let mut row_ptr = vec![0usize; rows + 1];
        let mut col_indices = Vec::new();
        let mut values = Vec::new();
        for r in 0..rows {
            for ((row, col), value) in accum.range((r, 0)..(r + 1, 0)) {
                debug_assert_eq!(*row, r);
                if *value == *zero_value {
                    continue;
                }
                col_indices.push(*col);
                values.push(value.clone());
            }
            row_ptr[r + 1] = col_indices.len();
        }

        Ok(SparseMatrix {
            rows,
            cols,
            row_ptr,
            col_indices,
            values,
        })
    }

    /// The value at `(row, col)`, or `T::zero()` if absent or out of bounds.
    pub fn get_value_at(&self, row: usize, col: usize) -> T {
        if row >= self.rows || col >= self.cols {
            return T::zero();
        }
        let start = self.row_ptr[row];
        let end = self.row_ptr[row + 1];
        self.col_indices[start..end]
            .binary_search(&col)
            .map(|offset| self.values[start + offset].clone())
            .unwrap_or_else(|_| T::zero())
    }

    fn row_entries(&self, row: usize) -> impl Iterator<Item = (usize, &T)> {
        let start = self.row_ptr[row];
        let end = self.row_ptr[row + 1];
        self.col_indices[start..end]
            .iter()
            .copied()
            .zip(self.values[start..end].iter())
    }

    fn elementwise(&self, other: &Self, negate_right: bool) -> Result<Self, SparseMatrixError> {
        if self.shape() != other.shape() {
            return Err(SparseMatrixError::ShapeMismatch(self.shape(), other.shape()));
        }
        let mut triplets = Vec::with_capacity(self.nnz() + other.nnz());
        for r in 0..self.rows {
            for (c, v) in self.row_entries(r) {
                triplets.push((r, c, v.clone()));
            }
        }
        for r in 0..other.rows {
            for (c, v) in other.row_entries(r) {
                let value = if negate_right { v.clone().neg() } else { v.clone() };
                triplets.push((r, c, value));
            }
        }
        Self::from_triplets(self.rows, self.cols, &triplets)
    }

    pub fn add_matrix(&self, other: &Self) -> Result<Self, SparseMatrixError> {
        self.elementwise(other, false)
    }

    pub fn sub_matrix(&self, other: &Self) -> Result<Self, SparseMatrixError> {
        self.elementwise(other, true)
    }

    /// As [`Self::add_matrix`], but using `zero_value` as the drop threshold
    /// when deduplicating the resulting triplets.
    pub fn add_with_zero(&self, other: &Self, zero_value: &T) -> Result<Self, SparseMatrixError> {
        if self.shape() != other.shape() {
            return Err(SparseMatrixError::ShapeMismatch(self.shape(), other.shape()));
        }
        let mut triplets = Vec::with_capacity(self.nnz() + other.nnz());
        for r in 0..self.rows {
            for (c, v) in self.row_entries(r) {
                triplets.push((r, c, v.clone()));
            }
        }
        for r in 0..other.rows {
            for (c, v) in other.row_entries(r) {
                triplets.push((r, c, v.clone()));
            }
        }
        Self::from_triplets_with_zero(self.rows, self.cols, &triplets, zero_value)
    }

    pub fn scalar_mult(&self, scalar: &T) -> Self {
        let mut values = Vec::with_capacity(self.values.len());
        for v in &self.values {
            values.push(v.clone() * scalar.clone());
        }
        SparseMatrix {
            rows: self.rows,
            cols: self.cols,
            row_ptr: self.row_ptr.clone(),
            col_indices: self.col_indices.clone(),
            values,
        }
    }

    pub fn scale(&self, scalar: &T) -> Self {
        self.scalar_mult(scalar)
    }

    pub fn neg(&self) -> Self {
        SparseMatrix {
            rows: self.rows,
            cols: self.cols,
            row_ptr: self.row_ptr.clone(),
            col_indices: self.col_indices.clone(),
            values: self.values.iter().cloned().map(Neg::neg).collect(),
        }
    }

    pub fn vec_mult(&self, rhs: &[T]) -> Vec<T> {
        assert_eq!(rhs.len(), self.cols, "vector length must match column count");
        let mut out = vec![T::zero(); self.rows];
        for r in 0..self.rows {
            let mut acc = T::zero();
            for (c, v) in self.row_entries(r) {
                acc = acc + v.clone() * rhs[c].clone();
            }
            out[r] = acc;
        }
        out
    }

    /// General sparse matrix multiplication: `self * rhs`.
    ///
    /// This is the primitive every self-squaring power operation in this
    /// crate is built from.
    pub fn multiply_general(&self, rhs: &Self) -> Result<Self, SparseMatrixError> {
        if self.cols != rhs.rows {
            return Err(SparseMatrixError::DimensionMismatch(self.cols, rhs.rows));
        }
        let result_rows = multiply_rows(self, rhs, 0..self.rows);
        Ok(assemble_from_rows(self.rows, rhs.cols, result_rows))
    }

    /// Alias for [`Self::multiply_general`].
    pub fn mat_mult(&self, rhs: &Self) -> Result<Self, SparseMatrixError> {
        self.multiply_general(rhs)
    }

    pub fn transpose(&self) -> Self {
        let mut triplets = Vec::with_capacity(self.nnz());
        for r in 0..self.rows {
            for (c, v) in self.row_entries(r) {
                triplets.push((c, r, v.clone()));
            }
        }
        Self::from_triplets(self.cols, self.rows, &triplets)
            .expect("transposed indices stay within the swapped bounds")
    }

    /// Squares the matrix in place: `self := self * self`.
    ///
    /// Row `r` of the result depends only on row `r` of the pre-squaring
    /// matrix and the full pre-squaring matrix, so rows are computed
    /// independently; with the `parallel` feature enabled they are computed
    /// concurrently via `rayon`, each accumulating into its own
    /// ascending-column `BTreeMap` so that the per-row reduction order (and
    /// hence the rounding behaviour of `HighPrecReal` arithmetic) does not
    /// depend on how many threads are used.
    pub fn self_square_in_place(&mut self) {
        debug_assert_eq!(self.rows, self.cols, "self-squaring requires a square matrix");
        let squared = self
            .multiply_general(self)
            .expect("a square matrix always squares against itself");
        *self = squared;
    }

    /// Applies [`Self::self_square_in_place`] `k` times, i.e. raises the
    /// matrix to the power `2^k` via binary exponentiation.
    pub fn power_by_repeated_squaring(&mut self, k: u32) {
        for _ in 0..k {
            self.self_square_in_place();
        }
    }
}

#[cfg(feature = "parallel")]
fn multiply_rows<T>(
    left: &SparseMatrix<T>,
    right: &SparseMatrix<T>,
    row_range: std::ops::Range<usize>,
) -> Vec<(Vec<usize>, Vec<T>)>
where
    T: Clone + PartialEq + Zero + One + Add<Output = T> + Mul<Output = T> + Neg<Output = T> + Send + Sync,
{
    use rayon::prelude::*;
    row_range
        .into_par_iter()
        .map(|r| multiply_one_row(left, right, r))
        .collect()
}

#[cfg(not(feature = "parallel"))]
fn multiply_rows<T>(
    left: &SparseMatrix<T>,
    right: &SparseMatrix<T>,
    row_range: std::ops::Range<usize>,
) -> Vec<(Vec<usize>, Vec<T>)>
where
    T: Clone + PartialEq + Zero + One + Add<Output = T> + Mul<Output = T> + Neg<Output = T>,
{
    row_range.map(|r| multiply_one_row(left, right, r)).collect()
}

fn multiply_one_row<T>(
    left: &SparseMatrix<T>,
    right: &SparseMatrix<T>,
    row: usize,
) -> (Vec<usize>, Vec<T>)
where
    T: Clone + PartialEq + Zero + One + Add<Output = T> + Mul<Output = T> + Neg<Output = T>,
{
    let mut acc: BTreeMap<usize, T> = BTreeMap::new();
    for (k, left_val) in left.row_entries(row) {
        for (j, right_val) in right.row_entries(k) {
            let contribution = left_val.clone() * right_val.clone();
            acc.entry(j)
                .and_modify(|existing| *existing = existing.clone() + contribution.clone())
                .or_insert(contribution);
        }
    }
    let mut cols = Vec::with_capacity(acc.len());
    let mut values = Vec::with_capacity(acc.len());
    for (c, v) in acc {
        if v.is_zero() {
            continue;
        }
        cols.push(c);
        values.push(v);
    }
    (cols, values)
}

fn assemble_from_rows<T>(rows: usize, cols: usize, per_row: Vec<(Vec<usize>, Vec<T>)>) -> SparseMatrix<T> {
    let mut row_ptr = vec![0usize; rows + 1];
    let mut col_indices = Vec::new();
    let mut values = Vec::new();
    for (r, (cols_r, values_r)) in per_row.into_iter().enumerate() {
        col_indices.extend(cols_r);
        values.extend(values_r);
        row_ptr[r + 1] = col_indices.len();
    }
    SparseMatrix {
        rows,
        cols,
        row_ptr,
        col_indices,
        values,
    }
}

impl<T> Zero for SparseMatrix<T>
where
    T: Clone + PartialEq + Zero + One + Add<Output = T> + Mul<Output = T> + Neg<Output = T>,
{
    fn zero() -> Self {
        SparseMatrix::new(0, 0)
    }
    fn is_zero(&self) -> bool {
        self.values.is_empty()
    }
}

impl<T> One for SparseMatrix<T>
where
    T: Clone + PartialEq + Zero + One + Add<Output = T> + Mul<Output = T> + Neg<Output = T>,
{
    fn one() -> Self {
        SparseMatrix::identity(1)
    }
    fn is_one(&self) -> bool {
        self.rows == 1 && self.cols == 1 && self.get_value_at(0, 0) == T::one()
    }
}

impl<T> PartialEq for SparseMatrix<T>
where
    T: Clone + PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.shape() == other.shape()
            && self.row_ptr == other.row_ptr
            && self.col_indices == other.col_indices
            && self.values == other.values
    }
}

impl<T> Add for &SparseMatrix<T>
where
    T: Clone + PartialEq + Zero + One + Add<Output = T> + Mul<Output = T> + Neg<Output = T>,
{
    type Output = SparseMatrix<T>;
    fn add(self, rhs: &SparseMatrix<T>) -> SparseMatrix<T> {
        self.add_matrix(rhs).expect("shape mismatch")
    }
}

impl<T> Sub for &SparseMatrix<T>
where
    T: Clone + PartialEq + Zero + One + Add<Output = T> + Mul<Output = T> + Neg<Output = T>,
{
    type Output = SparseMatrix<T>;
    fn sub(self, rhs: &SparseMatrix<T>) -> SparseMatrix<T> {
        self.sub_matrix(rhs).expect("shape mismatch")
    }
}

impl<T> fmt::Display for SparseMatrix<T>
where
    T: fmt::Display + Clone + PartialEq + Zero + One + Add<Output = T> + Mul<Output = T> + Neg<Output = T>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.rows == 0 || self.cols == 0 {
            return write!(f, "SparseMatrix ({}x{}) [Empty]", self.rows, self.cols);
        }
        writeln!(f, "SparseMatrix ({}x{})", self.rows, self.cols)?;
        for r in 0..self.rows {
            write!(f, "[")?;
            for c in 0..self.cols {
                if c > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{:>8}", self.get_value_at(r, c))?;
            }
            writeln!(f, "]")?;
        }
        Ok(())
    }
}

impl<T> Default for SparseMatrix<T>
where
    T: Clone + PartialEq + Zero + One + Add<Output = T> + Mul<Output = T> + Neg<Output = T>,
{
    fn default() -> Self {
        SparseMatrix::new(0, 0)
    }
}

