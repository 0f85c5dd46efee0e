// SPDX-License-Identifier: MIT
// Copyright (c) 2025 The nuctrans Authors and Contributors. All Rights Reserved.

//! A generic compressed-row sparse matrix with binary-exponentiation
//! support (`self_square_in_place` / `power_by_repeated_squaring`), built
//! for the probabilistic transmutation solver's transfer-matrix algebra.
//!
//! This crate does not aim to be a general-purpose sparse linear algebra
//! library: it implements exactly the operations the solver needs —
//! construction from triplets, elementwise add/sub, scalar scale,
//! matrix-vector and matrix-matrix products, transpose, and repeated
//! self-squaring — plus the handful of operations (`neg`, `vec_mult`,
//! `add_with_zero`) that come along with that API surface.

mod error;
mod sparse_matrix;

pub use error::SparseMatrixError;
pub use sparse_matrix::SparseMatrix;
