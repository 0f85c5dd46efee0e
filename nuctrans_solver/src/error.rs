// SPDX-License-Identifier: MIT
// Copyright (c) 2025 The nuctrans Authors and Contributors. All Rights Reserved.

use nuctrans_sparse::SparseMatrixError;
use std::error::Error;
use std::fmt;

/// Errors raised while building or applying a transfer matrix. Every
/// variant here wraps a lower-level [`SparseMatrixError`] — the solver
/// itself never fails for any other reason: an out-of-range rate or a
/// degenerate (all-zero) column are silently absorbed, per spec.
#[derive(Debug, Clone, PartialEq)]
pub struct SolverError(pub SparseMatrixError);

impl Error for SolverError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&self.0)
    }
}

impl fmt::Display for SolverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SolverError: {}", self.0)
    }
}

impl From<SparseMatrixError> for SolverError {
    fn from(err: SparseMatrixError) -> Self {
        SolverError(err)
    }
}
