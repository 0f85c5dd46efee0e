// SPDX-License-Identifier: MIT
// Copyright (c) 2025 The nuctrans Authors and Contributors. All Rights Reserved.

pub use nuctrans_model::ModelError;
pub use nuctrans_model::Product;
pub use nuctrans_model::Removal;
pub use nuctrans_model::RemovalEvent;
pub use nuctrans_model::RemovalModel;
pub use nuctrans_model::SolverConfig;

pub use nuctrans_num::HighPrecReal;
pub use nuctrans_num::ParseError;
pub use nuctrans_num::{set_precision_digits, precision_bits, precision_digits};
pub use nuctrans_num::{One, Zero};

pub use nuctrans_sparse::SparseMatrix;
pub use nuctrans_sparse::SparseMatrixError;

pub use nuctrans_solver::Solver;
pub use nuctrans_solver::SolverError;
