// SPDX-License-Identifier: MIT
// Copyright (c) 2025 The nuctrans Authors and Contributors. All Rights Reserved.

//! Arbitrary-precision real arithmetic.
//!
//! [`HighPrecReal`] wraps `rug::Float` (MPFR/GMP) behind a process-wide
//! precision that is set once, before any value is constructed, and held
//! fixed for the remainder of the process. This mirrors the precision
//! contract of the probabilistic transmutation solver built on top of this
//! crate: every [`HighPrecReal`] produced by a given run carries the same
//! precision, so that sparse-matrix self-squaring stays numerically
//! consistent regardless of how many times it is applied.

mod error;
mod high_prec_real;
mod identity;
mod precision;

pub use error::ParseError;
pub use high_prec_real::HighPrecReal;
pub use identity::{One, Zero};
pub use precision::{precision_bits, precision_digits, set_precision_digits};
