// SPDX-License-Identifier: MIT
// Copyright (c) 2025 The nuctrans Authors and Contributors. All Rights Reserved.

use std::sync::atomic::{AtomicU32, Ordering};

/// Extra bits of working precision kept beyond what the requested decimal
/// digit count strictly needs, to absorb rounding in intermediate sums.
const GUARD_BITS: u32 = 16;

const DEFAULT_DIGITS: u32 = 64;

static PRECISION_DIGITS: AtomicU32 = AtomicU32::new(DEFAULT_DIGITS);
static PRECISION_BITS: AtomicU32 = AtomicU32::new(digits_to_bits(DEFAULT_DIGITS));

const fn digits_to_bits(digits: u32) -> u32 {
    // log2(10) ~= 3.321928095; fixed-point multiply to stay const-fn friendly.
    const LOG2_10_X1000: u64 = 3322;
    let bits = (digits as u64 * LOG2_10_X1000).div_ceil(1000) as u32;
    bits + GUARD_BITS
}

/// Sets the process-wide working precision, in decimal digits.
///
/// This must be called before any [`crate::HighPrecReal`] used within a run
/// is constructed, and must not be changed while such values are in use:
/// every value's precision is fixed at the moment of construction, so
/// changing this mid-run produces values with mixed, incompatible
/// precisions rather than a visible error.
pub fn set_precision_digits(digits: u32) {
    let digits = digits.max(1);
    PRECISION_DIGITS.store(digits, Ordering::SeqCst);
    PRECISION_BITS.store(digits_to_bits(digits), Ordering::SeqCst);
}

/// The process-wide working precision, in decimal digits.
pub fn precision_digits() -> u32 {
    PRECISION_DIGITS.load(Ordering::SeqCst)
}

/// The process-wide working precision, in bits, as passed to `rug::Float`.
pub fn precision_bits() -> u32 {
    PRECISION_BITS.load(Ordering::SeqCst)
}
