// SPDX-License-Identifier: MIT
// Copyright (c) 2025 The nuctrans Authors and Contributors. All Rights Reserved.

use crate::error::ParseError;
use crate::identity::{One, Zero};
use crate::precision::precision_bits;
use rug::Float;
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

/// An arbitrary-precision signed real number.
///
/// Every value's precision is fixed, at construction time, to whatever
/// [`crate::precision_bits`] currently reports. Arithmetic between two
/// `HighPrecReal` values always re-rounds to the *current* process-wide
/// precision, not to either operand's own — the contract this workspace
/// relies on is that precision is set once, up front, and never touched
/// again while values are alive (see [`crate::set_precision_digits`]).
#[derive(Debug, Clone)]
pub struct HighPrecReal(Float);

impl HighPrecReal {
    /// Wraps an already-constructed `rug::Float`, re-rounding it to the
    /// current working precision.
    pub fn from_float(value: Float) -> Self {
        HighPrecReal(Float::with_val(precision_bits(), value))
    }

    pub fn from_i64(value: i64) -> Self {
        HighPrecReal(Float::with_val(precision_bits(), value))
    }

    pub fn from_f64(value: f64) -> Self {
        HighPrecReal(Float::with_val(precision_bits(), value))
    }

    /// Parses a decimal string (e.g. `"1.602176634e-19"`) at the current
    /// working precision.
    pub fn parse(src: &str) -> Result<Self, ParseError> {
        let incomplete = Float::parse(src.trim()).map_err(|_| ParseError(src.to_string()))?;
        Ok(HighPrecReal(Float::with_val(precision_bits(), incomplete)))
    }

    pub fn to_decimal_string(&self) -> String {
        self.0.to_string()
    }

    pub fn is_negative(&self) -> bool {
        self.0 < 0
    }

    pub fn abs(&self) -> Self {
        HighPrecReal(Float::with_val(precision_bits(), &self.0).abs())
    }

    /// The natural exponential, `e^self`.
    pub fn exp(&self) -> Self {
        HighPrecReal(Float::with_val(precision_bits(), &self.0).exp())
    }

    /// The natural logarithm. Undefined (produces a non-finite `rug::Float`)
    /// for non-positive values, matching MPFR's own `mpfr_log` contract.
    pub fn ln(&self) -> Self {
        HighPrecReal(Float::with_val(precision_bits(), &self.0).ln())
    }

    /// `log2(self) = ln(self) / ln(2)`.
    pub fn log2(&self) -> Self {
        let ln2 = HighPrecReal::from_i64(2).ln();
        self.clone() / ln2
    }

    /// Integer power via binary exponentiation (repeated squaring) — the
    /// same self-squaring idiom `nuctrans_sparse` applies at the matrix
    /// level, here applied to a single scalar.
    pub fn powi(&self, exponent: i64) -> Self {
        if exponent == 0 {
            return HighPrecReal::one();
        }
        let negative = exponent < 0;
        let mut remaining = exponent.unsigned_abs();
        let mut base = self.clone();
        let mut result = HighPrecReal::one();
        while remaining > 0 {
            if remaining & 1 == 1 {
                result = result * base.clone();
            }
            base = base.clone() * base;
            remaining >>= 1;
        }
        if negative {
            HighPrecReal::one() / result
        } else {
            result
        }
    }

    /// General real exponent via `exp(other * ln(self))`. Only meaningful
    /// for `self > 0`; callers in this workspace only ever exercise
    /// [`Self::powi`] with a small integer exponent, this is provided for
    /// the general `HighPrecReal` contract.
    pub fn pow(&self, exponent: &Self) -> Self {
        (exponent.clone() * self.ln()).exp()
    }

    /// Rounds towards negative infinity and truncates to an `i64`. The
    /// values this is applied to in this workspace (substep counts,
    /// approximation orders) are always small enough to fit.
    pub fn floor_to_i64(&self) -> i64 {
        let floored = Float::with_val(precision_bits(), &self.0).floor();
        floored.to_f64() as i64
    }
}

impl Add for HighPrecReal {
    type Output = HighPrecReal;
    fn add(self, rhs: HighPrecReal) -> HighPrecReal {
        HighPrecReal(Float::with_val(precision_bits(), &self.0 + &rhs.0))
    }
}

impl Sub for HighPrecReal {
    type Output = HighPrecReal;
    fn sub(self, rhs: HighPrecReal) -> HighPrecReal {
        HighPrecReal(Float::with_val(precision_bits(), &self.0 - &rhs.0))
    }
}

impl Mul for HighPrecReal {
    type Output = HighPrecReal;
    fn mul(self, rhs: HighPrecReal) -> HighPrecReal {
        HighPrecReal(Float::with_val(precision_bits(), &self.0 * &rhs.0))
    }
}

impl Div for HighPrecReal {
    type Output = HighPrecReal;
    fn div(self, rhs: HighPrecReal) -> HighPrecReal {
        HighPrecReal(Float::with_val(precision_bits(), &self.0 / &rhs.0))
    }
}

impl Neg for HighPrecReal {
    type Output = HighPrecReal;
    fn neg(self) -> HighPrecReal {
        HighPrecReal(Float::with_val(precision_bits(), -&self.0))
    }
}

impl PartialEq for HighPrecReal {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl PartialOrd for HighPrecReal {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.0.partial_cmp(&other.0)
    }
}

impl fmt::Display for HighPrecReal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Zero for HighPrecReal {
    fn zero() -> Self {
        HighPrecReal(Float::with_val(precision_bits(), 0))
    }
    fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl One for HighPrecReal {
    fn one() -> Self {
        HighPrecReal(Float::with_val(precision_bits(), 1))
    }
    fn is_one(&self) -> bool {
        self.0 == 1
    }
}

impl Default for HighPrecReal {
    fn default() -> Self {
        HighPrecReal::zero()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::set_precision_digits;

    #[test]
    fn parse_and_display_round_trip_numerically() {
        set_precision_digits(50);
        let a = HighPrecReal::parse("1.5").unwrap();
        let b = HighPrecReal::from_f64(1.5);
        assert_eq!(a, b);
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!(HighPrecReal::parse("not-a-number").is_err());
    }

    #[test]
    fn addition_and_subtraction_are_inverse() {
        set_precision_digits(50);
        let a = HighPrecReal::from_i64(7);
        let b = HighPrecReal::from_i64(3);
        let sum = a.clone() + b.clone();
        let back = sum - b;
        assert_eq!(back, a);
    }

    #[test]
    fn exp_of_zero_is_one() {
        set_precision_digits(50);
        let zero = HighPrecReal::zero();
        assert_eq!(zero.exp(), HighPrecReal::one());
    }

    #[test]
    fn ln_of_one_is_zero() {
        set_precision_digits(50);
        let one = HighPrecReal::one();
        assert_eq!(one.ln(), HighPrecReal::zero());
    }

    #[test]
    fn powi_matches_repeated_multiplication() {
        set_precision_digits(50);
        let two = HighPrecReal::from_i64(2);
        let eight = two.powi(3);
        assert_eq!(eight, HighPrecReal::from_i64(8));
    }

    #[test]
    fn powi_negative_exponent_is_reciprocal() {
        set_precision_digits(50);
        let two = HighPrecReal::from_i64(2);
        let quarter = two.powi(-2);
        let expected = HighPrecReal::one() / HighPrecReal::from_i64(4);
        assert_eq!(quarter, expected);
    }

    #[test]
    fn floor_to_i64_rounds_toward_negative_infinity() {
        set_precision_digits(50);
        assert_eq!(HighPrecReal::from_f64(3.7).floor_to_i64(), 3);
        assert_eq!(HighPrecReal::from_f64(-3.2).floor_to_i64(), -4);
    }

    #[test]
    fn log2_of_power_of_two_is_exact_integer() {
        set_precision_digits(80);
        let value = HighPrecReal::from_i64(2).powi(10);
        let log = value.log2();
        let diff = (log - HighPrecReal::from_i64(10)).abs();
        let tolerance = HighPrecReal::parse("1e-20").unwrap();
        assert!(diff < tolerance);
    }
}
