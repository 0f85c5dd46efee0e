// SPDX-License-Identifier: MIT
// Copyright (c) 2025 The nuctrans Authors and Contributors. All Rights Reserved.

use std::error::Error;
use std::fmt;

/// A decimal string could not be parsed into a [`crate::HighPrecReal`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError(pub String);

impl Error for ParseError {}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ParseError: could not parse '{}' as a real number", self.0)
    }
}
