// SPDX-License-Identifier: MIT
// Copyright (c) 2025 The nuctrans Authors and Contributors. All Rights Reserved.

use nuctrans_num::{set_precision_digits, HighPrecReal, ParseError};

/// Immutable run configuration: working precision, the removal-rate
/// acceptance window, and the reporting threshold below which a nuclide's
/// final concentration is not worth surfacing.
///
/// [`SolverConfig::new`] is the single point in this workspace that
/// publishes the process-wide [`HighPrecReal`] precision: it sets the
/// precision before parsing `min_rate`/`max_rate`/`epsilon`, so every
/// [`HighPrecReal`] a config carries — and every one a [`crate`] consumer
/// builds afterwards — is at the precision this config declares.
#[derive(Debug, Clone)]
pub struct SolverConfig {
    precision_digits: u32,
    min_rate: HighPrecReal,
    max_rate: HighPrecReal,
    epsilon: HighPrecReal,
}

impl SolverConfig {
    pub fn new(
        precision_digits: u32,
        min_rate: &str,
        max_rate: &str,
        epsilon: &str,
    ) -> Result<Self, ParseError> {
        set_precision_digits(precision_digits);
        Ok(SolverConfig {
            precision_digits,
            min_rate: HighPrecReal::parse(min_rate)?,
            max_rate: HighPrecReal::parse(max_rate)?,
            epsilon: HighPrecReal::parse(epsilon)?,
        })
    }

    pub fn precision_digits(&self) -> u32 {
        self.precision_digits
    }

    pub fn min_rate(&self) -> &HighPrecReal {
        &self.min_rate
    }

    pub fn max_rate(&self) -> &HighPrecReal {
        &self.max_rate
    }

    /// Concentrations below this value are not worth surfacing to a report
    /// writer or UI layer — exposed purely for such a consumer to filter
    /// on; the solver core never reads it.
    pub fn epsilon(&self) -> &HighPrecReal {
        &self.epsilon
    }
}
