// SPDX-License-Identifier: MIT
// Copyright (c) 2025 The nuctrans Authors and Contributors. All Rights Reserved.

//! `nuctrans` computes the time evolution of a system of coupled nuclide
//! transmutation reactions (radioactive decay, neutron-induced reactions,
//! multi-product fission) using a probabilistic, non-ODE formulation: a
//! per-substep transfer matrix is raised to the power `2^k` by repeated
//! sparse self-squaring, then applied once to the initial concentration
//! vector.
//!
//! ```
//! use nuctrans::prelude::*;
//! use std::collections::HashMap;
//!
//! let config = SolverConfig::new(60, "1e-200", "1e200", "1e-12").unwrap();
//! let mut solver = Solver::new(vec!["A".into(), "B".into()], config);
//! solver
//!     .add_removal(0, HighPrecReal::parse("0.693147180559945").unwrap(), vec![Product::Tracked(1)], vec![])
//!     .unwrap();
//!
//! let mut initial = HashMap::new();
//! initial.insert("A".to_string(), HighPrecReal::from_f64(1.0));
//!
//! let result = solver
//!     .solve(&initial, &HighPrecReal::from_i64(5), &HighPrecReal::from_f64(1.0))
//!     .unwrap();
//! assert!(result.contains_key("B"));
//! ```

pub mod prelude;
