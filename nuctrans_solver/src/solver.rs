// SPDX-License-Identifier: MIT
// Copyright (c) 2025 The nuctrans Authors and Contributors. All Rights Reserved.

use crate::error::SolverError;
use nuctrans_model::{Product, RemovalModel, SolverConfig};
use nuctrans_num::{HighPrecReal, One, Zero};
use nuctrans_sparse::SparseMatrix;
use std::collections::HashMap;

/// Computes the time evolution of a system of coupled nuclide removal
/// reactions via repeated transfer-matrix self-squaring (binary
/// exponentiation), rather than by integrating an ODE system.
#[derive(Debug, Clone)]
pub struct Solver {
    model: RemovalModel,
    config: SolverConfig,
}

impl Solver {
    pub fn new(species_names: Vec<String>, config: SolverConfig) -> Self {
        Solver {
            model: RemovalModel::new(species_names),
            config,
        }
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    pub fn model(&self) -> &RemovalModel {
        &self.model
    }

    /// Forwards to [`RemovalModel::add_removal`] with this solver's config.
    pub fn add_removal(
        &mut self,
        species_index: usize,
        rate: HighPrecReal,
        products: Vec<Product>,
        yields: Vec<HighPrecReal>,
    ) -> Result<(), nuctrans_model::ModelError> {
        self.model.add_removal(species_index, rate, products, yields, &self.config)
    }

    /// Builds the per-substep transfer matrix for timestep `dt`.
    ///
    /// For every nuclide `i`, the per-event pi-distribution is normalized
    /// over the synthetic "nothing happened" event plus
    /// every real event (a nuclide with no real removals simply produces a
    /// pi-distribution of `[1]`, i.e. it stays put), and each event's
    /// probability mass is routed to its product(s) (split by fission
    /// yield when there is more than one tracked product) or, for
    /// the synthetic event, kept on the diagonal.
    pub fn transfer_matrix(&self, dt: &HighPrecReal) -> Result<SparseMatrix<HighPrecReal>, SolverError> {
        let n = self.model.species_count();
        let mut triplets: Vec<(usize, usize, HighPrecReal)> = Vec::new();

        for i in 0..n {
            let events = self.model.events_for(i);
            let n_events = events.len();
            // A nuclide with only the synthetic event (no real removals)
            // still runs through the pi-distribution machinery below: with
            // no survival factors to multiply, pi[0] is exactly 1, norm is
            // exactly 1, and the only contribution is the diagonal "stay"
            // term A[i][i] += 1 — i.e. the nuclide is simply stable.

            let survival: Vec<HighPrecReal> = events[1..]
                .iter()
                .map(|event| {
                    let removal = event
                        .as_removal()
                        .expect("every non-synthetic event slot holds a Removal");
                    (removal.rate.clone() * dt.clone()).neg_then_exp()
                })
                .collect();

            let mut pis: Vec<HighPrecReal> = Vec::with_capacity(n_events);
            let mut norm = HighPrecReal::zero();
            for j in 0..n_events {
                let mut p = HighPrecReal::one();
                for (l, e) in survival.iter().enumerate() {
                    let factor = if l + 1 == j {
                        HighPrecReal::one() - e.clone()
                    } else {
                        e.clone()
                    };
                    p = p * factor;
                }
                norm = norm + p.clone();
                pis.push(p);
            }

            if norm.is_zero() {
                continue;
            }

            for (j, pi) in pis.into_iter().enumerate() {
                let a = pi / norm.clone();
                if j == 0 {
                    triplets.push((i, i, a));
                    continue;
                }
                let removal = events[j]
                    .as_removal()
                    .expect("j > 0 event slots hold a Removal");
                let n_daughters = removal.products.len();
                for (l, product) in removal.products.iter().enumerate() {
                    if let Some(k) = product.index() {
                        let contribution = if n_daughters > 1 {
                            a.clone() * removal.yields[l].clone()
                        } else {
                            a.clone()
                        };
                        triplets.push((k, i, contribution));
                    }
                }
            }
        }

        SparseMatrix::from_triplets(n, n, &triplets).map_err(SolverError::from)
    }

    /// Solves for the concentration of every species after time `time`,
    /// given initial concentrations `initial` and approximation order
    /// `order` (the number of correct decimal digits the substep size is
    /// chosen to target). Names in `initial` that are not part of this
    /// solver's species list are ignored; species with no entry in
    /// `initial` are treated as starting at zero.
    pub fn solve(
        &self,
        initial: &HashMap<String, HighPrecReal>,
        order: &HighPrecReal,
        time: &HighPrecReal,
    ) -> Result<HashMap<String, HighPrecReal>, SolverError> {
        let n = self.model.species_count();

        let ten = HighPrecReal::from_i64(10);
        let step_threshold = ten.pow(&(-order.clone()));
        let ratio = time.clone() / step_threshold;
        let k = ratio.log2().floor_to_i64().max(0) as u32;

        let two_pow_k = HighPrecReal::from_i64(2).powi(k as i64);
        let dt = time.clone() / two_pow_k;

        let mut transfer = self.transfer_matrix(&dt)?;
        transfer.power_by_repeated_squaring(k);

        let mut w0_triplets = Vec::new();
        for (i, name) in self.model.species_names().iter().enumerate() {
            if let Some(value) = initial.get(name) {
                w0_triplets.push((i, 0, value.clone()));
            }
        }
        let w0 = SparseMatrix::from_triplets(n, 1, &w0_triplets)?;
        let w = transfer.multiply_general(&w0)?;

        let mut out = HashMap::with_capacity(n);
        for (i, name) in self.model.species_names().iter().enumerate() {
            out.insert(name.clone(), w.get_value_at(i, 0));
        }
        Ok(out)
    }
}

/// Small helper so `transfer_matrix` reads as `rate_dt.neg_then_exp()`
/// rather than repeating `(-x).exp()` inline at each call site.
trait NegExp {
    fn neg_then_exp(self) -> Self;
}

impl NegExp for HighPrecReal {
    fn neg_then_exp(self) -> Self {
        (-self).exp()
    }
}
