// SPDX-License-Identifier: MIT
// Copyright (c) 2025 The nuctrans Authors and Contributors. All Rights Reserved.

use crate::error::ModelError;
use crate::product::Product;
use crate::removal::{Removal, RemovalEvent};
use crate::solver_config::SolverConfig;
use nuctrans_num::HighPrecReal;

/// The full set of removal reactions for a system of nuclides.
///
/// `events[i][0]` is always `RemovalEvent::NoRemoval`; every
/// `add_removal` call appends an independent `RemovalEvent::Removal` to
/// `events[i]` — calling it twice for the same species defines two
/// distinct competing reactions, it does not replace or merge a prior one.
#[derive(Debug, Clone)]
pub struct RemovalModel {
    species_names: Vec<String>,
    events: Vec<Vec<RemovalEvent>>,
}

impl RemovalModel {
    pub fn new(species_names: Vec<String>) -> Self {
        let events = species_names.iter().map(|_| vec![RemovalEvent::NoRemoval]).collect();
        RemovalModel { species_names, events }
    }

    pub fn species_count(&self) -> usize {
        self.species_names.len()
    }

    pub fn species_names(&self) -> &[String] {
        &self.species_names
    }

    pub fn species_index(&self, name: &str) -> Option<usize> {
        self.species_names.iter().position(|n| n == name)
    }

    pub fn events_for(&self, species_index: usize) -> &[RemovalEvent] {
        &self.events[species_index]
    }

    /// Defines one removal reaction for `species_index`.
    ///
    /// Rates outside `[config.min_rate(), config.max_rate()]` are silently
    /// ignored — no event is added and `Ok(())` is returned, matching the
    /// original solver's range filter. A fission event (more than one
    /// product) with too few yields, a single-product event given fission
    /// yields it has no use for, or an event with no products at all, are
    /// all fatal model-definition errors.
    pub fn add_removal(
        &mut self,
        species_index: usize,
        rate: HighPrecReal,
        products: Vec<Product>,
        yields: Vec<HighPrecReal>,
        config: &SolverConfig,
    ) -> Result<(), ModelError> {
        if rate < *config.min_rate() || rate > *config.max_rate() {
            return Ok(());
        }

        let species = || self.species_names[species_index].clone();
        if products.len() > 1 {
            if yields.len() < products.len() {
                return Err(ModelError::InsufficientYields(species()));
            }
        } else if products.len() == 1 {
            if !yields.is_empty() {
                return Err(ModelError::UnexpectedYields(species()));
            }
        } else {
            return Err(ModelError::InvalidRemoval(species()));
        }

        self.events[species_index].push(RemovalEvent::Removal(Removal { rate, products, yields }));
        Ok(())
    }
}
