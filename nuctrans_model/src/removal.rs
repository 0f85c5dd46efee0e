// SPDX-License-Identifier: MIT
// Copyright (c) 2025 The nuctrans Authors and Contributors. All Rights Reserved.

use crate::product::Product;
use nuctrans_num::HighPrecReal;

/// A single removal reaction for one nuclide: a rate, the product(s) it
/// transmutes into, and — for a fission event with more than one tracked
/// product — the yield fraction of each.
#[derive(Debug, Clone)]
pub struct Removal {
    pub rate: HighPrecReal,
    pub products: Vec<Product>,
    pub yields: Vec<HighPrecReal>,
}

impl Removal {
    /// `true` when this removal has more than one tracked-or-untracked
    /// product, i.e. is a fission-style event whose `yields` apply.
    pub fn is_fission(&self) -> bool {
        self.products.len() > 1
    }
}

/// One entry in a nuclide's removal-event list. Index `0` of every
/// nuclide's event list is always [`RemovalEvent::NoRemoval`] — the
/// synthetic "nothing happened this substep" event every pi-distribution
/// normalizes against, so a nuclide with zero real removals still has a
/// well-defined, exactly-one-entry event list.
#[derive(Debug, Clone)]
pub enum RemovalEvent {
    NoRemoval,
    Removal(Removal),
}

impl RemovalEvent {
    pub fn as_removal(&self) -> Option<&Removal> {
        match self {
            RemovalEvent::Removal(removal) => Some(removal),
            RemovalEvent::NoRemoval => None,
        }
    }
}
