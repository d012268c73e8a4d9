// Copyright 2019 Conflux Foundation. All rights reserved.
// Conflux is free software and distributed under GNU General Public License.
// See http://www.gnu.org/licenses/

use cbn_types::Address;
use std::collections::BTreeSet;

/// Receives a report from every account object on its first mutation.
///
/// Reports are kept in arrival order and are not deduplicated: each object
/// reports itself once, so a repeated address means two distinct objects
/// (e.g. an object and its deep copy) were written.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DirtyAccounts {
    reports: Vec<Address>,
}

impl DirtyAccounts {
    pub fn new() -> Self { Self::default() }

    pub fn report(&mut self, address: Address) { self.reports.push(address); }

    pub fn contains(&self, address: &Address) -> bool {
        self.reports.contains(address)
    }

    /// Number of reports received.
    pub fn len(&self) -> usize { self.reports.len() }

    pub fn is_empty(&self) -> bool { self.reports.is_empty() }

    pub fn iter(&self) -> impl Iterator<Item = &Address> { self.reports.iter() }

    /// Distinct reported addresses in ascending order.
    pub fn addresses(&self) -> BTreeSet<Address> {
        self.reports.iter().cloned().collect()
    }

    /// Distinct reported addresses in ascending order, leaving the
    /// accumulator empty.
    pub fn take(&mut self) -> BTreeSet<Address> {
        std::mem::take(&mut self.reports).into_iter().collect()
    }
}
