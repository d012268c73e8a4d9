// Copyright 2019 Conflux Foundation. All rights reserved.
// Conflux is free software and distributed under GNU General Public License.
// See http://www.gnu.org/licenses/

use super::StateObserver;
use cbn_types::{Address, CoinSymbol, U256};
use parking_lot::Mutex;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BalanceChange {
    pub address: Address,
    pub coin: CoinSymbol,
    pub amount: U256,
}

/// Collects balance changes into a shared buffer, so that a consumer can keep
/// a handle while the state owns the observer.
#[derive(Debug, Default, Clone)]
pub struct BalanceChangeLog {
    changes: Arc<Mutex<Vec<BalanceChange>>>,
}

impl BalanceChangeLog {
    pub fn new() -> Self { Self::default() }

    /// Removes and returns everything recorded so far.
    pub fn drain(&self) -> Vec<BalanceChange> {
        std::mem::take(&mut *self.changes.lock())
    }

    pub fn len(&self) -> usize { self.changes.lock().len() }

    pub fn is_empty(&self) -> bool { self.changes.lock().is_empty() }
}

impl StateObserver for BalanceChangeLog {
    fn on_balance_change(
        &mut self, address: &Address, coin: &CoinSymbol, amount: &U256,
    ) {
        trace!("balance change: {:?} {} {}", address, amount, coin);
        self.changes.lock().push(BalanceChange {
            address: *address,
            coin: *coin,
            amount: *amount,
        });
    }
}
