// Copyright 2019 Conflux Foundation. All rights reserved.
// Conflux is free software and distributed under GNU General Public License.
// See http://www.gnu.org/licenses/

mod balance_log;

pub use balance_log::{BalanceChange, BalanceChangeLog};

use cbn_types::{Address, CoinSymbol, U256};

/// This trait is used by the ledger to report balance changes to event
/// consumers (indexers, the RPC layer). Observers never influence execution.
#[allow(unused_variables)]
pub trait StateObserver {
    /// Called before `address` gets its `coin` balance set to `amount`.
    fn on_balance_change(
        &mut self, address: &Address, coin: &CoinSymbol, amount: &U256,
    ) {
    }
}

/// Discards every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl StateObserver for NoopObserver {}

impl<T: StateObserver + ?Sized> StateObserver for &mut T {
    fn on_balance_change(
        &mut self, address: &Address, coin: &CoinSymbol, amount: &U256,
    ) {
        (**self).on_balance_change(address, coin, amount)
    }
}
