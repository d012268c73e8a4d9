// Copyright 2019 Conflux Foundation. All rights reserved.
// Conflux is free software and distributed under GNU General Public License.
// See http://www.gnu.org/licenses/

use super::State;
use cbn_types::{Address, CoinSymbol, U256};
use primitives::Balances;

impl State {
    pub fn exists(&self, address: &Address) -> bool {
        self.read_object(address).is_some()
    }

    pub fn balance(&self, address: &Address, coin: &CoinSymbol) -> U256 {
        self.read_object(address)
            .map_or_else(U256::zero, |object| object.balance(coin))
    }

    pub fn balances(&self, address: &Address) -> Balances {
        self.read_object(address)
            .map(|object| object.balances().clone())
            .unwrap_or_default()
    }

    pub fn nonce(&self, address: &Address) -> u64 {
        self.read_object(address).map_or(0, |object| object.nonce())
    }

    pub fn add_balance(
        &mut self, address: &Address, coin: &CoinSymbol, by: &U256,
    ) {
        if by.is_zero() {
            return;
        }
        trace!("add_balance {:?} {} {}", address, by, coin);
        self.with_object_mut(address, |object, dirty, observer| {
            object.add_balance(coin, by, dirty, observer)
        });
    }

    /// The caller should guarantee the balance covers `by`.
    pub fn sub_balance(
        &mut self, address: &Address, coin: &CoinSymbol, by: &U256,
    ) {
        if by.is_zero() {
            return;
        }
        trace!("sub_balance {:?} {} {}", address, by, coin);
        self.with_object_mut(address, |object, dirty, observer| {
            object.sub_balance(coin, by, dirty, observer)
        });
    }

    pub fn transfer_balance(
        &mut self, from: &Address, to: &Address, coin: &CoinSymbol, by: &U256,
    ) {
        self.sub_balance(from, coin, by);
        self.add_balance(to, coin, by);
    }

    pub fn set_nonce(&mut self, address: &Address, nonce: u64) {
        trace!("set_nonce {:?} {}", address, nonce);
        self.with_object_mut(address, |object, dirty, _| {
            object.set_nonce(nonce, dirty)
        });
    }

    /// Schedules the account for removal on the next commit.
    pub fn kill_account(&mut self, address: &Address) {
        trace!("kill_account {:?}", address);
        self.with_object_mut(address, |object, dirty, _| {
            object.mark_suicided(dirty)
        });
    }
}
