// Copyright 2019 Conflux Foundation. All rights reserved.
// Conflux is free software and distributed under GNU General Public License.
// See http://www.gnu.org/licenses/

//! The access and manipulation object of one account during execution.
//!
//! A `StateObject` reports itself to a `DirtyAccounts` accumulator the first
//! time it is mutated and never again: the accumulator only needs to learn
//! once that the object must be written back.


use super::DirtyAccounts;
use crate::observer::StateObserver;
use cbn_types::{Address, CoinSymbol, U256};
use primitives::{Account, Balances};
use rlp::{Encodable, RlpStream};

#[derive(Debug)]
pub struct StateObject {
    address: Address,
    data: Account,

    suicided: bool,
    touched: bool,
    deleted: bool,

    /// Set until the object has reported itself dirty.
    dirty_armed: bool,
}

impl StateObject {
    pub fn new(address: Address, data: Account) -> Self {
        StateObject {
            address,
            data,
            suicided: false,
            touched: false,
            deleted: false,
            dirty_armed: true,
        }
    }

    pub fn new_empty(address: Address) -> Self {
        Self::new(address, Account::new_empty())
    }

    pub fn address(&self) -> &Address { &self.address }

    pub fn account(&self) -> &Account { &self.data }

    pub fn into_account(self) -> Account { self.data }

    pub fn nonce(&self) -> u64 { self.data.nonce }

    pub fn balance(&self, coin: &CoinSymbol) -> U256 {
        self.data.balance.get(coin)
    }

    pub fn balances(&self) -> &Balances { &self.data.balance }

    pub fn is_suicided(&self) -> bool { self.suicided }

    pub fn is_touched(&self) -> bool { self.touched }

    pub fn is_deleted(&self) -> bool { self.deleted }

    /// Whether the object has already reported itself dirty.
    pub fn is_dirty(&self) -> bool { !self.dirty_armed }

    /// Accounts are never considered empty, so zero-value credits never
    /// touch them.
    pub fn is_empty(&self) -> bool { false }

    /// Reports the object to `dirty` unless it already did. Returns whether
    /// a report was made.
    pub fn mark_dirty(&mut self, dirty: &mut DirtyAccounts) -> bool {
        if !self.dirty_armed {
            return false;
        }
        self.dirty_armed = false;
        dirty.report(self.address);
        true
    }

    pub fn touch(&mut self, dirty: &mut DirtyAccounts) {
        self.mark_dirty(dirty);
        self.touched = true;
    }

    pub fn mark_suicided(&mut self, dirty: &mut DirtyAccounts) {
        self.suicided = true;
        self.mark_dirty(dirty);
    }

    /// Flags an object whose account was removed from the ledger.
    pub fn mark_deleted(&mut self) { self.deleted = true; }

    pub fn add_balance(
        &mut self, coin: &CoinSymbol, by: &U256, dirty: &mut DirtyAccounts,
        observer: &mut dyn StateObserver,
    ) {
        if by.is_zero() {
            if self.is_empty() {
                self.touch(dirty);
            }
            return;
        }
        let balance = self.balance(coin) + *by;
        self.set_balance(coin, balance, dirty, observer);
    }

    /// Panics when `by` exceeds the balance; callers check sufficiency first.
    pub fn sub_balance(
        &mut self, coin: &CoinSymbol, by: &U256, dirty: &mut DirtyAccounts,
        observer: &mut dyn StateObserver,
    ) {
        if by.is_zero() {
            return;
        }
        let balance = self.balance(coin);
        assert!(
            balance >= *by,
            "balance underflow: {:?} holds {} {}, {} requested",
            self.address,
            balance,
            coin,
            by
        );
        self.set_balance(coin, balance - *by, dirty, observer);
    }

    pub fn set_balance(
        &mut self, coin: &CoinSymbol, amount: U256, dirty: &mut DirtyAccounts,
        observer: &mut dyn StateObserver,
    ) {
        observer.on_balance_change(&self.address, coin, &amount);
        self.data.balance.set(*coin, amount);
        self.mark_dirty(dirty);
    }

    pub fn set_nonce(&mut self, nonce: u64, dirty: &mut DirtyAccounts) {
        self.data.nonce = nonce;
        self.mark_dirty(dirty);
    }

    /// An independent copy with the same account data and the same
    /// `suicided` and `deleted` flags. The copy reports itself dirty on its
    /// own first mutation, regardless of the original's history.
    pub fn deep_copy(&self) -> StateObject {
        let mut copy = StateObject::new(self.address, self.data.clone());
        copy.suicided = self.suicided;
        copy.deleted = self.deleted;
        copy
    }
}

impl Encodable for StateObject {
    fn rlp_append(&self, s: &mut RlpStream) { self.data.rlp_append(s); }
}
