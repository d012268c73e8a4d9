// Copyright 2019 Conflux Foundation. All rights reserved.
// Conflux is free software and distributed under GNU General Public License.
// See http://www.gnu.org/licenses/

use super::{
    Candidate, DirtyAccounts, LedgerState, State, StateCoin, StateObject,
};
use crate::observer::NoopObserver;
use cbn_types::{Address, Bytes, CoinSymbol, U256};
use std::collections::{BTreeMap, HashMap};

/// A copy-on-write view over a `State`.
///
/// Reads fall through to the base state until an account is written, at
/// which point a deep copy of the base object is taken. The base state is
/// never modified; everything written here is lost when the view is dropped.
pub struct StateOverlay<'a> {
    base: &'a State,
    objects: HashMap<Address, StateObject>,
    dirty: DirtyAccounts,
    /// Candidates whose stakes changed in this view.
    candidates: BTreeMap<Bytes, Candidate>,
}

impl<'a> StateOverlay<'a> {
    pub(super) fn new(base: &'a State) -> Self {
        StateOverlay {
            base,
            objects: HashMap::new(),
            dirty: DirtyAccounts::new(),
            candidates: BTreeMap::new(),
        }
    }

    pub fn dirty_accounts(&self) -> &DirtyAccounts { &self.dirty }

    pub fn candidate(&self, pub_key: &[u8]) -> Option<&Candidate> {
        self.candidates
            .get(pub_key)
            .or_else(|| self.base.candidate(pub_key))
    }

    /// The object of `address` in this view, copied from the base on first
    /// access, together with the dirty accumulator of the view.
    fn object_mut(
        &mut self, address: &Address,
    ) -> (&mut StateObject, &mut DirtyAccounts) {
        let base = self.base;
        let object = self.objects.entry(*address).or_insert_with(|| {
            base.snapshot_object(address)
                .unwrap_or_else(|| StateObject::new_empty(*address))
        });
        (object, &mut self.dirty)
    }
}

impl LedgerState for StateOverlay<'_> {
    fn base_coin(&self) -> &CoinSymbol { self.base.base_coin() }

    fn coin_exists(&self, symbol: &CoinSymbol) -> bool {
        self.base.coin_exists(symbol)
    }

    fn get_state_coin(&self, symbol: &CoinSymbol) -> Option<StateCoin> {
        self.base.coin(symbol).cloned()
    }

    fn get_balance(&self, address: &Address, coin: &CoinSymbol) -> U256 {
        match self.objects.get(address) {
            Some(object) => object.balance(coin),
            None => self.base.balance(address, coin),
        }
    }

    fn get_nonce(&self, address: &Address) -> u64 {
        match self.objects.get(address) {
            Some(object) => object.nonce(),
            None => self.base.nonce(address),
        }
    }

    fn add_balance(&mut self, address: &Address, coin: &CoinSymbol, by: &U256) {
        if by.is_zero() {
            return;
        }
        let (object, dirty) = self.object_mut(address);
        object.add_balance(coin, by, dirty, &mut NoopObserver);
    }

    fn sub_balance(&mut self, address: &Address, coin: &CoinSymbol, by: &U256) {
        if by.is_zero() {
            return;
        }
        let (object, dirty) = self.object_mut(address);
        object.sub_balance(coin, by, dirty, &mut NoopObserver);
    }

    fn set_nonce(&mut self, address: &Address, nonce: u64) {
        let (object, dirty) = self.object_mut(address);
        object.set_nonce(nonce, dirty);
    }

    fn candidate_exists(&self, pub_key: &[u8]) -> bool {
        self.base.candidate_exists(pub_key)
    }

    fn delegate(
        &mut self, owner: &Address, pub_key: &[u8], coin: &CoinSymbol,
        value: &U256,
    ) {
        if !self.candidates.contains_key(pub_key) {
            match self.base.candidate(pub_key) {
                Some(candidate) => {
                    self.candidates.insert(pub_key.to_vec(), candidate.clone());
                }
                None => panic!("delegation to unregistered candidate"),
            }
        }
        if let Some(candidate) = self.candidates.get_mut(pub_key) {
            candidate.add_stake(owner, coin, value);
        }
    }
}
