// Copyright 2019 Conflux Foundation. All rights reserved.
// Conflux is free software and distributed under GNU General Public License.
// See http://www.gnu.org/licenses/

//! A caching layer built upon the committed accounts, providing interfaces
//! and logics for managing accounts, coins and candidates to the execution
//! engine.

/// Implements access functions for the basic fields (balances, nonce) of
/// `State`.
mod basic_fields;

/// Cache Layer: Implements a read-through write-back cache of account
/// objects.
mod cache_layer;

/// Implements the candidate registry and delegation.
mod candidates;

/// Implements the coin registry.
mod coins;

/// Implements functions for committing `State` changes to the account map.
mod commit;

#[cfg(test)]
mod tests;

pub use self::commit::StateCommitResult;

use super::{
    Candidate, DirtyAccounts, LedgerState, StateCoin, StateObject,
    StateOverlay,
};
use crate::{
    observer::{NoopObserver, StateObserver},
    spec::ExecutionSpec,
};
use cbn_types::{Address, Bytes, CoinSymbol, U256};
use parking_lot::RwLock;
use primitives::Account;
use std::collections::{BTreeMap, HashMap};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StateError {
    #[error("coin {0} already exists")]
    CoinExists(CoinSymbol),
    #[error("constant reserve ratio {0} is out of range")]
    InvalidCrr(u32),
    #[error("candidate with public key 0x{0} already exists")]
    CandidateExists(String),
}

/// The state manager. Owns every account object and the committed account
/// map standing in for the account trie.
pub struct State {
    /// Accounts as of the last commit.
    committed: HashMap<Address, Account>,

    /// Caches for the account objects
    ///
    /// WARNING: Don't delete cache entries outside of `State::commit`, the
    /// dirty accumulator refers to them.
    cache: RwLock<HashMap<Address, StateObject>>,

    /// Accounts mutated since the last commit.
    dirty: DirtyAccounts,

    coins: HashMap<CoinSymbol, StateCoin>,
    candidates: BTreeMap<Bytes, Candidate>,
    base_coin: CoinSymbol,

    observer: Box<dyn StateObserver + Send>,
}

impl State {
    pub fn new(base_coin: CoinSymbol) -> Self {
        Self::from_accounts(base_coin, HashMap::new())
    }

    /// A state over `committed` whose base coin is the one of `spec`.
    pub fn from_spec(
        spec: &ExecutionSpec, committed: HashMap<Address, Account>,
    ) -> Self {
        Self::from_accounts(spec.base_coin, committed)
    }

    pub fn from_accounts(
        base_coin: CoinSymbol, committed: HashMap<Address, Account>,
    ) -> Self {
        State {
            committed,
            cache: Default::default(),
            dirty: DirtyAccounts::new(),
            coins: HashMap::new(),
            candidates: BTreeMap::new(),
            base_coin,
            observer: Box::new(NoopObserver),
        }
    }

    /// Replaces the observer that receives balance change events.
    pub fn set_observer(&mut self, observer: Box<dyn StateObserver + Send>) {
        self.observer = observer;
    }

    pub fn base_coin(&self) -> &CoinSymbol { &self.base_coin }

    pub fn dirty_accounts(&self) -> &DirtyAccounts { &self.dirty }

    /// A validate-only view: reads fall through to this state, writes stay
    /// in the view and vanish with it.
    pub fn copy_on_write(&self) -> StateOverlay<'_> { StateOverlay::new(self) }
}

impl LedgerState for State {
    fn base_coin(&self) -> &CoinSymbol { &self.base_coin }

    fn coin_exists(&self, symbol: &CoinSymbol) -> bool {
        State::coin_exists(self, symbol)
    }

    fn get_state_coin(&self, symbol: &CoinSymbol) -> Option<StateCoin> {
        self.coin(symbol).cloned()
    }

    fn get_balance(&self, address: &Address, coin: &CoinSymbol) -> U256 {
        self.balance(address, coin)
    }

    fn get_nonce(&self, address: &Address) -> u64 { self.nonce(address) }

    fn add_balance(&mut self, address: &Address, coin: &CoinSymbol, by: &U256) {
        State::add_balance(self, address, coin, by)
    }

    fn sub_balance(&mut self, address: &Address, coin: &CoinSymbol, by: &U256) {
        State::sub_balance(self, address, coin, by)
    }

    fn set_nonce(&mut self, address: &Address, nonce: u64) {
        State::set_nonce(self, address, nonce)
    }

    fn candidate_exists(&self, pub_key: &[u8]) -> bool {
        State::candidate_exists(self, pub_key)
    }

    fn delegate(
        &mut self, owner: &Address, pub_key: &[u8], coin: &CoinSymbol,
        value: &U256,
    ) {
        State::delegate(self, owner, pub_key, coin, value)
    }
}
