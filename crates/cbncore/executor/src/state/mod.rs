// Copyright 2019 Conflux Foundation. All rights reserved.
// Conflux is free software and distributed under GNU General Public License.
// See http://www.gnu.org/licenses/

//! Ledger State: account objects and the caching layer that owns them.

/// Candidates and the stakes delegated to them.
mod candidate;

/// Bonding-curve coin metadata.
mod coin;

/// Accumulator of accounts with unpersisted changes.
mod dirty_accounts;

/// Ledger: the state manager. Implements a read-through write-back cache of
/// account objects over the committed accounts, plus the coin and candidate
/// registries.
mod ledger;

/// Copy-on-write view over a `State`, for validate-only execution.
mod overlay;

/// State Object: the mutable wrapper around one account.
mod state_object;

pub use self::{
    candidate::{Candidate, Stake},
    coin::StateCoin,
    dirty_accounts::DirtyAccounts,
    ledger::{State, StateCommitResult, StateError},
    overlay::StateOverlay,
    state_object::StateObject,
};

use cbn_types::{Address, CoinSymbol, U256};

/// The view of the ledger that transaction execution works against.
///
/// Mutators assume the caller already validated the change: subtracting more
/// than an account holds is a broken invariant and panics.
pub trait LedgerState {
    /// The coin commissions are denominated in.
    fn base_coin(&self) -> &CoinSymbol;

    /// The base coin always exists.
    fn coin_exists(&self, symbol: &CoinSymbol) -> bool;

    fn get_state_coin(&self, symbol: &CoinSymbol) -> Option<StateCoin>;

    fn get_balance(&self, address: &Address, coin: &CoinSymbol) -> U256;

    fn get_nonce(&self, address: &Address) -> u64;

    fn add_balance(&mut self, address: &Address, coin: &CoinSymbol, by: &U256);

    fn sub_balance(&mut self, address: &Address, coin: &CoinSymbol, by: &U256);

    fn set_nonce(&mut self, address: &Address, nonce: u64);

    fn candidate_exists(&self, pub_key: &[u8]) -> bool;

    /// Records a stake of `value` units of `coin` from `owner` to the
    /// candidate. The coins must already be debited from `owner`.
    fn delegate(
        &mut self, owner: &Address, pub_key: &[u8], coin: &CoinSymbol,
        value: &U256,
    );
}
