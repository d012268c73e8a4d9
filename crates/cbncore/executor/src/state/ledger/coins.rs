// Copyright 2019 Conflux Foundation. All rights reserved.
// Conflux is free software and distributed under GNU General Public License.
// See http://www.gnu.org/licenses/

use super::{State, StateError};
use crate::state::StateCoin;
use cbn_parameters::consensus::{MAX_CRR, MIN_CRR};
use cbn_types::CoinSymbol;

impl State {
    pub fn coin_exists(&self, symbol: &CoinSymbol) -> bool {
        *symbol == self.base_coin || self.coins.contains_key(symbol)
    }

    /// Bonding-curve metadata of a custom coin. The base coin has none.
    pub fn coin(&self, symbol: &CoinSymbol) -> Option<&StateCoin> {
        self.coins.get(symbol)
    }

    pub fn register_coin(&mut self, coin: StateCoin) -> Result<(), StateError> {
        if self.coin_exists(&coin.symbol) {
            return Err(StateError::CoinExists(coin.symbol));
        }
        if !(MIN_CRR..=MAX_CRR).contains(&coin.crr) {
            return Err(StateError::InvalidCrr(coin.crr));
        }
        debug!(
            "register coin {}: volume={} reserve={} crr={}",
            coin.symbol, coin.volume, coin.reserve_balance, coin.crr
        );
        self.coins.insert(coin.symbol, coin);
        Ok(())
    }
}
