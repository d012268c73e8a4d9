// Copyright 2019 Conflux Foundation. All rights reserved.
// Conflux is free software and distributed under GNU General Public License.
// See http://www.gnu.org/licenses/

use cbn_math::calculate_sale_amount;
use cbn_types::{CoinSymbol, U256};

/// Bonding-curve metadata of a custom coin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StateCoin {
    pub symbol: CoinSymbol,
    /// Circulating supply.
    pub volume: U256,
    /// Base coins held in reserve.
    pub reserve_balance: U256,
    /// Constant reserve ratio, in percent.
    pub crr: u32,
}

impl StateCoin {
    pub fn new(
        symbol: CoinSymbol, volume: U256, reserve_balance: U256, crr: u32,
    ) -> Self {
        StateCoin {
            symbol,
            volume,
            reserve_balance,
            crr,
        }
    }

    /// Units of this coin to sell for `base_amount` base coins.
    pub fn sale_amount_for(&self, base_amount: &U256) -> U256 {
        calculate_sale_amount(
            &self.volume,
            &self.reserve_balance,
            self.crr,
            base_amount,
        )
    }
}
