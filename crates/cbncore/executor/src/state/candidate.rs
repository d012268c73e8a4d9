// Copyright 2019 Conflux Foundation. All rights reserved.
// Conflux is free software and distributed under GNU General Public License.
// See http://www.gnu.org/licenses/

use cbn_types::{Address, Bytes, CoinSymbol, U256};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Stake {
    pub owner: Address,
    pub coin: CoinSymbol,
    pub value: U256,
}

/// A validator candidate, identified by its public key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Candidate {
    pub pub_key: Bytes,
    pub owner: Address,
    pub stakes: Vec<Stake>,
}

impl Candidate {
    pub fn new(pub_key: Bytes, owner: Address) -> Self {
        Candidate {
            pub_key,
            owner,
            stakes: Vec::new(),
        }
    }

    /// Adds to the stake `owner` holds in `coin`, opening one if needed.
    pub fn add_stake(&mut self, owner: &Address, coin: &CoinSymbol, value: &U256) {
        match self
            .stakes
            .iter_mut()
            .find(|stake| stake.owner == *owner && stake.coin == *coin)
        {
            Some(stake) => stake.value = stake.value + *value,
            None => self.stakes.push(Stake {
                owner: *owner,
                coin: *coin,
                value: *value,
            }),
        }
    }

    pub fn stake_of(&self, owner: &Address, coin: &CoinSymbol) -> U256 {
        self.stakes
            .iter()
            .find(|stake| stake.owner == *owner && stake.coin == *coin)
            .map_or_else(U256::zero, |stake| stake.value)
    }
}
