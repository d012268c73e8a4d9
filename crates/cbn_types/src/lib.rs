// Copyright 2019 Conflux Foundation. All rights reserved.
// Conflux is free software and distributed under GNU General Public License.
// See http://www.gnu.org/licenses/

extern crate ethereum_types;
extern crate rlp;
extern crate serde;

pub use ethereum_types::{
    Address, BigEndianHash, Public, H160, H256, H512, H520, U256, U512,
};

mod coin_symbol;
pub use coin_symbol::{CoinSymbol, CoinSymbolError, COIN_SYMBOL_LENGTH};

mod utils;
pub use utils::*;

/// Raw byte strings (payloads, public keys, RLP blobs).
pub type Bytes = Vec<u8>;
