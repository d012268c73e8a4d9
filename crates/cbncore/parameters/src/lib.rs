// Copyright 2020 Conflux Foundation. All rights reserved.
// Conflux is free software and distributed under GNU General Public License.
// See http://www.gnu.org/licenses/

#[macro_use]
extern crate lazy_static;

use cbn_types::{CoinSymbol, U256};

pub mod consensus {
    /// Ticker of the native coin every commission is denominated in.
    pub const BASE_COIN_SYMBOL: &str = "CBN";

    /// Smallest units in one whole coin.
    pub const ONE_CBN_IN_PIP: u64 = 1_000_000_000_000_000_000;

    /// Gas units are priced in multiples of this many base-coin units.
    pub const COMMISSION_MULTIPLIER: u64 = 1_000_000_000_000_000;

    /// Constant reserve ratio bounds, in percent.
    pub const MIN_CRR: u32 = 10;
    pub const MAX_CRR: u32 = 100;
}

/// Gas charged per transaction type, before the gas price and the
/// commission multiplier are applied.
pub mod commissions {
    pub const PAYLOAD_BYTE: u64 = 2;
    pub const SEND_TX: u64 = 10;
    pub const DELEGATE_TX: u64 = 200;
}

pub mod limits {
    pub const MAX_TX_LENGTH: usize = 1024;
    pub const MAX_PAYLOAD_LENGTH: usize = 128;
    pub const MAX_SERVICE_DATA_LENGTH: usize = 128;
}

lazy_static! {
    pub static ref BASE_COIN: CoinSymbol = consensus::BASE_COIN_SYMBOL
        .parse()
        .expect("base coin ticker fits a coin symbol");
    pub static ref COMMISSION_MULTIPLIER: U256 =
        U256::from(consensus::COMMISSION_MULTIPLIER);
    pub static ref ONE_CBN_IN_PIP: U256 =
        U256::from(consensus::ONE_CBN_IN_PIP);
}
