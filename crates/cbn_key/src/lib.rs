// Copyright 2015-2019 Parity Technologies (UK) Ltd.
// This file is part of Parity Ethereum.

// Parity Ethereum is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.

// Parity Ethereum is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.

// You should have received a copy of the GNU General Public License
// along with Parity Ethereum.  If not, see <http://www.gnu.org/licenses/>.

mod error;
mod keypair;
mod secret;
mod signature;

use cbn_types::{H256, U256};
use lazy_static::lazy_static;
use secp256k1::constants::CURVE_ORDER;

pub use cbn_types::{Address, Public};
pub use keccak_hash::keccak;
pub type Message = H256;
pub use secp256k1::global::SECP256K1;

pub use self::{
    error::Error,
    keypair::{public_to_address, KeyPair},
    secret::Secret,
    signature::{
        ecrecover, recover, recover_plain, sign, validate_signature_values,
        Signature,
    },
};

lazy_static! {
    /// Order `n` of the secp256k1 group.
    pub static ref SECP256K1_N: U256 = U256::from_big_endian(&CURVE_ORDER);

    /// `n / 2`, the upper bound of a canonical (low) `s` value.
    pub static ref SECP256K1_HALF_N: U256 = *SECP256K1_N >> 1;
}
