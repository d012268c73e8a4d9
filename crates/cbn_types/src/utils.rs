// Copyright 2019 Conflux Foundation. All rights reserved.
// Conflux is free software and distributed under GNU General Public License.
// See http://www.gnu.org/licenses/

use ethereum_types::{H256, U256};

/// Big-endian, left zero-padded 32 byte form of `value`.
pub fn u256_to_be_bytes(value: &U256) -> [u8; 32] {
    let mut buf = [0u8; 32];
    value.to_big_endian(&mut buf);
    buf
}

pub fn u256_to_h256_be(value: &U256) -> H256 {
    H256::from(u256_to_be_bytes(value))
}

/// Strips leading zero bytes, giving the minimal big-endian form used for
/// RLP integers.
pub fn trim_leading_zeros(bytes: &[u8]) -> &[u8] {
    let start = bytes.iter().position(|b| *b != 0).unwrap_or(bytes.len());
    &bytes[start..]
}
