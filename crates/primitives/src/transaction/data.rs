// Copyright 2019 Conflux Foundation. All rights reserved.
// Conflux is free software and distributed under GNU General Public License.
// See http://www.gnu.org/licenses/

use cbn_types::{Address, Bytes, CoinSymbol, U256};
use rustc_hex::ToHex;
use serde::{ser::SerializeStruct, Serialize, Serializer};
use std::fmt;

/// Transfer of `value` units of `coin` to `to`.
#[derive(Clone, Debug, PartialEq, Eq, RlpEncodable, RlpDecodable)]
pub struct SendData {
    pub coin: CoinSymbol,
    pub to: Address,
    pub value: U256,
}

impl Serialize for SendData {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut s = serializer.serialize_struct("SendData", 3)?;
        s.serialize_field("coin", &self.coin)?;
        s.serialize_field("to", &format!("Mx{:x}", self.to))?;
        s.serialize_field("value", &self.value.to_string())?;
        s.end()
    }
}

impl fmt::Display for SendData {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "SEND to:Mx{:x} coin:{} value:{}", self.to, self.coin, self.value)
    }
}

/// Bond of `stake` units of `coin` to the candidate identified by `pub_key`.
#[derive(Clone, Debug, PartialEq, Eq, RlpEncodable, RlpDecodable)]
pub struct DelegateData {
    pub pub_key: Bytes,
    pub coin: CoinSymbol,
    pub stake: U256,
}

impl Serialize for DelegateData {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut s = serializer.serialize_struct("DelegateData", 3)?;
        s.serialize_field(
            "pub_key",
            &format!("Mp{}", self.pub_key.to_hex::<String>()),
        )?;
        s.serialize_field("coin", &self.coin)?;
        s.serialize_field("stake", &self.stake.to_string())?;
        s.end()
    }
}

impl fmt::Display for DelegateData {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "DELEGATE pubkey:0x{}", self.pub_key.to_hex::<String>())
    }
}
