// Copyright 2019 Conflux Foundation. All rights reserved.
// Conflux is free software and distributed under GNU General Public License.
// See http://www.gnu.org/licenses/

use rlp::{Decodable, DecoderError, Encodable, Rlp, RlpStream};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::{fmt, str::FromStr};

pub const COIN_SYMBOL_LENGTH: usize = 10;

/// Ticker of a fungible asset, stored as a fixed-width byte string padded
/// with trailing zero bytes.
///
/// The derived ordering compares the raw bytes lexicographically, which for a
/// fixed width is the same as comparing them as big-endian unsigned
/// integers. Canonical encodings of balances depend on this order.
#[derive(Default, Eq, PartialEq, Hash, Copy, Clone, Ord, PartialOrd)]
pub struct CoinSymbol([u8; COIN_SYMBOL_LENGTH]);

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CoinSymbolError {
    #[error("coin symbol is {0} bytes long, at most {max} allowed", max = COIN_SYMBOL_LENGTH)]
    TooLong(usize),
}

impl CoinSymbol {
    pub const fn from_raw(raw: [u8; COIN_SYMBOL_LENGTH]) -> Self {
        CoinSymbol(raw)
    }

    /// Right-pads `bytes` with zeros.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, CoinSymbolError> {
        if bytes.len() > COIN_SYMBOL_LENGTH {
            return Err(CoinSymbolError::TooLong(bytes.len()));
        }
        let mut raw = [0u8; COIN_SYMBOL_LENGTH];
        raw[..bytes.len()].copy_from_slice(bytes);
        Ok(CoinSymbol(raw))
    }

    pub fn as_bytes(&self) -> &[u8; COIN_SYMBOL_LENGTH] { &self.0 }

    /// The ticker without its zero padding.
    pub fn trimmed(&self) -> &[u8] {
        let end = self
            .0
            .iter()
            .rposition(|b| *b != 0)
            .map_or(0, |pos| pos + 1);
        &self.0[..end]
    }
}

impl FromStr for CoinSymbol {
    type Err = CoinSymbolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_slice(s.as_bytes())
    }
}

impl fmt::Display for CoinSymbol {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&String::from_utf8_lossy(self.trimmed()))
    }
}

impl fmt::Debug for CoinSymbol {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "CoinSymbol({})", self)
    }
}

impl Encodable for CoinSymbol {
    fn rlp_append(&self, s: &mut RlpStream) {
        s.encoder().encode_value(&self.0);
    }
}

impl Decodable for CoinSymbol {
    fn decode(rlp: &Rlp) -> Result<Self, DecoderError> {
        rlp.decoder().decode_value(|bytes| {
            if bytes.len() != COIN_SYMBOL_LENGTH {
                return Err(DecoderError::RlpInvalidLength);
            }
            let mut raw = [0u8; COIN_SYMBOL_LENGTH];
            raw.copy_from_slice(bytes);
            Ok(CoinSymbol(raw))
        })
    }
}

impl Serialize for CoinSymbol {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for CoinSymbol {
    fn deserialize<D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}
