// Copyright 2019 Conflux Foundation. All rights reserved.
// Conflux is free software and distributed under GNU General Public License.
// See http://www.gnu.org/licenses/

use serde::{Serialize, Serializer};
use std::fmt;

/// Result codes of transaction execution. The numeric values are part of the
/// consensus protocol and never change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u32)]
pub enum Code {
    #[default]
    Ok = 0,

    // Transaction envelope
    WrongNonce = 101,
    CoinNotExists = 102,
    CoinReserveNotSufficient = 103,
    TxTooLarge = 105,
    DecodeError = 106,
    InsufficientFunds = 107,
    TxPayloadTooLarge = 109,
    TxServiceDataTooLarge = 110,

    // Candidates
    CandidateNotFound = 403,
    StakeShouldBePositive = 408,
}

impl Code {
    pub fn as_u32(self) -> u32 { self as u32 }

    pub fn is_ok(self) -> bool { self == Code::Ok }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:?}({})", self, self.as_u32())
    }
}

impl Serialize for Code {
    fn serialize<S: Serializer>(
        &self, serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.serialize_u32(self.as_u32())
    }
}
