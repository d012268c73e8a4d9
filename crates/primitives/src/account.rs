// Copyright 2019 Conflux Foundation. All rights reserved.
// Conflux is free software and distributed under GNU General Public License.
// See http://www.gnu.org/licenses/

use cbn_types::{Bytes, CoinSymbol, H256, U256};
use rlp::{Decodable, DecoderError, Encodable, Rlp, RlpStream};
use std::collections::{hash_map, HashMap};

/// Multi-coin balance sheet of one account.
///
/// Entries holding zero may live in memory but never reach the encoding,
/// which lists `[coin, amount]` pairs by descending coin value so that every
/// node produces the same bytes.
#[derive(Clone, Debug, Default)]
pub struct Balances(HashMap<CoinSymbol, U256>);

impl Balances {
    pub fn new() -> Self { Self::default() }

    /// Balance of `coin`, zero when there is no entry.
    pub fn get(&self, coin: &CoinSymbol) -> U256 {
        self.0.get(coin).cloned().unwrap_or_default()
    }

    pub fn set(&mut self, coin: CoinSymbol, amount: U256) {
        self.0.insert(coin, amount);
    }

    /// Coins with a non-zero balance, in canonical order.
    pub fn coins(&self) -> Vec<CoinSymbol> {
        self.canonical_entries()
            .into_iter()
            .map(|(coin, _)| *coin)
            .collect()
    }

    /// True when no coin has a non-zero balance.
    pub fn is_empty(&self) -> bool { self.0.values().all(U256::is_zero) }

    pub fn iter(&self) -> hash_map::Iter<'_, CoinSymbol, U256> {
        self.0.iter()
    }

    pub fn encode_canonical(&self) -> Bytes { rlp::encode(self).to_vec() }

    pub fn decode_canonical(bytes: &[u8]) -> Result<Self, DecoderError> {
        rlp::decode(bytes)
    }

    fn canonical_entries(&self) -> Vec<(&CoinSymbol, &U256)> {
        let mut entries: Vec<_> =
            self.0.iter().filter(|(_, amount)| !amount.is_zero()).collect();
        entries.sort_unstable_by(|a, b| b.0.cmp(a.0));
        entries
    }
}

/// Two balance sheets are equal when they hold the same non-zero amounts.
impl PartialEq for Balances {
    fn eq(&self, other: &Self) -> bool {
        self.canonical_entries() == other.canonical_entries()
    }
}

impl Eq for Balances {}

impl Encodable for Balances {
    fn rlp_append(&self, s: &mut RlpStream) {
        let entries = self.canonical_entries();
        s.begin_list(entries.len());
        for (coin, amount) in entries {
            s.begin_list(2).append(coin).append(amount);
        }
    }
}

impl Decodable for Balances {
    /// Accepts any order. A coin listed twice keeps its last amount.
    fn decode(rlp: &Rlp) -> Result<Self, DecoderError> {
        if !rlp.is_list() {
            return Err(DecoderError::RlpExpectedToBeList);
        }
        let mut balances = HashMap::new();
        for entry in rlp.iter() {
            if entry.item_count()? != 2 {
                return Err(DecoderError::RlpIncorrectListLen);
            }
            balances.insert(entry.val_at(0)?, entry.val_at(1)?);
        }
        Ok(Balances(balances))
    }
}

impl FromIterator<(CoinSymbol, U256)> for Balances {
    fn from_iter<I: IntoIterator<Item = (CoinSymbol, U256)>>(iter: I) -> Self {
        Balances(iter.into_iter().collect())
    }
}

/// Persisted form of an account.
#[derive(
    Clone, Debug, Default, PartialEq, Eq, RlpEncodable, RlpDecodable,
)]
pub struct Account {
    pub nonce: u64,
    pub balance: Balances,
    /// Merkle root of the account's storage trie.
    pub root: H256,
}

impl Account {
    pub fn new_empty() -> Self { Self::default() }
}
