// Copyright 2019 Conflux Foundation. All rights reserved.
// Conflux is free software and distributed under GNU General Public License.
// See http://www.gnu.org/licenses/

use super::State;
use cbn_types::{Address, H256};
use keccak_hash::keccak;
use rlp::RlpStream;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StateCommitResult {
    pub state_root: H256,
    /// Written back accounts, in ascending order.
    pub updated: Vec<Address>,
    /// Removed accounts, in ascending order.
    pub deleted: Vec<Address>,
}

impl State {
    /// Writes every dirty account object back to the committed accounts and
    /// removes the suicided ones. The cache is cleared afterwards.
    pub fn commit(&mut self) -> StateCommitResult {
        let mut cache = std::mem::take(self.cache.get_mut());
        let mut updated = Vec::new();
        let mut deleted = Vec::new();

        for address in self.dirty.take() {
            let object = match cache.remove(&address) {
                Some(object) => object,
                None => continue,
            };
            if object.is_suicided() {
                self.committed.remove(&address);
                deleted.push(address);
            } else {
                self.committed.insert(address, object.into_account());
                updated.push(address);
            }
        }

        let state_root = self.state_hash();
        debug!(
            "state committed: root={:?} updated={} deleted={}",
            state_root,
            updated.len(),
            deleted.len()
        );
        StateCommitResult {
            state_root,
            updated,
            deleted,
        }
    }

    /// Keccak of the RLP list of `[address, account]` pairs of the committed
    /// accounts, in ascending address order.
    pub fn state_hash(&self) -> H256 {
        let mut accounts: Vec<_> = self.committed.iter().collect();
        accounts.sort_by_key(|(address, _)| **address);

        let mut stream = RlpStream::new_list(accounts.len());
        for (address, account) in accounts {
            stream.begin_list(2).append(address).append(account);
        }
        keccak(stream.out())
    }
}
