// Copyright 2019 Conflux Foundation. All rights reserved.
// Conflux is free software and distributed under GNU General Public License.
// See http://www.gnu.org/licenses/

use super::{State, StateError};
use crate::state::Candidate;
use cbn_types::{Address, Bytes, CoinSymbol, U256};
use rustc_hex::ToHex;

impl State {
    pub fn candidate_exists(&self, pub_key: &[u8]) -> bool {
        self.candidates.contains_key(pub_key)
    }

    pub fn candidate(&self, pub_key: &[u8]) -> Option<&Candidate> {
        self.candidates.get(pub_key)
    }

    pub fn register_candidate(
        &mut self, pub_key: Bytes, owner: Address,
    ) -> Result<(), StateError> {
        if self.candidate_exists(&pub_key) {
            return Err(StateError::CandidateExists(pub_key.to_hex()));
        }
        debug!(
            "register candidate 0x{} owned by {:?}",
            pub_key.to_hex::<String>(),
            owner
        );
        self.candidates
            .insert(pub_key.clone(), Candidate::new(pub_key, owner));
        Ok(())
    }

    /// The caller should guarantee the candidate is registered.
    pub fn delegate(
        &mut self, owner: &Address, pub_key: &[u8], coin: &CoinSymbol,
        value: &U256,
    ) {
        trace!(
            "delegate {} {} from {:?} to 0x{}",
            value,
            coin,
            owner,
            pub_key.to_hex::<String>()
        );
        match self.candidates.get_mut(pub_key) {
            Some(candidate) => candidate.add_stake(owner, coin, value),
            None => panic!(
                "delegation to unregistered candidate 0x{}",
                pub_key.to_hex::<String>()
            ),
        }
    }
}
