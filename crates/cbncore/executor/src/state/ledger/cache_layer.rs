// Copyright 2019 Conflux Foundation. All rights reserved.
// Conflux is free software and distributed under GNU General Public License.
// See http://www.gnu.org/licenses/

//! Cache Layer in State: Implements a read-through write-back cache logic and
//! provides interfaces for reading and writing account objects.

use super::State;
use crate::{
    observer::StateObserver,
    state::{DirtyAccounts, StateObject},
};
use cbn_types::Address;
use parking_lot::{MappedRwLockReadGuard, RwLockReadGuard, RwLockWriteGuard};

pub type ObjectReadGuard<'a> = MappedRwLockReadGuard<'a, StateObject>;

impl State {
    /// Requests an immutable reference of an account object through the
    /// cache, returning a reference with a read lock guard. It returns `None`
    /// if the account doesn't exist.
    pub(crate) fn read_object(
        &self, address: &Address,
    ) -> Option<ObjectReadGuard<'_>> {
        let mut cache = self.cache.write();
        if !cache.contains_key(address) {
            let account = self.committed.get(address)?.clone();
            cache.insert(*address, StateObject::new(*address, account));
        }

        RwLockReadGuard::try_map(RwLockWriteGuard::downgrade(cache), |cache| {
            cache.get(address)
        })
        .ok()
    }

    /// An independent copy of the account object, or `None` if the account
    /// doesn't exist.
    pub(crate) fn snapshot_object(
        &self, address: &Address,
    ) -> Option<StateObject> {
        self.read_object(address).map(|object| object.deep_copy())
    }

    /// Runs `f` on the account object through the cache, initiating an empty
    /// account if the address has none. The object is handed over together
    /// with the dirty accumulator and the observer of this state.
    pub(super) fn with_object_mut<F, T>(&mut self, address: &Address, f: F) -> T
    where F: FnOnce(
            &mut StateObject,
            &mut DirtyAccounts,
            &mut dyn StateObserver,
        ) -> T {
        let committed = &self.committed;
        let object =
            self.cache.get_mut().entry(*address).or_insert_with(|| {
                match committed.get(address) {
                    Some(account) => StateObject::new(*address, account.clone()),
                    None => StateObject::new_empty(*address),
                }
            });
        f(object, &mut self.dirty, &mut *self.observer)
    }
}
