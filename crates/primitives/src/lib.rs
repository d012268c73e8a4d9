// Copyright 2019 Conflux Foundation. All rights reserved.
// Conflux is free software and distributed under GNU General Public License.
// See http://www.gnu.org/licenses/

extern crate cbnkey as keylib;
extern crate keccak_hash as hash;
extern crate rlp;
#[macro_use]
extern crate rlp_derive;

pub mod account;
pub mod check;
pub mod transaction;

pub use crate::{
    account::{Account, Balances},
    check::{Check, CheckError},
    transaction::{
        Action, DelegateData, SendData, Transaction, TransactionError,
        TransactionWithSignature, TxType,
    },
};
