// Copyright 2019 Conflux Foundation. All rights reserved.
// Conflux is free software and distributed under GNU General Public License.
// See http://www.gnu.org/licenses/

//! Coinbond Executor: the account-state and transaction-execution core of a
//! Coinbond validator. It owns the multi-coin account ledger and applies
//! transactions to it, either for real or in validate-only mode.

#[macro_use]
extern crate log;
#[macro_use]
extern crate serde_derive;

/// Transaction Execution Entry: decodes raw transactions, performs the
/// envelope checks and dispatches to the payload implementations.
pub mod executive;

/// Observability Interface: a side channel that is told about every balance
/// change applied to the ledger.
pub mod observer;

/// Execution Settings: per-network values the executor reads instead of
/// hard-coding them, like the base coin and size limits.
pub mod spec;

/// Ledger State: account objects, the caching state manager built upon them,
/// and a copy-on-write view used for validate-only execution.
pub mod state;

pub use executive::{
    run_tx, Code, ExecutiveContext, Response, Tag, TransactionGas, TxAction,
};
pub use observer::{NoopObserver, StateObserver};
pub use spec::ExecutionSpec;
pub use state::{
    LedgerState, State, StateCommitResult, StateError, StateObject,
    StateOverlay,
};
