// Copyright 2019 Conflux Foundation. All rights reserved.
// Conflux is free software and distributed under GNU General Public License.
// See http://www.gnu.org/licenses/

//! Transaction execution. `run_tx` checks the transaction envelope, then the
//! payload takes over through its `TxAction` implementation: it validates
//! everything first and only touches the state once nothing can fail.

macro_rules! early_return_on_err {
    ($e:expr) => {
        match $e {
            Ok(x) => x,
            Err(response) => {
                return response;
            }
        }
    };
}

mod code;
mod commission;
mod delegate;
mod response;
mod send;


pub use self::{
    code::Code,
    response::{Response, Tag},
};

use crate::{
    spec::ExecutionSpec,
    state::{LedgerState, State},
};
use cbn_parameters::commissions::PAYLOAD_BYTE;
use cbn_types::{Address, U256};
use primitives::{Action, Transaction, TransactionWithSignature};

/// Everything a payload needs while it runs: the state view, the block
/// reward pool and the settings of the network.
pub struct ExecutiveContext<'a> {
    state: &'a mut dyn LedgerState,
    reward_pool: &'a mut U256,
    current_block: u64,
    spec: &'a ExecutionSpec,
}

impl<'a> ExecutiveContext<'a> {
    pub fn new(
        state: &'a mut dyn LedgerState, reward_pool: &'a mut U256,
        current_block: u64, spec: &'a ExecutionSpec,
    ) -> Self {
        ExecutiveContext {
            state,
            reward_pool,
            current_block,
            spec,
        }
    }

    pub fn state(&self) -> &dyn LedgerState { &*self.state }

    pub fn state_mut(&mut self) -> &mut dyn LedgerState { &mut *self.state }

    pub fn reward_pool(&self) -> &U256 { self.reward_pool }

    /// Panics on overflow: the pool never exceeds the coins in existence.
    pub fn credit_reward_pool(&mut self, by: &U256) {
        *self.reward_pool = match self.reward_pool.checked_add(*by) {
            Some(pool) => pool,
            None => panic!(
                "reward pool overflow: {} + {}",
                self.reward_pool, by
            ),
        };
    }

    pub fn current_block(&self) -> u64 { self.current_block }

    pub fn spec(&self) -> &ExecutionSpec { self.spec }
}

/// The execution logic of one transaction payload.
pub trait TxAction {
    /// Gas of the payload alone, without the per-byte charges.
    fn gas(&self) -> u64;

    /// Validates the payload against the state and, unless `is_check` is
    /// set, applies it. A response other than `Code::Ok` guarantees the
    /// state was not touched.
    fn run(
        &self, sender: &Address, tx: &Transaction,
        context: &mut ExecutiveContext, is_check: bool,
    ) -> Response;
}

impl TxAction for Action {
    fn gas(&self) -> u64 {
        match self {
            Action::Send(data) => data.gas(),
            Action::Delegate(data) => data.gas(),
        }
    }

    fn run(
        &self, sender: &Address, tx: &Transaction,
        context: &mut ExecutiveContext, is_check: bool,
    ) -> Response {
        match self {
            Action::Send(data) => data.run(sender, tx, context, is_check),
            Action::Delegate(data) => data.run(sender, tx, context, is_check),
        }
    }
}

pub trait TransactionGas {
    /// Gas of the payload plus a charge for every byte of payload and
    /// service data.
    fn gas(&self) -> u64;
}

impl TransactionGas for Transaction {
    fn gas(&self) -> u64 {
        let extra_bytes = (self.payload.len() + self.service_data.len()) as u64;
        self.action
            .gas()
            .saturating_add(extra_bytes.saturating_mul(PAYLOAD_BYTE))
    }
}

/// Decodes and executes a raw transaction against `state`.
///
/// With `is_check` set, the transaction runs against a copy-on-write view of
/// the state and a copy of the reward pool; neither the state nor the pool
/// is modified whatever the outcome.
pub fn run_tx(
    state: &mut State, raw_tx: &[u8], reward_pool: &mut U256,
    current_block: u64, is_check: bool, spec: &ExecutionSpec,
) -> Response {
    let response = execute(
        state,
        raw_tx,
        reward_pool,
        current_block,
        is_check,
        spec,
    );
    if !response.is_ok() {
        debug!(
            "transaction rejected at block {}: code={} log={:?}",
            current_block, response.code, response.log
        );
    }
    response
}

fn execute(
    state: &mut State, raw_tx: &[u8], reward_pool: &mut U256,
    current_block: u64, is_check: bool, spec: &ExecutionSpec,
) -> Response {
    if raw_tx.len() > spec.max_tx_length {
        return Response::rejected(
            Code::TxTooLarge,
            format!("TX length is over {} bytes", spec.max_tx_length),
        );
    }

    let tx = early_return_on_err!(TransactionWithSignature::from_raw(raw_tx)
        .map_err(|e| Response::rejected(Code::DecodeError, e.to_string())));

    if tx.payload.len() > spec.max_payload_length {
        return Response::rejected(
            Code::TxPayloadTooLarge,
            format!(
                "TX payload length is over {} bytes",
                spec.max_payload_length
            ),
        );
    }
    if tx.service_data.len() > spec.max_service_data_length {
        return Response::rejected(
            Code::TxServiceDataTooLarge,
            format!(
                "TX service data length is over {} bytes",
                spec.max_service_data_length
            ),
        );
    }

    let sender = early_return_on_err!(tx
        .sender()
        .map_err(|e| Response::rejected(Code::DecodeError, e.to_string())));

    let expected_nonce = state.nonce(&sender).saturating_add(1);
    if tx.nonce != expected_nonce {
        return Response::rejected(
            Code::WrongNonce,
            format!(
                "Unexpected nonce. Expected: {}, got {}.",
                expected_nonce, tx.nonce
            ),
        );
    }

    trace!(
        "execute {:?} from {:?}: {} (check={})",
        tx.hash(),
        sender,
        tx.action,
        is_check
    );

    if is_check {
        let mut overlay = state.copy_on_write();
        let mut pool = *reward_pool;
        let mut context =
            ExecutiveContext::new(&mut overlay, &mut pool, current_block, spec);
        tx.action.run(&sender, &tx, &mut context, true)
    } else {
        let mut context =
            ExecutiveContext::new(state, reward_pool, current_block, spec);
        tx.action.run(&sender, &tx, &mut context, false)
    }
}
