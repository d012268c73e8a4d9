// Copyright 2019 Conflux Foundation. All rights reserved.
// Conflux is free software and distributed under GNU General Public License.
// See http://www.gnu.org/licenses/

use super::{
    commission::{check_funds, coin_not_exists, Commission},
    Code, ExecutiveContext, Response, TransactionGas, TxAction,
};
use cbn_parameters::commissions::DELEGATE_TX;
use cbn_types::Address;
use primitives::{DelegateData, Transaction};

impl TxAction for DelegateData {
    fn gas(&self) -> u64 { DELEGATE_TX }

    fn run(
        &self, sender: &Address, tx: &Transaction,
        context: &mut ExecutiveContext, is_check: bool,
    ) -> Response {
        for coin in [&tx.gas_coin, &self.coin] {
            if !context.state().coin_exists(coin) {
                return coin_not_exists(coin);
            }
        }

        if self.stake.is_zero() {
            return Response::rejected(
                Code::StakeShouldBePositive,
                "Stake should be positive",
            );
        }

        let commission =
            early_return_on_err!(Commission::of(sender, tx, context));
        early_return_on_err!(check_funds(
            context,
            sender,
            tx,
            &commission,
            &self.coin,
            &self.stake
        ));

        if !context.state().candidate_exists(&self.pub_key) {
            return Response::rejected(
                Code::CandidateNotFound,
                "Candidate with such public key not found",
            );
        }

        if !is_check {
            context.credit_reward_pool(&commission.in_base_coin);

            let state = context.state_mut();
            state.sub_balance(sender, &tx.gas_coin, &commission.in_gas_coin);
            state.sub_balance(sender, &self.coin, &self.stake);
            state.delegate(sender, &self.pub_key, &self.coin, &self.stake);
            state.set_nonce(sender, tx.nonce);
        }

        Response::ok(tx.gas())
    }
}
