// Copyright 2019 Conflux Foundation. All rights reserved.
// Conflux is free software and distributed under GNU General Public License.
// See http://www.gnu.org/licenses/

use super::{
    commission::{check_funds, coin_not_exists, Commission},
    ExecutiveContext, Response, TransactionGas, TxAction,
};
use cbn_parameters::commissions::SEND_TX;
use cbn_types::Address;
use primitives::{SendData, Transaction};
use rustc_hex::ToHex;

impl TxAction for SendData {
    fn gas(&self) -> u64 { SEND_TX }

    fn run(
        &self, sender: &Address, tx: &Transaction,
        context: &mut ExecutiveContext, is_check: bool,
    ) -> Response {
        for coin in [&tx.gas_coin, &self.coin] {
            if !context.state().coin_exists(coin) {
                return coin_not_exists(coin);
            }
        }

        let commission =
            early_return_on_err!(Commission::of(sender, tx, context));
        early_return_on_err!(check_funds(
            context,
            sender,
            tx,
            &commission,
            &self.coin,
            &self.value
        ));

        if !is_check {
            context.credit_reward_pool(&commission.in_base_coin);

            let state = context.state_mut();
            state.sub_balance(sender, &tx.gas_coin, &commission.in_gas_coin);
            state.sub_balance(sender, &self.coin, &self.value);
            state.add_balance(&self.to, &self.coin, &self.value);
            state.set_nonce(sender, tx.nonce);
        }

        Response::ok(tx.gas())
            .with_tag("tx.type", [tx.tx_type() as u8].to_hex::<String>())
            .with_tag("tx.from", sender.as_bytes().to_hex::<String>())
            .with_tag("tx.to", self.to.as_bytes().to_hex::<String>())
            .with_tag("tx.coin", self.coin.to_string())
    }
}
