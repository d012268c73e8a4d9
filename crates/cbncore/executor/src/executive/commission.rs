// Copyright 2019 Conflux Foundation. All rights reserved.
// Conflux is free software and distributed under GNU General Public License.
// See http://www.gnu.org/licenses/

use super::{Code, ExecutiveContext, Response, TransactionGas};
use cbn_types::{Address, CoinSymbol, U256};
use primitives::Transaction;

/// The commission of a transaction, in the base coin and in its gas coin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) struct Commission {
    /// Credited to the reward pool.
    pub in_base_coin: U256,
    /// Debited from the sender.
    pub in_gas_coin: U256,
}

impl Commission {
    /// Prices `tx` in the base coin and converts the price to its gas coin
    /// through the bonding curve of that coin.
    pub fn of(
        sender: &Address, tx: &Transaction, context: &ExecutiveContext,
    ) -> Result<Commission, Response> {
        let spec = context.spec();
        let in_base_coin = tx
            .gas_price
            .checked_mul(U256::from(tx.gas()))
            .and_then(|price| {
                price.checked_mul(spec.commission_multiplier())
            })
            .ok_or_else(|| {
                Response::rejected(
                    Code::InsufficientFunds,
                    format!(
                        "Insufficient funds for sender account: Mx{:x}. \
                         Commission overflows",
                        sender
                    ),
                )
            })?;

        if tx.gas_coin == *context.state().base_coin() {
            return Ok(Commission {
                in_base_coin,
                in_gas_coin: in_base_coin,
            });
        }

        let coin =
            context.state().get_state_coin(&tx.gas_coin).ok_or_else(|| {
                coin_not_exists(&tx.gas_coin)
            })?;
        if coin.reserve_balance < in_base_coin {
            return Err(Response::rejected(
                Code::CoinReserveNotSufficient,
                format!(
                    "Coin reserve balance is not sufficient for transaction. \
                     Has: {}, required {}",
                    coin.reserve_balance, in_base_coin
                ),
            ));
        }

        Ok(Commission {
            in_base_coin,
            in_gas_coin: coin.sale_amount_for(&in_base_coin),
        })
    }
}

pub(super) fn coin_not_exists(coin: &CoinSymbol) -> Response {
    Response::rejected(Code::CoinNotExists, format!("Coin {} not exists", coin))
}

pub(super) fn insufficient_funds(
    sender: &Address, wanted: &U256, coin: &CoinSymbol,
) -> Response {
    Response::rejected(
        Code::InsufficientFunds,
        format!(
            "Insufficient funds for sender account: Mx{:x}. Wanted {} {}",
            sender, wanted, coin
        ),
    )
}

/// Checks the sender holds `commission` in the gas coin, `amount` in `coin`,
/// and both together when the two coins are the same.
pub(super) fn check_funds(
    context: &ExecutiveContext, sender: &Address, tx: &Transaction,
    commission: &Commission, coin: &CoinSymbol, amount: &U256,
) -> Result<(), Response> {
    let state = context.state();
    let gas_balance = state.get_balance(sender, &tx.gas_coin);
    if gas_balance < commission.in_gas_coin {
        return Err(insufficient_funds(
            sender,
            &commission.in_gas_coin,
            &tx.gas_coin,
        ));
    }

    if state.get_balance(sender, coin) < *amount {
        return Err(insufficient_funds(sender, amount, coin));
    }

    if *coin == tx.gas_coin {
        let total = amount.saturating_add(commission.in_gas_coin);
        if gas_balance < total {
            return Err(insufficient_funds(sender, &total, &tx.gas_coin));
        }
    }
    Ok(())
}
