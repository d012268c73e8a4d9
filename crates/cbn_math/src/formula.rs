//! Bonding-curve conversions between a coin's circulating volume and its
//! base-coin reserve.

use crate::fixed_point::{inv_exp2, log2, mul_div, ONE};
use cbn_types::U256;

/// Amount of a coin that has to be sold to receive `want_receive` base coins
/// from its reserve.
///
/// `volume` is the circulating supply, `reserve` the base-coin reserve and
/// `crr` the constant reserve ratio in percent. The result is
/// `volume * (1 - (1 - want_receive / reserve) ^ (100 / crr))`, rounded down.
/// With `crr == 100` the curve is linear and the result is computed exactly.
pub fn calculate_sale_amount(
    volume: &U256, reserve: &U256, crr: u32, want_receive: &U256,
) -> U256 {
    if want_receive.is_zero() {
        return U256::zero();
    }

    if crr == 100 {
        return mul_div(want_receive, volume, reserve)
            .unwrap_or(U256::MAX);
    }

    if want_receive >= reserve || crr == 0 {
        return *volume;
    }

    let remaining = *reserve - *want_receive;
    let ratio = match mul_div(reserve, &ONE, &remaining) {
        Some(ratio) => ratio,
        None => return *volume,
    };
    let exponent = log2(ratio) * U256::from(100) / U256::from(crr);
    let kept = inv_exp2(exponent);

    mul_div(volume, &(ONE - kept), &ONE).unwrap_or(*volume)
}
