//! Unsigned 18-decimal fixed-point helpers over `U256`.
//!
//! Every operation rounds toward zero, so results are identical on every
//! platform.

use cbn_types::{U256, U512};

/// `1.0` in fixed-point representation.
pub const ONE: U256 = U256([1_000_000_000_000_000_000, 0, 0, 0]);

/// `ln(2)` in fixed-point representation.
const LN_2: U256 = U256([693_147_180_559_945_309, 0, 0, 0]);

/// `a * b / c` with a 512 bit intermediate. `None` when `c` is zero or the
/// quotient does not fit into 256 bits.
pub fn mul_div(a: &U256, b: &U256, c: &U256) -> Option<U256> {
    if c.is_zero() {
        return None;
    }
    U256::try_from(a.full_mul(*b) / U512::from(*c)).ok()
}

/// Binary logarithm of `x`, for `x >= ONE`. Smaller inputs yield zero.
pub fn log2(x: U256) -> U256 {
    if x <= ONE {
        return U256::zero();
    }

    // Integer part: position of the highest bit of the quotient.
    let n = (x / ONE).bits() - 1;
    let mut result = ONE * U256::from(n);
    let mut y = x >> n;
    if y == ONE {
        return result;
    }

    // Fractional part, one bit per squaring.
    let two = ONE << 1;
    let mut delta = ONE >> 1;
    while !delta.is_zero() {
        y = y * y / ONE;
        if y >= two {
            result = result + delta;
            y = y >> 1;
        }
        delta = delta >> 1;
    }
    result
}

/// `2^(-x)` in fixed point. Exponents of 256 and above underflow to zero.
pub fn inv_exp2(x: U256) -> U256 {
    let k = x / ONE;
    if k >= U256::from(256) {
        return U256::zero();
    }
    let fraction = x % ONE;
    let e = exp(fraction * LN_2 / ONE);
    (ONE * ONE / e) >> k.as_usize()
}

/// `e^x` for `0 <= x < ONE` by its Taylor series.
fn exp(x: U256) -> U256 {
    let mut sum = ONE;
    let mut term = ONE;
    let mut i = 1u64;
    loop {
        term = term * x / ONE / U256::from(i);
        if term.is_zero() {
            break;
        }
        sum = sum + term;
        i += 1;
    }
    sum
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: U256, expected: U256, tolerance: u64) {
        let diff = if actual > expected {
            actual - expected
        } else {
            expected - actual
        };
        assert!(
            diff <= U256::from(tolerance),
            "{} differs from {} by {}",
            actual,
            expected,
            diff
        );
    }

    #[test]
    fn log2_of_powers_of_two_is_exact() {
        assert_eq!(log2(ONE), U256::zero());
        assert_eq!(log2(ONE * 2), ONE);
        assert_eq!(log2(ONE * 8), ONE * 3);
        assert_eq!(log2(ONE * 1024), ONE * 10);
    }

    #[test]
    fn log2_of_fraction() {
        // log2(3) = 1.584962500721156181...
        assert_close(
            log2(ONE * 3),
            U256::from(1_584_962_500_721_156_181u64),
            1_000,
        );
        // log2(1.5) = 0.584962500721156181...
        assert_close(
            log2(ONE * 3 / 2),
            U256::from(584_962_500_721_156_181u64),
            1_000,
        );
    }

    #[test]
    fn inv_exp2_values() {
        assert_eq!(inv_exp2(U256::zero()), ONE);
        assert_eq!(inv_exp2(ONE), ONE / 2);
        assert_eq!(inv_exp2(ONE * 3), ONE / 8);
        assert_eq!(inv_exp2(ONE * 300), U256::zero());
        // 2^-0.5 = 0.707106781186547524...
        assert_close(
            inv_exp2(ONE / 2),
            U256::from(707_106_781_186_547_524u64),
            1_000,
        );
    }

    #[test]
    fn mul_div_widens() {
        let big = U256::MAX / 2;
        assert_eq!(mul_div(&big, &U256::from(4), &U256::from(8)), Some(big / 2));
        assert_eq!(mul_div(&U256::MAX, &U256::from(2), &U256::one()), None);
        assert_eq!(mul_div(&U256::one(), &U256::one(), &U256::zero()), None);
    }
}
