use crate::error::MathError;
use crate::math::math_helpers::{narrow, widen};
use crate::math::tick_math::{MAX_SQRT_RATIO, MIN_SQRT_RATIO};
use crate::{Q96_F64, RESOLUTION};
use alloy_primitives::aliases::U512;
use alloy_primitives::{U160, U256};

const TWO_POW_64: f64 = 18_446_744_073_709_551_616.0;

/// Integer square root, rounded toward zero.
///
/// Newton's iteration started from a power of two at or above the true
/// root; the sequence decreases monotonically until it stops moving.
pub fn sqrt_floor(value: U512) -> U512 {
    if value.is_zero() {
        return U512::ZERO;
    }

    let mut x = U512::ONE << value.bit_len().div_ceil(2);
    loop {
        let y = (x + value / x) >> 1;
        if y >= x {
            return x;
        }
        x = y;
    }
}

/// Encodes the price `numerator / denominator` (token1 per token0, raw
/// units) as `floor(sqrt(price) * 2^96)`.
///
/// The ratio is shifted by 192 bits before taking the root, so the
/// result is exact up to the final truncation. Prices whose root falls
/// outside `[MIN_SQRT_RATIO, MAX_SQRT_RATIO)` cannot initialize a pool
/// and are reported as `Underflow` / `Overflow`.
pub fn encode_sqrt_price_x96(numerator: U256, denominator: U256) -> Result<U160, MathError> {
    if denominator.is_zero() {
        return Err(MathError::DivisionByZero);
    }

    let ratio_x192 = (widen(numerator) << (2 * RESOLUTION as usize)) / widen(denominator);
    let sqrt_price_x96 = sqrt_floor(ratio_x192);

    if sqrt_price_x96 < widen(MIN_SQRT_RATIO) {
        return Err(MathError::Underflow);
    }
    if sqrt_price_x96 >= widen(MAX_SQRT_RATIO) {
        return Err(MathError::Overflow);
    }

    let limbs = narrow(sqrt_price_x96).ok_or(MathError::Overflow)?;
    let limbs = limbs.as_limbs();
    Ok(U160::from_limbs([limbs[0], limbs[1], limbs[2]]))
}

/// Raw‑unit price of token0 in token1, `(sqrt_price_x96 / 2^96)^2`.
///
/// Lossy: meant for display, never for anything fed back on chain.
pub fn decode_sqrt_price_x96(sqrt_price_x96: U256) -> f64 {
    let sqrt_price = u256_to_f64(sqrt_price_x96) / Q96_F64;
    sqrt_price * sqrt_price
}

/// Nearest `f64` to a 256‑bit integer.
pub fn u256_to_f64(value: U256) -> f64 {
    value
        .as_limbs()
        .iter()
        .rev()
        .fold(0.0, |acc, limb| acc * TWO_POW_64 + *limb as f64)
}
