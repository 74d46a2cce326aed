use crate::{Q96, RESOLUTION};
use crate::error::MathError;
use crate::math::math_helpers::{mul_div, narrow, widen};
use crate::math::sqrt_price_math::decode_sqrt_price_x96;
use crate::pool::token_order::TokenOrder;
use alloy_primitives::U256;

/// Human‑unit prices and virtual reserves of a live pool, derived from
/// its `slot0().sqrtPriceX96` and in‑range `liquidity()`.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct PoolPrices {
    pub sqrt_price_x96: U256,
    pub decimals0: u8,
    pub decimals1: u8,
    /// Price of one token0 in token1.
    pub token0_price: f64,
    /// Price of one token1 in token0.
    pub token1_price: f64,
    /// Virtual token0 reserve, `L * 2^96 / sqrtPrice`, raw units.
    pub token0_reserve: U256,
    /// Virtual token1 reserve, `L * sqrtPrice / 2^96`, raw units.
    pub token1_reserve: U256,
}

impl PoolPrices {
    pub fn from_slot0(
        sqrt_price_x96: U256,
        liquidity: u128,
        decimals0: u8,
        decimals1: u8,
    ) -> Result<Self, MathError> {
        if sqrt_price_x96.is_zero() {
            return Err(MathError::DivisionByZero);
        }

        let decimal_shift = i32::from(decimals1) - i32::from(decimals0);
        let token0_price = decode_sqrt_price_x96(sqrt_price_x96) / 10f64.powi(decimal_shift);
        let token1_price = 1.0 / token0_price;

        let liquidity = U256::from(liquidity);
        let token0_reserve = mul_div(liquidity, Q96, sqrt_price_x96)?;
        let token1_reserve = mul_div(liquidity, sqrt_price_x96, Q96)?;

        Ok(Self {
            sqrt_price_x96,
            decimals0,
            decimals1,
            token0_price,
            token1_price,
            token0_reserve,
            token1_reserve,
        })
    }

    /// Synthetic tokens, raw 18‑decimal units, minted for a post‑launch
    /// deposit of `deposit` raw denomination units at the current pool
    /// price. Rounds toward zero.
    ///
    /// Works on the raw‑unit price `sqrtPrice^2 / 2^192`, so both tokens'
    /// decimals are already accounted for.
    pub fn synthetic_for_deposit(&self, deposit: U256, order: TokenOrder) -> Result<U256, MathError> {
        if self.sqrt_price_x96.is_zero() {
            return Err(MathError::DivisionByZero);
        }

        let sqrt_price = widen(self.sqrt_price_x96);
        let ratio_x192 = sqrt_price
            .checked_mul(sqrt_price)
            .ok_or(MathError::Overflow)?;
        let shift = 2 * RESOLUTION as usize;

        let synthetic = if order.denomination_is_token0() {
            // synthetic is token1: deposit * price
            widen(deposit)
                .checked_mul(ratio_x192)
                .ok_or(MathError::Overflow)?
                >> shift
        } else {
            // synthetic is token0: deposit / price
            (widen(deposit) << shift) / ratio_x192
        };

        narrow(synthetic).ok_or(MathError::Overflow)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::sqrt_price_math::encode_sqrt_price_x96;

    fn assert_close(actual: f64, expected: f64) {
        let relative = ((actual - expected) / expected).abs();
        assert!(relative < 1e-9, "expected {expected}, got {actual}");
    }

    #[test]
    fn unit_price_with_equal_decimals() {
        let prices = PoolPrices::from_slot0(Q96, 1_000_000, 18, 18).unwrap();

        assert_close(prices.token0_price, 1.0);
        assert_close(prices.token1_price, 1.0);
        assert_eq!(prices.token0_reserve, U256::from(1_000_000u64));
        assert_eq!(prices.token1_reserve, U256::from(1_000_000u64));
    }

    #[test]
    fn decimal_shift_is_removed_from_prices() {
        // 1 USDC (6 decimals, token0) = 2 synthetic (18 decimals, token1)
        // raw price = 2 * 10^18 / 10^6
        let sqrt_price = encode_sqrt_price_x96(
            U256::from(2_000_000_000_000_000_000u128),
            U256::from(1_000_000u64),
        )
        .unwrap();

        let prices = PoolPrices::from_slot0(U256::from(sqrt_price), 1, 6, 18).unwrap();

        assert_close(prices.token0_price, 2.0);
        assert_close(prices.token1_price, 0.5);
    }

    #[test]
    fn reserves_scale_with_sqrt_price() {
        let sqrt_price = U256::from(encode_sqrt_price_x96(U256::from(4u8), U256::ONE).unwrap());
        let prices = PoolPrices::from_slot0(sqrt_price, 1_000, 18, 18).unwrap();

        assert_eq!(prices.token0_reserve, U256::from(500u64));
        assert_eq!(prices.token1_reserve, U256::from(2_000u64));
    }

    #[test]
    fn deposit_into_synthetic_token1_pool() {
        // 1 USDC = 1 synthetic, USDC token0: raw price 10^12
        let sqrt_price = Q96 * U256::from(1_000_000u64);
        let prices = PoolPrices::from_slot0(sqrt_price, 1, 6, 18).unwrap();

        let synthetic = prices
            .synthetic_for_deposit(U256::from(5_000_000u64), TokenOrder::DenominationFirst)
            .unwrap();

        assert_eq!(synthetic, U256::from(5_000_000_000_000_000_000u128));
    }

    #[test]
    fn deposit_into_synthetic_token0_pool() {
        // raw price of token0 in token1 is 2^-40
        let sqrt_price = Q96 >> 20;
        let prices = PoolPrices::from_slot0(sqrt_price, 1, 18, 6).unwrap();

        let synthetic = prices
            .synthetic_for_deposit(U256::from(3u8), TokenOrder::SyntheticFirst)
            .unwrap();

        assert_eq!(synthetic, U256::from(3u64 << 40));
    }

    #[test]
    fn deposit_amount_truncates_toward_zero() {
        // raw price 1/4: 7 raw token1 buys 28 token0, 7 raw token0 buys 1.75 token1
        let sqrt_price = Q96 >> 1;
        let prices = PoolPrices::from_slot0(sqrt_price, 1, 18, 18).unwrap();

        assert_eq!(
            prices
                .synthetic_for_deposit(U256::from(7u8), TokenOrder::SyntheticFirst)
                .unwrap(),
            U256::from(28u8)
        );
        assert_eq!(
            prices
                .synthetic_for_deposit(U256::from(7u8), TokenOrder::DenominationFirst)
                .unwrap(),
            U256::ONE
        );
    }

    #[test]
    fn deposit_matches_displayed_price() {
        let sqrt_price = U256::from(
            encode_sqrt_price_x96(
                U256::from(1_250_000_000_000_000_000u128),
                U256::from(1_000_000u64),
            )
            .unwrap(),
        );
        let prices = PoolPrices::from_slot0(sqrt_price, 1, 6, 18).unwrap();

        let synthetic = prices
            .synthetic_for_deposit(U256::from(100_000_000u64), TokenOrder::DenominationFirst)
            .unwrap();

        // 100 USDC at 1.25 synthetic per USDC, in whole tokens
        let whole = crate::math::sqrt_price_math::u256_to_f64(synthetic) / 1e18;
        assert_close(whole, 100.0 * prices.token0_price);
    }

    #[test]
    fn zero_sqrt_price_is_rejected() {
        let result = PoolPrices::from_slot0(U256::ZERO, 1, 18, 18);
        assert!(matches!(result, Err(MathError::DivisionByZero)));
    }
}
