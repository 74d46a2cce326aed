//! Re‑pegging a live pool to a projected synthetic token price.
//!
//! Treats the pool as a constant product over its virtual reserves: the
//! synthetic reserve that prices the token at `p` is `sqrt(k / p)`, and
//! the difference to the current reserve is what the sync service mints
//! or burns.

use crate::error::MathError;
use crate::launch::price::Price;
use crate::math::math_helpers::{narrow, pow10, widen};
use crate::math::sqrt_price_math::sqrt_floor;
use crate::pool::pool_prices::PoolPrices;
use crate::pool::token_order::TokenOrder;
use alloy_primitives::aliases::U512;
use alloy_primitives::{Address, I256, U256};

/// Current and target synthetic reserve, raw 18‑decimal units.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct PriceSync {
    pub current_reserve: U256,
    pub target_reserve: U256,
}

impl PriceSync {
    /// Computes the synthetic reserve that moves the pool to
    /// `projected_price`, quoted in denomination asset per synthetic
    /// token in human units.
    pub fn new(
        prices: &PoolPrices,
        order: TokenOrder,
        projected_price: Price,
    ) -> Result<Self, MathError> {
        if projected_price.is_zero() || projected_price.denominator.is_zero() {
            return Err(MathError::DivisionByZero);
        }

        let (current_reserve, synthetic_decimals, denomination_decimals) =
            if order.denomination_is_token0() {
                (prices.token1_reserve, prices.decimals1, prices.decimals0)
            } else {
                (prices.token0_reserve, prices.decimals0, prices.decimals1)
            };

        // target^2 = r0 * r1 * 10^(ds - dd) / p, all in raw units
        let shift = i32::from(synthetic_decimals) - i32::from(denomination_decimals);
        let scale = widen(pow10(shift.unsigned_abs())?);
        let (mut numerator, mut denominator) = (
            widen(projected_price.denominator),
            widen(projected_price.numerator),
        );
        if shift >= 0 {
            numerator = checked_mul(numerator, scale)?;
        } else {
            denominator = checked_mul(denominator, scale)?;
        }

        let k = checked_mul(widen(prices.token0_reserve), widen(prices.token1_reserve))?;
        let target_squared = checked_mul(k, numerator)? / denominator;
        let target_reserve = narrow(sqrt_floor(target_squared)).ok_or(MathError::Overflow)?;

        Ok(Self {
            current_reserve,
            target_reserve,
        })
    }

    /// Synthetic tokens to mint (positive) or burn (negative).
    pub fn amount_to_sync(&self) -> Result<I256, MathError> {
        let target = I256::try_from(self.target_reserve).map_err(|_| MathError::Overflow)?;
        let current = I256::try_from(self.current_reserve).map_err(|_| MathError::Overflow)?;
        target.checked_sub(current).ok_or(MathError::Overflow)
    }
}

fn checked_mul(a: U512, b: U512) -> Result<U512, MathError> {
    a.checked_mul(b).ok_or(MathError::Overflow)
}

/// Request body for the `sync/price` endpoint.
///
/// `amountToSync` is a signed decimal string in raw 18‑decimal units.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct SyncPriceRequest {
    #[cfg_attr(feature = "serde", serde(rename = "Token0"))]
    pub token0: Address,
    pub price_ratio_current: u32,
    pub amount_to_sync: String,
}

impl SyncPriceRequest {
    pub fn new(token0: Address, price_ratio_current: u32, sync: &PriceSync) -> Result<Self, MathError> {
        Ok(Self {
            token0,
            price_ratio_current,
            amount_to_sync: sync.amount_to_sync()?.to_string(),
        })
    }
}
