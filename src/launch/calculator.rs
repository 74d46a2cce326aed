use crate::SYNTHETIC_TOKEN_DECIMALS;
use crate::error::{LaunchError, MathError};
use crate::launch::params::{LaunchInput, LaunchOutput};
use crate::launch::price::{LpPrice, Price, calculate_lp_price};
use crate::math::math_helpers::{checked_mul, mul_div, pow10};
use crate::math::sqrt_price_math::encode_sqrt_price_x96;
use crate::math::tick_math::full_range_ticks;
use crate::pool::token_order::TokenOrder;
use alloy_primitives::{U160, U256};
use tracing::debug;

/// Computes the pool initialization price, full‑range ticks and the
/// synthetic token amount for a launch.
///
/// Pure and deterministic: identical inputs always give identical
/// outputs, so callers recompute on every input change and drop stale
/// results.
pub fn compute_launch_parameters(input: &LaunchInput) -> Result<LaunchOutput, LaunchError> {
    input.validate()?;

    let (tick_lower, tick_upper) = full_range_ticks(input.pool_fee_tier.tick_spacing());

    let order = TokenOrder::of(input.denomination_asset, input.synthetic_token);
    let (token0, token1) = order.tokens(input.denomination_asset, input.synthetic_token);

    let LpPrice { lp_price, .. } = calculate_lp_price(input.vault_share_price, input.price_ratio)?;

    let synthetic_token_amount = synthetic_amount_for(
        input.available_liquidity,
        input.denomination_asset_decimals,
        &lp_price,
    )?;

    // token1 per token0 in human units
    let price = if order.denomination_is_token0() {
        synthetic_per_denomination(
            synthetic_token_amount,
            input.available_liquidity,
            input.denomination_asset_decimals,
        )?
    } else {
        lp_price
    };

    let (decimals0, decimals1) = order.decimals(input.denomination_asset_decimals);
    let sqrt_price_x96 = sqrt_price_x96_for(price, decimals0, decimals1)?;

    debug!(
        %synthetic_token_amount,
        investment_token_amount = %input.available_liquidity,
        %sqrt_price_x96,
        tick_lower,
        tick_upper,
        fee_tier = %input.pool_fee_tier,
        lp_price = lp_price.to_f64(),
        "computed launch parameters"
    );

    Ok(LaunchOutput {
        synthetic_token_amount,
        investment_token_amount: input.available_liquidity,
        sqrt_price_x96,
        tick_lower,
        tick_upper,
        pool_fee_tier: input.pool_fee_tier,
        price_ratio: input.price_ratio,
        token0,
        token1,
    })
}

/// Synthetic tokens bought by `liquidity` at `lp_price`, truncated to
/// 18‑decimal raw units.
fn synthetic_amount_for(
    liquidity: U256,
    liquidity_decimals: u8,
    lp_price: &Price,
) -> Result<U256, LaunchError> {
    let overflow = |_: MathError| LaunchError::ComputationOverflow("synthetic token amount");

    // liquidity / 10^d / (n / m) * 10^18 = liquidity * m * 10^18 / (n * 10^d)
    let numerator_scale = checked_mul(
        lp_price.denominator,
        pow10(u32::from(SYNTHETIC_TOKEN_DECIMALS)).map_err(overflow)?,
    )
    .map_err(overflow)?;
    let denominator = checked_mul(
        lp_price.numerator,
        pow10(u32::from(liquidity_decimals)).map_err(overflow)?,
    )
    .map_err(overflow)?;

    let amount = mul_div(liquidity, numerator_scale, denominator).map_err(overflow)?;
    if amount.is_zero() {
        return Err(LaunchError::ComputationOverflow(
            "synthetic token amount truncates to zero",
        ));
    }
    Ok(amount)
}

/// Price of the denomination asset in synthetic tokens, taken from the
/// already truncated synthetic amount rather than inverting the lp
/// price, so the pool price carries the same truncation as the mint.
fn synthetic_per_denomination(
    synthetic_amount: U256,
    liquidity: U256,
    liquidity_decimals: u8,
) -> Result<Price, LaunchError> {
    let overflow = |_: MathError| LaunchError::ComputationOverflow("synthetic token price");

    Ok(Price::new(
        checked_mul(
            synthetic_amount,
            pow10(u32::from(liquidity_decimals)).map_err(overflow)?,
        )
        .map_err(overflow)?,
        checked_mul(
            liquidity,
            pow10(u32::from(SYNTHETIC_TOKEN_DECIMALS)).map_err(overflow)?,
        )
        .map_err(overflow)?,
    ))
}

fn sqrt_price_x96_for(price: Price, decimals0: u8, decimals1: u8) -> Result<U160, LaunchError> {
    let adjusted = price
        .scale_pow10(i32::from(decimals1) - i32::from(decimals0))
        .map_err(|_| LaunchError::ComputationOverflow("decimal adjusted price"))?;

    encode_sqrt_price_x96(adjusted.numerator, adjusted.denominator).map_err(|e| match e {
        MathError::Underflow => {
            LaunchError::ComputationOverflow("sqrtPriceX96 below minimum pool price")
        }
        MathError::Overflow => {
            LaunchError::ComputationOverflow("sqrtPriceX96 exceeds maximum pool price")
        }
        MathError::DivisionByZero => {
            LaunchError::ComputationOverflow("decimal adjusted price has a zero denominator")
        }
    })
}
