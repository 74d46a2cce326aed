use crate::error::LaunchError;
use crate::pool::fee_tier::FeeTier;
use crate::units::{FixedDecimal, MAX_DECIMALS};
use alloy_primitives::{Address, U160, U256};

/// Everything needed to size and price a launch pool.
///
/// Chain reads supply the liquidity, decimals and addresses; the share
/// price, ratio and fee tier come from the launch form.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct LaunchInput {
    /// Price of one vault share in the denomination asset.
    pub vault_share_price: FixedDecimal,
    /// Synthetic tokens worth one vault share at launch.
    pub price_ratio: u32,
    pub pool_fee_tier: FeeTier,
    /// Denomination asset balance seeding the pool, raw units.
    pub available_liquidity: U256,
    pub denomination_asset_decimals: u8,
    pub denomination_asset: Address,
    pub synthetic_token: Address,
}

impl LaunchInput {
    /// Checks every precondition of the calculation, stopping at the
    /// first violation.
    pub fn validate(&self) -> Result<(), LaunchError> {
        if self.price_ratio == 0 {
            return Err(LaunchError::InvalidArgument("ratio must be greater than zero"));
        }
        if self.vault_share_price.is_zero() {
            return Err(LaunchError::InvalidArgument(
                "vault share price must be greater than zero",
            ));
        }
        if self.vault_share_price.decimals > MAX_DECIMALS {
            return Err(LaunchError::InvalidArgument(
                "vault share price has more than 18 decimals",
            ));
        }
        if self.available_liquidity.is_zero() {
            return Err(LaunchError::InvalidArgument(
                "available liquidity must be greater than zero",
            ));
        }
        if self.denomination_asset_decimals > MAX_DECIMALS {
            return Err(LaunchError::InvalidArgument(
                "denomination asset decimals must be at most 18",
            ));
        }
        if self.denomination_asset == self.synthetic_token {
            return Err(LaunchError::InvalidArgument(
                "denomination asset and synthetic token must differ",
            ));
        }
        Ok(())
    }
}

/// Parameters for initializing the launch pool and minting its first
/// position.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct LaunchOutput {
    /// Synthetic tokens to mint into the position, 18‑decimal raw units.
    pub synthetic_token_amount: U256,
    /// Denomination asset provided, equal to the available liquidity.
    pub investment_token_amount: U256,
    /// Initial pool price, `floor(sqrt(token1 / token0) * 2^96)`.
    pub sqrt_price_x96: U160,
    pub tick_lower: i32,
    pub tick_upper: i32,
    pub pool_fee_tier: FeeTier,
    pub price_ratio: u32,
    pub token0: Address,
    pub token1: Address,
}
