//! Launch math for Managed Synthetic Offering (MSO) liquidity pools.
//!
//! An MSO raises a denomination asset into a vault, mints a synthetic
//! token pegged to the vault share, and then seeds a concentrated
//! liquidity pool with both. This crate computes everything that launch
//! needs, in exact integer arithmetic:
//! - [`compute_launch_parameters`] sizes the synthetic mint and derives
//!   the pool's initial `sqrtPriceX96` and full‑range ticks.
//! - Low‑level math (`math::*`) for `mul_div`, integer square roots and
//!   tick alignment.
//! - Pool helpers (`pool::*`) for fee tiers, token ordering, reading
//!   prices back from a live pool, post‑launch deposits and price syncs.
//! - The payload for the off‑chain launch authorization service
//!   (`launch::signing`).
//! - Optional `onchain` helpers to read the inputs from an MSO contract.
//!
//! # Examples
//!
//! ```
//! use mso_launch_math::{
//!     compute_launch_parameters, Address, FeeTier, FixedDecimal, LaunchInput, U256,
//! };
//!
//! let input = LaunchInput {
//!     vault_share_price: "1.0".parse::<FixedDecimal>().unwrap(),
//!     price_ratio: 1,
//!     pool_fee_tier: "0.01".parse::<FeeTier>().unwrap(),
//!     available_liquidity: U256::from(1_000_000_000u64), // 1000 USDC
//!     denomination_asset_decimals: 6,
//!     denomination_asset: Address::with_last_byte(1),
//!     synthetic_token: Address::with_last_byte(2),
//! };
//!
//! let output = compute_launch_parameters(&input).unwrap();
//! assert_eq!((output.tick_lower, output.tick_upper), (-887220, 887220));
//! println!("sqrtPriceX96 = {}", output.sqrt_price_x96);
//! ```

pub use alloy_primitives::{Address, U160, U256};

pub mod error;
pub mod launch;
pub mod math;
pub mod pool;
pub mod units;

#[cfg(feature = "onchain")]
pub mod onchain;

pub use error::{Error, LaunchError, MathError};
pub use launch::{LaunchInput, LaunchOutput, compute_launch_parameters};
pub use pool::fee_tier::FeeTier;
pub use units::FixedDecimal;

/// The synthetic token always uses 18 decimals.
pub const SYNTHETIC_TOKEN_DECIMALS: u8 = 18;

pub const RESOLUTION: u8 = 96;
pub const Q96: U256 = U256::from_limbs([0, 4294967296, 0, 0]);
pub const Q96_F64: f64 = 79_228_162_514_264_337_593_543_950_336.0;
