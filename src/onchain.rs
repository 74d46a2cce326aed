//! Reads launch inputs from chain.
//!
//! Mirrors what a launch form needs before it can call
//! [`compute_launch_parameters`](crate::compute_launch_parameters): the
//! MSO's raised balance, the denomination asset's decimals and the
//! vault's net share value.

use crate::error::OnchainError;
use crate::launch::params::LaunchInput;
use crate::pool::fee_tier::FeeTier;
use crate::units::FixedDecimal;
use alloy_primitives::{Address, BlockNumber, U256};
use alloy_provider::Provider;
use alloy_sol_macro::sol;
use futures::try_join;
use std::sync::Arc;
use tracing::trace;

sol! {
    #[sol(rpc)]
    interface IMso {
        function balanceA() external view returns (uint256);
        function priceRatio() external view returns (uint256);
        function symbol() external view returns (string);
    }
}

sol! {
    #[sol(rpc)]
    interface IERC20Metadata {
        function decimals() external view returns (uint8);
        function symbol() external view returns (string);
    }
}

sol! {
    #[sol(rpc)]
    interface IFundValueCalculator {
        function calcNetShareValue(address vaultProxy) external returns (
            address denominationAsset,
            uint256 netShareValue
        );
    }
}

pub type OnchainProvider<P> = Arc<P>;

/// Chain state a launch is computed from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LaunchContext {
    pub synthetic_token: Address,
    pub synthetic_symbol: String,
    pub denomination_asset: Address,
    pub denomination_asset_symbol: String,
    pub denomination_asset_decimals: u8,
    pub available_liquidity: U256,
    pub vault_share_price: FixedDecimal,
}

impl LaunchContext {
    /// Combines chain state with the launch form's choices.
    pub fn to_input(&self, price_ratio: u32, pool_fee_tier: FeeTier) -> LaunchInput {
        LaunchInput {
            vault_share_price: self.vault_share_price,
            price_ratio,
            pool_fee_tier,
            available_liquidity: self.available_liquidity,
            denomination_asset_decimals: self.denomination_asset_decimals,
            denomination_asset: self.denomination_asset,
            synthetic_token: self.synthetic_token,
        }
    }
}

/// Read‑only bindings to one MSO contract.
#[derive(Clone, Debug)]
pub struct MsoReader<P> {
    pub mso_address: Address,
    provider: OnchainProvider<P>,
    contract: IMso::IMsoInstance<OnchainProvider<P>>,
}

impl<P> MsoReader<P>
where
    P: Provider + Send + Sync + 'static,
{
    pub fn new(mso_address: Address, provider: OnchainProvider<P>) -> Self {
        let contract = IMso::IMsoInstance::new(mso_address, provider.clone());

        Self {
            mso_address,
            provider,
            contract,
        }
    }

    /// Denomination asset raised by the offering (`balanceA`), raw units.
    pub async fn fetch_available_liquidity(
        &self,
        block_number: Option<BlockNumber>,
    ) -> Result<U256, OnchainError> {
        let mut call = self.contract.balanceA();

        if let Some(bn) = block_number {
            call = call.block(bn.into());
        }

        let balance = call
            .call()
            .await
            .map_err(|e| OnchainError::FailedToGetBalance(e.to_string()))?;

        trace!(mso = %self.mso_address, %balance, "fetched balanceA");
        Ok(balance)
    }

    /// The synthetic token's symbol.
    pub async fn fetch_symbol(&self) -> Result<String, OnchainError> {
        self.contract
            .symbol()
            .call()
            .await
            .map_err(|e| OnchainError::FailedToGetSymbol(e.to_string()))
    }

    /// Price ratio stored on the MSO once it has launched.
    pub async fn fetch_price_ratio(&self) -> Result<u32, OnchainError> {
        let ratio = self
            .contract
            .priceRatio()
            .call()
            .await
            .map_err(|e| OnchainError::FailedToGetPriceRatio(e.to_string()))?;

        u32::try_from(ratio).map_err(|e| OnchainError::FailedToGetPriceRatio(e.to_string()))
    }

    pub async fn fetch_token_decimals(&self, token: Address) -> Result<u8, OnchainError> {
        IERC20Metadata::IERC20MetadataInstance::new(token, self.provider.clone())
            .decimals()
            .call()
            .await
            .map_err(|e| OnchainError::FailedToGetDecimals(e.to_string()))
    }

    pub async fn fetch_token_symbol(&self, token: Address) -> Result<String, OnchainError> {
        IERC20Metadata::IERC20MetadataInstance::new(token, self.provider.clone())
            .symbol()
            .call()
            .await
            .map_err(|e| OnchainError::FailedToGetSymbol(e.to_string()))
    }

    /// Net share value of `vault` as `(denomination asset, raw value)`,
    /// via the fund value calculator's `calcNetShareValue`.
    pub async fn fetch_net_share_value(
        &self,
        fund_value_calculator: Address,
        vault: Address,
    ) -> Result<(Address, U256), OnchainError> {
        let result = IFundValueCalculator::IFundValueCalculatorInstance::new(
            fund_value_calculator,
            self.provider.clone(),
        )
        .calcNetShareValue(vault)
        .call()
        .await
        .map_err(|e| OnchainError::FailedToGetNetShareValue(e.to_string()))?;

        Ok((result.denominationAsset, result.netShareValue))
    }

    /// Reads everything a launch needs at the latest block, issuing the
    /// independent calls concurrently.
    pub async fn fetch_launch_context(
        &self,
        denomination_asset: Address,
        fund_value_calculator: Address,
        vault: Address,
    ) -> Result<LaunchContext, OnchainError> {
        let (
            available_liquidity,
            synthetic_symbol,
            denomination_asset_decimals,
            denomination_asset_symbol,
            (share_asset, net_share_value),
        ) = try_join!(
            self.fetch_available_liquidity(None),
            self.fetch_symbol(),
            self.fetch_token_decimals(denomination_asset),
            self.fetch_token_symbol(denomination_asset),
            self.fetch_net_share_value(fund_value_calculator, vault),
        )?;

        if share_asset != denomination_asset {
            return Err(OnchainError::DenominationMismatch {
                expected: denomination_asset,
                actual: share_asset,
            });
        }

        Ok(LaunchContext {
            synthetic_token: self.mso_address,
            synthetic_symbol,
            denomination_asset,
            denomination_asset_symbol,
            denomination_asset_decimals,
            available_liquidity,
            vault_share_price: FixedDecimal::new(net_share_value, denomination_asset_decimals),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::{Bytes, address};
    use alloy_provider::ProviderBuilder;
    use alloy_provider::transport::mock::Asserter;
    use alloy_sol_types::SolValue;

    const MSO: Address = address!("0xf1a3b0c2d4e5f60718293a4b5c6d7e8f90a1b2c3");
    const USDC: Address = address!("0x3c499c542cef5e3811e1192ce70d8cc03d5c3359");
    const OTHER_ASSET: Address = address!("0x7ceb23fd6bc0add59e62ac25578270cff1b9f619");
    const CALCULATOR: Address = address!("0x0000000000000000000000000000000000000c01");
    const VAULT: Address = address!("0x0000000000000000000000000000000000000a01");

    fn mock_provider() -> (Asserter, Arc<impl Provider>) {
        let asserter = Asserter::new();
        let provider = ProviderBuilder::new().connect_mocked_client(asserter.clone());
        (asserter, Arc::new(provider))
    }

    #[tokio::test]
    async fn fetches_balance_a() {
        let (asserter, provider) = mock_provider();
        asserter.push_success(&Bytes::from(U256::from(1_000_000_000u64).abi_encode()));

        let reader = MsoReader::new(MSO, provider);
        let balance = reader.fetch_available_liquidity(None).await.unwrap();

        assert_eq!(balance, U256::from(1_000_000_000u64));
    }

    #[tokio::test]
    async fn rpc_failure_is_reported_per_call() {
        let (asserter, provider) = mock_provider();
        asserter.push_failure_msg("execution reverted");

        let reader = MsoReader::new(MSO, provider);
        let err = reader.fetch_token_decimals(USDC).await.unwrap_err();

        assert!(matches!(err, OnchainError::FailedToGetDecimals(_)));
    }

    #[tokio::test]
    async fn fetches_price_ratio() {
        let (asserter, provider) = mock_provider();
        asserter.push_success(&Bytes::from(U256::from(3u8).abi_encode()));

        let reader = MsoReader::new(MSO, provider);
        assert_eq!(reader.fetch_price_ratio().await.unwrap(), 3);
    }

    #[tokio::test]
    async fn price_ratio_beyond_u32_is_rejected() {
        let (asserter, provider) = mock_provider();
        asserter.push_success(&Bytes::from(
            (U256::from(u32::MAX) + U256::ONE).abi_encode(),
        ));

        let reader = MsoReader::new(MSO, provider);
        let err = reader.fetch_price_ratio().await.unwrap_err();

        assert!(matches!(err, OnchainError::FailedToGetPriceRatio(_)));
    }

    #[tokio::test]
    async fn fetches_net_share_value() {
        let (asserter, provider) = mock_provider();
        asserter.push_success(&Bytes::from(
            (USDC, U256::from(1_020_000u64)).abi_encode_params(),
        ));

        let reader = MsoReader::new(MSO, provider);
        let (asset, value) = reader
            .fetch_net_share_value(CALCULATOR, VAULT)
            .await
            .unwrap();

        assert_eq!(asset, USDC);
        assert_eq!(value, U256::from(1_020_000u64));
    }

    /// Responses in the order `fetch_launch_context` issues its calls.
    fn push_launch_reads(asserter: &Asserter, share_asset: Address) {
        asserter.push_success(&Bytes::from(U256::from(1_000_000_000u64).abi_encode()));
        asserter.push_success(&Bytes::from("sUSDC".to_string().abi_encode()));
        asserter.push_success(&Bytes::from(<alloy_sol_types::sol_data::Uint<8> as alloy_sol_types::SolType>::abi_encode(&6u8)));
        asserter.push_success(&Bytes::from("USDC".to_string().abi_encode()));
        asserter.push_success(&Bytes::from(
            (share_asset, U256::from(1_020_000u64)).abi_encode_params(),
        ));
    }

    #[tokio::test]
    async fn fetches_launch_context() {
        let (asserter, provider) = mock_provider();
        push_launch_reads(&asserter, USDC);

        let reader = MsoReader::new(MSO, provider);
        let context = reader
            .fetch_launch_context(USDC, CALCULATOR, VAULT)
            .await
            .unwrap();

        assert_eq!(context.synthetic_token, MSO);
        assert_eq!(context.synthetic_symbol, "sUSDC");
        assert_eq!(context.denomination_asset_symbol, "USDC");
        assert_eq!(context.denomination_asset_decimals, 6);
        assert_eq!(context.available_liquidity, U256::from(1_000_000_000u64));
        assert_eq!(
            context.vault_share_price,
            FixedDecimal::new(U256::from(1_020_000u64), 6)
        );
    }

    #[tokio::test]
    async fn share_value_in_another_asset_is_rejected() {
        let (asserter, provider) = mock_provider();
        push_launch_reads(&asserter, OTHER_ASSET);

        let reader = MsoReader::new(MSO, provider);
        let err = reader
            .fetch_launch_context(USDC, CALCULATOR, VAULT)
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            OnchainError::DenominationMismatch { expected, actual }
                if expected == USDC && actual == OTHER_ASSET
        ));
    }

    #[test]
    fn context_becomes_launch_input() {
        let context = LaunchContext {
            synthetic_token: MSO,
            synthetic_symbol: "sUSDC".to_string(),
            denomination_asset: USDC,
            denomination_asset_symbol: "USDC".to_string(),
            denomination_asset_decimals: 6,
            available_liquidity: U256::from(1_000_000_000u64),
            vault_share_price: FixedDecimal::new(U256::from(1_020_000u64), 6),
        };

        let input = context.to_input(2, FeeTier::OneBip);

        assert_eq!(input.price_ratio, 2);
        assert_eq!(input.synthetic_token, MSO);
        assert_eq!(input.denomination_asset, USDC);
        assert_eq!(input.vault_share_price, context.vault_share_price);
        assert!(input.validate().is_ok());
    }
}
