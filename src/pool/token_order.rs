use crate::SYNTHETIC_TOKEN_DECIMALS;
use alloy_primitives::{Address, U160};

/// Converts an `Address` into its `U160` numeric representation.
///
/// This is mainly used to compare or sort addresses by value.
#[inline(always)]
pub fn address_to_u160(address: Address) -> U160 {
    address.into()
}

/// Returns the token pair sorted by numeric address, as pool factories
/// do. Numeric order is the same as comparing lowercase hex strings.
pub fn sort_tokens(token_a: Address, token_b: Address) -> (Address, Address) {
    if address_to_u160(token_a) < address_to_u160(token_b) {
        (token_a, token_b)
    } else {
        (token_b, token_a)
    }
}

/// Which side of the pool the denomination asset lands on.
///
/// Pool prices are always quoted as token1 per token0, so every price
/// handed to the pool has to be oriented by this.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TokenOrder {
    /// Denomination asset is token0, synthetic token is token1.
    DenominationFirst,
    /// Synthetic token is token0, denomination asset is token1.
    SyntheticFirst,
}

impl TokenOrder {
    pub fn of(denomination_asset: Address, synthetic_token: Address) -> Self {
        let (token0, _) = sort_tokens(denomination_asset, synthetic_token);
        if token0 == denomination_asset {
            TokenOrder::DenominationFirst
        } else {
            TokenOrder::SyntheticFirst
        }
    }

    #[inline]
    pub fn denomination_is_token0(self) -> bool {
        self == TokenOrder::DenominationFirst
    }

    /// `(token0, token1)` for the pair.
    pub fn tokens(self, denomination_asset: Address, synthetic_token: Address) -> (Address, Address) {
        match self {
            TokenOrder::DenominationFirst => (denomination_asset, synthetic_token),
            TokenOrder::SyntheticFirst => (synthetic_token, denomination_asset),
        }
    }

    /// `(decimals0, decimals1)` given the denomination asset's decimals.
    pub fn decimals(self, denomination_asset_decimals: u8) -> (u8, u8) {
        match self {
            TokenOrder::DenominationFirst => (denomination_asset_decimals, SYNTHETIC_TOKEN_DECIMALS),
            TokenOrder::SyntheticFirst => (SYNTHETIC_TOKEN_DECIMALS, denomination_asset_decimals),
        }
    }
}
