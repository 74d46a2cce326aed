//! Payloads exchanged with the off‑chain launch authorization service.
//!
//! The service signs the computed launch parameters; the MSO contract
//! only accepts `launchMSO` calls carrying that signature. Sending the
//! request is left to the caller.

use crate::error::SignatureError;
use crate::launch::params::LaunchOutput;
use alloy_primitives::{B256, hex};

/// Length of an `r || s || v` signature.
pub const SIGNATURE_LENGTH: usize = 65;

/// Request body for the `sign-launch` endpoint.
///
/// Amounts are decimal strings and the fee is in pips, matching what
/// the contract is later called with.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct SignLaunchRequest {
    pub synthetic_token_amount: String,
    pub investment_token_amount: String,
    pub sqrt_price_x96: String,
    pub pool_fee: String,
    pub ticker_upper_value: i32,
    pub ticker_lower_value: i32,
}

impl From<&LaunchOutput> for SignLaunchRequest {
    fn from(output: &LaunchOutput) -> Self {
        Self {
            synthetic_token_amount: output.synthetic_token_amount.to_string(),
            investment_token_amount: output.investment_token_amount.to_string(),
            sqrt_price_x96: output.sqrt_price_x96.to_string(),
            pool_fee: output.pool_fee_tier.fee_pips().to_string(),
            ticker_upper_value: output.tick_upper,
            ticker_lower_value: output.tick_lower,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SignLaunchResponse {
    #[cfg_attr(feature = "serde", serde(default))]
    pub signature: Option<String>,
}

impl SignLaunchResponse {
    /// Splits the returned signature, treating a missing or empty one
    /// as an error.
    pub fn into_signature(self) -> Result<LaunchSignature, SignatureError> {
        match self.signature.as_deref() {
            Some(signature) if !signature.is_empty() => LaunchSignature::split(signature),
            _ => Err(SignatureError::Missing),
        }
    }
}

/// A launch authorization split into the `(r, s, v)` arguments
/// `launchMSO` takes.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct LaunchSignature {
    pub r: B256,
    pub s: B256,
    pub v: u8,
}

impl LaunchSignature {
    /// Splits a 65‑byte hex signature, with or without a `0x` prefix.
    pub fn split(signature: &str) -> Result<Self, SignatureError> {
        let raw = signature.strip_prefix("0x").unwrap_or(signature);
        let bytes = hex::decode(raw).map_err(|e| SignatureError::InvalidHex(e.to_string()))?;

        if bytes.len() != SIGNATURE_LENGTH {
            return Err(SignatureError::InvalidLength(bytes.len()));
        }

        Ok(Self {
            r: B256::from_slice(&bytes[..32]),
            s: B256::from_slice(&bytes[32..64]),
            v: bytes[64],
        })
    }
}
