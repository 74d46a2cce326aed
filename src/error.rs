use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum MathError {
    #[error("Math error - overflow")]
    Overflow,
    #[error("Math error - underflow")]
    Underflow,
    #[error("Math error - division by zero")]
    DivisionByZero,
}

/// Failures of the launch parameter calculation.
///
/// Both kinds are deterministic: resubmitting the same input fails the
/// same way, so callers surface the message and never retry.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum LaunchError {
    #[error("Invalid argument - {0}")]
    InvalidArgument(&'static str),
    #[error("Computation overflow - {0}")]
    ComputationOverflow(&'static str),
}

impl LaunchError {
    /// The bare message, suitable for a form validation hint.
    pub fn message(&self) -> &'static str {
        match self {
            LaunchError::InvalidArgument(msg) | LaunchError::ComputationOverflow(msg) => msg,
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SignatureError {
    #[error("Signature error - invalid hex: {0}")]
    InvalidHex(String),
    #[error("Signature error - expected 65 bytes, got {0}")]
    InvalidLength(usize),
    #[error("Signature error - signing service returned no signature")]
    Missing,
}

#[cfg(feature = "onchain")]
#[derive(Debug, Error)]
pub enum OnchainError {
    #[error("Onchain error - failed to get balanceA: {0}")]
    FailedToGetBalance(String),
    #[error("Onchain error - failed to get token decimals: {0}")]
    FailedToGetDecimals(String),
    #[error("Onchain error - failed to get token symbol: {0}")]
    FailedToGetSymbol(String),
    #[error("Onchain error - failed to get price ratio: {0}")]
    FailedToGetPriceRatio(String),
    #[error("Onchain error - failed to get net share value: {0}")]
    FailedToGetNetShareValue(String),
    #[error("Onchain error - net share value is denominated in {actual}, expected {expected}")]
    DenominationMismatch {
        expected: alloy_primitives::Address,
        actual: alloy_primitives::Address,
    },
}

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    MathError(#[from] crate::error::MathError),

    #[error(transparent)]
    LaunchError(#[from] crate::error::LaunchError),

    #[error(transparent)]
    SignatureError(#[from] crate::error::SignatureError),

    #[cfg(feature = "onchain")]
    #[error(transparent)]
    OnchainError(#[from] crate::error::OnchainError),
}
