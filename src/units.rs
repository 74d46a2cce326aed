//! Conversions between human decimal amounts and raw token units.

use crate::error::LaunchError;
use alloy_primitives::U256;
use alloy_primitives::utils::{self, UnitsError};
use std::fmt;
use std::str::FromStr;

/// Most fractional digits accepted for a decimal amount.
pub const MAX_DECIMALS: u8 = 18;

/// Parses a human amount such as `"1000.5"` into raw units with the given
/// number of decimals.
pub fn parse_units(amount: &str, decimals: u8) -> Result<U256, UnitsError> {
    utils::parse_units(amount, decimals).map(|parsed| parsed.get_absolute())
}

/// Formats raw units as a human amount with exactly `decimals`
/// fractional digits.
pub fn format_units(amount: U256, decimals: u8) -> Result<String, UnitsError> {
    utils::format_units(amount, decimals)
}

/// A non‑negative decimal held as `value / 10^decimals`.
///
/// Vault share prices arrive as a raw net share value plus the
/// denomination asset's decimals, so this keeps them exact instead of
/// going through `f64`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FixedDecimal {
    pub value: U256,
    pub decimals: u8,
}

impl FixedDecimal {
    pub const fn new(value: U256, decimals: u8) -> Self {
        Self { value, decimals }
    }

    /// A whole number with no fractional digits.
    pub fn from_integer(value: u64) -> Self {
        Self::new(U256::from(value), 0)
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.value.is_zero()
    }
}

impl FromStr for FixedDecimal {
    type Err = LaunchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (integer, fraction) = s.split_once('.').unwrap_or((s, ""));

        let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
        if integer.is_empty()
            || !all_digits(integer)
            || !all_digits(fraction)
            || (s.contains('.') && fraction.is_empty())
        {
            return Err(LaunchError::InvalidArgument("invalid decimal number"));
        }

        if fraction.len() > usize::from(MAX_DECIMALS) {
            return Err(LaunchError::InvalidArgument("too many fractional digits"));
        }

        let decimals = fraction.len() as u8;
        let value = parse_units(s, decimals)
            .map_err(|_| LaunchError::InvalidArgument("invalid decimal number"))?;

        Ok(Self::new(value, decimals))
    }
}

impl fmt::Display for FixedDecimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match format_units(self.value, self.decimals) {
            Ok(formatted) => f.write_str(&formatted),
            Err(_) => write!(f, "{}e-{}", self.value, self.decimals),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_integers_and_fractions() {
        let one: FixedDecimal = "1".parse().unwrap();
        assert_eq!(one, FixedDecimal::new(U256::from(1u8), 0));

        let one: FixedDecimal = "1.0".parse().unwrap();
        assert_eq!(one, FixedDecimal::new(U256::from(10u8), 1));

        let price: FixedDecimal = "1.234567".parse().unwrap();
        assert_eq!(price, FixedDecimal::new(U256::from(1_234_567u64), 6));

        let small: FixedDecimal = "0.000000000000000001".parse().unwrap();
        assert_eq!(small, FixedDecimal::new(U256::ONE, 18));
    }

    #[test]
    fn rejects_malformed_numbers() {
        for input in ["", "-1", "+1", "1.", ".5", "1.2.3", "abc", "1e6", "1,5"] {
            assert_eq!(
                input.parse::<FixedDecimal>(),
                Err(LaunchError::InvalidArgument("invalid decimal number")),
                "{input:?}"
            );
        }
    }

    #[test]
    fn rejects_excess_precision() {
        let result = "0.0000000000000000001".parse::<FixedDecimal>();
        assert_eq!(result, Err(LaunchError::InvalidArgument("too many fractional digits")));
    }

    #[test]
    fn zero_is_parsed_but_flagged() {
        let zero: FixedDecimal = "0.00".parse().unwrap();
        assert!(zero.is_zero());
    }

    #[test]
    fn parse_units_scales_to_raw_amounts() {
        assert_eq!(parse_units("1000", 6).unwrap(), U256::from(1_000_000_000u64));
        assert_eq!(parse_units("2.5", 18).unwrap(), U256::from(2_500_000_000_000_000_000u128));
    }

    #[test]
    fn display_round_trips_through_parse() {
        let price = FixedDecimal::new(U256::from(1_500_000u64), 6);
        let reparsed: FixedDecimal = price.to_string().parse().unwrap();

        assert_eq!(
            parse_units(&reparsed.to_string(), 6).unwrap(),
            U256::from(1_500_000u64)
        );
    }
}
