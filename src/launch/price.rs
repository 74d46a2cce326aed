use crate::error::{LaunchError, MathError};
use crate::math::math_helpers::{checked_mul, pow10};
use crate::math::sqrt_price_math::u256_to_f64;
use crate::units::FixedDecimal;
use alloy_primitives::U256;

/// An exact non‑negative rational price, `numerator / denominator`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Price {
    pub numerator: U256,
    pub denominator: U256,
}

impl Price {
    pub const fn new(numerator: U256, denominator: U256) -> Self {
        Self {
            numerator,
            denominator,
        }
    }

    pub fn from_decimal(value: FixedDecimal) -> Result<Self, MathError> {
        Ok(Self::new(value.value, pow10(u32::from(value.decimals))?))
    }

    pub fn div_int(self, divisor: u32) -> Result<Self, MathError> {
        if divisor == 0 {
            return Err(MathError::DivisionByZero);
        }
        Ok(Self::new(
            self.numerator,
            checked_mul(self.denominator, U256::from(divisor))?,
        ))
    }

    pub fn mul_int(self, factor: u32) -> Result<Self, MathError> {
        Ok(Self::new(
            checked_mul(self.numerator, U256::from(factor))?,
            self.denominator,
        ))
    }

    /// Multiplies by `10^exp`; negative exponents grow the denominator.
    pub fn scale_pow10(self, exp: i32) -> Result<Self, MathError> {
        let factor = pow10(exp.unsigned_abs())?;
        if exp >= 0 {
            Ok(Self::new(checked_mul(self.numerator, factor)?, self.denominator))
        } else {
            Ok(Self::new(self.numerator, checked_mul(self.denominator, factor)?))
        }
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.numerator.is_zero()
    }

    /// Lossy, for display and logging.
    pub fn to_f64(&self) -> f64 {
        u256_to_f64(self.numerator) / u256_to_f64(self.denominator)
    }
}

/// Synthetic token price in the denomination asset, and its inverse.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct LpPrice {
    /// Price of one synthetic token, `share_price / ratio`.
    pub lp_price: Price,
    /// `share_price * ratio`; reported alongside, never fed into the pool.
    pub inverse_lp_price: Price,
}

pub fn calculate_lp_price(
    vault_share_price: FixedDecimal,
    price_ratio: u32,
) -> Result<LpPrice, LaunchError> {
    if price_ratio == 0 {
        return Err(LaunchError::InvalidArgument("ratio must be greater than zero"));
    }

    let share_price = Price::from_decimal(vault_share_price)
        .map_err(|_| LaunchError::ComputationOverflow("vault share price"))?;

    Ok(LpPrice {
        lp_price: share_price
            .div_int(price_ratio)
            .map_err(|_| LaunchError::ComputationOverflow("lp price"))?,
        inverse_lp_price: share_price
            .mul_int(price_ratio)
            .map_err(|_| LaunchError::ComputationOverflow("inverse lp price"))?,
    })
}
