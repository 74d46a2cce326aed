use crate::error::MathError;
use alloy_primitives::U256;
use alloy_primitives::aliases::U512;

const U256_TEN: U256 = U256::from_limbs([10, 0, 0, 0]);

/// Largest `n` for which `10^n` still fits in 256 bits.
pub const MAX_POW10: u32 = 77;

/// Computes `a * b / denominator` rounded toward zero, with the product
/// held in 512 bits so intermediate overflow never truncates.
///
/// Returns `MathError::DivisionByZero` for a zero denominator and
/// `MathError::Overflow` when the quotient does not fit in 256 bits.
#[inline]
pub fn mul_div(a: U256, b: U256, denominator: U256) -> Result<U256, MathError> {
    if denominator.is_zero() {
        return Err(MathError::DivisionByZero);
    }

    let product = widen(a) * widen(b);
    narrow(product / widen(denominator)).ok_or(MathError::Overflow)
}

/// Returns `10^exp`, or `MathError::Overflow` above `10^77`.
#[inline]
pub fn pow10(exp: u32) -> Result<U256, MathError> {
    if exp > MAX_POW10 {
        return Err(MathError::Overflow);
    }
    Ok(U256_TEN.pow(U256::from(exp)))
}

/// `a * b`, mapping overflow to `MathError::Overflow`.
#[inline]
pub fn checked_mul(a: U256, b: U256) -> Result<U256, MathError> {
    a.checked_mul(b).ok_or(MathError::Overflow)
}

/// Zero‑extends a 256‑bit value to 512 bits.
#[inline(always)]
pub fn widen(value: U256) -> U512 {
    let l = value.as_limbs();
    U512::from_limbs([l[0], l[1], l[2], l[3], 0, 0, 0, 0])
}

/// Truncating the upper limbs is only allowed when they are all zero.
#[inline(always)]
pub fn narrow(value: U512) -> Option<U256> {
    let l = value.as_limbs();
    if l[4..].iter().any(|limb| *limb != 0) {
        return None;
    }
    Some(U256::from_limbs([l[0], l[1], l[2], l[3]]))
}
