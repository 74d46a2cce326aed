pub mod math_helpers;
pub mod sqrt_price_math;
pub mod tick_math;
