use alloy_primitives::U256;

pub const MIN_TICK: i32 = -887272;
pub const MAX_TICK: i32 = -MIN_TICK;

/// Widest tick used for a launch position. Divisible by every spacing
/// the supported fee tiers use, and inside `[MIN_TICK, MAX_TICK]`.
pub const MAX_LAUNCH_TICK: i32 = 887220;
pub const MIN_LAUNCH_TICK: i32 = -MAX_LAUNCH_TICK;

pub const MIN_SQRT_RATIO: U256 = U256::from_limbs([4295128739, 0, 0, 0]);
pub const MAX_SQRT_RATIO: U256 =
    U256::from_limbs([6743328256752651558, 17280870778742802505, 4294805859, 0]);

/// Rounds `tick` toward zero to the nearest multiple of `tick_spacing`.
///
/// Pools reject position bounds that are not divisible by their spacing,
/// and rounding toward zero keeps the aligned tick inside the original
/// range on both sides.
#[inline]
pub fn align_tick_to_spacing(tick: i32, tick_spacing: i32) -> i32 {
    debug_assert!(tick_spacing > 0, "tick spacing must be positive");

    if tick < 0 {
        -((-tick) / tick_spacing) * tick_spacing
    } else {
        (tick / tick_spacing) * tick_spacing
    }
}

/// Returns the `(tick_lower, tick_upper)` full‑range launch position for
/// a pool with the given spacing.
#[inline]
pub fn full_range_ticks(tick_spacing: i32) -> (i32, i32) {
    (
        align_tick_to_spacing(MIN_LAUNCH_TICK, tick_spacing),
        align_tick_to_spacing(MAX_LAUNCH_TICK, tick_spacing),
    )
}
