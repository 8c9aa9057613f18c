//! 8-bit channel arithmetic
//!
//! Integer-only helpers shared by the color model and the command state
//! machine. Nothing here can panic or wrap.

/// Fixed-point scale applied before every ratio division
pub const SCALE_FACTOR: u32 = 100;

/// Lowest value a lit channel may hold. `0` means "channel off".
pub const CHANNEL_MIN: u8 = 1;

/// Increase a value by `step`, saturating at 255
#[inline]
pub const fn step_up(value: u8, step: u8) -> u8 {
    value.saturating_add(step)
}

/// Decrease a value by `step`, saturating at 0
#[inline]
pub const fn step_down(value: u8, step: u8) -> u8 {
    value.saturating_sub(step)
}

/// Clamp a wide intermediate value into the lit channel range `[1, 255]`
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub const fn clamp_channel(value: i32) -> u8 {
    if value < CHANNEL_MIN as i32 {
        CHANNEL_MIN
    } else if value > u8::MAX as i32 {
        u8::MAX
    } else {
        value as u8
    }
}

/// Replace a zero channel with the lit minimum
#[inline]
pub const fn floor_channel(value: u8) -> u8 {
    if value == 0 { CHANNEL_MIN } else { value }
}

/// Scaled division biased toward rounding
///
/// Computes `(dividend * 100 + divisor * 9 / 10) / divisor`. A zero divisor
/// is treated as 1.
#[inline]
pub const fn scaled_div(dividend: u32, divisor: u32) -> u32 {
    let divisor = if divisor == 0 { 1 } else { divisor };
    (dividend * SCALE_FACTOR + (divisor * 9) / 10) / divisor
}
