//! Brightness scaling with ratio preservation
//!
//! Only integer math is available on the target, so the channel ratio is
//! computed in two scaled divisions (see [`scaled_div`]) instead of a single
//! truncating one, which would lose several percent for small channels.

use super::WhiteColor;
use crate::math8::{clamp_channel, scaled_div};

/// Scale a color so its dominant channel equals `brightness`
///
/// The dominant channel is the larger one (cold wins ties). The other
/// channel keeps its ratio to the dominant one. Both outputs are clamped to
/// `[1, 255]`, so the result is never fully off. A fully off input has no
/// ratio and scales as neutral white.
#[allow(clippy::cast_possible_wrap)]
pub fn set_brightness(brightness: u8, white: WhiteColor) -> WhiteColor {
    if white == WhiteColor::OFF {
        let level = clamp_channel(i32::from(brightness));
        return WhiteColor::new(level, level);
    }

    let (dominant, other) = if white.cold >= white.warm {
        (white.cold, white.warm)
    } else {
        (white.warm, white.cold)
    };

    let ratio = scaled_div(u32::from(dominant), u32::from(other));
    let scaled = scaled_div(u32::from(brightness), ratio);

    let brightness = clamp_channel(i32::from(brightness));
    let scaled = clamp_channel(scaled.min(u32::from(u8::MAX)) as i32);

    if white.cold >= white.warm {
        WhiteColor::new(brightness, scaled)
    } else {
        WhiteColor::new(scaled, brightness)
    }
}

/// Recover the brightness of a color, the inverse of [`set_brightness`]
pub const fn get_brightness(color: WhiteColor) -> u8 {
    if color.cold > color.warm {
        color.cold
    } else {
        color.warm
    }
}
