mod presets;
mod scale;

pub use presets::{PRESET_COUNT, PRESETS, night_color, preset};
pub use scale::{get_brightness, set_brightness};

/// Drive level of the two white channels
///
/// `0` on a channel means fully off and only appears as a fade endpoint
/// when powering down. Lit colors keep both channels in `[1, 255]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WhiteColor {
    pub cold: u8,
    pub warm: u8,
}

impl WhiteColor {
    /// Both channels off
    pub const OFF: Self = Self::new(0, 0);

    pub const fn new(cold: u8, warm: u8) -> Self {
        Self { cold, warm }
    }
}

impl Default for WhiteColor {
    /// Neutral half-brightness white
    fn default() -> Self {
        Self::new(128, 128)
    }
}

impl From<(u8, u8)> for WhiteColor {
    fn from((cold, warm): (u8, u8)) -> Self {
        Self::new(cold, warm)
    }
}

impl From<WhiteColor> for (u8, u8) {
    fn from(color: WhiteColor) -> Self {
        (color.cold, color.warm)
    }
}
