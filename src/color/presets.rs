use super::{WhiteColor, set_brightness};

/// Number of selectable presets
pub const PRESET_COUNT: u8 = 5;

/// Fixed color mixes, from cold-only to warm-only
pub const PRESETS: [WhiteColor; PRESET_COUNT as usize] = [
    WhiteColor::new(255, 1),
    WhiteColor::new(255, 128),
    WhiteColor::new(255, 255),
    WhiteColor::new(128, 255),
    WhiteColor::new(1, 255),
];

/// Get a preset by index, wrapping around the table
#[allow(clippy::cast_lossless)]
pub const fn preset(index: u8) -> WhiteColor {
    PRESETS[(index % PRESET_COUNT) as usize]
}

/// Dim variant of the warmest preset used as the night light
pub fn night_color(level: u8) -> WhiteColor {
    set_brightness(level, preset(PRESET_COUNT - 1))
}
