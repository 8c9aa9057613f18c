use embassy_time::Duration;

use crate::decoder::FrameFilter;
use crate::fade::DEFAULT_FADE_DURATION;
use crate::storage::StorageLayout;

/// Default brightness and color increment per keypress
pub const DEFAULT_STEP: u8 = 4;

/// Default dominant channel level of the night light
pub const DEFAULT_NIGHT_LEVEL: u8 = 5;

/// Default length of the store confirmation blink
pub const DEFAULT_FLASH_DURATION: Duration = Duration::from_millis(200);

/// Configuration for blocking output changes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DimmerTimings {
    /// Duration of every fade
    pub fade: Duration,
    /// How long the output stays off when confirming a store
    pub flash: Duration,
}

impl DimmerTimings {
    pub const DEFAULT: Self = Self {
        fade: DEFAULT_FADE_DURATION,
        flash: DEFAULT_FLASH_DURATION,
    };
}

impl Default for DimmerTimings {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Configuration for the dimmer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DimmerConfig {
    pub timings: DimmerTimings,
    /// Increment used by brighter/darker and colder/warmer
    pub step: u8,
    /// Dominant channel level of the night light
    pub night_level: u8,
    /// Where the color is persisted
    pub storage: StorageLayout,
    /// Which remote frames are accepted
    pub filter: FrameFilter,
}

impl DimmerConfig {
    pub const DEFAULT: Self = Self {
        timings: DimmerTimings::DEFAULT,
        step: DEFAULT_STEP,
        night_level: DEFAULT_NIGHT_LEVEL,
        storage: StorageLayout::DEFAULT,
        filter: FrameFilter::DEFAULT,
    };
}

impl Default for DimmerConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}
