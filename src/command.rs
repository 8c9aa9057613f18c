//! Remote control commands
//!
//! Command codes follow the NEC remote the dimmer ships with:
//!
//! ```text
//!   69  power toggle        71  next preset
//!    9  brighter             7  darker
//!   25  colder              64  warmer
//!    8  night light         28  store color
//!   12  10 %                24  50 %          94  100 %
//! ```

const CODE_POWER_TOGGLE: u16 = 69;
const CODE_NEXT_PRESET: u16 = 71;
const CODE_BRIGHTER: u16 = 9;
const CODE_DARKER: u16 = 7;
const CODE_COLDER: u16 = 25;
const CODE_WARMER: u16 = 64;
const CODE_NIGHT_TOGGLE: u16 = 8;
const CODE_LEVEL_10: u16 = 12;
const CODE_LEVEL_50: u16 = 24;
const CODE_LEVEL_100: u16 = 94;
const CODE_STORE: u16 = 28;

/// Dominant channel level for the 10 % shortcut
pub const LEVEL_10: u8 = 25;
/// Dominant channel level for the 50 % shortcut
pub const LEVEL_50: u8 = 128;
/// Dominant channel level for the 100 % shortcut
pub const LEVEL_100: u8 = 255;

/// Recognized remote commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    /// Fade on or off, keeping the color
    PowerToggle,
    /// Fade to the next preset at the current brightness
    NextPreset,
    /// Step brightness up
    Brighter,
    /// Step brightness down
    Darker,
    /// Shift the mix toward cold white
    Colder,
    /// Shift the mix toward warm white
    Warmer,
    /// Enter or leave the night light
    NightToggle,
    /// Fade to 10 % brightness
    Level10,
    /// Fade to 50 % brightness
    Level50,
    /// Fade to 100 % brightness
    Level100,
    /// Persist the current color and flash to confirm
    Store,
}

impl Command {
    /// Every command, in remote code order
    pub const ALL: [Self; 11] = [
        Self::NightToggle,
        Self::Darker,
        Self::Brighter,
        Self::Level10,
        Self::Level50,
        Self::Colder,
        Self::Store,
        Self::Warmer,
        Self::PowerToggle,
        Self::NextPreset,
        Self::Level100,
    ];

    pub const fn from_code(code: u16) -> Option<Self> {
        Some(match code {
            CODE_POWER_TOGGLE => Self::PowerToggle,
            CODE_NEXT_PRESET => Self::NextPreset,
            CODE_BRIGHTER => Self::Brighter,
            CODE_DARKER => Self::Darker,
            CODE_COLDER => Self::Colder,
            CODE_WARMER => Self::Warmer,
            CODE_NIGHT_TOGGLE => Self::NightToggle,
            CODE_LEVEL_10 => Self::Level10,
            CODE_LEVEL_50 => Self::Level50,
            CODE_LEVEL_100 => Self::Level100,
            CODE_STORE => Self::Store,
            _ => return None,
        })
    }

    pub const fn code(self) -> u16 {
        match self {
            Self::PowerToggle => CODE_POWER_TOGGLE,
            Self::NextPreset => CODE_NEXT_PRESET,
            Self::Brighter => CODE_BRIGHTER,
            Self::Darker => CODE_DARKER,
            Self::Colder => CODE_COLDER,
            Self::Warmer => CODE_WARMER,
            Self::NightToggle => CODE_NIGHT_TOGGLE,
            Self::Level10 => CODE_LEVEL_10,
            Self::Level50 => CODE_LEVEL_50,
            Self::Level100 => CODE_LEVEL_100,
            Self::Store => CODE_STORE,
        }
    }

    /// Whether a held key may keep firing this command
    pub const fn allows_repeat(self) -> bool {
        matches!(
            self,
            Self::Brighter | Self::Darker | Self::Colder | Self::Warmer
        )
    }

    /// Target brightness of the level shortcuts
    pub const fn target_level(self) -> Option<u8> {
        match self {
            Self::Level10 => Some(LEVEL_10),
            Self::Level50 => Some(LEVEL_50),
            Self::Level100 => Some(LEVEL_100),
            _ => None,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::PowerToggle => "power_toggle",
            Self::NextPreset => "next_preset",
            Self::Brighter => "brighter",
            Self::Darker => "darker",
            Self::Colder => "colder",
            Self::Warmer => "warmer",
            Self::NightToggle => "night_toggle",
            Self::Level10 => "level_10",
            Self::Level50 => "level_50",
            Self::Level100 => "level_100",
            Self::Store => "store",
        }
    }
}
