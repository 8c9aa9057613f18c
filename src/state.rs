//! Operating point and command transitions
//!
//! [`OperatingPoint::transition`] is the whole state machine: it mutates the
//! point in place and returns the [`Operation`] the output needs. It does no
//! I/O, the persisted color is pulled through a closure only when leaving
//! night mode.
//!
//! # Brightness convention
//!
//! `brightness` is the dimming level the user asked for. It is set directly
//! by brighter/darker and the level shortcuts, re-derived as
//! `max(cold, warm)` whenever the color is edited or restored directly
//! (colder/warmer, leaving night mode, startup) and kept as-is by preset
//! changes. It can read `0` while the color floor keeps the channels at `1`.

use crate::color::{PRESET_COUNT, WhiteColor, get_brightness, night_color, preset, set_brightness};
use crate::command::Command;
use crate::math8::{floor_channel, step_down, step_up};
use crate::operation::Operation;

/// Current lighting state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OperatingPoint {
    /// Color shown while on and not in night mode
    pub white: WhiteColor,
    /// Requested dimming level
    pub brightness: u8,
    /// Index of the last selected preset
    pub preset: u8,
    pub is_on: bool,
    pub is_night: bool,
}

impl OperatingPoint {
    /// Point restored from a persisted color at startup
    pub const fn restored(color: WhiteColor) -> Self {
        Self {
            white: color,
            brightness: get_brightness(color),
            preset: 0,
            is_on: true,
            is_night: false,
        }
    }

    /// Apply a command
    ///
    /// `step` is the brighter/darker/colder/warmer increment, `night_level`
    /// the dominant channel level of the night light.
    pub fn transition(
        &mut self,
        command: Command,
        step: u8,
        night_level: u8,
        load: impl FnOnce() -> WhiteColor,
    ) -> Operation {
        match command {
            Command::PowerToggle => self.toggle_power(),
            Command::NextPreset => self.next_preset(),
            Command::Brighter => self.dim_to(step_up(self.brightness, step)),
            Command::Darker => self.dim_to(step_down(self.brightness, step)),
            Command::Colder => self.shift(step, 0),
            Command::Warmer => self.shift(0, step),
            Command::NightToggle => self.toggle_night(night_level, load),
            Command::Level10 | Command::Level50 | Command::Level100 => {
                let level = command.target_level().unwrap_or(self.brightness);
                self.fade_to_level(level)
            }
            Command::Store => Operation::StoreAndFlash(self.white),
        }
    }

    fn toggle_power(&mut self) -> Operation {
        self.is_on = !self.is_on;
        if self.is_on {
            Operation::Fade {
                from: WhiteColor::OFF,
                to: self.white,
            }
        } else {
            Operation::Fade {
                from: self.white,
                to: WhiteColor::OFF,
            }
        }
    }

    fn next_preset(&mut self) -> Operation {
        self.preset = (self.preset % PRESET_COUNT + 1) % PRESET_COUNT;
        let target = set_brightness(self.brightness, preset(self.preset));
        self.commit_fade(target)
    }

    fn dim_to(&mut self, brightness: u8) -> Operation {
        self.brightness = brightness;
        self.white = set_brightness(brightness, self.white);
        Operation::Apply(self.white)
    }

    /// Move `colder` toward cold and `warmer` toward warm, one of them zero
    fn shift(&mut self, colder: u8, warmer: u8) -> Operation {
        let cold = step_down(step_up(self.white.cold, colder), warmer);
        let warm = step_down(step_up(self.white.warm, warmer), colder);
        self.white = WhiteColor::new(floor_channel(cold), floor_channel(warm));
        self.brightness = get_brightness(self.white);
        Operation::Apply(self.white)
    }

    fn toggle_night(&mut self, night_level: u8, load: impl FnOnce() -> WhiteColor) -> Operation {
        self.is_night = !self.is_night;
        let night = night_color(night_level);
        if self.is_night {
            Operation::Fade {
                from: self.white,
                to: night,
            }
        } else {
            self.white = load();
            self.brightness = get_brightness(self.white);
            Operation::Fade {
                from: night,
                to: self.white,
            }
        }
    }

    fn fade_to_level(&mut self, level: u8) -> Operation {
        self.brightness = level;
        let target = set_brightness(level, self.white);
        self.commit_fade(target)
    }

    fn commit_fade(&mut self, target: WhiteColor) -> Operation {
        let from = self.white;
        self.white = target;
        Operation::Fade { from, to: target }
    }
}

impl Default for OperatingPoint {
    fn default() -> Self {
        Self::restored(WhiteColor::default())
    }
}
