//! Stepped fade between two colors
//!
//! A fade always takes [`FADE_STEPS`] + 1 driver writes spaced by
//! `duration / FADE_STEPS`, followed by one exact write of the target. The
//! per-step delta is truncated, so the ramp may stop short of the target;
//! the final write removes that error.

use embassy_time::Duration;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::color::WhiteColor;
use crate::driver::IntensityDriver;
use crate::math8::clamp_channel;
use crate::sleep::Sleep;

/// Number of interpolation steps in a fade
pub const FADE_STEPS: u8 = 50;

/// Fade duration used when nothing else is configured
pub const DEFAULT_FADE_DURATION: Duration = Duration::from_millis(500);

/// Intermediate colors of a fade
///
/// Yields `start + i * delta` for `i` in `0..=FADE_STEPS`, each channel
/// clamped to `[1, 255]`. The exact `stop` value is not part of the schedule.
#[derive(Debug, Clone)]
pub struct FadeSchedule {
    start: WhiteColor,
    delta_cold: i32,
    delta_warm: i32,
    step: u8,
    finished: bool,
}

impl FadeSchedule {
    pub fn new(start: WhiteColor, stop: WhiteColor) -> Self {
        let steps = i32::from(FADE_STEPS);
        Self {
            start,
            delta_cold: (i32::from(stop.cold) - i32::from(start.cold)) / steps,
            delta_warm: (i32::from(stop.warm) - i32::from(start.warm)) / steps,
            step: 0,
            finished: false,
        }
    }

    /// Per-channel increment applied at each step
    pub const fn delta(&self) -> (i32, i32) {
        (self.delta_cold, self.delta_warm)
    }

    /// Delay between two steps of a fade lasting `duration`
    pub fn step_delay(duration: Duration) -> Duration {
        duration / u32::from(FADE_STEPS)
    }
}

impl Iterator for FadeSchedule {
    type Item = WhiteColor;

    fn next(&mut self) -> Option<WhiteColor> {
        if self.finished {
            return None;
        }
        let i = i32::from(self.step);
        let color = WhiteColor::new(
            clamp_channel(i32::from(self.start.cold) + i * self.delta_cold),
            clamp_channel(i32::from(self.start.warm) + i * self.delta_warm),
        );
        if self.step == FADE_STEPS {
            self.finished = true;
        } else {
            self.step += 1;
        }
        Some(color)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = if self.finished {
            0
        } else {
            usize::from(FADE_STEPS - self.step) + 1
        };
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for FadeSchedule {}

/// Fade the driver from `start` to `stop`, blocking for `duration`
///
/// There is no early exit: equal endpoints still run every step.
pub fn fade<D, Z>(
    driver: &mut D,
    sleeper: &mut Z,
    start: WhiteColor,
    stop: WhiteColor,
    duration: Duration,
)
where
    D: IntensityDriver + ?Sized,
    Z: Sleep + ?Sized,
{
    #[cfg(feature = "esp32-log")]
    println!(
        "[fade] {:?} -> {:?} over {} ms",
        start,
        stop,
        duration.as_millis()
    );
    let delay = FadeSchedule::step_delay(duration);
    for color in FadeSchedule::new(start, stop) {
        driver.apply(color);
        sleeper.sleep(delay);
    }
    driver.apply(stop);
}
