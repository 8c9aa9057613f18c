//! Intensity driver abstraction layer
//!
//! The dimmer writes whole [`WhiteColor`] values; converting them into a
//! physical signal is left to the platform.
//!
//! # Duty cycle quirk
//!
//! Channel value `1` is written as a zero duty cycle, exactly like `0`. The
//! output has no 1/255 step, so the color model's `[1, 255]` floor does not
//! guarantee visible light at the lowest level. See [`duty_for`].

use embedded_hal::pwm::SetDutyCycle;

use crate::color::WhiteColor;

/// Abstract intensity driver trait
///
/// Implement this trait to support different hardware platforms.
/// The dimmer is generic over this trait.
pub trait IntensityDriver {
    /// Drive both channels at the given levels
    fn apply(&mut self, color: WhiteColor);
}

impl<D: IntensityDriver + ?Sized> IntensityDriver for &mut D {
    fn apply(&mut self, color: WhiteColor) {
        (**self).apply(color);
    }
}

/// Map a channel value to the duty cycle actually written
pub const fn duty_for(value: u8) -> u8 {
    if value == 1 { 0 } else { value }
}

/// Driver over two PWM outputs
///
/// Duty is written as `duty_for(value) / 255` of each output's maximum.
pub struct PwmDriver<C, W> {
    cold: C,
    warm: W,
}

impl<C: SetDutyCycle, W: SetDutyCycle> PwmDriver<C, W> {
    pub const fn new(cold: C, warm: W) -> Self {
        Self { cold, warm }
    }

    /// Release the PWM outputs
    pub fn release(self) -> (C, W) {
        (self.cold, self.warm)
    }
}

impl<C: SetDutyCycle, W: SetDutyCycle> IntensityDriver for PwmDriver<C, W> {
    fn apply(&mut self, color: WhiteColor) {
        // The driver interface is infallible; a failed write is retried by the
        // next apply.
        let _ = self
            .cold
            .set_duty_cycle_fraction(u16::from(duty_for(color.cold)), u16::from(u8::MAX));
        let _ = self
            .warm
            .set_duty_cycle_fraction(u16::from(duty_for(color.warm)), u16::from(u8::MAX));
    }
}
