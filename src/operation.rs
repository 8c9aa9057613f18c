use crate::color::WhiteColor;

/// Side effect produced by a state transition
///
/// The state machine only decides what should happen to the output; the
/// [`Dimmer`](crate::Dimmer) performs it against the hardware.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// Fade the output between two colors
    Fade { from: WhiteColor, to: WhiteColor },
    /// Write a color immediately, without fading
    Apply(WhiteColor),
    /// Persist a color, then blink the output off and back to it
    StoreAndFlash(WhiteColor),
}

impl Operation {
    /// Color the output shows once the operation has finished
    pub const fn final_color(&self) -> WhiteColor {
        match *self {
            Self::Fade { to, .. } => to,
            Self::Apply(color) | Self::StoreAndFlash(color) => color,
        }
    }

    /// Whether the operation blocks the control loop for a while
    pub const fn is_blocking(&self) -> bool {
        !matches!(self, Self::Apply(_))
    }
}
