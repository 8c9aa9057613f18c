//! Blocking delays
//!
//! Fades and the store confirmation flash suspend the whole control loop.
//! The wait itself is injected so it can be replaced by a fake clock.

use embassy_time::Duration;

/// Blocking sleep source
pub trait Sleep {
    /// Block the caller for `duration`
    fn sleep(&mut self, duration: Duration);
}

impl<Z: Sleep + ?Sized> Sleep for &mut Z {
    fn sleep(&mut self, duration: Duration) {
        (**self).sleep(duration);
    }
}

/// Busy-wait on the embassy time driver
///
/// Requires a time driver to be linked in.
#[derive(Debug, Clone, Copy, Default)]
pub struct BlockingDelay;

impl Sleep for BlockingDelay {
    fn sleep(&mut self, duration: Duration) {
        embassy_time::block_for(duration);
    }
}
