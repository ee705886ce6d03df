//! Busy-wait delay on the embassy time driver
//!
//! The display transactions must not yield mid-byte, so this blocks the
//! core instead of awaiting a timer.

use charlcd_hal::Delay;
use embassy_time::{block_for, Duration};

/// Blocking delay backed by `embassy_time::block_for`
#[derive(Debug, Clone, Copy, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BusyDelay;

impl BusyDelay {
    pub fn new() -> Self {
        Self
    }
}

impl Delay for BusyDelay {
    fn delay_us(&mut self, us: u32) {
        block_for(Duration::from_micros(us as u64));
    }

    fn delay_ms(&mut self, ms: u32) {
        block_for(Duration::from_millis(ms as u64));
    }
}
