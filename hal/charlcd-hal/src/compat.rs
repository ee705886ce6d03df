//! embedded-hal 1.0 adapters
//!
//! Most chip HALs (embassy-rp, rp2040-hal, esp-hal, ...) already expose
//! `embedded_hal::digital::OutputPin` and `embedded_hal::delay::DelayNs`.
//! These wrappers let those types plug straight into the display driver.

use core::convert::Infallible;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin as EhOutputPin;

use crate::{Delay, OutputPin};

/// Output line backed by an embedded-hal pin
///
/// Only infallible pins are accepted: the display bus has no way to report
/// or recover from a failed pin write.
pub struct EhPin<P>(pub P);

impl<P> EhPin<P> {
    /// Wrap an embedded-hal output pin
    pub fn new(pin: P) -> Self {
        Self(pin)
    }

    /// Release the wrapped pin
    pub fn into_inner(self) -> P {
        self.0
    }
}

impl<P> OutputPin for EhPin<P>
where
    P: EhOutputPin<Error = Infallible>,
{
    fn set_high(&mut self) {
        self.0.set_high().unwrap_or_else(|e| match e {});
    }

    fn set_low(&mut self) {
        self.0.set_low().unwrap_or_else(|e| match e {});
    }
}

/// Delay backed by an embedded-hal `DelayNs` implementation
pub struct EhDelay<D>(pub D);

impl<D> EhDelay<D> {
    /// Wrap an embedded-hal delay provider
    pub fn new(delay: D) -> Self {
        Self(delay)
    }
}

impl<D: DelayNs> Delay for EhDelay<D> {
    fn delay_us(&mut self, us: u32) {
        self.0.delay_us(us);
    }

    fn delay_ms(&mut self, ms: u32) {
        self.0.delay_ms(ms);
    }
}
