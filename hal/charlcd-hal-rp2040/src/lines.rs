//! Display bus line allocation
//!
//! Claims the six GPIOs wired to the display and puts them in push-pull
//! output mode, driven low. Lines may power up floating at random levels
//! and the controller latches on a falling E edge, so they are low before
//! the driver ever sees them.

use charlcd_hal::compat::EhPin;
use embassy_rp::gpio::{AnyPin, Level, Output};
use embassy_rp::Peri;

/// One display bus line
///
/// embassy-rp outputs implement embedded-hal's infallible `OutputPin`, so
/// the shared adapter is all the glue needed.
pub type Line = EhPin<Output<'static>>;

/// The six output lines of the 4-bit display bus
pub struct BusLines {
    /// Register select (low = command, high = data)
    pub rs: Line,
    /// Enable strobe
    pub en: Line,
    pub d4: Line,
    pub d5: Line,
    pub d6: Line,
    pub d7: Line,
}

impl BusLines {
    /// Configure the given pins as outputs, all driven low
    pub fn new(
        rs: Peri<'static, AnyPin>,
        en: Peri<'static, AnyPin>,
        d4: Peri<'static, AnyPin>,
        d5: Peri<'static, AnyPin>,
        d6: Peri<'static, AnyPin>,
        d7: Peri<'static, AnyPin>,
    ) -> Self {
        Self {
            rs: output_low(rs),
            en: output_low(en),
            d4: output_low(d4),
            d5: output_low(d5),
            d6: output_low(d6),
            d7: output_low(d7),
        }
    }
}

fn output_low(pin: Peri<'static, AnyPin>) -> Line {
    EhPin::new(Output::new(pin, Level::Low))
}
