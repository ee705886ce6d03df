//! Character display over a 4-bit parallel bus

pub mod bus;
pub mod hd44780;

#[cfg(test)]
pub(crate) mod testing;

pub use bus::{BusPins, FourBitBus};
pub use hd44780::{char_code, DriverSettings, Hd44780};
