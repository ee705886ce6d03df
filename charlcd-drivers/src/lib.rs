//! Hardware drivers for the character display firmware
//!
//! Drivers are generic over the `charlcd-hal` pin and delay traits, so the
//! same code runs on the board and against the recording fakes in tests:
//!
//! - 4-bit parallel bus (nibble strobes, byte transfers, settle times)
//! - HD44780 controller (init, text, custom glyphs, animation, scrolling)

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod lcd;

pub use lcd::{BusPins, DriverSettings, FourBitBus, Hd44780};
