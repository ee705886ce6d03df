//! RP2040-specific HAL for the charlcd firmware
//!
//! This crate provides RP2040 implementations of the shared `charlcd-hal`
//! traits:
//!
//! - GPIO output lines for the six display bus signals
//! - Busy-wait delay on top of the embassy time driver

#![no_std]

pub mod delay;
pub mod lines;

pub use delay::BusyDelay;
pub use lines::{BusLines, Line};

// Re-export shared traits from charlcd-hal for convenience
pub use charlcd_hal::{Delay, OutputPin};
