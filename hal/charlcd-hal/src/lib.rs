//! charlcd Hardware Abstraction Layer
//!
//! This crate defines the two capabilities the display driver needs from a
//! board: individually settable output lines and blocking delays. Chip
//! specific crates implement them so the same driver runs on any target,
//! and host tests substitute recording fakes.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Application (charlcd-firmware)         │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  charlcd-drivers (HD44780 4-bit driver) │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  charlcd-hal (this crate - traits)      │
//! └─────────────────────────────────────────┘
//!                     │
//!         ┌───────────┴───────────┐
//!         ▼                       ▼
//! ┌───────────────┐       ┌───────────────┐
//! │ charlcd-hal-  │       │ any embedded- │
//! │    rp2040     │       │ hal 1.0 board │
//! └───────────────┘       └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::OutputPin`] - Digital output line
//! - [`delay::Delay`] - Blocking microsecond/millisecond waits
//!
//! [`compat`] adapts embedded-hal 1.0 pins and delays to these traits.

#![no_std]
#![deny(unsafe_code)]

pub mod compat;
pub mod delay;
pub mod gpio;

// Re-export key traits at crate root for convenience
pub use delay::Delay;
pub use gpio::OutputPin;
