//! Board-agnostic core logic for the character display firmware
//!
//! This crate contains everything that does not touch hardware:
//!
//! - Bounded value types for the bus (nibbles, lines, columns, glyph slots)
//! - HD44780 instruction encoding
//! - The bus timing contract
//! - The power-on initialization sequence
//! - Custom glyph composition for sub-cell sprite motion
//! - Animation state and scroll planning
//! - Configuration types and parser

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod animation;
pub mod command;
pub mod config;
pub mod glyph;
pub mod init;
pub mod scroll;
pub mod timing;
pub mod types;

pub use animation::{AnimationBounds, AnimationState};
pub use command::{Command, CursorMode, ShiftDirection};
pub use types::{Column, GlyphRow, GlyphSlot, Line, Mode, Nibble, SubCellOffset};
