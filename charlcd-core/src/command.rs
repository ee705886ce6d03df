//! HD44780 instruction encoding
//!
//! Only the instructions this firmware issues are modelled. Each encodes to
//! the single byte sent in command mode.

use crate::types::{Column, GlyphRow, GlyphSlot, Line};

/// Cursor appearance selected by the display control instruction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CursorMode {
    /// Display on, no cursor (`0x0C`)
    #[default]
    Hidden,
    /// Display on, underline cursor (`0x0E`)
    Underline,
    /// Display on, underline cursor and blinking block (`0x0F`)
    Blink,
}

impl CursorMode {
    /// Parse the config spelling ("hidden", "underline", "blink")
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "hidden" | "off" => Some(CursorMode::Hidden),
            "underline" | "on" => Some(CursorMode::Underline),
            "blink" => Some(CursorMode::Blink),
            _ => None,
        }
    }
}

/// Direction the whole display window moves
///
/// Shifting never touches DDRAM; it changes which 16 of the 40 cells per
/// line are visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ShiftDirection {
    /// Content moves left, revealing cells past column 15 (`0x18`)
    Left,
    /// Content moves right, back towards column 0 (`0x1C`)
    Right,
}

/// Display instruction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Command {
    /// 4-bit interface, two lines, 5x8 font
    FunctionSet,
    /// Blank DDRAM and return home
    ClearDisplay,
    /// Auto-increment address after each write, no display shift
    EntryMode,
    /// Display on with the given cursor style
    DisplayControl(CursorMode),
    /// Shift the display window one cell
    Shift(ShiftDirection),
    /// Select a DDRAM address (7 bits)
    SetDdramAddress(u8),
    /// Select a CGRAM address (6 bits)
    SetCgramAddress(u8),
}

mod bits {
    pub const CLEAR_DISPLAY: u8 = 0b0000_0001;
    pub const ENTRY_MODE: u8 = 0b0000_0100;
    pub const ENTRY_INCREMENT: u8 = 0b0000_0010;
    pub const DISPLAY_CONTROL: u8 = 0b0000_1000;
    pub const DISPLAY_ON: u8 = 0b0000_0100;
    pub const CURSOR_ON: u8 = 0b0000_0010;
    pub const BLINK_ON: u8 = 0b0000_0001;
    pub const SHIFT: u8 = 0b0001_0000;
    pub const SHIFT_DISPLAY: u8 = 0b0000_1000;
    pub const SHIFT_RIGHT: u8 = 0b0000_0100;
    pub const FUNCTION_SET: u8 = 0b0010_0000;
    pub const TWO_LINES: u8 = 0b0000_1000;
    pub const SET_CGRAM: u8 = 0b0100_0000;
    pub const CGRAM_MASK: u8 = 0b0011_1111;
    pub const SET_DDRAM: u8 = 0b1000_0000;
    pub const DDRAM_MASK: u8 = 0b0111_1111;
}

impl Command {
    /// Byte sent over the bus in command mode
    pub const fn encode(self) -> u8 {
        use bits::*;

        match self {
            Command::FunctionSet => FUNCTION_SET | TWO_LINES,
            Command::ClearDisplay => CLEAR_DISPLAY,
            Command::EntryMode => ENTRY_MODE | ENTRY_INCREMENT,
            Command::DisplayControl(cursor) => {
                DISPLAY_CONTROL
                    | DISPLAY_ON
                    | match cursor {
                        CursorMode::Hidden => 0,
                        CursorMode::Underline => CURSOR_ON,
                        CursorMode::Blink => CURSOR_ON | BLINK_ON,
                    }
            }
            Command::Shift(ShiftDirection::Left) => SHIFT | SHIFT_DISPLAY,
            Command::Shift(ShiftDirection::Right) => SHIFT | SHIFT_DISPLAY | SHIFT_RIGHT,
            Command::SetDdramAddress(addr) => SET_DDRAM | (addr & DDRAM_MASK),
            Command::SetCgramAddress(addr) => SET_CGRAM | (addr & CGRAM_MASK),
        }
    }

    /// Address the first cell of a line
    pub const fn line_start(line: Line) -> Self {
        Command::SetDdramAddress(line.base_address())
    }

    /// Address a visible cell
    pub const fn cursor(column: Column, line: Line) -> Self {
        Command::SetDdramAddress(line.base_address() + column.value())
    }

    /// Address one pixel row of a CGRAM glyph
    pub const fn glyph_row(slot: GlyphSlot, row: GlyphRow) -> Self {
        Command::SetCgramAddress(slot.index() * 8 + row.index())
    }
}
