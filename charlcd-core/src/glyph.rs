//! Custom glyph composer
//!
//! The sprite is drawn from six still bitmaps, three cells wide and two
//! display lines tall. Moving it by less than a whole cell means every
//! glyph shows the right part of its own bitmap and the left part of the
//! neighbour behind it:
//!
//! ```text
//!   offset 2:   lead      body 0     body 1     body 2 (trail)
//!             [....a0]  [a0<<2|a1>>3] [a1<<2|a2>>3] [a2<<2]
//! ```
//!
//! Slots 0-2 hold the upper line's body cells, 3-5 the lower line's, and 6/7
//! the leading cell of each line. The leading cells only contain pixels
//! while the sprite is mid-cell.

use crate::types::{
    GlyphRow, GlyphSlot, Line, SubCellOffset, GLYPH_ROWS, GLYPH_ROW_MASK,
};

/// One glyph: eight rows of five pixels (bit 4 is the leftmost pixel)
pub type Bitmap = [u8; GLYPH_ROWS as usize];

/// Sprite width in cells
pub const SPRITE_COLUMNS: u8 = 3;

/// Sprite height in display lines
pub const SPRITE_LINES: u8 = 2;

/// Still bitmaps of the sprite, indexed `line * 3 + column`
pub const SPRITE: [Bitmap; (SPRITE_COLUMNS * SPRITE_LINES) as usize] = [
    // upper line, column 0
    [0b00000, 0b00000, 0b00000, 0b00011, 0b00100, 0b01011, 0b01011, 0b10000],
    // upper line, column 1
    [0b00000, 0b00000, 0b11111, 0b00000, 0b00000, 0b00000, 0b00100, 0b00100],
    // upper line, column 2
    [0b00000, 0b00000, 0b10000, 0b01100, 0b00011, 0b00001, 0b00011, 0b00101],
    // lower line, column 0
    [0b10000, 0b01000, 0b01000, 0b00100, 0b00011, 0b00000, 0b00000, 0b00000],
    // lower line, column 1
    [0b00100, 0b00100, 0b00000, 0b00000, 0b00000, 0b11111, 0b00000, 0b00000],
    // lower line, column 2
    [0b01001, 0b00101, 0b01011, 0b00010, 0b01100, 0b10000, 0b00000, 0b00000],
];

/// What a CGRAM slot shows in the animation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SlotRole {
    /// Part of the sprite body on `line`, at sprite `column` (0-2)
    Body { line: Line, column: u8 },
    /// Cell ahead of the sprite on `line`, filled as it slides in
    Lead { line: Line },
}

impl SlotRole {
    /// Role of a slot in the fixed animation layout
    pub const fn of(slot: GlyphSlot) -> Self {
        match slot.index() {
            i @ 0..=2 => SlotRole::Body {
                line: Line::One,
                column: i,
            },
            i @ 3..=5 => SlotRole::Body {
                line: Line::Two,
                column: i - SPRITE_COLUMNS,
            },
            6 => SlotRole::Lead { line: Line::One },
            _ => SlotRole::Lead { line: Line::Two },
        }
    }

    /// Slot holding this role
    pub fn slot(self) -> GlyphSlot {
        let index = match self {
            SlotRole::Body { line, column } => line_index(line) * SPRITE_COLUMNS + column,
            SlotRole::Lead { line } => 2 * SPRITE_COLUMNS + line_index(line),
        };
        GlyphSlot::wrapping(index)
    }
}

const fn line_index(line: Line) -> u8 {
    match line {
        Line::One => 0,
        Line::Two => 1,
    }
}

/// Blend a row with its trailing neighbour, shifted by `offset` pixels
///
/// `offset` 0 is `a` unchanged; `offset` 5 is `b` unchanged.
pub const fn blend(a: u8, b: u8, offset: SubCellOffset) -> u8 {
    let shifted = ((a as u16) << offset.value()) as u8;
    (shifted | (b >> offset.complement())) & GLYPH_ROW_MASK
}

/// Row of the leading cell: only the part of `b` that slid across
pub const fn lead(b: u8, offset: SubCellOffset) -> u8 {
    (b >> offset.complement()) & GLYPH_ROW_MASK
}

/// Row of the trailing cell: `a` shifted with nothing behind it
pub const fn trail(a: u8, offset: SubCellOffset) -> u8 {
    (((a as u16) << offset.value()) as u8) & GLYPH_ROW_MASK
}

/// Composed pixel row for any animation slot
pub fn compose_row(slot: GlyphSlot, row: GlyphRow, offset: SubCellOffset) -> u8 {
    let r = row.index() as usize;

    match SlotRole::of(slot) {
        SlotRole::Body { line, column } => {
            let base = (line_index(line) * SPRITE_COLUMNS) as usize;
            let a = SPRITE[base + column as usize][r];
            if column + 1 < SPRITE_COLUMNS {
                blend(a, SPRITE[base + column as usize + 1][r], offset)
            } else {
                trail(a, offset)
            }
        }
        SlotRole::Lead { line } => {
            let base = (line_index(line) * SPRITE_COLUMNS) as usize;
            lead(SPRITE[base][r], offset)
        }
    }
}

/// Composed bitmap for one slot
pub fn compose_glyph(slot: GlyphSlot, offset: SubCellOffset) -> Bitmap {
    let mut bitmap = [0u8; GLYPH_ROWS as usize];
    for row in GlyphRow::all() {
        bitmap[row.index() as usize] = compose_row(slot, row, offset);
    }
    bitmap
}

/// Slots in the order the driver rewrites them: body cells, then lead cells
pub fn animation_slots() -> impl Iterator<Item = GlyphSlot> {
    GlyphSlot::all()
}
