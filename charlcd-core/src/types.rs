//! Bounded value types for the display bus
//!
//! Each type can only hold values the controller accepts, so out-of-range
//! nibbles, lines, columns, glyph slots and pixel offsets never reach the
//! wire.

/// A 4-bit value sent in one bus transfer
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Nibble(u8);

impl Nibble {
    /// `0011`, sent while the controller may still be in 8-bit mode
    pub const WAKE: Nibble = Nibble(0b0011);
    /// `0010`, switches the controller to the 4-bit interface
    pub const FOUR_BIT: Nibble = Nibble(0b0010);

    /// Create a nibble, rejecting values above 15
    pub const fn new(value: u8) -> Option<Self> {
        if value <= 0x0F {
            Some(Self(value))
        } else {
            None
        }
    }

    /// Upper four bits of a byte (sent first)
    pub const fn high(byte: u8) -> Self {
        Self(byte >> 4)
    }

    /// Lower four bits of a byte (sent second)
    pub const fn low(byte: u8) -> Self {
        Self(byte & 0x0F)
    }

    /// Split a byte into its transmission order: high nibble, then low
    pub const fn split(byte: u8) -> [Nibble; 2] {
        [Self::high(byte), Self::low(byte)]
    }

    pub const fn value(self) -> u8 {
        self.0
    }

    /// Level of data bit `bit` (0 = D4 ... 3 = D7)
    pub const fn bit(self, bit: u8) -> bool {
        (self.0 >> bit) & 1 == 1
    }

    /// Levels for D4, D5, D6, D7 in that order
    pub const fn lines(self) -> [bool; 4] {
        [self.bit(0), self.bit(1), self.bit(2), self.bit(3)]
    }
}

/// What the controller should do with a byte (RS line level)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Mode {
    /// Instruction register (RS low)
    Command,
    /// Data register, DDRAM or CGRAM depending on the last address set (RS high)
    Data,
}

impl Mode {
    /// Level of the register select line
    pub const fn rs_level(self) -> bool {
        matches!(self, Mode::Data)
    }
}

/// One of the two display lines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Line {
    One,
    Two,
}

impl Line {
    /// Convert a 1-based line number
    pub const fn from_number(n: u8) -> Option<Self> {
        match n {
            1 => Some(Line::One),
            2 => Some(Line::Two),
            _ => None,
        }
    }

    /// DDRAM address of the first cell on this line
    pub const fn base_address(self) -> u8 {
        match self {
            Line::One => 0x00,
            Line::Two => 0x40,
        }
    }
}

/// Number of visible columns per line
pub const VISIBLE_COLUMNS: u8 = 16;

/// A visible column, 0-15
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Column(u8);

impl Column {
    pub const FIRST: Column = Column(0);
    pub const LAST: Column = Column(VISIBLE_COLUMNS - 1);

    pub const fn new(column: u8) -> Option<Self> {
        if column < VISIBLE_COLUMNS {
            Some(Self(column))
        } else {
            None
        }
    }

    /// Column for a signed position, `None` when off screen
    pub fn from_position(pos: i16) -> Option<Self> {
        u8::try_from(pos).ok().and_then(Self::new)
    }

    pub const fn value(self) -> u8 {
        self.0
    }
}

/// Number of CGRAM glyph slots
pub const GLYPH_SLOTS: u8 = 8;

/// Pixel rows per glyph
pub const GLYPH_ROWS: u8 = 8;

/// Pixel columns per glyph
pub const GLYPH_WIDTH: u8 = 5;

/// Mask of the pixel bits in a glyph row
pub const GLYPH_ROW_MASK: u8 = (1 << GLYPH_WIDTH) - 1;

/// A CGRAM slot, 0-7
///
/// Writing the slot index as a data byte displays that glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GlyphSlot(u8);

impl GlyphSlot {
    pub const fn new(slot: u8) -> Option<Self> {
        if slot < GLYPH_SLOTS {
            Some(Self(slot))
        } else {
            None
        }
    }

    /// Slot for any index, taken modulo the slot count
    pub const fn wrapping(index: u8) -> Self {
        Self(index % GLYPH_SLOTS)
    }

    pub const fn index(self) -> u8 {
        self.0
    }

    /// Character code that displays this glyph
    pub const fn char_code(self) -> u8 {
        self.0
    }

    /// All slots in ascending order
    pub fn all() -> impl Iterator<Item = GlyphSlot> {
        (0..GLYPH_SLOTS).map(GlyphSlot)
    }
}

/// A pixel row within a glyph, 0-7 (top to bottom)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GlyphRow(u8);

impl GlyphRow {
    pub const fn new(row: u8) -> Option<Self> {
        if row < GLYPH_ROWS {
            Some(Self(row))
        } else {
            None
        }
    }

    pub const fn index(self) -> u8 {
        self.0
    }

    /// All rows, top to bottom
    pub fn all() -> impl Iterator<Item = GlyphRow> {
        (0..GLYPH_ROWS).map(GlyphRow)
    }
}

/// Sub-cell pixel phase of the sprite, 0-5
///
/// A glyph is five pixels wide; phase `n` shows the sprite shifted `n`
/// pixels towards the leading edge. Phase 5 shows the next cell's content
/// exactly, and the following step wraps to 0 one column further on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SubCellOffset(u8);

impl SubCellOffset {
    pub const ZERO: SubCellOffset = SubCellOffset(0);
    pub const MAX: SubCellOffset = SubCellOffset(GLYPH_WIDTH);

    /// Number of distinct phases
    pub const PHASES: u8 = GLYPH_WIDTH + 1;

    pub const fn new(offset: u8) -> Option<Self> {
        if offset <= GLYPH_WIDTH {
            Some(Self(offset))
        } else {
            None
        }
    }

    pub const fn value(self) -> u8 {
        self.0
    }

    /// Shift applied to the neighbouring bitmap (`5 - offset`)
    pub const fn complement(self) -> u8 {
        GLYPH_WIDTH - self.0
    }

    /// Next phase and whether it wrapped back to 0
    pub const fn next(self) -> (Self, bool) {
        if self.0 == GLYPH_WIDTH {
            (Self(0), true)
        } else {
            (Self(self.0 + 1), false)
        }
    }

    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// All phases in order
    pub fn all() -> impl Iterator<Item = SubCellOffset> {
        (0..Self::PHASES).map(SubCellOffset)
    }
}
