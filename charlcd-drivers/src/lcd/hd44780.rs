//! HD44780 16x2 character display driver
//!
//! Owns a [`FourBitBus`] and layers the controller's addressing on top:
//! init, DDRAM text, CGRAM glyph loads, the sprite animation frame and
//! the display-shift scroll. Every call blocks until the controller has
//! had time to execute what was sent.

use charlcd_core::animation::{AnimationBounds, AnimationState};
use charlcd_core::config::{DisplayConfig, MAX_LINE_LEN};
use charlcd_core::glyph::{animation_slots, compose_row};
use charlcd_core::init::{InitAction, InitSettings, InitStep};
use charlcd_core::scroll;
use charlcd_core::timing::{self, CLEAR_MS, INIT_STEP_US, SCROLL_TAIL_MS};
use charlcd_core::{Column, Command, GlyphRow, Line, SubCellOffset};
use charlcd_hal::{Delay, OutputPin};

use super::bus::FourBitBus;

/// Character code written for anything outside printable ASCII
pub const FALLBACK_CHAR: u8 = b' ';

/// Map a character to the code the controller's ROM font shows for it
///
/// `0x20..=0x7D` match ASCII. `~` and DEL are arrows on the A00 ROM, and
/// everything above is katakana, so those become blanks.
pub fn char_code(c: char) -> u8 {
    match c {
        ' '..='}' => c as u8,
        _ => FALLBACK_CHAR,
    }
}

/// Runtime settings derived from the configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DriverSettings {
    pub init: InitSettings,
    pub bounds: AnimationBounds,
    pub frame_ms: u32,
    pub scroll_step_ms: u32,
}

impl Default for DriverSettings {
    fn default() -> Self {
        Self {
            init: InitSettings::default(),
            bounds: AnimationBounds::default(),
            frame_ms: timing::FRAME_MS,
            scroll_step_ms: timing::SCROLL_STEP_MS,
        }
    }
}

impl From<&DisplayConfig> for DriverSettings {
    fn from(config: &DisplayConfig) -> Self {
        Self {
            init: config.display.init_settings(),
            bounds: config.animation.bounds(),
            frame_ms: config.animation.frame_period_ms(),
            scroll_step_ms: config.scroll.step_period_ms(),
        }
    }
}

/// HD44780 driver over a 4-bit bus
pub struct Hd44780<P, D> {
    bus: FourBitBus<P, D>,
    settings: DriverSettings,
}

impl<P: OutputPin, D: Delay> Hd44780<P, D> {
    pub fn new(bus: FourBitBus<P, D>, settings: DriverSettings) -> Self {
        Self { bus, settings }
    }

    pub fn settings(&self) -> &DriverSettings {
        &self.settings
    }

    /// Run the power-on sequence
    ///
    /// Leaves the display on, cleared, auto-incrementing and with the base
    /// sprite frame in CGRAM.
    pub fn init(&mut self) {
        let init = self.settings.init;
        for step in InitStep::sequence(init) {
            let (action, settle) = step.action(&init);
            match action {
                InitAction::ReleaseLines => self.bus.release(),
                InitAction::Nibble(nibble) => self.bus.send_nibble(nibble),
                InitAction::Command(command) => self.bus.command(command),
                InitAction::PreloadGlyphs => self.compose_glyphs(SubCellOffset::ZERO),
                InitAction::Nothing => {}
            }
            self.bus.settle(settle);
        }
    }

    /// Move the DDRAM address to the start of a line
    pub fn set_line(&mut self, line: Line) {
        self.bus.command(Command::line_start(line));
    }

    pub fn set_cursor(&mut self, column: Column, line: Line) {
        self.bus.command(Command::cursor(column, line));
    }

    /// Write characters at the current address
    ///
    /// Stops after one DDRAM line's worth so text never spills into the
    /// other line.
    pub fn write_str(&mut self, text: &str) {
        self.write_capped(text, MAX_LINE_LEN);
    }

    /// Write text starting at a visible cell
    ///
    /// Only the cells between `column` and the end of the DDRAM line are
    /// written.
    pub fn write_at(&mut self, column: Column, line: Line, text: &str) {
        self.set_cursor(column, line);
        self.write_capped(text, MAX_LINE_LEN - column.value() as usize);
    }

    fn write_capped(&mut self, text: &str, limit: usize) {
        for c in text.chars().take(limit) {
            self.bus.write_data(char_code(c));
        }
    }

    /// Replace both lines from column 0
    pub fn write_lines(&mut self, top: &str, bottom: &str) {
        self.set_line(Line::One);
        self.write_str(top);
        self.set_line(Line::Two);
        self.write_str(bottom);
    }

    /// Blank DDRAM, home the address and undo any display shift
    pub fn clear(&mut self) {
        self.bus.command(Command::ClearDisplay);
        self.bus.delay_ms(CLEAR_MS);
    }

    /// Load all eight CGRAM slots with the sprite shifted by `offset`
    pub fn compose_glyphs(&mut self, offset: SubCellOffset) {
        for slot in animation_slots() {
            for row in GlyphRow::all() {
                self.bus.delay_us(INIT_STEP_US);
                self.bus.command(Command::glyph_row(slot, row));
                self.bus.delay_us(INIT_STEP_US);
                self.bus.write_data(compose_row(slot, row, offset));
            }
        }
    }

    /// Write the sprite's cells for `state` into DDRAM
    ///
    /// Cells that fall outside the visible columns are skipped.
    pub fn draw_sprite(&mut self, state: AnimationState) {
        for cell in state.cells() {
            if let Some(column) = Column::from_position(cell.column) {
                self.set_cursor(column, cell.line);
                self.bus.write_data(cell.content.char_code());
            }
        }
    }

    /// Show the next animation frame and wait out the frame period
    ///
    /// Returns the state that is now on screen. Glyphs are loaded before
    /// the cells are rewritten so a cell step and the phase reset land in
    /// the same frame.
    pub fn tick(&mut self, state: AnimationState) -> AnimationState {
        let next = state.advance(self.settings.bounds);
        self.compose_glyphs(next.sprite_offset);
        self.draw_sprite(next);
        self.bus.delay_ms(self.settings.frame_ms);
        next
    }

    /// Shift the window out over text of `length` characters and back
    ///
    /// Text that fits on screen causes no shifts. The final tail wait
    /// always runs.
    pub fn scroll(&mut self, length: usize) {
        for command in scroll::sweep(length) {
            self.bus.command(command);
            self.bus.delay_ms(self.settings.scroll_step_ms);
        }
        self.bus.delay_ms(SCROLL_TAIL_MS);
    }

    /// Write two lines and sweep over them if either is too long
    pub fn show_text(&mut self, top: &str, bottom: &str) {
        self.write_lines(top, bottom);
        let longest = top.chars().count().max(bottom.chars().count());
        self.scroll(longest.min(MAX_LINE_LEN));
    }

    /// Give back the bus
    pub fn into_bus(self) -> FourBitBus<P, D> {
        self.bus
    }
}
