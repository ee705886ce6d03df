//! Configuration type definitions

use heapless::String;

use crate::animation::AnimationBounds;
use crate::command::CursorMode;
use crate::init::InitSettings;
use crate::timing;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Maximum text line length (one DDRAM line holds 40 cells)
pub const MAX_LINE_LEN: usize = 40;

/// Highest accepted function set repeat count
pub const MAX_FUNCTION_SET_REPEATS: u8 = 4;

/// Controller setup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PanelConfig {
    /// Times the function set instruction is sent during init
    pub function_set_repeats: u8,
    /// Cursor style after init
    pub cursor: CursorMode,
}

impl Default for PanelConfig {
    fn default() -> Self {
        let init = InitSettings::default();
        Self {
            function_set_repeats: init.function_set_repeats,
            cursor: init.cursor,
        }
    }
}

impl PanelConfig {
    pub fn init_settings(&self) -> InitSettings {
        InitSettings {
            function_set_repeats: self.function_set_repeats.max(1),
            cursor: self.cursor,
        }
    }
}

/// Banner text shown after boot
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TextConfig {
    pub line1: String<MAX_LINE_LEN>,
    pub line2: String<MAX_LINE_LEN>,
}

impl Default for TextConfig {
    fn default() -> Self {
        let mut line1 = String::new();
        let mut line2 = String::new();
        let _ = line1.push_str("HELLO");
        let _ = line2.push_str("WORLD");
        Self { line1, line2 }
    }
}

impl TextConfig {
    /// Length of the longer line, which decides how far to scroll
    pub fn longest(&self) -> usize {
        self.line1.chars().count().max(self.line2.chars().count())
    }
}

/// Sprite animation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AnimationConfig {
    pub enabled: bool,
    /// Column of the sprite's first body cell when a pass starts
    pub start_pos: i8,
    /// Last column before wrapping back to `start_pos`
    pub min_pos: i8,
    /// Frame period in ms (never below 125)
    pub frame_ms: u32,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        let bounds = AnimationBounds::default();
        Self {
            enabled: true,
            start_pos: bounds.start,
            min_pos: bounds.min,
            frame_ms: timing::FRAME_MS,
        }
    }
}

impl AnimationConfig {
    /// Validated bounds, falling back to the defaults
    pub fn bounds(&self) -> AnimationBounds {
        AnimationBounds::new(self.start_pos, self.min_pos).unwrap_or_default()
    }

    pub fn frame_period_ms(&self) -> u32 {
        timing::frame_period_ms(self.frame_ms)
    }
}

/// Text scrolling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ScrollConfig {
    pub enabled: bool,
    /// Wait between shift steps in ms (never below 500)
    pub step_ms: u32,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            step_ms: timing::SCROLL_STEP_MS,
        }
    }
}

impl ScrollConfig {
    pub fn step_period_ms(&self) -> u32 {
        timing::scroll_step_ms(self.step_ms)
    }
}

/// Complete display configuration
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DisplayConfig {
    pub display: PanelConfig,
    pub text: TextConfig,
    pub animation: AnimationConfig,
    pub scroll: ScrollConfig,
}
