//! Power-on initialization sequence
//!
//! The controller comes up in an unknown bus mode. This fixed sequence
//! forces it into 4-bit, two-line mode and sets up addressing and the
//! cursor. Steps run strictly in order; there is no read-back, so nothing
//! is ever re-verified afterwards.

use crate::command::{Command, CursorMode};
use crate::timing::{CLEAR_MS, INIT_STEP_US, POWER_ON_MS};
use crate::types::Nibble;

/// Settings that shape the sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InitSettings {
    /// How many times the function set instruction is sent (at least 1)
    pub function_set_repeats: u8,
    pub cursor: CursorMode,
}

impl Default for InitSettings {
    fn default() -> Self {
        Self {
            function_set_repeats: 2,
            cursor: CursorMode::Hidden,
        }
    }
}

/// One step of the sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InitStep {
    /// Drive every line low and wait out the power-on reset
    PowerOn,
    /// Lone `0011` nibble
    Wake8Bit,
    /// Lone `0010` nibble, from here on every byte is two nibbles
    Enter4Bit,
    /// Function set; `sent` counts previous repeats
    FunctionSet { sent: u8 },
    Clear,
    EntryMode,
    DisplayControl,
    /// Load the base animation frame into CGRAM
    PreloadGlyphs,
    /// Terminal state
    Ready,
}

/// What the driver does for a step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InitAction {
    ReleaseLines,
    Nibble(Nibble),
    Command(Command),
    PreloadGlyphs,
    Nothing,
}

/// Extra wait after a step, on top of the byte layer's own delays
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Settle {
    None,
    Micros(u32),
    Millis(u32),
}

impl InitStep {
    pub const FIRST: InitStep = InitStep::PowerOn;

    /// Action and settle time for this step
    pub const fn action(self, settings: &InitSettings) -> (InitAction, Settle) {
        match self {
            InitStep::PowerOn => (InitAction::ReleaseLines, Settle::Millis(POWER_ON_MS)),
            InitStep::Wake8Bit => (InitAction::Nibble(Nibble::WAKE), Settle::Micros(INIT_STEP_US)),
            InitStep::Enter4Bit => (
                InitAction::Nibble(Nibble::FOUR_BIT),
                Settle::Micros(INIT_STEP_US),
            ),
            InitStep::FunctionSet { .. } => (
                InitAction::Command(Command::FunctionSet),
                Settle::Micros(INIT_STEP_US),
            ),
            InitStep::Clear => (
                InitAction::Command(Command::ClearDisplay),
                Settle::Millis(CLEAR_MS),
            ),
            InitStep::EntryMode => (InitAction::Command(Command::EntryMode), Settle::None),
            InitStep::DisplayControl => (
                InitAction::Command(Command::DisplayControl(settings.cursor)),
                Settle::None,
            ),
            InitStep::PreloadGlyphs => (InitAction::PreloadGlyphs, Settle::None),
            InitStep::Ready => (InitAction::Nothing, Settle::None),
        }
    }

    /// Step that follows this one
    pub const fn next(self, settings: &InitSettings) -> Self {
        match self {
            InitStep::PowerOn => InitStep::Wake8Bit,
            InitStep::Wake8Bit => InitStep::Enter4Bit,
            InitStep::Enter4Bit => InitStep::FunctionSet { sent: 0 },
            InitStep::FunctionSet { sent } => {
                if sent + 1 < settings.function_set_repeats {
                    InitStep::FunctionSet { sent: sent + 1 }
                } else {
                    InitStep::Clear
                }
            }
            InitStep::Clear => InitStep::EntryMode,
            InitStep::EntryMode => InitStep::DisplayControl,
            InitStep::DisplayControl => InitStep::PreloadGlyphs,
            InitStep::PreloadGlyphs | InitStep::Ready => InitStep::Ready,
        }
    }

    pub const fn is_ready(self) -> bool {
        matches!(self, InitStep::Ready)
    }

    /// Every step from power-on to ready, in order
    pub fn sequence(settings: InitSettings) -> impl Iterator<Item = InitStep> {
        let mut step = Some(Self::FIRST);
        core::iter::from_fn(move || {
            let current = step?;
            step = if current.is_ready() {
                None
            } else {
                Some(current.next(&settings))
            };
            Some(current)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_sequence_order() {
        let steps: heapless::Vec<InitStep, 16> =
            InitStep::sequence(InitSettings::default()).collect();

        assert_eq!(
            &steps[..],
            &[
                InitStep::PowerOn,
                InitStep::Wake8Bit,
                InitStep::Enter4Bit,
                InitStep::FunctionSet { sent: 0 },
                InitStep::FunctionSet { sent: 1 },
                InitStep::Clear,
                InitStep::EntryMode,
                InitStep::DisplayControl,
                InitStep::PreloadGlyphs,
                InitStep::Ready,
            ]
        );
    }

    #[test]
    fn test_single_function_set() {
        let settings = InitSettings {
            function_set_repeats: 1,
            ..Default::default()
        };
        let count = InitStep::sequence(settings)
            .filter(|s| matches!(s, InitStep::FunctionSet { .. }))
            .count();
        assert_eq!(count, 1);
    }

    #[test]
    fn test_zero_repeats_still_sends_once() {
        let settings = InitSettings {
            function_set_repeats: 0,
            ..Default::default()
        };
        let count = InitStep::sequence(settings)
            .filter(|s| matches!(s, InitStep::FunctionSet { .. }))
            .count();
        assert_eq!(count, 1);
    }

    #[test]
    fn test_ready_is_terminal() {
        let settings = InitSettings::default();
        assert_eq!(InitStep::Ready.next(&settings), InitStep::Ready);
        assert!(InitStep::Ready.is_ready());
    }

    #[test]
    fn test_actions() {
        let settings = InitSettings {
            function_set_repeats: 2,
            cursor: CursorMode::Underline,
        };

        assert_eq!(
            InitStep::PowerOn.action(&settings),
            (InitAction::ReleaseLines, Settle::Millis(60))
        );
        assert_eq!(
            InitStep::Wake8Bit.action(&settings),
            (InitAction::Nibble(Nibble::WAKE), Settle::Micros(40))
        );
        assert_eq!(
            InitStep::Clear.action(&settings),
            (InitAction::Command(Command::ClearDisplay), Settle::Millis(2))
        );
        assert_eq!(
            InitStep::DisplayControl.action(&settings),
            (
                InitAction::Command(Command::DisplayControl(CursorMode::Underline)),
                Settle::None
            )
        );
    }
}
