//! Scroll planning for text wider than the screen

use crate::command::{Command, ShiftDirection};
use crate::types::VISIBLE_COLUMNS;

/// Number of display shifts each way to reveal a line of `length` characters
///
/// Text that fits needs none. Longer text is shifted `length - 15` times,
/// so the last character ends up one cell in from the right edge.
pub const fn shift_count(length: usize) -> usize {
    if length > VISIBLE_COLUMNS as usize {
        length - (VISIBLE_COLUMNS as usize - 1)
    } else {
        0
    }
}

/// Shift commands for a full sweep: out to the end, then back to the start
pub fn sweep(length: usize) -> impl Iterator<Item = Command> {
    let count = shift_count(length);
    let out = core::iter::repeat(Command::Shift(ShiftDirection::Left)).take(count);
    let back = core::iter::repeat(Command::Shift(ShiftDirection::Right)).take(count);
    out.chain(back)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_text_does_not_scroll() {
        assert_eq!(shift_count(0), 0);
        assert_eq!(shift_count(5), 0);
        assert_eq!(shift_count(16), 0);
        assert_eq!(sweep(16).count(), 0);
    }

    #[test]
    fn test_long_text_shift_count() {
        assert_eq!(shift_count(17), 2);
        assert_eq!(shift_count(20), 5);
        assert_eq!(shift_count(40), 25);
    }

    #[test]
    fn test_sweep_goes_out_then_back() {
        let bytes: heapless::Vec<u8, 16> = sweep(20).map(Command::encode).collect();
        assert_eq!(
            &bytes[..],
            &[0x18, 0x18, 0x18, 0x18, 0x18, 0x1C, 0x1C, 0x1C, 0x1C, 0x1C]
        );
    }
}
