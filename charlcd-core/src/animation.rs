//! Sprite animation state
//!
//! The sprite slides right-to-left one pixel per frame. State is a plain
//! value: the driver asks for the next one each frame and renders it.

use crate::glyph::{SlotRole, SPRITE_COLUMNS};
use crate::types::{GlyphSlot, Line, SubCellOffset, VISIBLE_COLUMNS};

/// Where the sprite enters and where it wraps
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AnimationBounds {
    /// Column of the first body cell when a pass starts
    pub start: i8,
    /// Last column visited before wrapping back to `start`
    pub min: i8,
}

impl AnimationBounds {
    /// Lowest allowed `min`
    pub const MIN_POS_FLOOR: i8 = -8;
    /// Highest allowed `min`: the trailing blank must land on column 0 so
    /// nothing is left behind when the sprite wraps
    pub const MIN_POS_CEILING: i8 = -(SPRITE_COLUMNS as i8);
    /// Highest allowed `start`: the lead cell is at most one past the edge
    pub const START_CEILING: i8 = VISIBLE_COLUMNS as i8;

    /// Bounds, if the pair is usable
    pub const fn new(start: i8, min: i8) -> Option<Self> {
        if min < Self::MIN_POS_FLOOR
            || min > Self::MIN_POS_CEILING
            || start > Self::START_CEILING
            || start <= min
        {
            None
        } else {
            Some(Self { start, min })
        }
    }
}

impl Default for AnimationBounds {
    fn default() -> Self {
        Self {
            start: VISIBLE_COLUMNS as i8,
            min: -(SPRITE_COLUMNS as i8),
        }
    }
}

/// Position of the sprite
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AnimationState {
    /// Column of the first body cell (may be off screen)
    pub pos: i8,
    /// Sub-cell pixel phase
    pub sprite_offset: SubCellOffset,
}

impl AnimationState {
    /// State at the start of a pass
    pub const fn start(bounds: AnimationBounds) -> Self {
        Self {
            pos: bounds.start,
            sprite_offset: SubCellOffset::ZERO,
        }
    }

    /// State one frame later
    ///
    /// The phase advances every frame; when it wraps to 0 the sprite has
    /// moved one whole cell and `pos` steps left, wrapping from `min` back
    /// to `start`.
    pub fn advance(self, bounds: AnimationBounds) -> Self {
        let (sprite_offset, wrapped) = self.sprite_offset.next();
        let pos = if !wrapped {
            self.pos
        } else if self.pos <= bounds.min {
            bounds.start
        } else {
            self.pos - 1
        };

        Self { pos, sprite_offset }
    }

    /// Whether this frame needs the base glyphs reloaded
    pub const fn is_cell_boundary(self) -> bool {
        self.sprite_offset.is_zero()
    }

    /// Every cell the sprite touches at this position
    pub fn cells(self) -> impl Iterator<Item = SpriteCell> {
        let pos = self.pos as i16;
        [Line::One, Line::Two].into_iter().flat_map(move |line| {
            (-1..=SPRITE_COLUMNS as i16).map(move |dx| SpriteCell {
                line,
                column: pos + dx,
                content: CellContent::at(line, dx),
            })
        })
    }
}

/// What a screen cell shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CellContent {
    Glyph(GlyphSlot),
    /// Erases the cell the sprite just left
    Blank,
}

impl CellContent {
    /// Content at `dx` cells from the first body cell
    fn at(line: Line, dx: i16) -> Self {
        match dx {
            -1 => CellContent::Glyph(SlotRole::Lead { line }.slot()),
            0..=2 => CellContent::Glyph(
                SlotRole::Body {
                    line,
                    column: dx as u8,
                }
                .slot(),
            ),
            _ => CellContent::Blank,
        }
    }

    /// Character code written to DDRAM
    pub const fn char_code(self) -> u8 {
        match self {
            CellContent::Glyph(slot) => slot.char_code(),
            CellContent::Blank => b' ',
        }
    }
}

/// One screen cell touched by the sprite
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SpriteCell {
    pub line: Line,
    /// Screen column, possibly off screen
    pub column: i16,
    pub content: CellContent,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_six_frames_move_one_cell() {
        let bounds = AnimationBounds::default();
        let mut state = AnimationState::start(bounds);
        assert_eq!(state.pos, 16);

        for _ in 0..5 {
            state = state.advance(bounds);
            assert_eq!(state.pos, 16);
            assert!(!state.is_cell_boundary());
        }

        state = state.advance(bounds);
        assert_eq!(state.pos, 15);
        assert_eq!(state.sprite_offset, SubCellOffset::ZERO);
    }

    #[test]
    fn test_wraps_from_min_to_start() {
        let bounds = AnimationBounds::default();
        let mut state = AnimationState {
            pos: bounds.min,
            sprite_offset: SubCellOffset::MAX,
        };

        state = state.advance(bounds);
        assert_eq!(state.pos, 16);
        assert!(state.is_cell_boundary());
    }

    #[test]
    fn test_full_pass_length() {
        let bounds = AnimationBounds::default();
        let start = AnimationState::start(bounds);
        let mut state = start;
        let mut frames = 0u32;

        loop {
            state = state.advance(bounds);
            frames += 1;
            if state == start {
                break;
            }
        }

        // 16 down to -3 inclusive is 20 positions of 6 phases each
        assert_eq!(frames, 20 * 6);
    }

    #[test]
    fn test_bounds_validation() {
        assert!(AnimationBounds::new(16, -3).is_some());
        assert!(AnimationBounds::new(10, -8).is_some());
        // Trailing blank would miss column 0
        assert!(AnimationBounds::new(16, -2).is_none());
        assert!(AnimationBounds::new(17, -3).is_none());
        assert!(AnimationBounds::new(16, -9).is_none());
        assert!(AnimationBounds::new(-4, -3).is_none());
    }

    #[test]
    fn test_cell_layout() {
        let state = AnimationState {
            pos: 5,
            sprite_offset: SubCellOffset::ZERO,
        };
        let cells: heapless::Vec<SpriteCell, 10> = state.cells().collect();
        let codes: heapless::Vec<(i16, u8), 10> =
            cells.iter().map(|c| (c.column, c.content.char_code())).collect();

        assert_eq!(
            &codes[..5],
            &[(4, 6), (5, 0), (6, 1), (7, 2), (8, b' ')]
        );
        assert_eq!(
            &codes[5..],
            &[(4, 7), (5, 3), (6, 4), (7, 5), (8, b' ')]
        );
        assert!(cells[..5].iter().all(|c| c.line == Line::One));
        assert!(cells[5..].iter().all(|c| c.line == Line::Two));
    }
}
