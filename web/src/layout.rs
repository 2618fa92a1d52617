//! Screen geometry of the board and the sprite atlas regions it is drawn from.
//!
//! Everything is in logical pixels of the unscaled canvas.

use mastermind_core::{BoardConfig, Color, Coord, FeedbackPin};

pub(crate) const WIDTH: u32 = 160;
pub(crate) const HEIGHT: u32 = 176;

const PIN_SIZE: f64 = 8.0;
const FEEDBACK_PIN_SIZE: f64 = 4.0;
const ROW_PITCH: f64 = 10.0;
const COLUMN_PITCH: f64 = PIN_SIZE + 4.0;
const FEEDBACK_PITCH: f64 = FEEDBACK_PIN_SIZE + 4.0;
const PALETTE_PITCH: f64 = PIN_SIZE + 2.0;

const BOARD_X: f64 = 64.0;
const BOARD_Y: f64 = 24.0;
const FEEDBACK_X: f64 = 16.0;
const PALETTE_X: f64 = 54.0;
const PALETTE_Y: f64 = 158.0;
const CODE_Y: f64 = 12.0;

#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub(crate) const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Edges are inclusive on both sides.
    pub(crate) fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.x && x <= self.x + self.width && y >= self.y && y <= self.y + self.height
    }

    #[cfg(test)]
    pub(crate) fn center(&self) -> (f64, f64) {
        (self.x + self.width / 2.0, self.y + self.height / 2.0)
    }
}

/// Source region inside the sprite atlas.
#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) struct Sprite {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Sprite {
    const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    const fn square(x: f64, y: f64, size: f64) -> Self {
        Self::new(x, y, size, size)
    }

    /// Colored pin, `None` being the empty hole.
    pub(crate) fn pin(color: Option<Color>) -> Self {
        let index = color.map_or(0, Color::id);
        Self::square(f64::from(index) * PIN_SIZE, 0.0, PIN_SIZE)
    }

    pub(crate) fn pin_highlighted(color: Color) -> Self {
        Self::square(f64::from(color.id()) * PIN_SIZE, 16.0, PIN_SIZE)
    }

    pub(crate) fn feedback(pin: FeedbackPin) -> Self {
        let index = match pin {
            FeedbackPin::None => 0.0,
            FeedbackPin::White => 1.0,
            FeedbackPin::Black => 2.0,
        };
        Self::square(72.0 + index * FEEDBACK_PIN_SIZE, 0.0, FEEDBACK_PIN_SIZE)
    }

    /// Digits are stored from "1" upwards.
    pub(crate) fn number(index: Coord) -> Self {
        Self::new(f64::from(index) * 8.0, 24.0, 8.0, 5.0)
    }

    pub(crate) const ACTIVE_SLOT: Self = Self::square(88.0, 0.0, PIN_SIZE);
    pub(crate) const FEEDBACK_FRAME: Self = Self::new(96.0, 0.0, 40.0, 8.0);
    pub(crate) const ROW_FRAME: Self = Self::new(96.0, 8.0, 59.0, 11.0);
    pub(crate) const PALETTE_FRAME: Self = Self::new(96.0, 19.0, 81.0, 11.0);
    pub(crate) const RESTART_BUTTON: Self = Self::new(160.0, 0.0, 31.0, 16.0);
}

/// Where each part of a board with the given dimensions goes on screen.
#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) struct BoardLayout {
    columns: Coord,
    rows: Coord,
}

impl BoardLayout {
    pub(crate) fn new(config: BoardConfig) -> Self {
        Self {
            columns: config.columns,
            rows: config.rows,
        }
    }

    fn row_y(row: Coord) -> f64 {
        BOARD_Y + f64::from(row) * ROW_PITCH
    }

    pub(crate) fn cell(&self, column: Coord, row: Coord) -> Rect {
        Rect::new(
            BOARD_X + f64::from(column) * COLUMN_PITCH,
            Self::row_y(row),
            PIN_SIZE,
            PIN_SIZE,
        )
    }

    pub(crate) fn feedback_pin(&self, column: Coord, row: Coord) -> Rect {
        Rect::new(
            FEEDBACK_X + f64::from(column) * FEEDBACK_PITCH,
            Self::row_y(row) + 2.0,
            FEEDBACK_PIN_SIZE,
            FEEDBACK_PIN_SIZE,
        )
    }

    /// Row labels count attempts from the bottom.
    pub(crate) fn row_label(&self, row: Coord) -> (Rect, Sprite) {
        let sprite = Sprite::number(self.rows.saturating_sub(1).saturating_sub(row));
        let rect = Rect::new(FEEDBACK_X - 12.0, Self::row_y(row) + 2.0, 8.0, 5.0);
        (rect, sprite)
    }

    pub(crate) fn column_label(&self, column: Coord) -> (Rect, Sprite) {
        let sprite = Sprite::number(self.columns.saturating_sub(1).saturating_sub(column));
        let rect = Rect::new(
            BOARD_X + 2.0 + f64::from(column) * COLUMN_PITCH,
            Self::row_y(self.rows) + 2.0,
            8.0,
            5.0,
        );
        (rect, sprite)
    }

    pub(crate) fn feedback_frame(&self, row: Coord) -> Rect {
        let sprite = Sprite::FEEDBACK_FRAME;
        Rect::new(FEEDBACK_X - 2.0, Self::row_y(row), sprite.width, sprite.height)
    }

    pub(crate) fn row_frame(&self, row: Coord) -> Rect {
        let sprite = Sprite::ROW_FRAME;
        Rect::new(BOARD_X - 2.0, Self::row_y(row) - 2.0, sprite.width, sprite.height)
    }

    pub(crate) fn palette_swatch(&self, index: usize) -> Rect {
        Rect::new(
            PALETTE_X + index as f64 * PALETTE_PITCH,
            PALETTE_Y,
            PIN_SIZE,
            PIN_SIZE,
        )
    }

    pub(crate) fn palette_frame(&self) -> Rect {
        let sprite = Sprite::PALETTE_FRAME;
        Rect::new(PALETTE_X - 2.0, PALETTE_Y - 2.0, sprite.width, sprite.height)
    }

    pub(crate) fn code_pin(&self, index: usize) -> Rect {
        Rect::new(BOARD_X + index as f64 * COLUMN_PITCH, CODE_Y, PIN_SIZE, PIN_SIZE)
    }

    pub(crate) fn restart_button(&self) -> Rect {
        let sprite = Sprite::RESTART_BUTTON;
        Rect::new(14.0, 154.0, sprite.width, sprite.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classic_board_fits_the_canvas() {
        let layout = BoardLayout::new(BoardConfig::CLASSIC);
        let last = layout.cell(4, 11);
        let (label, _) = layout.column_label(4);

        assert_eq!((last.x, last.y), (112.0, 134.0));
        assert!(label.y + label.height <= f64::from(HEIGHT));
        assert!(layout.palette_frame().x + layout.palette_frame().width <= f64::from(WIDTH));
    }

    #[test]
    fn cells_do_not_overlap_neighbors() {
        let layout = BoardLayout::new(BoardConfig::CLASSIC);
        let (x, y) = layout.cell(1, 5).center();

        assert!(layout.cell(1, 5).contains(x, y));
        assert!(!layout.cell(0, 5).contains(x, y));
        assert!(!layout.cell(1, 4).contains(x, y));
    }

    #[test]
    fn labels_count_from_the_bottom() {
        let layout = BoardLayout::new(BoardConfig::CLASSIC);

        assert_eq!(layout.row_label(11).1, Sprite::number(0));
        assert_eq!(layout.row_label(0).1, Sprite::number(11));
        assert_eq!(layout.column_label(0).1, Sprite::number(4));
    }

    #[test]
    fn sprites_index_the_atlas_strip() {
        assert_eq!(Sprite::pin(None).x, 0.0);
        assert_eq!(Sprite::pin(Some(Color::new_unchecked(3))).x, 24.0);
        assert_eq!(Sprite::pin_highlighted(Color::new_unchecked(3)).y, 16.0);
        assert_eq!(Sprite::feedback(FeedbackPin::Black).x, 80.0);
    }
}
