use alloc::vec::Vec;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Placed pins and the feedback pins computed for each validated row.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Board {
    placements: Array2<Option<Color>>,
    feedback: Array2<FeedbackPin>,
}

impl Board {
    pub fn new(config: BoardConfig) -> Self {
        let shape = (usize::from(config.rows), usize::from(config.columns));
        Self {
            placements: Array2::from_elem(shape, None),
            feedback: Array2::default(shape),
        }
    }

    pub fn size(&self) -> Coord2 {
        let (rows, columns) = self.placements.dim();
        (columns as Coord, rows as Coord)
    }

    pub fn columns(&self) -> Coord {
        self.size().0
    }

    pub fn rows(&self) -> Coord {
        self.size().1
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        let (columns, rows) = self.size();
        if coords.0 < columns && coords.1 < rows {
            Ok(coords)
        } else {
            Err(GameError::InvalidCoords)
        }
    }

    pub fn pin_at(&self, coords: Coord2) -> Option<Color> {
        self.placements
            .get(coords.to_nd_index())
            .copied()
            .flatten()
    }

    pub fn feedback_at(&self, coords: Coord2) -> FeedbackPin {
        self.feedback
            .get(coords.to_nd_index())
            .copied()
            .unwrap_or_default()
    }

    /// Pins of `row`, empty when the row is out of bounds.
    pub fn row(&self, row: Coord) -> impl Iterator<Item = Option<Color>> + '_ {
        self.placements
            .outer_iter()
            .nth(row.into())
            .into_iter()
            .flat_map(|pins| pins.into_iter().copied())
    }

    pub fn feedback_row(&self, row: Coord) -> impl Iterator<Item = FeedbackPin> + '_ {
        self.feedback
            .outer_iter()
            .nth(row.into())
            .into_iter()
            .flat_map(|pins| pins.into_iter().copied())
    }

    pub fn row_contains(&self, row: Coord, color: Color) -> bool {
        self.row(row).any(|pin| pin == Some(color))
    }

    pub fn is_row_full(&self, row: Coord) -> bool {
        row < self.rows() && self.row(row).all(|pin| pin.is_some())
    }

    /// The guess in `row`, once every column of it holds a pin.
    pub fn row_guess(&self, row: Coord) -> Option<Vec<Color>> {
        if row >= self.rows() {
            return None;
        }
        self.row(row).collect()
    }

    /// Writes `color` at `coords` unless the cell is taken, the color already appears in that row, or the
    /// coordinates are off the board. Rejected placements leave the board untouched.
    pub fn place(&mut self, coords: Coord2, color: Color) -> PlaceOutcome {
        let Ok(coords) = self.validate_coords(coords) else {
            return PlaceOutcome::NoChange;
        };

        if self.pin_at(coords).is_some() || self.row_contains(coords.1, color) {
            return PlaceOutcome::NoChange;
        }

        self.placements[coords.to_nd_index()] = Some(color);
        PlaceOutcome::Placed
    }

    pub(crate) fn set_feedback_row(&mut self, row: Coord, pins: &[FeedbackPin]) {
        if row >= self.rows() {
            return;
        }
        for (cell, &pin) in self.feedback.row_mut(row.into()).iter_mut().zip(pins) {
            *cell = pin;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn color(id: u8) -> Color {
        Color::new_unchecked(id)
    }

    #[test]
    fn new_board_is_empty() {
        let board = Board::new(BoardConfig::CLASSIC);

        assert_eq!(board.size(), (5, 12));
        assert!(board.row(11).all(|pin| pin.is_none()));
        assert!(board.feedback_row(0).all(|pin| pin == FeedbackPin::None));
        assert!(!board.is_row_full(11));
    }

    #[test]
    fn place_sets_exactly_one_cell() {
        let mut board = Board::new(BoardConfig::CLASSIC);
        let before = board.clone();

        assert_eq!(board.place((2, 11), color(4)), PlaceOutcome::Placed);

        assert_eq!(board.pin_at((2, 11)), Some(color(4)));
        let changed = (0..12)
            .flat_map(|row| (0..5).map(move |column| (column, row)))
            .filter(|&coords| board.pin_at(coords) != before.pin_at(coords))
            .count();
        assert_eq!(changed, 1);
    }

    #[test]
    fn place_rejects_out_of_bounds() {
        let mut board = Board::new(BoardConfig::CLASSIC);
        let before = board.clone();

        assert_eq!(board.place((5, 0), color(1)), PlaceOutcome::NoChange);
        assert_eq!(board.place((0, 12), color(1)), PlaceOutcome::NoChange);
        assert_eq!(board, before);
    }

    #[test]
    fn place_rejects_color_already_in_row() {
        let mut board = Board::new(BoardConfig::CLASSIC);
        board.place((0, 11), color(3));
        let before = board.clone();

        assert_eq!(board.place((1, 11), color(3)), PlaceOutcome::NoChange);
        assert_eq!(board, before);

        // other rows are independent
        assert_eq!(board.place((1, 10), color(3)), PlaceOutcome::Placed);
    }

    #[test]
    fn place_never_overwrites() {
        let mut board = Board::new(BoardConfig::CLASSIC);
        board.place((0, 11), color(3));
        let before = board.clone();

        assert_eq!(board.place((0, 11), color(5)), PlaceOutcome::NoChange);
        assert_eq!(board, before);
    }

    #[test]
    fn row_guess_requires_full_row() {
        let mut board = Board::new(BoardConfig::CLASSIC);
        for column in 0..4 {
            board.place((column, 11), color(column + 1));
        }
        assert_eq!(board.row_guess(11), None);

        board.place((4, 11), color(8));
        assert!(board.is_row_full(11));
        assert_eq!(
            board.row_guess(11),
            Some([1, 2, 3, 4, 8].map(color).to_vec())
        );
        assert_eq!(board.row_guess(12), None);
    }

    #[test]
    fn board_serializes_as_nested_arrays() {
        let mut board = Board::new(BoardConfig::new(2, 1, 2).unwrap());
        board.place((1, 0), color(2));

        let json = serde_json::to_value(&board).unwrap();

        assert_eq!(json["placements"]["dim"], serde_json::json!([1, 2]));
        assert_eq!(json["placements"]["data"], serde_json::json!([null, 2]));
    }
}
