use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

use crate::{GameError, Result};

/// Single coordinate axis used for board width, height, and positions.
pub type Coord = u8;

/// Count type used for cell totals.
pub type CellCount = u16;

/// Two-dimensional coordinates `(column, row)`.
pub type Coord2 = (Coord, Coord);

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

/// Grids are stored row-major, so `(column, row)` maps to `[row, column]`.
impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.1.into(), self.0.into()]
    }
}

pub const fn mult(a: Coord, b: Coord) -> CellCount {
    let a = a as CellCount;
    let b = b as CellCount;
    a.saturating_mul(b)
}

/// A pin color, identified by `1..=colors`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Color(u8);

impl Color {
    pub const fn new_unchecked(id: u8) -> Self {
        Self(id)
    }

    pub fn new(id: u8, colors: u8) -> Result<Self> {
        if (1..=colors).contains(&id) {
            Ok(Self(id))
        } else {
            Err(GameError::InvalidColor(id))
        }
    }

    pub const fn id(self) -> u8 {
        self.0
    }

    /// Zero-based position of this color in the palette.
    pub const fn palette_index(self) -> usize {
        self.0.saturating_sub(1) as usize
    }
}

/// Colors available to the player, in palette order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    colors: Vec<Color>,
}

impl Palette {
    pub fn new(count: u8) -> Self {
        Self {
            colors: (1..=count).map(Color::new_unchecked).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<Color> {
        self.colors.get(index).copied()
    }

    pub fn first(&self) -> Color {
        self.colors
            .first()
            .copied()
            .unwrap_or(Color::new_unchecked(1))
    }

    pub fn iter(&self) -> impl Iterator<Item = Color> + '_ {
        self.colors.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_ids_are_one_based() {
        assert_eq!(Color::new(0, 8), Err(GameError::InvalidColor(0)));
        assert_eq!(Color::new(9, 8), Err(GameError::InvalidColor(9)));
        assert_eq!(Color::new(8, 8).map(Color::palette_index), Ok(7));
    }

    #[test]
    fn palette_is_ordered_from_one() {
        let palette = Palette::new(8);

        assert_eq!(palette.len(), 8);
        assert_eq!(palette.first(), Color::new_unchecked(1));
        assert_eq!(palette.get(7), Some(Color::new_unchecked(8)));
        assert_eq!(palette.get(8), None);
    }

    #[test]
    fn nd_index_is_row_major() {
        assert_eq!((4, 11).to_nd_index(), [11, 4]);
    }
}
