#![no_std]

extern crate alloc;

use serde::{Deserialize, Serialize};

pub use board::*;
pub use engine::*;
pub use error::*;
pub use feedback::*;
pub use generator::*;
pub use types::*;

mod board;
mod engine;
mod error;
mod feedback;
mod generator;
mod types;

/// Board dimensions and palette size for one game.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardConfig {
    /// Code length, also the number of pins per row.
    pub columns: Coord,
    /// Number of guess attempts.
    pub rows: Coord,
    /// Number of distinct pin colors in the palette.
    pub colors: u8,
}

impl BoardConfig {
    pub const CLASSIC: Self = Self::new_unchecked(5, 12, 8);

    pub const fn new_unchecked(columns: Coord, rows: Coord, colors: u8) -> Self {
        Self {
            columns,
            rows,
            colors,
        }
    }

    /// The hidden code never repeats a color, so the palette must be at least as wide as a row.
    pub fn new(columns: Coord, rows: Coord, colors: u8) -> Result<Self> {
        if columns == 0 || rows == 0 || colors < columns {
            return Err(GameError::InvalidConfig);
        }
        Ok(Self::new_unchecked(columns, rows, colors))
    }

    pub const fn size(&self) -> Coord2 {
        (self.columns, self.rows)
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.columns, self.rows)
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self::CLASSIC
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PlaceOutcome {
    NoChange,
    Placed,
}

impl PlaceOutcome {
    pub const fn has_update(self) -> bool {
        match self {
            Self::NoChange => false,
            Self::Placed => true,
        }
    }
}
