use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

use crate::*;

/// Feedback for a single column of a validated row.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum FeedbackPin {
    None,
    /// Right color, wrong position.
    White,
    /// Right color, right position.
    Black,
}

impl Default for FeedbackPin {
    fn default() -> Self {
        Self::None
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowScore {
    pub pins: Vec<FeedbackPin>,
    pub matched: Coord,
    code_len: usize,
}

impl RowScore {
    pub fn is_solved(&self) -> bool {
        self.code_len > 0 && usize::from(self.matched) == self.code_len
    }

    pub fn count(&self, kind: FeedbackPin) -> usize {
        self.pins.iter().filter(|&&pin| pin == kind).count()
    }
}

/// Scores `guess` against `code`, one pin per column.
///
/// A guessed color that is not an exact match is reported white when it appears anywhere in the code. Occurrences
/// are not consumed, which is only correct because hidden codes never repeat a color.
pub fn score_row(code: &HiddenCode, guess: &[Color]) -> RowScore {
    let mut matched: Coord = 0;
    let pins = guess
        .iter()
        .zip(code.iter())
        .map(|(&pin, target)| {
            if pin == target {
                matched += 1;
                FeedbackPin::Black
            } else if code.contains(pin) {
                FeedbackPin::White
            } else {
                FeedbackPin::None
            }
        })
        .collect();

    RowScore {
        pins,
        matched,
        code_len: code.len(),
    }
}
