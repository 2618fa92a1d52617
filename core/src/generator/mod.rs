use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

use crate::*;
pub use random::*;

mod random;

pub trait CodeGenerator {
    fn generate(self, config: BoardConfig) -> HiddenCode;
}

/// How a freshly drawn code is reordered before play.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShufflePolicy {
    /// A random number of passes that each swap every position with any position. Not uniform over
    /// permutations; it only obfuscates the draw order.
    Scramble,
    /// A single bounded Fisher-Yates pass, uniform over permutations.
    FisherYates,
}

impl Default for ShufflePolicy {
    fn default() -> Self {
        Self::Scramble
    }
}

/// The sequence of colors the player has to guess. Colors never repeat.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HiddenCode {
    pins: Vec<Color>,
}

impl HiddenCode {
    pub(crate) fn from_colors_unchecked(pins: Vec<Color>) -> Self {
        Self { pins }
    }

    pub fn from_ids(ids: &[u8], config: BoardConfig) -> Result<Self> {
        if ids.len() != usize::from(config.columns) {
            return Err(GameError::InvalidCode);
        }

        let mut pins: Vec<Color> = Vec::with_capacity(ids.len());
        for &id in ids {
            let pin = Color::new(id, config.colors)?;
            if pins.contains(&pin) {
                return Err(GameError::InvalidCode);
            }
            pins.push(pin);
        }

        Ok(Self { pins })
    }

    /// Whether the code can be played on `config`: one in-palette color per column, none repeated.
    pub fn fits(&self, config: BoardConfig) -> bool {
        self.pins.len() == usize::from(config.columns)
            && self.pins.iter().all(|pin| (1..=config.colors).contains(&pin.id()))
            && self
                .pins
                .iter()
                .enumerate()
                .all(|(index, pin)| !self.pins[..index].contains(pin))
    }

    pub fn len(&self) -> usize {
        self.pins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pins.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<Color> {
        self.pins.get(index).copied()
    }

    pub fn contains(&self, color: Color) -> bool {
        self.pins.contains(&color)
    }

    pub fn iter(&self) -> impl Iterator<Item = Color> + '_ {
        self.pins.iter().copied()
    }

    pub fn as_slice(&self) -> &[Color] {
        &self.pins
    }
}

/// Always yields the same code; used for reproducible rounds.
#[derive(Clone, Debug, PartialEq)]
pub struct FixedCodeGenerator {
    code: HiddenCode,
}

impl FixedCodeGenerator {
    pub fn new(code: HiddenCode) -> Self {
        Self { code }
    }
}

impl CodeGenerator for FixedCodeGenerator {
    fn generate(self, _config: BoardConfig) -> HiddenCode {
        self.code
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_ids_rejects_duplicates_and_bad_lengths() {
        let config = BoardConfig::CLASSIC;

        assert_eq!(
            HiddenCode::from_ids(&[1, 2, 3, 4, 1], config),
            Err(GameError::InvalidCode)
        );
        assert_eq!(
            HiddenCode::from_ids(&[1, 2, 3, 4], config),
            Err(GameError::InvalidCode)
        );
        assert_eq!(
            HiddenCode::from_ids(&[1, 2, 3, 4, 9], config),
            Err(GameError::InvalidColor(9))
        );
        assert!(HiddenCode::from_ids(&[8, 7, 6, 5, 4], config).is_ok());
    }

    #[test]
    fn fits_rejects_repeated_colors() {
        let repeated = HiddenCode::from_colors_unchecked(
            [1, 1, 2, 3, 4].into_iter().map(Color::new_unchecked).collect(),
        );
        let distinct = HiddenCode::from_ids(&[5, 1, 2, 3, 4], BoardConfig::CLASSIC).unwrap();

        assert!(!repeated.fits(BoardConfig::CLASSIC));
        assert!(distinct.fits(BoardConfig::CLASSIC));
        assert!(!distinct.fits(BoardConfig::new(4, 12, 8).unwrap()));
        assert!(!distinct.fits(BoardConfig::new_unchecked(5, 12, 4)));
    }

    #[test]
    fn fixed_generator_returns_its_code() {
        let code = HiddenCode::from_ids(&[3, 1, 4, 2, 5], BoardConfig::CLASSIC).unwrap();

        let generated = FixedCodeGenerator::new(code.clone()).generate(BoardConfig::CLASSIC);

        assert_eq!(generated, code);
    }
}
