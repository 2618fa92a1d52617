use core::ops::Range;

use rand::prelude::*;

use super::*;

/// Range of scramble passes applied by [`ShufflePolicy::Scramble`].
pub const SCRAMBLE_PASSES: Range<u32> = 100..1100;

/// Draws each slot uniformly from the palette, re-drawing colors already used, then shuffles the result.
#[derive(Clone, Debug, PartialEq)]
pub struct RandomCodeGenerator {
    seed: u64,
    shuffle: ShufflePolicy,
}

impl RandomCodeGenerator {
    pub fn new(seed: u64, shuffle: ShufflePolicy) -> Self {
        Self { seed, shuffle }
    }
}

impl CodeGenerator for RandomCodeGenerator {
    fn generate(self, config: BoardConfig) -> HiddenCode {
        let mut length = usize::from(config.columns);
        if config.colors < config.columns {
            log::warn!(
                "Palette of {} cannot fill {} distinct slots, code shortened",
                config.colors,
                config.columns
            );
            length = usize::from(config.colors);
        }

        let mut rng = SmallRng::seed_from_u64(self.seed);
        let mut pins: Vec<Color> = Vec::with_capacity(length);
        while pins.len() < length {
            let pin = Color::new_unchecked(rng.gen_range(1..=config.colors));
            if !pins.contains(&pin) {
                pins.push(pin);
            }
        }

        match self.shuffle {
            ShufflePolicy::Scramble => {
                let passes = rng.gen_range(SCRAMBLE_PASSES);
                for _ in 0..passes {
                    scramble_pass(&mut pins, &mut rng);
                }
                log::trace!("scrambled hidden code with {} passes", passes);
            }
            ShufflePolicy::FisherYates => pins.shuffle(&mut rng),
        }

        HiddenCode::from_colors_unchecked(pins)
    }
}

/// Swaps every position with a uniformly random position anywhere in the slice.
fn scramble_pass<R: Rng + ?Sized>(pins: &mut [Color], rng: &mut R) {
    let len = pins.len();
    for index in 0..len {
        let dest = rng.gen_range(0..len);
        pins.swap(index, dest);
    }
}
