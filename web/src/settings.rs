use clap::Parser;
use mastermind_core::{CodeSource, ShufflePolicy};

use crate::renderer::CanvasRenderer;

/// Options read from the page's location hash, e.g. `#--seed=42&-vv`.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub(crate) struct Args {
    /// What log level to use
    #[command(flatten)]
    pub verbose: clap_verbosity_flag::Verbosity,

    /// Force a seed instead of random
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Shuffle hidden codes with a uniform Fisher-Yates pass
    #[arg(long)]
    pub uniform_shuffle: bool,

    /// Fixed pixel scale instead of fitting the window width
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..=CanvasRenderer::MAX_SCALE as i64))]
    pub scale: Option<u32>,

    /// Sprite atlas location
    #[arg(long, default_value = "/assets/img/spriteatlas.png")]
    pub atlas: String,
}

impl Args {
    pub(crate) fn code_source(&self) -> CodeSource {
        CodeSource::Random(if self.uniform_shuffle {
            ShufflePolicy::FisherYates
        } else {
            ShufflePolicy::Scramble
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(hash: &str) -> Args {
        Args::try_parse_from(hash.split(['#', '&'])).unwrap()
    }

    #[test]
    fn empty_hash_uses_defaults() {
        let args = parse("");

        assert_eq!(args.seed, None);
        assert_eq!(args.scale, None);
        assert_eq!(args.atlas, "/assets/img/spriteatlas.png");
        assert_eq!(
            args.code_source(),
            CodeSource::Random(ShufflePolicy::Scramble)
        );
    }

    #[test]
    fn hash_options_are_split_on_ampersand() {
        let args = parse("#--seed=42&--uniform-shuffle&--scale=3");

        assert_eq!(args.seed, Some(42));
        assert_eq!(args.scale, Some(3));
        assert_eq!(
            args.code_source(),
            CodeSource::Random(ShufflePolicy::FisherYates)
        );
    }

    #[test]
    fn scale_is_bounded() {
        assert!(Args::try_parse_from("#--scale=13".split(['#', '&'])).is_err());
        assert!(Args::try_parse_from("#--scale=0".split(['#', '&'])).is_err());
    }
}
