use ndarray::Array2;

use super::*;

/// Uniform random fill. This does not guarantee a puzzle that can be solved
/// without guessing; it mirrors the naive coin-flip approach a better
/// generator should eventually replace.
#[derive(Clone, Debug, PartialEq)]
pub struct RandomSolutionGenerator {
    seed: u64,
    fill: f64,
}

impl RandomSolutionGenerator {
    pub const DEFAULT_FILL: f64 = 0.5;

    pub fn new(seed: u64) -> Self {
        Self::with_fill(seed, Self::DEFAULT_FILL)
    }

    pub fn with_fill(seed: u64, fill: f64) -> Self {
        if !(0.0..=1.0).contains(&fill) {
            log::warn!("Fill ratio {} out of range, clamping", fill);
        }
        Self {
            seed,
            fill: fill.clamp(0.0, 1.0),
        }
    }
}

impl SolutionGenerator for RandomSolutionGenerator {
    fn generate(self, config: GameConfig) -> Solution {
        use rand::prelude::*;

        let mut rng = SmallRng::seed_from_u64(self.seed);
        let mask: Array2<bool> =
            Array2::from_shape_simple_fn(config.size.to_nd_index(), || rng.random_bool(self.fill));
        Solution::from_mask(mask)
    }
}
