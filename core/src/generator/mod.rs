use crate::*;
pub use random::*;

mod random;

/// Pluggable source of hidden solutions. The board only demands the declared
/// dimensions; whether the result is solvable without guessing is the
/// generator's problem.
pub trait SolutionGenerator {
    fn generate(self, config: GameConfig) -> Solution;
}
