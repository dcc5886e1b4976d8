use crate::*;
pub use fixed::*;
pub use random::*;

mod fixed;
mod random;

/// Produces the mine layout of a new game.
pub trait MineGenerator {
    fn generate(self, config: &GameConfig) -> Result<Board>;
}
