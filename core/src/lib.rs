use serde::{Deserialize, Serialize};

pub use board::*;
pub use cell::*;
pub use engine::*;
pub use error::*;
pub use generator::*;
pub use result::*;
pub use types::*;
pub use view::*;

mod board;
mod cell;
mod engine;
mod error;
mod generator;
mod result;
mod types;
mod view;

/// Parameters of a single game.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    /// `(rows, cols)` of the playable area.
    pub size: Coord2,
    pub mines: CellCount,
    /// Seed for mine placement. [`Game::new`] picks one from the clock when absent.
    pub seed: Option<u64>,
    /// Log a [`Summary`] at info level when the game ends.
    pub auto_summarize: bool,
}

impl GameConfig {
    pub fn new(size: Coord2, mines: CellCount) -> Result<Self> {
        let config = Self {
            size,
            mines,
            seed: None,
            auto_summarize: false,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn with_seed(self, seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..self
        }
    }

    pub fn with_auto_summarize(self, auto_summarize: bool) -> Self {
        Self {
            auto_summarize,
            ..self
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.size.0 == 0 || self.size.1 == 0 {
            return Err(GameError::InvalidDimensions);
        }
        if self.mines >= self.total_cells() {
            return Err(GameError::TooManyMines);
        }
        Ok(())
    }

    pub const fn rows(&self) -> Coord {
        self.size.0
    }

    pub const fn cols(&self) -> Coord {
        self.size.1
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.size.0, self.size.1)
    }
}

/// What a successful move did to the game.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    Continue,
    Won,
    Lost,
}

impl MoveOutcome {
    /// Whether this move ended the game
    pub const fn is_final(self) -> bool {
        match self {
            Self::Continue => false,
            Self::Won => true,
            Self::Lost => true,
        }
    }
}
