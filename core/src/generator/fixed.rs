use super::*;

/// Places mines at explicit coordinates, for reproducing a known board.
#[derive(Clone, Debug, PartialEq)]
pub struct FixedMineGenerator {
    mines: Vec<Coord2>,
}

impl FixedMineGenerator {
    pub fn new(mines: impl Into<Vec<Coord2>>) -> Self {
        Self {
            mines: mines.into(),
        }
    }
}

impl MineGenerator for FixedMineGenerator {
    fn generate(self, config: &GameConfig) -> Result<Board> {
        config.validate()?;

        let board = Board::from_mine_coords(config.size, &self.mines)?;
        if board.mine_count() != config.mines {
            return Err(GameError::MineLayoutMismatch);
        }

        Ok(board)
    }
}
