use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// What a renderer draws for one cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellView {
    Hidden,
    Flagged,
    Shown(u8),
    /// The mine revealed by the losing move.
    Detonated,
}

/// Snapshot of a game in public coordinates, for renderers and bots.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoardView {
    pub size: Coord2,
    pub state: GameState,
    pub last_played: Option<Coord2>,
    pub cells: Array2<CellView>,
    /// Mine positions, for renderers that uncover the board once the game is over.
    pub mines: Array2<bool>,
}

impl BoardView {
    pub fn from_game(game: &Game) -> Self {
        let board = game.board();
        let size = board.size();
        let dim = (usize::from(size.0), usize::from(size.1));
        let mut cells = Array2::from_elem(dim, CellView::Hidden);
        let mut mines = Array2::from_elem(dim, false);

        for coords in board.iter_coords() {
            let cell = board[coords];
            let index = (usize::from(coords.0), usize::from(coords.1));
            mines[index] = cell.is_mine();
            cells[index] = match (cell.state(), cell.adjacent_mines()) {
                (CellState::Hidden, _) => CellView::Hidden,
                (CellState::Flagged, _) => CellView::Flagged,
                (CellState::Shown, Some(count)) => CellView::Shown(count),
                (CellState::Shown, None) => CellView::Detonated,
            };
        }

        Self {
            size,
            state: game.state(),
            last_played: game.last_played(),
            cells,
            mines,
        }
    }

    pub fn cell(&self, (row, col): Coord2) -> CellView {
        self.cells[(usize::from(row), usize::from(col))]
    }
}
