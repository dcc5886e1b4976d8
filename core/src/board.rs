use core::ops::Index;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Playable grid surrounded by a one-cell ring of pre-revealed border cells.
///
/// The ring lets every playable position look at its 8 neighbors without bounds checks, and lets
/// row sweeps stop on the [`BORDER`] count instead of comparing against the board edges.
/// A deserialized board is not checked for a valid border or consistent clues.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Board {
    cells: Array2<Cell>,
    size: Coord2,
    mine_count: CellCount,
}

impl Board {
    fn empty(size: Coord2) -> Result<Self> {
        if size.0 == 0 || size.1 == 0 {
            return Err(GameError::InvalidDimensions);
        }

        let dim = (usize::from(size.0) + 2, usize::from(size.1) + 2);
        let cells = Array2::from_shape_fn(dim, |(row, col)| {
            if row == 0 || col == 0 || row == dim.0 - 1 || col == dim.1 - 1 {
                Cell::border()
            } else {
                Cell::default()
            }
        });

        Ok(Self {
            cells,
            size,
            mine_count: 0,
        })
    }

    /// Builds a board with mines at `mine_coords` and computes every clue.
    ///
    /// Duplicate coordinates count once. At least one cell must stay safe.
    pub fn from_mine_coords(size: Coord2, mine_coords: &[Coord2]) -> Result<Self> {
        let mut board = Self::empty(size)?;

        for &coords in mine_coords {
            let pos = board.validate_coords(coords)?.to_grid_pos();
            let cell = &mut board.cells[pos];
            if !cell.mine {
                cell.mine = true;
                board.mine_count += 1;
            }
        }

        if board.mine_count >= board.total_cells() {
            return Err(GameError::TooManyMines);
        }

        board.compute_clues();
        Ok(board)
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        if coords.0 < self.size.0 && coords.1 < self.size.1 {
            Ok(coords)
        } else {
            Err(GameError::InvalidCoords)
        }
    }

    /// `(rows, cols)` of the playable area.
    pub fn size(&self) -> Coord2 {
        self.size
    }

    pub fn rows(&self) -> Coord {
        self.size.0
    }

    pub fn cols(&self) -> Coord {
        self.size.1
    }

    pub fn total_cells(&self) -> CellCount {
        mult(self.size.0, self.size.1)
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    pub fn safe_cell_count(&self) -> CellCount {
        self.total_cells() - self.mine_count
    }

    pub fn contains_mine(&self, coords: Coord2) -> bool {
        self[coords].mine
    }

    /// Playable coordinates in row-major order.
    pub fn iter_coords(&self) -> impl Iterator<Item = Coord2> + use<> {
        let (rows, cols) = self.size;
        (0..rows).flat_map(move |row| (0..cols).map(move |col| (row, col)))
    }

    pub fn mine_coords(&self) -> impl Iterator<Item = Coord2> + '_ {
        self.iter_coords().filter(|&coords| self[coords].mine)
    }

    /// In-bounds neighbors of `coords`.
    pub fn neighbors(&self, coords: Coord2) -> NeighborIter {
        NeighborIter::new(coords, self.size)
    }

    /// Full scan: every safe cell is shown and every mine is flagged.
    pub fn is_resolved(&self) -> bool {
        self.iter_coords().all(|coords| {
            let cell = self[coords];
            if cell.mine { cell.flagged } else { cell.shown }
        })
    }

    /// Moves the mine at `from` onto the first safe cell in row-major order.
    ///
    /// Only the clues around the two affected cells are recomputed. Returns the destination, or
    /// `None` when `from` holds no mine.
    pub(crate) fn relocate_mine(&mut self, from: Coord2) -> Option<Coord2> {
        let from_pos = from.to_grid_pos();
        if !self.cells[from_pos].mine {
            return None;
        }

        let to = self.iter_coords().find(|&coords| !self[coords].mine)?;
        let to_pos = to.to_grid_pos();

        self.cells[from_pos].mine = false;
        self.cells[to_pos].mine = true;

        for pos in [from_pos, to_pos] {
            self.refresh_clue(pos);
            for neighbor in grid_neighbors(pos) {
                self.refresh_clue(neighbor);
            }
        }

        Some(to)
    }

    pub(crate) fn at(&self, pos: Pos) -> Cell {
        self.cells[pos]
    }

    pub(crate) fn at_mut(&mut self, pos: Pos) -> &mut Cell {
        &mut self.cells[pos]
    }

    fn compute_clues(&mut self) {
        for coords in self.iter_coords() {
            self.refresh_clue(coords.to_grid_pos());
        }
    }

    fn refresh_clue(&mut self, pos: Pos) {
        let cell = self.cells[pos];
        if cell.is_border() {
            return;
        }
        let adjacent = if cell.mine {
            0
        } else {
            self.count_adjacent_mines(pos)
        };
        self.cells[pos].adjacent = adjacent;
    }

    fn count_adjacent_mines(&self, pos: Pos) -> u8 {
        grid_neighbors(pos)
            .filter(|&neighbor| self.cells[neighbor].mine)
            .count() as u8
    }
}

impl Index<Coord2> for Board {
    type Output = Cell;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.cells[coords.to_grid_pos()]
    }
}
