use super::*;

/// Purely random placement: `config.mines` distinct cells drawn uniformly without replacement.
///
/// The same seed and config always produce the same board.
#[derive(Clone, Debug, PartialEq)]
pub struct RandomMineGenerator {
    seed: u64,
}

impl RandomMineGenerator {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl MineGenerator for RandomMineGenerator {
    fn generate(self, config: &GameConfig) -> Result<Board> {
        use rand::prelude::*;

        config.validate()?;

        let total_cells = config.total_cells();
        let cols = CellCount::from(config.cols());
        let mines = usize::from(config.mines);

        // partial Fisher-Yates, the first `mines` slots end up as the sample
        let mut rng = SmallRng::seed_from_u64(self.seed);
        let mut cells: Vec<CellCount> = (0..total_cells).collect();
        for i in 0..mines {
            let j = rng.random_range(i..cells.len());
            cells.swap(i, j);
        }

        let mine_coords: Vec<Coord2> = cells[..mines]
            .iter()
            .map(|&index| ((index / cols) as Coord, (index % cols) as Coord))
            .collect();
        log::debug!(
            "Placed {} mines on {:?} with seed {}",
            mine_coords.len(),
            config.size,
            self.seed
        );

        Board::from_mine_coords(config.size, &mine_coords)
    }
}
