use chrono::{DateTime, Utc};
use core::time::Duration;
use hashbrown::HashSet;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::*;

/// Valid transitions:
/// - InProgress -> Won
/// - InProgress -> Lost
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameState {
    InProgress,
    Won,
    Lost,
}

impl GameState {
    /// Indicates the game has ended and no moves can be made anymore
    pub const fn is_final(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::InProgress
    }
}

impl From<Outcome> for GameState {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Won => Self::Won,
            Outcome::Lost => Self::Lost,
        }
    }
}

/// Represents a game from start to finish
///
/// A deserialized game is taken as is; its config and board are not validated again.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Game {
    config: GameConfig,
    board: Board,
    valid_plays: BTreeSet<Coord2>,
    shown: BTreeSet<Coord2>,
    flagged: BTreeSet<Coord2>,
    state: GameState,
    reveal_count: CellCount,
    last_played: Option<Coord2>,
    relocation: Option<(Coord2, Coord2)>,
    started_at: Option<DateTime<Utc>>,
    stopped_at: Option<DateTime<Utc>>,
    result: Option<GameResult>,
}

impl Game {
    /// Random game. Without a configured seed one is taken from the clock and recorded in the
    /// config, so the board can be reproduced later.
    pub fn new(config: GameConfig) -> Result<Self> {
        let seed = config.seed.unwrap_or_else(clock_seed);
        Self::with_generator(config.with_seed(seed), RandomMineGenerator::new(seed))
    }

    pub fn with_generator(config: GameConfig, generator: impl MineGenerator) -> Result<Self> {
        config.validate()?;
        let board = generator.generate(&config)?;
        debug_assert_eq!(board.size(), config.size);

        log::debug!(
            "New game {:?} with {} mines, seed {:?}",
            config.size,
            board.mine_count(),
            config.seed
        );

        Ok(Self {
            config,
            valid_plays: board.iter_coords().collect(),
            board,
            shown: BTreeSet::new(),
            flagged: BTreeSet::new(),
            state: Default::default(),
            reveal_count: 0,
            last_played: None,
            relocation: None,
            started_at: None,
            stopped_at: None,
            result: None,
        })
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn is_finished(&self) -> bool {
        self.state.is_final()
    }

    pub fn size(&self) -> Coord2 {
        self.board.size()
    }

    pub fn total_mines(&self) -> CellCount {
        self.board.mine_count()
    }

    pub fn seed(&self) -> Option<u64> {
        self.config.seed
    }

    pub fn cell_at(&self, coords: Coord2) -> Result<Cell> {
        let coords = self.board.validate_coords(coords)?;
        Ok(self.board[coords])
    }

    pub fn neighbors(&self, coords: Coord2) -> Result<NeighborIter> {
        let coords = self.board.validate_coords(coords)?;
        Ok(self.board.neighbors(coords))
    }

    /// Cells that are neither shown nor flagged.
    pub fn valid_plays(&self) -> &BTreeSet<Coord2> {
        &self.valid_plays
    }

    pub fn shown_cells(&self) -> &BTreeSet<Coord2> {
        &self.shown
    }

    pub fn flagged_cells(&self) -> &BTreeSet<Coord2> {
        &self.flagged
    }

    pub fn last_played(&self) -> Option<Coord2> {
        self.last_played
    }

    /// Where the mine under the first reveal was moved, as `(from, to)`.
    pub fn relocation(&self) -> Option<(Coord2, Coord2)> {
        self.relocation
    }

    pub fn reveal_count(&self) -> CellCount {
        self.reveal_count
    }

    pub fn flag_count(&self) -> CellCount {
        self.flagged.len() as CellCount
    }

    /// How many mines have not been flagged yet
    pub fn mines_left(&self) -> isize {
        (self.board.mine_count() as isize) - (self.flagged.len() as isize)
    }

    pub fn result(&self) -> Option<&GameResult> {
        self.result.as_ref()
    }

    /// Time since the first move, frozen once the game ends. Zero before the first move.
    pub fn elapsed(&self) -> Duration {
        match self.started_at {
            Some(started_at) => (self.stopped_at.unwrap_or_else(Utc::now) - started_at)
                .to_std()
                .unwrap_or_default(),
            None => Duration::ZERO,
        }
    }

    pub fn summarize(&self) -> Summary {
        let total = self.board.total_cells();
        let shown = self.shown.len() as CellCount;
        let flagged = self.flagged.len() as CellCount;
        Summary {
            state: self.state,
            total,
            shown,
            flagged,
            hidden: total - shown - flagged,
            elapsed: self.elapsed(),
        }
    }

    /// Reveal a cell, flood-filling from it when it has no adjacent mines.
    ///
    /// The first reveal of a game never hits a mine: a mine under it is moved away first.
    pub fn reveal(&mut self, coords: Coord2) -> Result<MoveOutcome> {
        self.check_not_finished()?;
        let coords = self.board.validate_coords(coords)?;

        let cell = self.board[coords];
        if cell.is_shown() {
            return Err(GameError::AlreadyRevealed);
        }
        if cell.is_flagged() {
            return Err(GameError::AlreadyFlagged);
        }

        self.mark_started();
        self.last_played = Some(coords);
        let first_reveal = self.reveal_count == 0;
        self.reveal_count += 1;

        let pos = coords.to_grid_pos();
        if cell.is_mine() && !(first_reveal && self.relocate_first_mine(coords)) {
            self.show(pos);
            log::debug!("Hit mine at {:?}", coords);
            self.finish(Outcome::Lost, coords);
            return Ok(MoveOutcome::Lost);
        }

        self.show(pos);
        log::debug!(
            "Revealed {:?}, adjacent mines: {:?}",
            coords,
            self.board[coords].adjacent_mines()
        );
        if self.board.at(pos).is_open_zero() {
            self.flood_fill(pos);
        }

        Ok(self.check_won(coords))
    }

    /// Mark a hidden cell as a suspected mine. Flags are permanent.
    pub fn flag(&mut self, coords: Coord2) -> Result<MoveOutcome> {
        self.check_not_finished()?;
        let coords = self.board.validate_coords(coords)?;

        let cell = self.board[coords];
        if cell.is_shown() {
            return Err(GameError::AlreadyRevealed);
        }
        if cell.is_flagged() {
            return Err(GameError::AlreadyFlagged);
        }

        self.mark_started();
        self.last_played = Some(coords);

        let cell = self.board.at_mut(coords.to_grid_pos());
        cell.flagged = true;
        cell.played = true;
        self.valid_plays.remove(&coords);
        self.flagged.insert(coords);
        log::debug!("Flagged {:?}", coords);

        Ok(self.check_won(coords))
    }

    fn relocate_first_mine(&mut self, coords: Coord2) -> bool {
        match self.board.relocate_mine(coords) {
            Some(to) => {
                log::debug!("First reveal hit a mine, moved it from {:?} to {:?}", coords, to);
                self.relocation = Some((coords, to));
                true
            }
            None => false,
        }
    }

    fn show(&mut self, pos: Pos) {
        let cell = self.board.at_mut(pos);
        cell.played = true;
        cell.shown = true;

        let coords = to_coords(pos);
        self.valid_plays.remove(&coords);
        self.shown.insert(coords);
    }

    /// Opens the zero region around `seed`, which must already be shown.
    ///
    /// Each cell enters the frontier at most once. The opened set does not depend on the order
    /// the frontier is drained in.
    fn flood_fill(&mut self, seed: Pos) {
        let mut queued = HashSet::from([seed]);
        let mut frontier = Vec::new();

        self.sweep_row(seed, &mut queued, &mut frontier);

        while let Some(pos) = frontier.pop() {
            let cell = self.board.at(pos);
            if !cell.is_hidden() {
                continue;
            }

            self.show(pos);
            if cell.is_open_zero() {
                self.sweep_row(pos, &mut queued, &mut frontier);
            }
        }
    }

    /// Shows the run of zero cells through `pos` plus the cell bounding it on each side, and
    /// queues the hidden cells directly above and below every column of that span.
    ///
    /// The scans stop on nonzero clues, flags, or the border ring, so no bounds checks are
    /// needed.
    fn sweep_row(&mut self, pos: Pos, queued: &mut HashSet<Pos>, frontier: &mut Vec<Pos>) {
        let (row, col) = pos;

        let mut left = col;
        while self.board.at((row, left - 1)).is_open_zero() {
            left -= 1;
        }
        let mut right = col;
        while self.board.at((row, right + 1)).is_open_zero() {
            right += 1;
        }
        log::trace!(
            "Sweeping zero run in row {} over columns {}..={}",
            row - 1,
            left - 1,
            right - 1
        );

        for col in (left - 1)..=(right + 1) {
            let cell = self.board.at((row, col));
            debug_assert!(!cell.is_mine());
            if cell.is_hidden() {
                self.show((row, col));
            }
            queued.insert((row, col));

            for next in [(row - 1, col), (row + 1, col)] {
                if self.board.at(next).is_hidden() && queued.insert(next) {
                    frontier.push(next);
                }
            }
        }
    }

    /// Cheap test on the remaining plays first, full board scan only once none are left.
    fn check_won(&mut self, coords: Coord2) -> MoveOutcome {
        if !self.valid_plays.is_empty() {
            return MoveOutcome::Continue;
        }

        if self.board.is_resolved() {
            self.finish(Outcome::Won, coords);
            MoveOutcome::Won
        } else {
            log::warn!(
                "No plays left but {} flags are not on mines",
                self.flagged
                    .iter()
                    .filter(|&&flag| !self.board.contains_mine(flag))
                    .count()
            );
            MoveOutcome::Continue
        }
    }

    fn check_not_finished(&self) -> Result<()> {
        if self.state.is_final() {
            Err(GameError::AlreadyEnded)
        } else {
            Ok(())
        }
    }

    /// Records the start time on the first move
    fn mark_started(&mut self) {
        if self.started_at.is_none() {
            let now = Utc::now();
            log::debug!("started at {}", now);
            self.started_at = Some(now);
        }
    }

    fn finish(&mut self, outcome: Outcome, last_played: Coord2) {
        let now = Utc::now();
        let started_at = *self.started_at.get_or_insert(now);
        self.stopped_at = Some(now);
        self.state = outcome.into();
        log::debug!("ended at {} with {:?}", now, outcome);

        self.result = Some(GameResult {
            outcome,
            rows: self.config.rows(),
            cols: self.config.cols(),
            mines: self.board.mine_count(),
            seed: self.config.seed,
            flag_count: self.flag_count(),
            reveal_count: self.reveal_count,
            last_played,
            started_at,
            stopped_at: now,
            elapsed: (now - started_at).to_std().unwrap_or_default(),
        });

        if self.config.auto_summarize {
            log::info!("{}", self.summarize());
        }
    }
}

fn clock_seed() -> u64 {
    let now = Utc::now();
    ((now.timestamp() as u64) << 32) ^ u64::from(now.timestamp_subsec_nanos())
}
