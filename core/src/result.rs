use chrono::{DateTime, Utc};
use core::fmt;
use core::time::Duration;
use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Won,
    Lost,
}

/// Final record of a game, produced exactly once when it ends.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameResult {
    pub outcome: Outcome,
    pub rows: Coord,
    pub cols: Coord,
    pub mines: CellCount,
    pub seed: Option<u64>,
    pub flag_count: CellCount,
    /// Successful `reveal` calls, not counting cells opened by flood fill.
    pub reveal_count: CellCount,
    /// The move that ended the game.
    pub last_played: Coord2,
    pub started_at: DateTime<Utc>,
    pub stopped_at: DateTime<Utc>,
    pub elapsed: Duration,
}

impl GameResult {
    pub const fn won(&self) -> bool {
        matches!(self.outcome, Outcome::Won)
    }
}

/// Cell counts and timing of a game at some point in time.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub state: GameState,
    pub total: CellCount,
    pub shown: CellCount,
    pub flagged: CellCount,
    pub hidden: CellCount,
    pub elapsed: Duration,
}

impl Summary {
    pub fn shown_fraction(&self) -> f64 {
        self.fraction(self.shown)
    }

    pub fn flagged_fraction(&self) -> f64 {
        self.fraction(self.flagged)
    }

    pub fn hidden_fraction(&self) -> f64 {
        self.fraction(self.hidden)
    }

    fn fraction(&self, count: CellCount) -> f64 {
        f64::from(count) / f64::from(self.total)
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:?}: {}/{} shown ({:.1}%), {} flagged ({:.1}%), {} hidden ({:.1}%), {:.3}s elapsed",
            self.state,
            self.shown,
            self.total,
            100.0 * self.shown_fraction(),
            self.flagged,
            100.0 * self.flagged_fraction(),
            self.hidden,
            100.0 * self.hidden_fraction(),
            self.elapsed.as_secs_f64(),
        )
    }
}
