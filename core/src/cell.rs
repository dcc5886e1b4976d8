use serde::{Deserialize, Serialize};

/// Adjacent-mine count stored in border cells. No playable cell can reach it.
pub const BORDER: u8 = 9;

/// Per-cell attributes of the bordered grid.
///
/// The adjacent count carries no meaning while `mine` is set.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub(crate) mine: bool,
    pub(crate) adjacent: u8,
    pub(crate) flagged: bool,
    pub(crate) played: bool,
    pub(crate) shown: bool,
}

/// The three mutually exclusive player-visible states of a cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellState {
    Hidden,
    Flagged,
    Shown,
}

impl Cell {
    pub(crate) const fn border() -> Self {
        Self {
            mine: false,
            adjacent: BORDER,
            flagged: false,
            played: true,
            shown: true,
        }
    }

    pub const fn is_mine(self) -> bool {
        self.mine
    }

    /// Number of mines among the 8 neighbors, `None` for mines.
    pub const fn adjacent_mines(self) -> Option<u8> {
        if self.mine { None } else { Some(self.adjacent) }
    }

    pub const fn is_flagged(self) -> bool {
        self.flagged
    }

    pub const fn is_played(self) -> bool {
        self.played
    }

    pub const fn is_shown(self) -> bool {
        self.shown
    }

    pub const fn is_hidden(self) -> bool {
        !self.shown && !self.flagged
    }

    pub const fn state(self) -> CellState {
        if self.shown {
            CellState::Shown
        } else if self.flagged {
            CellState::Flagged
        } else {
            CellState::Hidden
        }
    }

    pub(crate) const fn is_border(self) -> bool {
        self.adjacent == BORDER
    }

    /// A safe cell with no adjacent mines that flood fill may spread through.
    pub(crate) const fn is_open_zero(self) -> bool {
        !self.mine && !self.flagged && self.adjacent == 0
    }
}
