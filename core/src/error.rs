use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Board must have at least one row and one column")]
    InvalidDimensions,
    #[error("Too many mines, at least one cell must be safe")]
    TooManyMines,
    #[error("Mine layout does not match the configured mine count")]
    MineLayoutMismatch,
    #[error("Invalid coordinates")]
    InvalidCoords,
    #[error("Cell is already revealed")]
    AlreadyRevealed,
    #[error("Cell is already flagged")]
    AlreadyFlagged,
    #[error("Game already ended, no new moves are accepted")]
    AlreadyEnded,
}

/// Broad category of a [`GameError`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// The game could not be constructed; nothing was created.
    Configuration,
    /// A move targeted a cell outside the board. The game is unchanged.
    InvalidCoordinate,
    /// A move is not legal in the current state. The game is unchanged.
    IllegalStateTransition,
}

impl GameError {
    pub const fn kind(self) -> ErrorKind {
        use GameError::*;
        match self {
            InvalidDimensions | TooManyMines | MineLayoutMismatch => ErrorKind::Configuration,
            InvalidCoords => ErrorKind::InvalidCoordinate,
            AlreadyRevealed | AlreadyFlagged | AlreadyEnded => ErrorKind::IllegalStateTransition,
        }
    }
}

pub type Result<T> = core::result::Result<T, GameError>;
