//! Error types for board construction, search and play

use crate::board::CellState;
use crate::hex::Hex;

/// Structural problems with a board description
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("Board size must be at least 1")]
    ZeroSize,

    #[error("Board size {size} exceeds the maximum of {max}")]
    TooLarge { size: usize, max: usize },

    #[error("Cell ({x}, {y}) is outside a board of size {size}")]
    OutOfBounds { x: i32, y: i32, size: usize },

    #[error("Board has no start cell")]
    MissingStart,

    #[error("Board has no goal cell")]
    MissingGoal,

    #[error("Second start cell at {second:?} (first at {first:?})")]
    DuplicateStart { first: Hex, second: Hex },

    #[error("Second goal cell at {second:?} (first at {first:?})")]
    DuplicateGoal { first: Hex, second: Hex },

    #[error("Cell {hex:?} is listed as both {existing:?} and {requested:?}")]
    ConflictingCell {
        hex: Hex,
        existing: CellState,
        requested: CellState,
    },

    #[error("Cell state {0:?} cannot be placed on a search board")]
    UnsupportedState(CellState),

    #[error("Unknown cell state: {0}")]
    UnknownState(String),
}

/// Failures of a path search
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    #[error("Invalid board: {0}")]
    InvalidBoard(#[from] BoardError),

    #[error("No path from {start:?} to {goal:?}")]
    NoPathFound { start: Hex, goal: Hex },

    #[error("Goal {0:?} has no predecessor chain back to the start")]
    DisconnectedGoal(Hex),
}

/// Problems with a stone grid snapshot
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    #[error("Grid size must be at least 1")]
    ZeroSize,

    #[error("Grid size {size} exceeds the maximum of {max}")]
    TooLarge { size: usize, max: usize },

    #[error("Plane has {actual} cells, expected {expected}")]
    PlaneLength { expected: usize, actual: usize },

    #[error("Cell {0:?} is owned by both players")]
    Overlap(Hex),
}

/// Rejected moves
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("Action {action} is out of range for a board of size {size}")]
    OutOfRange { action: usize, size: usize },

    #[error("Cell {0:?} is not on the board")]
    OffBoard(Hex),

    #[error("Illegal move: cell {0:?} is already occupied")]
    IllegalMove(Hex),

    #[error("Game is already over")]
    GameOver,
}

/// Errors raised while driving a game
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error(transparent)]
    Grid(#[from] GridError),

    #[error(transparent)]
    Move(#[from] MoveError),
}
