//! Configuration types for game play

use serde::{Deserialize, Serialize};

/// Board size used when none is given
pub const DEFAULT_BOARD_SIZE: usize = 6;

/// Largest accepted board side
pub const MAX_BOARD_SIZE: usize = 4096;

/// Cells on a board of side `size`, `None` above [`MAX_BOARD_SIZE`]
pub fn cell_count(size: usize) -> Option<usize> {
    if size > MAX_BOARD_SIZE {
        return None;
    }
    size.checked_mul(size)
}

/// What happens when a player targets an occupied cell
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum IllegalMovePolicy {
    /// The offending player loses immediately
    Lose,
    /// The move is refused and the same player moves again
    Reject,
}

impl Default for IllegalMovePolicy {
    fn default() -> Self {
        IllegalMovePolicy::Lose
    }
}

/// Game configuration
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Cells per side
    pub board_size: usize,
    /// Handling of moves onto occupied cells
    pub illegal_move_policy: IllegalMovePolicy,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_size: DEFAULT_BOARD_SIZE,
            illegal_move_policy: IllegalMovePolicy::default(),
        }
    }
}

impl GameConfig {
    /// Create config for a board of the given size
    pub fn with_board_size(mut self, board_size: usize) -> Self {
        self.board_size = board_size;
        self
    }

    /// Set illegal move handling
    pub fn with_illegal_move_policy(mut self, policy: IllegalMovePolicy) -> Self {
        self.illegal_move_policy = policy;
        self
    }
}
