//! Cachex Core - Hex board model, path search and win detection
//!
//! This crate provides the core logic for Cachex:
//! - Board geometry (n×n hex grid with axial coordinates)
//! - A* shortest paths around blocked cells
//! - Flood-fill detection of board-spanning chains
//! - Action index mapping and a two-player game driver
//! - JSON scenario loading

pub mod action;
pub mod board;
pub mod config;
pub mod error;
pub mod game;
pub mod grid;
pub mod hex;
pub mod scenario;
pub mod search;
pub mod win;

// Re-exports for convenient access
pub use action::{action_to_coord, coord_to_action, resign_index, Action};
pub use board::{Board, CellState};
pub use config::{GameConfig, IllegalMovePolicy, MAX_BOARD_SIZE};
pub use error::{BoardError, GameError, GridError, MoveError, SearchError};
pub use game::{play_random_game, play_random_game_seeded, GameRecord, HexGame, StepResult};
pub use grid::{Player, StoneGrid};
pub use hex::{Hex, DIRECTIONS};
pub use scenario::Scenario;
pub use search::{find_path, solve, PathResult};
pub use win::{evaluate, Outcome};
