//! Two-player game driver
//!
//! Holds the live stone grid, applies actions for the player to move and
//! asks the win detector for a terminal signal after every placement.
//! Rewards are reported from the mover's perspective: +1 for a winning
//! move, -1 for resigning or losing on an illegal move, 0 otherwise.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::action::{decode, encode, Action};
use crate::config::{GameConfig, IllegalMovePolicy};
use crate::error::{GameError, GridError, MoveError};
use crate::grid::{Player, StoneGrid};
use crate::win::{evaluate, Outcome};

// ============================================================================
// CORE TYPES
// ============================================================================

/// Result of applying one action
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct StepResult {
    pub action: Action,
    /// Reward for the player who moved
    pub reward: f32,
    /// Whether the game has ended
    pub done: bool,
    /// True when the mover lost by playing onto an occupied cell
    pub illegal: bool,
}

/// Summary of a finished game
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    pub board_size: usize,
    /// Action indices in the order played
    pub moves: Vec<usize>,
    pub winner: Option<Player>,
    pub resigned: bool,
}

// ============================================================================
// GAME STATE
// ============================================================================

/// Live game (mutated in place by `step`)
#[derive(Clone, Debug)]
pub struct HexGame {
    config: GameConfig,
    grid: StoneGrid,
    to_play: Player,
    winner: Option<Player>,
    moves: Vec<usize>,
    resigned: bool,
}

impl HexGame {
    /// New game on an empty board, player A to move
    pub fn new(config: GameConfig) -> Result<Self, GridError> {
        let grid = StoneGrid::new(config.board_size)?;
        Ok(Self {
            config,
            grid,
            to_play: Player::A,
            winner: None,
            moves: Vec::new(),
            resigned: false,
        })
    }

    // ========================================================================
    // ACCESSORS
    // ========================================================================

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Read-only view of the stones
    pub fn grid(&self) -> &StoneGrid {
        &self.grid
    }

    pub fn to_play(&self) -> Player {
        self.to_play
    }

    pub fn winner(&self) -> Option<Player> {
        self.winner
    }

    pub fn is_done(&self) -> bool {
        self.winner.is_some()
    }

    pub fn moves(&self) -> &[usize] {
        &self.moves
    }

    pub fn outcome(&self) -> Outcome {
        self.winner.map_or(Outcome::NoWinnerYet, Outcome::from)
    }

    pub fn record(&self) -> GameRecord {
        GameRecord {
            board_size: self.config.board_size,
            moves: self.moves.clone(),
            winner: self.winner,
            resigned: self.resigned,
        }
    }

    // ========================================================================
    // MOVE GENERATION
    // ========================================================================

    /// Placement actions for every empty cell, in row-major order
    ///
    /// Resignation is always available while the game runs but is not listed.
    pub fn legal_actions(&self) -> Vec<usize> {
        if self.is_done() {
            return Vec::new();
        }
        let size = self.config.board_size;
        self.grid
            .empty_cells()
            .filter_map(|hex| encode(Action::Place(hex), size).ok())
            .collect()
    }

    /// Uniformly random legal placement, `None` when the board is full
    pub fn random_action<R: Rng>(&self, rng: &mut R) -> Option<usize> {
        let actions = self.legal_actions();
        if actions.is_empty() {
            return None;
        }
        Some(actions[rng.gen_range(0..actions.len())])
    }

    // ========================================================================
    // MOVE APPLICATION
    // ========================================================================

    /// Apply an action for the player to move
    pub fn step(&mut self, action: usize) -> Result<StepResult, MoveError> {
        if self.is_done() {
            return Err(MoveError::GameOver);
        }

        let mover = self.to_play;
        let decoded = decode(action, self.config.board_size)?;

        let hex = match decoded {
            Action::Resign => {
                tracing::debug!("{:?} resigns after {} moves", mover, self.moves.len());
                self.moves.push(action);
                self.resigned = true;
                self.winner = Some(mover.opponent());
                return Ok(StepResult {
                    action: decoded,
                    reward: -1.0,
                    done: true,
                    illegal: false,
                });
            }
            Action::Place(hex) => hex,
        };

        match self.grid.place(hex, mover) {
            Ok(()) => {}
            Err(MoveError::IllegalMove(hex)) => {
                return match self.config.illegal_move_policy {
                    IllegalMovePolicy::Reject => Err(MoveError::IllegalMove(hex)),
                    IllegalMovePolicy::Lose => {
                        tracing::debug!("{:?} played onto occupied {:?} and loses", mover, hex);
                        self.moves.push(action);
                        self.winner = Some(mover.opponent());
                        Ok(StepResult {
                            action: decoded,
                            reward: -1.0,
                            done: true,
                            illegal: true,
                        })
                    }
                };
            }
            Err(e) => return Err(e),
        }
        self.moves.push(action);

        let outcome = evaluate(&self.grid);
        let reward = match mover {
            Player::A => outcome.reward(),
            Player::B => -outcome.reward(),
        };
        self.winner = outcome.winner();

        if self.winner.is_none() {
            self.to_play = mover.opponent();
        } else {
            tracing::trace!("{:?} connects with move {}", mover, action);
        }

        Ok(StepResult {
            action: decoded,
            reward,
            done: self.is_done(),
            illegal: false,
        })
    }
}

// ============================================================================
// RANDOM PLAY
// ============================================================================

/// Play random moves for both sides until someone connects
pub fn play_random_game<R: Rng>(config: &GameConfig, rng: &mut R) -> Result<GameRecord, GameError> {
    let mut game = HexGame::new(config.clone())?;

    while !game.is_done() {
        let Some(action) = game.random_action(rng) else {
            break;
        };
        game.step(action)?;
    }

    Ok(game.record())
}

/// Random game from a fixed seed
pub fn play_random_game_seeded(config: &GameConfig, seed: u64) -> Result<GameRecord, GameError> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    play_random_game(config, &mut rng)
}
