//! Terminal-state detection by flood fill
//!
//! Each player's fill is seeded from their starting edge and follows
//! same-owner neighbors; the first reached cell on the opposite edge ends it.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::grid::{Player, StoneGrid};
use crate::hex::Hex;

/// Result of evaluating a position
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    PlayerAWins,
    PlayerBWins,
    NoWinnerYet,
}

impl Outcome {
    pub fn winner(self) -> Option<Player> {
        match self {
            Outcome::PlayerAWins => Some(Player::A),
            Outcome::PlayerBWins => Some(Player::B),
            Outcome::NoWinnerYet => None,
        }
    }

    /// Reward seen by player A: +1 win, -1 loss, 0 otherwise
    pub fn reward(self) -> f32 {
        match self {
            Outcome::PlayerAWins => 1.0,
            Outcome::PlayerBWins => -1.0,
            Outcome::NoWinnerYet => 0.0,
        }
    }
}

impl From<Player> for Outcome {
    fn from(player: Player) -> Self {
        match player {
            Player::A => Outcome::PlayerAWins,
            Player::B => Outcome::PlayerBWins,
        }
    }
}

/// Decide whether either player has completed a board-spanning chain
pub fn evaluate(grid: &StoneGrid) -> Outcome {
    let a = connects(grid, Player::A);
    let b = connects(grid, Player::B);

    // Two disjoint crossing chains cannot coexist on a hex grid.
    debug_assert!(!(a && b), "both players connected on one grid");

    match (a, b) {
        (true, false) => Outcome::PlayerAWins,
        (false, true) => Outcome::PlayerBWins,
        _ => Outcome::NoWinnerYet,
    }
}

/// True if `player` owns a connected chain between their two edges
pub fn connects(grid: &StoneGrid, player: Player) -> bool {
    let n = grid.size();
    let last = n as i32 - 1;
    let on_target = |h: Hex| match player {
        Player::A => h.x == last,
        Player::B => h.y == last,
    };

    let mut visited = vec![false; n * n];
    let mut queue: VecDeque<Hex> = VecDeque::new();

    for i in 0..n as i32 {
        let seed = match player {
            Player::A => Hex::new(0, i),
            Player::B => Hex::new(i, 0),
        };
        if grid.owner(seed) != Some(player) {
            continue;
        }
        if on_target(seed) {
            return true;
        }
        visited[seed.x as usize * n + seed.y as usize] = true;
        queue.push_back(seed);
    }

    while let Some(current) = queue.pop_front() {
        for next in current.neighbors(n) {
            let idx = next.x as usize * n + next.y as usize;
            if visited[idx] || grid.owner(next) != Some(player) {
                continue;
            }
            if on_target(next) {
                return true;
            }
            visited[idx] = true;
            queue.push_back(next);
        }
    }

    false
}
