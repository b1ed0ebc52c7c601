//! Scenario - JSON description of a path search board

use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::board::{Board, CellState};
use crate::error::{BoardError, SearchError};
use crate::search::{find_path, PathResult};

/// Board description as read from a scenario file
///
/// ```json
/// { "n": 5, "board": [["b", 1, 0], ["b", 1, 1]], "start": [0, 0], "goal": [4, 2] }
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scenario {
    /// Cells per side
    pub n: usize,
    /// `[state, x, y]` entries; only blocks are expected here
    #[serde(default)]
    pub board: Vec<(String, i32, i32)>,
    pub start: (i32, i32),
    pub goal: (i32, i32),
}

impl Scenario {
    /// Parse from a JSON string
    pub fn from_json(content: &str) -> anyhow::Result<Self> {
        serde_json::from_str(content).context("Failed to parse scenario JSON")
    }

    /// Load from JSON file
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read scenario: {}", path.display()))?;
        Self::from_json(&content)
    }

    /// All cells as `(state, x, y)` triples, start and goal last
    pub fn cells(&self) -> Result<Vec<(CellState, i32, i32)>, BoardError> {
        let mut cells = self
            .board
            .iter()
            .map(|(state, x, y)| Ok((parse_state(state)?, *x, *y)))
            .collect::<Result<Vec<_>, BoardError>>()?;
        cells.push((CellState::Start, self.start.0, self.start.1));
        cells.push((CellState::Goal, self.goal.0, self.goal.1));
        Ok(cells)
    }

    /// Build the search board
    pub fn to_board(&self) -> Result<Board, BoardError> {
        Board::from_cells(self.n, self.cells()?)
    }

    /// Build the board and run A* on it
    pub fn solve(&self) -> Result<PathResult, SearchError> {
        let board = self.to_board()?;
        find_path(&board)
    }
}

/// Map a scenario state token to a cell state
pub fn parse_state(token: &str) -> Result<CellState, BoardError> {
    match token.to_ascii_lowercase().as_str() {
        "b" | "block" | "blocked" => Ok(CellState::Blocked),
        "e" | "empty" => Ok(CellState::Empty),
        _ => Err(BoardError::UnknownState(token.to_string())),
    }
}
