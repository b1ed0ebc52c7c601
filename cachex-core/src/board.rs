//! Search board: a dense n×n grid of cell states with one start and one goal

use serde::{Deserialize, Serialize};

use crate::config::{cell_count, MAX_BOARD_SIZE};
use crate::error::BoardError;
use crate::hex::Hex;

/// State of a single cell
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CellState {
    Empty,
    Blocked,
    Start,
    Goal,
    OwnedByPlayerA,
    OwnedByPlayerB,
}

impl CellState {
    /// Whether a path may step onto this cell
    pub fn is_passable(self) -> bool {
        matches!(self, CellState::Empty | CellState::Start | CellState::Goal)
    }
}

/// Board used for path search (immutable once built)
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    size: usize,
    /// Row-major cell states, `x * size + y`
    cells: Vec<CellState>,
    start: Hex,
    goal: Hex,
}

impl Board {
    // ========================================================================
    // CONSTRUCTORS
    // ========================================================================

    /// Create an otherwise empty board with the given start and goal
    pub fn new(size: usize, start: Hex, goal: Hex) -> Result<Self, BoardError> {
        Self::from_cells(
            size,
            [
                (CellState::Start, start.x, start.y),
                (CellState::Goal, goal.x, goal.y),
            ],
        )
    }

    /// Build a board from `(state, x, y)` triples
    ///
    /// Unlisted cells are empty. Every listed cell must be on the board and
    /// listed at most once, and exactly one start and one goal are required.
    /// Player stones belong on a [`crate::StoneGrid`] and are rejected here.
    pub fn from_cells<I>(size: usize, cells: I) -> Result<Self, BoardError>
    where
        I: IntoIterator<Item = (CellState, i32, i32)>,
    {
        if size == 0 {
            return Err(BoardError::ZeroSize);
        }

        let cells_len = cell_count(size).ok_or(BoardError::TooLarge {
            size,
            max: MAX_BOARD_SIZE,
        })?;

        let mut grid = vec![CellState::Empty; cells_len];
        let mut start: Option<Hex> = None;
        let mut goal: Option<Hex> = None;

        for (state, x, y) in cells {
            let hex = Hex::new(x, y);
            if !hex.in_bounds(size) {
                return Err(BoardError::OutOfBounds { x, y, size });
            }

            match state {
                CellState::OwnedByPlayerA | CellState::OwnedByPlayerB => {
                    return Err(BoardError::UnsupportedState(state));
                }
                CellState::Start => {
                    if let Some(first) = start {
                        return Err(BoardError::DuplicateStart { first, second: hex });
                    }
                    start = Some(hex);
                }
                CellState::Goal => {
                    if let Some(first) = goal {
                        return Err(BoardError::DuplicateGoal { first, second: hex });
                    }
                    goal = Some(hex);
                }
                CellState::Empty | CellState::Blocked => {}
            }

            let idx = x as usize * size + y as usize;
            let existing = grid[idx];
            if existing != CellState::Empty {
                return Err(BoardError::ConflictingCell {
                    hex,
                    existing,
                    requested: state,
                });
            }
            grid[idx] = state;
        }

        Ok(Self {
            size,
            cells: grid,
            start: start.ok_or(BoardError::MissingStart)?,
            goal: goal.ok_or(BoardError::MissingGoal)?,
        })
    }

    // ========================================================================
    // ACCESSORS
    // ========================================================================

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn start(&self) -> Hex {
        self.start
    }

    pub fn goal(&self) -> Hex {
        self.goal
    }

    /// State at `hex`, `None` when off the board
    pub fn get(&self, hex: Hex) -> Option<CellState> {
        self.index(hex).map(|i| self.cells[i])
    }

    pub fn is_blocked(&self, hex: Hex) -> bool {
        self.get(hex) == Some(CellState::Blocked)
    }

    /// Iterate all cells in row-major order
    pub fn cells(&self) -> impl Iterator<Item = (Hex, CellState)> + '_ {
        let size = self.size;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, &s)| (Hex::new((i / size) as i32, (i % size) as i32), s))
    }

    /// Number of blocked cells
    pub fn blocked_count(&self) -> usize {
        self.cells.iter().filter(|&&s| s == CellState::Blocked).count()
    }

    // ========================================================================
    // TOPOLOGY
    // ========================================================================

    /// All on-board neighbors of `hex`, whatever their state
    pub fn neighbors(&self, hex: Hex) -> Vec<Hex> {
        hex.neighbors(self.size).collect()
    }

    /// Neighbors a path may step onto (blocked cells are omitted)
    pub fn passable_neighbors(&self, hex: Hex) -> impl Iterator<Item = Hex> + '_ {
        hex.neighbors(self.size)
            .filter(move |&n| self.get(n).is_some_and(CellState::is_passable))
    }

    fn index(&self, hex: Hex) -> Option<usize> {
        if hex.in_bounds(self.size) {
            Some(hex.x as usize * self.size + hex.y as usize)
        } else {
            None
        }
    }
}
