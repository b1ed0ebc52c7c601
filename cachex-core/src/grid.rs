//! Stone occupancy for a live game: one boolean plane per player

use serde::{Deserialize, Serialize};

use crate::board::CellState;
use crate::config::{cell_count, MAX_BOARD_SIZE};
use crate::error::{GridError, MoveError};
use crate::hex::Hex;

/// Player colour
///
/// Player A (red) connects the top row to the bottom row; player B (blue)
/// connects the left column to the right column.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    A = 0,
    B = 1,
}

impl Player {
    pub fn opponent(self) -> Self {
        match self {
            Player::A => Player::B,
            Player::B => Player::A,
        }
    }

    /// Cell state for this player's stones
    pub fn stone(self) -> CellState {
        match self {
            Player::A => CellState::OwnedByPlayerA,
            Player::B => CellState::OwnedByPlayerB,
        }
    }
}

/// n×n stone placements, two mutually exclusive planes
///
/// Deserialized grids go through [`StoneGrid::from_planes`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawStoneGrid")]
pub struct StoneGrid {
    size: usize,
    planes: [Vec<bool>; 2],
}

/// Unchecked wire form of [`StoneGrid`]
#[derive(Deserialize)]
struct RawStoneGrid {
    size: usize,
    planes: [Vec<bool>; 2],
}

impl TryFrom<RawStoneGrid> for StoneGrid {
    type Error = GridError;

    fn try_from(raw: RawStoneGrid) -> Result<Self, Self::Error> {
        let [a, b] = raw.planes;
        Self::from_planes(raw.size, a, b)
    }
}

fn checked_cells(size: usize) -> Result<usize, GridError> {
    if size == 0 {
        return Err(GridError::ZeroSize);
    }
    cell_count(size).ok_or(GridError::TooLarge {
        size,
        max: MAX_BOARD_SIZE,
    })
}

impl StoneGrid {
    /// Empty grid
    pub fn new(size: usize) -> Result<Self, GridError> {
        let cells = checked_cells(size)?;
        Ok(Self {
            size,
            planes: [vec![false; cells], vec![false; cells]],
        })
    }

    /// Build from row-major occupancy planes
    pub fn from_planes(size: usize, a: Vec<bool>, b: Vec<bool>) -> Result<Self, GridError> {
        let expected = checked_cells(size)?;
        for plane in [&a, &b] {
            if plane.len() != expected {
                return Err(GridError::PlaneLength {
                    expected,
                    actual: plane.len(),
                });
            }
        }
        if let Some(i) = (0..expected).find(|&i| a[i] && b[i]) {
            return Err(GridError::Overlap(Hex::new((i / size) as i32, (i % size) as i32)));
        }
        Ok(Self { size, planes: [a, b] })
    }

    /// Parse rows of `.`, `A` and `B` (whitespace ignored)
    ///
    /// Handy for writing positions in tests and fixtures.
    pub fn from_rows(rows: &[&str]) -> Result<Self, GridError> {
        let mut grid = Self::new(rows.len())?;
        let size = grid.size;
        for (x, row) in rows.iter().enumerate() {
            let cells: Vec<char> = row.chars().filter(|c| !c.is_whitespace()).collect();
            if cells.len() != size {
                return Err(GridError::PlaneLength {
                    expected: size,
                    actual: cells.len(),
                });
            }
            for (y, c) in cells.into_iter().enumerate() {
                let owner = match c {
                    'A' | 'a' | 'R' | 'r' => Player::A,
                    'B' | 'b' => Player::B,
                    _ => continue,
                };
                grid.planes[owner as usize][x * size + y] = true;
            }
        }
        Ok(grid)
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Owner of `hex`, `None` for empty or off-board cells
    pub fn owner(&self, hex: Hex) -> Option<Player> {
        let i = self.index(hex)?;
        if self.planes[0][i] {
            Some(Player::A)
        } else if self.planes[1][i] {
            Some(Player::B)
        } else {
            None
        }
    }

    /// Cell state view, `None` when off the board
    pub fn get(&self, hex: Hex) -> Option<CellState> {
        self.index(hex)?;
        Some(self.owner(hex).map_or(CellState::Empty, Player::stone))
    }

    /// Place a stone on an empty cell
    pub fn place(&mut self, hex: Hex, player: Player) -> Result<(), MoveError> {
        let i = self.index(hex).ok_or(MoveError::OffBoard(hex))?;
        if self.planes[0][i] || self.planes[1][i] {
            return Err(MoveError::IllegalMove(hex));
        }
        self.planes[player as usize][i] = true;
        Ok(())
    }

    /// Empty cells in row-major order
    pub fn empty_cells(&self) -> impl Iterator<Item = Hex> + '_ {
        let size = self.size;
        (0..size * size)
            .filter(move |&i| !self.planes[0][i] && !self.planes[1][i])
            .map(move |i| Hex::new((i / size) as i32, (i % size) as i32))
    }

    pub fn stone_count(&self) -> usize {
        self.planes.iter().map(|p| p.iter().filter(|&&s| s).count()).sum()
    }

    pub fn is_full(&self) -> bool {
        self.stone_count() == self.size * self.size
    }

    /// Mirror across the main diagonal and swap the two players
    ///
    /// Rows become columns, so a top-to-bottom chain for one player turns
    /// into a left-to-right chain for the other.
    pub fn transposed_swapped(&self) -> Self {
        let n = self.size;
        let mut planes = [vec![false; n * n], vec![false; n * n]];
        for x in 0..n {
            for y in 0..n {
                planes[0][y * n + x] = self.planes[1][x * n + y];
                planes[1][y * n + x] = self.planes[0][x * n + y];
            }
        }
        Self { size: n, planes }
    }

    fn index(&self, hex: Hex) -> Option<usize> {
        if hex.in_bounds(self.size) {
            Some(hex.x as usize * self.size + hex.y as usize)
        } else {
            None
        }
    }
}
