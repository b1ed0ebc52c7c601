//! Hex grid geometry with axial coordinates
//!
//! Cells of an n×n Cachex board are addressed by `(x, y)` with `x` the row
//! and `y` the column. The same six-direction adjacency is used by path
//! search and by win detection.

use serde::{Deserialize, Serialize};

/// Axial hex coordinates
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Hex {
    pub x: i32,
    pub y: i32,
}

impl Hex {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Check if this hex lies on a board of the given size
    pub fn in_bounds(&self, size: usize) -> bool {
        self.x >= 0 && self.y >= 0 && (self.x as usize) < size && (self.y as usize) < size
    }

    /// Shift by a direction vector
    pub fn offset(&self, (dx, dy): (i32, i32)) -> Hex {
        Hex::new(self.x + dx, self.y + dy)
    }

    /// Get neighbor in direction (0-5), ignoring board bounds
    pub fn neighbor(&self, direction: u8) -> Hex {
        self.offset(DIRECTIONS[direction as usize % 6])
    }

    /// Distance between two hexes in single steps
    ///
    /// Equals `|dx| + |dy|` when both deltas share a sign and
    /// `max(|dx|, |dy|)` otherwise.
    pub fn distance_to(&self, other: Hex) -> u32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx.unsigned_abs() + dy.unsigned_abs() + (dx + dy).unsigned_abs()) / 2
    }

    /// True if `other` is exactly one step away
    pub fn is_neighbor(&self, other: Hex) -> bool {
        self.distance_to(other) == 1
    }

    /// On-board neighbors, in direction order
    ///
    /// Edge and corner cells yield fewer than six hexes.
    pub fn neighbors(self, size: usize) -> impl Iterator<Item = Hex> {
        (0..6u8)
            .map(move |d| self.neighbor(d))
            .filter(move |h| h.in_bounds(size))
    }

    /// Mirror across the main diagonal (swaps rows and columns)
    pub fn transposed(&self) -> Hex {
        Hex::new(self.y, self.x)
    }
}

impl From<(i32, i32)> for Hex {
    fn from((x, y): (i32, i32)) -> Self {
        Hex::new(x, y)
    }
}

/// Direction vectors in axial coordinates (dx, dy)
pub const DIRECTIONS: [(i32, i32); 6] = [
    (0, 1),
    (1, 0),
    (1, -1),
    (0, -1),
    (-1, 0),
    (-1, 1),
];
