//! Linear action indices for moves on an n×n board
//!
//! A placement on `(row, col)` is `row * n + col`; the index `n * n` is
//! reserved for resigning and never maps to a cell.

use serde::{Deserialize, Serialize};

use crate::error::MoveError;
use crate::hex::Hex;

/// A decoded action
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    Place(Hex),
    Resign,
}

/// Index reserved for resignation
pub fn resign_index(size: usize) -> usize {
    size * size
}

/// Number of distinct actions, including resignation
pub fn action_count(size: usize) -> usize {
    size * size + 1
}

/// Cell index of an on-board coordinate
pub fn coord_to_action(hex: Hex, size: usize) -> Option<usize> {
    if hex.in_bounds(size) {
        Some(hex.x as usize * size + hex.y as usize)
    } else {
        None
    }
}

/// Coordinate of a cell index; `None` for the resign index and beyond
pub fn action_to_coord(action: usize, size: usize) -> Option<Hex> {
    if action >= size * size {
        return None;
    }
    Some(Hex::new((action / size) as i32, (action % size) as i32))
}

/// Decode an index received from the move-selection layer
pub fn decode(action: usize, size: usize) -> Result<Action, MoveError> {
    if action == resign_index(size) {
        return Ok(Action::Resign);
    }
    action_to_coord(action, size)
        .map(Action::Place)
        .ok_or(MoveError::OutOfRange { action, size })
}

/// Encode an action back to its index
pub fn encode(action: Action, size: usize) -> Result<usize, MoveError> {
    match action {
        Action::Resign => Ok(resign_index(size)),
        Action::Place(hex) => coord_to_action(hex, size).ok_or(MoveError::OffBoard(hex)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_is_bijection() {
        for size in 1..=8 {
            let mut seen = vec![false; size * size];
            for i in 0..size * size {
                let hex = action_to_coord(i, size).unwrap();
                assert!(hex.in_bounds(size));
                assert_eq!(coord_to_action(hex, size), Some(i));

                let cell = hex.x as usize * size + hex.y as usize;
                assert!(!seen[cell]);
                seen[cell] = true;
            }
            assert!(seen.iter().all(|&s| s));
        }
    }

    #[test]
    fn test_row_major_layout() {
        assert_eq!(action_to_coord(7, 6), Some(Hex::new(1, 1)));
        assert_eq!(coord_to_action(Hex::new(2, 5), 6), Some(17));
        assert_eq!(coord_to_action(Hex::new(6, 0), 6), None);
    }

    #[test]
    fn test_resign_never_maps_to_a_cell() {
        assert_eq!(resign_index(6), 36);
        assert_eq!(action_count(6), 37);
        assert_eq!(action_to_coord(36, 6), None);
        assert_eq!(decode(36, 6), Ok(Action::Resign));
        assert_eq!(encode(Action::Resign, 6), Ok(36));
    }

    #[test]
    fn test_decode_out_of_range() {
        assert_eq!(
            decode(37, 6),
            Err(MoveError::OutOfRange { action: 37, size: 6 })
        );
        assert_eq!(decode(0, 1), Ok(Action::Place(Hex::new(0, 0))));
        assert_eq!(decode(1, 1), Ok(Action::Resign));
    }
}
