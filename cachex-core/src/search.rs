//! A* shortest-path search from the start cell to the goal cell
//!
//! Every step costs 1 and blocked cells are never entered. The heuristic is
//! the hex distance to the goal, which never overestimates the remaining
//! cost, so the first time the goal leaves the frontier its cost is optimal.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use rustc_hash::FxHashMap;

use crate::board::{Board, CellState};
use crate::error::SearchError;
use crate::hex::Hex;

/// Output of a successful search
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PathResult {
    /// Best known cost from the start to every reached cell
    pub cost_so_far: FxHashMap<Hex, u32>,
    /// Predecessor of each reached cell on its best known path
    pub came_from: FxHashMap<Hex, Hex>,
    /// Cells from start to goal inclusive
    pub path: Vec<Hex>,
}

impl PathResult {
    /// Number of steps along the path
    pub fn cost(&self) -> u32 {
        self.path.len().saturating_sub(1) as u32
    }
}

/// Frontier entry ordered by (f, insertion sequence)
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct OpenNode {
    f: u32,
    g: u32,
    seq: u64,
    hex: Hex,
}

impl Ord for OpenNode {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed so BinaryHeap (max-heap) pops the smallest f, oldest first.
        other
            .f
            .cmp(&self.f)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for OpenNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Find a cheapest path from the board's start to its goal
pub fn find_path(board: &Board) -> Result<PathResult, SearchError> {
    let start = board.start();
    let goal = board.goal();

    let mut cost_so_far: FxHashMap<Hex, u32> = FxHashMap::default();
    let mut came_from: FxHashMap<Hex, Hex> = FxHashMap::default();
    let mut open: BinaryHeap<OpenNode> = BinaryHeap::new();
    let mut seq: u64 = 0;
    let mut expanded: usize = 0;

    cost_so_far.insert(start, 0);
    open.push(OpenNode {
        f: start.distance_to(goal),
        g: 0,
        seq,
        hex: start,
    });

    let found = loop {
        let Some(current) = open.pop() else {
            break false;
        };

        // Skip entries superseded by a cheaper route.
        if cost_so_far.get(&current.hex).is_some_and(|&g| current.g > g) {
            continue;
        }

        if current.hex == goal {
            break true;
        }
        expanded += 1;

        let next_g = current.g + 1;
        for next in board.passable_neighbors(current.hex) {
            let improved = cost_so_far.get(&next).map_or(true, |&g| next_g < g);
            if !improved {
                continue;
            }
            cost_so_far.insert(next, next_g);
            came_from.insert(next, current.hex);
            seq += 1;
            open.push(OpenNode {
                f: next_g + next.distance_to(goal),
                g: next_g,
                seq,
                hex: next,
            });
        }
    };

    if !found {
        tracing::debug!(
            "No path from {:?} to {:?} ({} cells expanded)",
            start,
            goal,
            expanded
        );
        return Err(SearchError::NoPathFound { start, goal });
    }

    let path = reconstruct_path(&came_from, start, goal)?;
    tracing::debug!(
        "Path {:?} -> {:?}: cost {} ({} cells expanded)",
        start,
        goal,
        path.len() - 1,
        expanded
    );

    Ok(PathResult {
        cost_so_far,
        came_from,
        path,
    })
}

/// Build a board from `(state, x, y)` triples and search it
pub fn solve<I>(size: usize, cells: I) -> Result<PathResult, SearchError>
where
    I: IntoIterator<Item = (CellState, i32, i32)>,
{
    let board = Board::from_cells(size, cells)?;
    find_path(&board)
}

/// Walk predecessor links from `goal` back to `start`
///
/// Returns the path in start-to-goal order.
pub fn reconstruct_path(
    came_from: &FxHashMap<Hex, Hex>,
    start: Hex,
    goal: Hex,
) -> Result<Vec<Hex>, SearchError> {
    let mut path = vec![goal];
    let mut current = goal;

    while current != start {
        // A chain longer than the map means the links loop without reaching start.
        if path.len() > came_from.len() + 1 {
            return Err(SearchError::DisconnectedGoal(goal));
        }
        current = *came_from
            .get(&current)
            .ok_or(SearchError::DisconnectedGoal(goal))?;
        path.push(current);
    }

    path.reverse();
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open_board(size: usize, start: Hex, goal: Hex) -> Board {
        Board::new(size, start, goal).unwrap()
    }

    fn assert_valid_path(board: &Board, path: &[Hex]) {
        assert_eq!(path.first(), Some(&board.start()));
        assert_eq!(path.last(), Some(&board.goal()));
        for pair in path.windows(2) {
            assert!(pair[0].is_neighbor(pair[1]), "{:?} -> {:?}", pair[0], pair[1]);
            assert!(!board.is_blocked(pair[1]));
        }
    }

    #[test]
    fn test_three_by_three_corner_to_corner() {
        let board = open_board(3, Hex::new(0, 0), Hex::new(2, 2));
        let result = find_path(&board).unwrap();

        // (0,0) and (2,2) lie along a same-sign diagonal: four single steps.
        assert_eq!(result.cost(), 4);
        assert_eq!(result.path.len(), 5);
        assert_valid_path(&board, &result.path);
    }

    #[test]
    fn test_anti_diagonal_is_short() {
        let board = open_board(3, Hex::new(0, 2), Hex::new(2, 0));
        let result = find_path(&board).unwrap();
        assert_eq!(result.cost(), 2);
        assert_eq!(
            result.path,
            vec![Hex::new(0, 2), Hex::new(1, 1), Hex::new(2, 0)]
        );
    }

    #[test]
    fn test_cost_map_matches_path() {
        let board = open_board(5, Hex::new(0, 0), Hex::new(4, 2));
        let result = find_path(&board).unwrap();

        for (i, hex) in result.path.iter().enumerate() {
            assert_eq!(result.cost_so_far[hex], i as u32);
        }
        assert_eq!(result.cost_so_far[&board.goal()], result.cost());
    }

    #[test]
    fn test_path_around_wall() {
        // Column 1 blocked except the bottom row.
        let board = Board::from_cells(
            4,
            [
                (CellState::Start, 0, 0),
                (CellState::Goal, 0, 3),
                (CellState::Blocked, 0, 1),
                (CellState::Blocked, 1, 1),
                (CellState::Blocked, 2, 1),
                (CellState::Blocked, 1, 2),
                (CellState::Blocked, 2, 2),
            ],
        )
        .unwrap();
        let result = find_path(&board).unwrap();
        assert_valid_path(&board, &result.path);
        assert!(result.cost() > Hex::new(0, 0).distance_to(Hex::new(0, 3)));
    }

    #[test]
    fn test_no_path() {
        let board = Board::from_cells(
            3,
            [
                (CellState::Start, 0, 0),
                (CellState::Goal, 2, 2),
                (CellState::Blocked, 0, 1),
                (CellState::Blocked, 1, 0),
            ],
        )
        .unwrap();
        assert_eq!(
            find_path(&board).unwrap_err(),
            SearchError::NoPathFound {
                start: Hex::new(0, 0),
                goal: Hex::new(2, 2)
            }
        );
    }

    #[test]
    fn test_solve_reports_invalid_board() {
        let err = solve(3, [(CellState::Start, 0, 0)]).unwrap_err();
        assert!(matches!(err, SearchError::InvalidBoard(_)));
    }

    #[test]
    fn test_adjacent_endpoints() {
        let board = open_board(2, Hex::new(0, 1), Hex::new(1, 0));
        let result = find_path(&board).unwrap();
        assert_eq!(result.path, vec![Hex::new(0, 1), Hex::new(1, 0)]);
        assert_eq!(result.cost(), 1);
    }

    #[test]
    fn test_reconstruct_missing_link() {
        let came_from = FxHashMap::default();
        assert_eq!(
            reconstruct_path(&came_from, Hex::new(0, 0), Hex::new(1, 1)).unwrap_err(),
            SearchError::DisconnectedGoal(Hex::new(1, 1))
        );
    }

    #[test]
    fn test_reconstruct_cycle() {
        let mut came_from = FxHashMap::default();
        came_from.insert(Hex::new(1, 1), Hex::new(1, 2));
        came_from.insert(Hex::new(1, 2), Hex::new(1, 1));
        assert_eq!(
            reconstruct_path(&came_from, Hex::new(0, 0), Hex::new(1, 1)).unwrap_err(),
            SearchError::DisconnectedGoal(Hex::new(1, 1))
        );
    }

    #[test]
    fn test_frontier_order() {
        let mut heap = BinaryHeap::new();
        let node = |f, seq| OpenNode { f, g: 0, seq, hex: Hex::new(0, 0) };
        heap.push(node(5, 0));
        heap.push(node(3, 2));
        heap.push(node(3, 1));
        heap.push(node(4, 3));
        let order: Vec<(u32, u64)> = std::iter::from_fn(|| heap.pop().map(|n| (n.f, n.seq))).collect();
        assert_eq!(order, vec![(3, 1), (3, 2), (4, 3), (5, 0)]);
    }
}
