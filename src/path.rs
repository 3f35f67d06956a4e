use crate::{Cell, Maze};
use itertools::Itertools;

/// Outcome of a search. A found path runs from the start to the goal, both included, and its
/// cost is the number of steps (edges) along it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PathResult {
    Found { path: Vec<Cell>, cost: usize },
    NotFound,
}

impl PathResult {
    /// Wraps a start-to-goal path, deriving the cost from its length.
    pub fn found(path: Vec<Cell>) -> PathResult {
        let cost = path.len().saturating_sub(1);
        PathResult::Found { path, cost }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, PathResult::Found { .. })
    }

    pub fn path(&self) -> Option<&[Cell]> {
        match self {
            PathResult::Found { path, .. } => Some(path),
            PathResult::NotFound => None,
        }
    }

    pub fn cost(&self) -> Option<usize> {
        match self {
            PathResult::Found { cost, .. } => Some(*cost),
            PathResult::NotFound => None,
        }
    }

    /// Number of cells on the path, 0 if no path was found.
    pub fn len(&self) -> usize {
        self.path().map_or(0, |p| p.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn into_path(self) -> Option<Vec<Cell>> {
        match self {
            PathResult::Found { path, .. } => Some(path),
            PathResult::NotFound => None,
        }
    }

    /// Checks that a found path only visits open cells and moves one cardinal step at a time.
    /// [NotFound](PathResult::NotFound) is trivially valid.
    pub fn is_valid_on(&self, maze: &Maze) -> bool {
        match self.path() {
            Some(path) => {
                !path.is_empty()
                    && path.iter().all(|c| maze.is_open(*c))
                    && path.iter().tuple_windows().all(|(a, b)| a.is_adjacent(b))
            }
            None => true,
        }
    }
}
