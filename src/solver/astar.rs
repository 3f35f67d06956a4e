//! Heuristic-guided best-first search.
//!
//! The frontier is ordered on `f = heuristic(cell, goal) + g`, where `g` counts the steps from
//! the start and the heuristic is the Euclidean distance to the goal. Entries with equal `f`
//! come out in the order they went in.
//!
//! Unlike textbook A*, a cell is marked visited as soon as it is discovered and keeps the
//! predecessor that discovered it first. Cells are never re-opened and costs are never relaxed,
//! so the returned path is not guaranteed to be a shortest one for every maze.
use crate::search::{SearchContext, SearchOutcome};
use crate::solver::GridSolver;
use crate::{Cell, Maze, PathResult, ASTAR_DIRECTIONS};
use std::cmp::Ordering;
use std::collections::BinaryHeap;

struct SmallestCostHolder {
    estimated_cost: f64,
    cost: usize,
    index: usize,
}

impl Eq for SmallestCostHolder {}

impl PartialEq for SmallestCostHolder {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl PartialOrd for SmallestCostHolder {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SmallestCostHolder {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed for the max-heap. Arena indices grow with insertion, so ties on the
        // estimate go to the entry pushed first.
        other
            .estimated_cost
            .total_cmp(&self.estimated_cost)
            .then_with(|| other.index.cmp(&self.index))
    }
}

#[derive(Clone, Debug)]
pub struct AstarSolver {
    pub heuristic_factor: f64,
}

impl AstarSolver {
    pub fn new() -> AstarSolver {
        AstarSolver {
            heuristic_factor: 1.0,
        }
    }

    /// Euclidean distance times the heuristic factor.
    pub fn heuristic(&self, cell: &Cell, goal: &Cell) -> f64 {
        cell.euclidean_distance(goal) * self.heuristic_factor
    }
}

impl Default for AstarSolver {
    fn default() -> AstarSolver {
        AstarSolver::new()
    }
}

impl GridSolver for AstarSolver {
    fn name(&self) -> &'static str {
        "heuristic"
    }

    fn search(&self, maze: &Maze, start: Cell, goal: Cell) -> SearchOutcome {
        let mut ct = SearchContext::new(start);
        let mut to_see = BinaryHeap::new();
        to_see.push(SmallestCostHolder {
            estimated_cost: self.heuristic(&start, &goal),
            cost: 0,
            index: 0,
        });
        while let Some(SmallestCostHolder { cost, index, .. }) = to_see.pop() {
            let current = ct.expand(index);
            if current == goal {
                let path = ct.reverse_path(index);
                debug_assert_eq!(path.len(), cost + 1);
                return ct.finish(PathResult::found(path));
            }
            let new_cost = cost + 1;
            for n in maze.open_neighbors(current, &ASTAR_DIRECTIONS) {
                if let Some(i) = ct.discover(n, index) {
                    to_see.push(SmallestCostHolder {
                        estimated_cost: self.heuristic(&n, &goal) + new_cost as f64,
                        cost: new_cost,
                        index: i,
                    });
                }
            }
        }
        ct.finish(PathResult::NotFound)
    }
}
