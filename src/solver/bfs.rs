use crate::search::{SearchContext, SearchOutcome};
use crate::solver::dfs::FrontierEntry;
use crate::solver::GridSolver;
use crate::{Cell, Maze, PathResult, BFS_DIRECTIONS};
use std::collections::VecDeque;

/// Breadth-first search over a FIFO queue. Cells are marked visited when enqueued, so the first
/// time the goal is dequeued it carries a path with the fewest possible steps.
#[derive(Clone, Copy, Debug, Default)]
pub struct BfsSolver;

impl GridSolver for BfsSolver {
    fn name(&self) -> &'static str {
        "breadth-first"
    }

    fn search(&self, maze: &Maze, start: Cell, goal: Cell) -> SearchOutcome {
        let mut ct = SearchContext::new(start);
        let mut queue = VecDeque::from([FrontierEntry { index: 0, steps: 0 }]);
        while let Some(FrontierEntry { index, steps }) = queue.pop_front() {
            let current = ct.expand(index);
            if current == goal {
                let path = ct.reverse_path(index);
                debug_assert_eq!(path.len(), steps + 1);
                return ct.finish(PathResult::found(path));
            }
            for n in maze.open_neighbors(current, &BFS_DIRECTIONS) {
                if let Some(i) = ct.discover(n, index) {
                    queue.push_back(FrontierEntry {
                        index: i,
                        steps: steps + 1,
                    });
                }
            }
        }
        ct.finish(PathResult::NotFound)
    }
}
