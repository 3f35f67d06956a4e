use crate::search::{SearchContext, SearchOutcome};
use crate::solver::GridSolver;
use crate::{Cell, Maze, PathResult, DFS_DIRECTIONS};

/// Frontier entry of the uninformed strategies: arena slot of the cell and steps taken to it.
#[derive(Clone, Copy, Debug)]
pub(crate) struct FrontierEntry {
    pub index: usize,
    /// Only read by the debug check that the rebuilt path has this many steps.
    pub steps: usize,
}

/// Depth-first search over an explicit stack. Neighbours are marked visited when pushed, so
/// each open cell enters the stack at most once. The path returned is the chain of first
/// discoverers, which is some path to the goal but not necessarily a shortest one.
#[derive(Clone, Copy, Debug, Default)]
pub struct DfsSolver;

impl GridSolver for DfsSolver {
    fn name(&self) -> &'static str {
        "depth-first"
    }

    fn search(&self, maze: &Maze, start: Cell, goal: Cell) -> SearchOutcome {
        let mut ct = SearchContext::new(start);
        let mut stack = vec![FrontierEntry { index: 0, steps: 0 }];
        while let Some(FrontierEntry { index, steps }) = stack.pop() {
            let current = ct.expand(index);
            if current == goal {
                let path = ct.reverse_path(index);
                debug_assert_eq!(path.len(), steps + 1);
                return ct.finish(PathResult::found(path));
            }
            for n in maze.open_neighbors(current, &DFS_DIRECTIONS) {
                if let Some(i) = ct.discover(n, index) {
                    stack.push(FrontierEntry {
                        index: i,
                        steps: steps + 1,
                    });
                }
            }
        }
        ct.finish(PathResult::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn follows_last_pushed_branch() {
        // Rows grow downwards on screen here, so North (row + 1) is the line below.
        let maze: Maze = "S..\n...\n..G".parse().unwrap();
        let outcome = DfsSolver.search(&maze, maze.start(), maze.goal());
        // North is pushed after East, so the branch down the first column is taken first.
        assert_eq!(
            outcome.result.path().unwrap(),
            &[
                Cell::new(0, 0),
                Cell::new(1, 0),
                Cell::new(2, 0),
                Cell::new(2, 1),
                Cell::new(2, 2)
            ]
        );
        assert_eq!(outcome.result.cost(), Some(4));
    }

    #[test]
    fn detour_around_wall() {
        // S....
        // ####.
        // G....
        let maze: Maze = "S....\n####.\nG....".parse().unwrap();
        let result = DfsSolver.get_path(&maze);
        assert_eq!(result.cost(), Some(10));
        assert!(result.is_valid_on(&maze));
    }

    #[test]
    fn path_need_not_be_shortest() {
        // ....
        // S..G
        // ....
        let maze: Maze = "....\nS..G\n....".parse().unwrap();
        let outcome = DfsSolver.search(&maze, maze.start(), maze.goal());
        assert_eq!(
            outcome.result.path().unwrap(),
            &[
                Cell::new(1, 0),
                Cell::new(2, 0),
                Cell::new(2, 1),
                Cell::new(2, 2),
                Cell::new(1, 2),
                Cell::new(1, 3)
            ]
        );
        assert_eq!(outcome.result.cost(), Some(5));
        assert_eq!(outcome.explored.len(), 9);
    }

    #[test]
    fn unreachable_goal() {
        let maze: Maze = "S.#.\n..#G".parse().unwrap();
        let outcome = DfsSolver.search(&maze, maze.start(), maze.goal());
        assert_eq!(outcome.result, PathResult::NotFound);
        assert_eq!(outcome.explored.len(), 4);
    }
}
