use crate::search::SearchOutcome;
use crate::{Cell, Maze, PathResult};
use core::fmt;
use core::str::FromStr;
use log::{debug, info, warn};

pub mod astar;
pub mod bfs;
pub mod dfs;

use astar::AstarSolver;
use bfs::BfsSolver;
use dfs::DfsSolver;

/// A search strategy over a [Maze]. Implementors only provide [search](Self::search); every
/// piece of search state lives inside that call, so a solver can be shared freely.
pub trait GridSolver {
    fn name(&self) -> &'static str;

    /// Searches from `start` to `goal` and reports the path along with the expansion order.
    fn search(&self, maze: &Maze, start: Cell, goal: Cell) -> SearchOutcome;

    /// Searches from `start` to `goal`, logging the outcome.
    fn solve(&self, maze: &Maze, start: Cell, goal: Cell) -> PathResult {
        info!("Running {} search from {} to {}", self.name(), start, goal);
        let outcome = self.search(maze, start, goal);
        match &outcome.result {
            PathResult::Found { cost, .. } => debug!(
                "{} search reached {} at cost {} after expanding {} cells",
                self.name(),
                goal,
                cost,
                outcome.explored.len()
            ),
            PathResult::NotFound if maze.reachable(&start, &goal) => warn!(
                "{} search exhausted its frontier although {} is reachable from {}",
                self.name(),
                goal,
                start
            ),
            PathResult::NotFound => debug!(
                "{} search found no path after expanding {} cells",
                self.name(),
                outcome.explored.len()
            ),
        }
        outcome.result
    }

    /// Path between the maze's own start and goal.
    fn get_path(&self, maze: &Maze) -> PathResult {
        self.solve(maze, maze.start(), maze.goal())
    }
}

/// Selects one of the built-in strategies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// Depth-first over a stack; finds a path, not necessarily the shortest.
    Unordered,
    /// Breadth-first over a queue; finds a path with the fewest steps.
    BreadthFirst,
    /// Best-first on Euclidean distance plus steps taken.
    Heuristic,
}

impl Strategy {
    pub const ALL: [Strategy; 3] = [
        Strategy::Unordered,
        Strategy::BreadthFirst,
        Strategy::Heuristic,
    ];

    pub fn solver(&self) -> Box<dyn GridSolver> {
        match self {
            Strategy::Unordered => Box::new(DfsSolver),
            Strategy::BreadthFirst => Box::new(BfsSolver),
            Strategy::Heuristic => Box::new(AstarSolver::new()),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let s = match self {
            Strategy::Unordered => "dfs",
            Strategy::BreadthFirst => "bfs",
            Strategy::Heuristic => "astar",
        };
        write!(f, "{s}")
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseStrategyError(pub String);

impl fmt::Display for ParseStrategyError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "unknown strategy '{}', expected one of dfs, bfs, astar",
            self.0
        )
    }
}

impl std::error::Error for ParseStrategyError {}

impl FromStr for Strategy {
    type Err = ParseStrategyError;

    fn from_str(s: &str) -> Result<Strategy, ParseStrategyError> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dfs" | "depth-first" | "unordered" => Ok(Strategy::Unordered),
            "bfs" | "breadth-first" => Ok(Strategy::BreadthFirst),
            "astar" | "a*" | "heuristic" | "best-first" => Ok(Strategy::Heuristic),
            _ => Err(ParseStrategyError(s.to_owned())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_round_trips_display() {
        for strategy in Strategy::ALL {
            assert_eq!(strategy.to_string().parse::<Strategy>(), Ok(strategy));
        }
        assert_eq!(" A* ".parse::<Strategy>(), Ok(Strategy::Heuristic));
        assert_eq!(
            "dijkstra".parse::<Strategy>(),
            Err(ParseStrategyError("dijkstra".to_owned()))
        );
    }

    /// Asserts that the case in which start and goal are equal is handled correctly.
    #[test]
    fn equal_start_goal() {
        let centre = Cell::new(1, 1);
        for maze in [
            Maze::open(1, 1, Cell::new(0, 0), Cell::new(0, 0)).unwrap(),
            Maze::open(3, 3, centre, centre).unwrap(),
        ] {
            for strategy in Strategy::ALL {
                let outcome = strategy.solver().search(&maze, maze.start(), maze.goal());
                assert_eq!(outcome.result, PathResult::found(vec![maze.start()]));
                assert_eq!(outcome.result.cost(), Some(0));
                assert_eq!(outcome.explored, vec![maze.start()]);
            }
        }
    }

    /// Scenario: 3x3 maze whose middle row is blocked except for its centre.
    #[test]
    fn routes_through_gap() {
        let maze: Maze = "S..\n#.#\n..G".parse().unwrap();
        for strategy in Strategy::ALL {
            let result = maze.solve(strategy);
            assert_eq!(result.cost(), Some(4), "{strategy}");
            assert!(result.path().unwrap().contains(&Cell::new(1, 1)));
            assert!(result.is_valid_on(&maze));
        }
    }

    /// A start boxed in by walls is expanded once and nothing else is discovered.
    #[test]
    fn boxed_in_start() {
        let maze: Maze = ".#..\n#S#.\n.#.G".parse().unwrap();
        for strategy in Strategy::ALL {
            let solver = strategy.solver();
            let outcome = solver.search(&maze, maze.start(), maze.goal());
            assert_eq!(outcome.result, PathResult::NotFound);
            assert_eq!(outcome.explored, vec![maze.start()]);
            assert_eq!(maze.solve(strategy), PathResult::NotFound);
        }
    }
}
