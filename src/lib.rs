//! # maze_pathfinding
//!
//! Route search between a start and a goal cell on a rectangular maze of open cells and walls.
//! Three interchangeable strategies are provided:
//! - [DfsSolver]: depth-first over a stack, returns *a* path;
//! - [BfsSolver]: breadth-first over a queue, returns a path with the fewest steps;
//! - [AstarSolver]: best-first on Euclidean distance plus steps taken.
//!
//! Every strategy consumes a read-only [Maze] and yields a [PathResult]. All search state
//! (frontier, visited set, predecessor links) is owned by a single call, so one maze may be
//! searched from several threads at once.
//!
//! ```
//! use maze_pathfinding::{Maze, Strategy};
//!
//! let maze: Maze = "S..\n#.#\n..G".parse().unwrap();
//! let result = maze.solve(Strategy::BreadthFirst);
//! assert_eq!(result.cost(), Some(4));
//! ```
mod cell;
pub mod error;
pub mod maze;
pub mod neighbor;
pub mod path;
pub mod search;
pub mod solver;

pub use cell::Cell;
pub use error::{MalformedGrid, Marker, MazeError};
pub use maze::{CellState, Maze};
pub use neighbor::{neighbor, Direction};
pub use path::PathResult;
pub use search::SearchOutcome;
pub use solver::{
    astar::AstarSolver, bfs::BfsSolver, dfs::DfsSolver, GridSolver, ParseStrategyError, Strategy,
};

use crate::neighbor::Direction::{East, North, South, West};

/// Order in which the depth-first strategy pushes neighbours.
pub const DFS_DIRECTIONS: [Direction; 4] = [East, South, North, West];
/// Order in which the breadth-first strategy enqueues neighbours.
pub const BFS_DIRECTIONS: [Direction; 4] = [East, South, North, West];
/// Order in which the heuristic strategy discovers neighbours.
pub const ASTAR_DIRECTIONS: [Direction; 4] = [East, North, South, West];
