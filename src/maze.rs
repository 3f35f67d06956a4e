use crate::error::{MalformedGrid, Marker, MazeError};
use crate::neighbor::{neighbor, Direction};
use crate::solver::Strategy;
use crate::{Cell, PathResult};
use core::fmt;
use core::str::FromStr;
use grid_util::grid::{BoolGrid, ValueGrid};
use log::info;
use petgraph::unionfind::UnionFind;

/// State of a single maze cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CellState {
    Open,
    Wall,
}

/// [Maze] is the read-only grid every search runs on. Walls are stored in a [BoolGrid]
/// (`true` is a wall) indexed with the column as x and the row as y. Connected components of
/// open cells are computed once at construction in a [UnionFind] so reachability can be
/// answered without searching.
///
/// A maze is never mutated after construction, so one instance can be shared between any
/// number of concurrent searches.
#[derive(Clone, Debug)]
pub struct Maze {
    walls: BoolGrid,
    rows: usize,
    cols: usize,
    start: Cell,
    goal: Cell,
    components: UnionFind<usize>,
}

impl Maze {
    /// Builds a maze from rows of cell states. Every row must have the same, non-zero length and
    /// both endpoints must be open cells inside the grid.
    pub fn from_rows(
        layout: Vec<Vec<CellState>>,
        start: Cell,
        goal: Cell,
    ) -> Result<Maze, MazeError> {
        let rows = layout.len();
        let cols = layout.first().map_or(0, |r| r.len());
        if rows == 0 || cols == 0 {
            return Err(MalformedGrid::Empty.into());
        }
        check_extent(rows, cols)?;
        let mut walls = BoolGrid::new(cols, rows, false);
        for (row, states) in layout.iter().enumerate() {
            if states.len() != cols {
                return Err(MalformedGrid::JaggedRows {
                    row,
                    expected: cols,
                    found: states.len(),
                }
                .into());
            }
            for (col, state) in states.iter().enumerate() {
                walls.set(col as i32, row as i32, *state == CellState::Wall);
            }
        }
        let mut maze = Maze {
            walls,
            rows,
            cols,
            start,
            goal,
            components: UnionFind::new(rows * cols),
        };
        maze.check_endpoint(Marker::Start, start)?;
        maze.check_endpoint(Marker::Goal, goal)?;
        maze.generate_components();
        Ok(maze)
    }

    /// A maze without walls.
    pub fn open(rows: usize, cols: usize, start: Cell, goal: Cell) -> Result<Maze, MazeError> {
        check_extent(rows, cols)?;
        Maze::from_rows(vec![vec![CellState::Open; cols]; rows], start, goal)
    }

    fn check_endpoint(&self, marker: Marker, cell: Cell) -> Result<(), MazeError> {
        if !self.in_bounds(cell) {
            return Err(MalformedGrid::EndpointOutOfBounds { marker, cell }.into());
        }
        if self.wall_at(cell) {
            return Err(MalformedGrid::EndpointIsWall { marker, cell }.into());
        }
        Ok(())
    }

    /// Links every open cell to its open East and North neighbours.
    fn generate_components(&mut self) {
        let dimensions = self.dimensions();
        for row in 0..self.rows {
            for col in 0..self.cols {
                let cell = Cell::new(row, col);
                if self.wall_at(cell) {
                    continue;
                }
                for dir in [Direction::East, Direction::North] {
                    if let Some(n) = neighbor(dimensions, cell, dir) {
                        if !self.wall_at(n) {
                            let (a, b) = (self.ix(cell), self.ix(n));
                            self.components.union(a, b);
                        }
                    }
                }
            }
        }
    }

    fn ix(&self, cell: Cell) -> usize {
        cell.row * self.cols + cell.col
    }

    /// Caller guarantees `cell` is in bounds; [check_extent] keeps both coordinates within i32.
    fn wall_at(&self, cell: Cell) -> bool {
        self.walls.get(cell.col as i32, cell.row as i32)
    }

    pub fn in_bounds(&self, cell: Cell) -> bool {
        cell.row < self.rows && cell.col < self.cols
    }

    fn check_bounds(&self, cell: Cell) -> Result<(), MazeError> {
        if self.in_bounds(cell) {
            Ok(())
        } else {
            Err(MazeError::OutOfBounds {
                cell,
                rows: self.rows,
                cols: self.cols,
            })
        }
    }

    /// Grid size as (rows, columns).
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }
    pub fn rows(&self) -> usize {
        self.rows
    }
    pub fn cols(&self) -> usize {
        self.cols
    }
    pub fn start(&self) -> Cell {
        self.start
    }
    pub fn goal(&self) -> Cell {
        self.goal
    }

    pub fn cell_state(&self, row: usize, col: usize) -> Result<CellState, MazeError> {
        self.state(Cell::new(row, col))
    }

    pub fn state(&self, cell: Cell) -> Result<CellState, MazeError> {
        self.check_bounds(cell)?;
        Ok(if self.wall_at(cell) {
            CellState::Wall
        } else {
            CellState::Open
        })
    }

    /// True if `cell` is inside the maze and not a wall.
    pub fn is_open(&self, cell: Cell) -> bool {
        self.in_bounds(cell) && !self.wall_at(cell)
    }

    pub fn open_cell_count(&self) -> usize {
        (0..self.rows)
            .flat_map(|row| (0..self.cols).map(move |col| Cell::new(row, col)))
            .filter(|&c| !self.wall_at(c))
            .count()
    }

    /// The adjacent cell in `direction`, or [None] at the maze border. Walls are not filtered.
    pub fn neighbor(&self, cell: Cell, direction: Direction) -> Option<Cell> {
        neighbor(self.dimensions(), cell, direction)
    }

    /// Neighbours of `cell` that are not walls, visited in the given direction order.
    pub fn open_neighbors<'a>(
        &'a self,
        cell: Cell,
        directions: &'a [Direction],
    ) -> impl Iterator<Item = Cell> + 'a {
        directions
            .iter()
            .filter_map(move |&dir| self.neighbor(cell, dir))
            .filter(move |&n| !self.wall_at(n))
    }

    /// Retrieves the component id a given [Cell] belongs to.
    pub fn component(&self, cell: Cell) -> Result<usize, MazeError> {
        self.check_bounds(cell)?;
        Ok(self.components.find(self.ix(cell)))
    }

    /// Checks if two open cells are on the same component. Walls and cells outside the maze are
    /// reachable from nothing.
    pub fn reachable(&self, a: &Cell, b: &Cell) -> bool {
        self.is_open(*a) && self.is_open(*b) && self.components.equiv(self.ix(*a), self.ix(*b))
    }

    /// Runs `strategy` from the maze's start to its goal.
    pub fn solve(&self, strategy: Strategy) -> PathResult {
        self.solve_unchecked(strategy, self.start, self.goal)
    }

    /// Runs `strategy` between two arbitrary open cells.
    pub fn solve_between(
        &self,
        strategy: Strategy,
        start: Cell,
        goal: Cell,
    ) -> Result<PathResult, MazeError> {
        self.check_bounds(start)?;
        self.check_bounds(goal)?;
        for (marker, cell) in [(Marker::Start, start), (Marker::Goal, goal)] {
            if self.wall_at(cell) {
                return Err(MalformedGrid::EndpointIsWall { marker, cell }.into());
            }
        }
        Ok(self.solve_unchecked(strategy, start, goal))
    }

    fn solve_unchecked(&self, strategy: Strategy, start: Cell, goal: Cell) -> PathResult {
        if !self.reachable(&start, &goal) {
            info!("{} is not reachable from {}", goal, start);
            return PathResult::NotFound;
        }
        strategy.solver().solve(self, start, goal)
    }

    fn symbol(&self, cell: Cell) -> char {
        if cell == self.start {
            'S'
        } else if cell == self.goal {
            'G'
        } else if self.wall_at(cell) {
            '#'
        } else {
            '.'
        }
    }

    /// Renders the maze like [Display](fmt::Display) with every path cell that is not an
    /// endpoint drawn as `*`.
    pub fn render_path(&self, path: &[Cell]) -> String {
        let mut out = String::with_capacity((self.cols + 1) * self.rows);
        for row in 0..self.rows {
            for col in 0..self.cols {
                let cell = Cell::new(row, col);
                let c = self.symbol(cell);
                out.push(if c == '.' && path.contains(&cell) { '*' } else { c });
            }
            out.push('\n');
        }
        out
    }
}

/// [BoolGrid] addresses cells with i32 coordinates.
fn check_extent(rows: usize, cols: usize) -> Result<(), MalformedGrid> {
    if i32::try_from(rows).is_err() || i32::try_from(cols).is_err() {
        return Err(MalformedGrid::TooLarge { rows, cols });
    }
    Ok(())
}

impl fmt::Display for Maze {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in 0..self.rows {
            let line = (0..self.cols)
                .map(|col| self.symbol(Cell::new(row, col)))
                .collect::<String>();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

/// Parses a layout with one line per row: `S` marks the start, `G` the goal, `.` and `0` are
/// open and anything else, whitespace included, is a wall. Empty lines are ignored.
impl FromStr for Maze {
    type Err = MazeError;

    fn from_str(s: &str) -> Result<Maze, MazeError> {
        let mut start = None;
        let mut goal = None;
        let mut layout = Vec::new();
        for line in s.lines().map(|l| l.trim_end_matches('\r')) {
            if line.is_empty() {
                continue;
            }
            let row = layout.len();
            let mut states = Vec::with_capacity(line.len());
            for (col, c) in line.chars().enumerate() {
                let marker = match c {
                    'S' => Some((Marker::Start, &mut start)),
                    'G' => Some((Marker::Goal, &mut goal)),
                    _ => None,
                };
                if let Some((marker, slot)) = marker {
                    if slot.replace(Cell::new(row, col)).is_some() {
                        return Err(MalformedGrid::DuplicateMarker(marker).into());
                    }
                }
                states.push(match c {
                    'S' | 'G' | '.' | '0' => CellState::Open,
                    _ => CellState::Wall,
                });
            }
            layout.push(states);
        }
        if layout.is_empty() {
            return Err(MalformedGrid::Empty.into());
        }
        let start = start.ok_or(MalformedGrid::MissingMarker(Marker::Start))?;
        let goal = goal.ok_or(MalformedGrid::MissingMarker(Marker::Goal))?;
        Maze::from_rows(layout, start, goal)
    }
}
