use crate::Cell;
use core::fmt;

/// The four cardinal moves on a maze. East and West change the column, North and South the
/// row. Rows are numbered so that moving North increases the row index.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    East,
    South,
    North,
    West,
}

impl Direction {
    /// Offset as (row delta, column delta).
    pub fn delta(&self) -> (isize, isize) {
        match self {
            Direction::East => (0, 1),
            Direction::South => (-1, 0),
            Direction::North => (1, 0),
            Direction::West => (0, -1),
        }
    }
    pub fn opposite(&self) -> Direction {
        match self {
            Direction::East => Direction::West,
            Direction::South => Direction::North,
            Direction::North => Direction::South,
            Direction::West => Direction::East,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let c = match self {
            Direction::East => 'E',
            Direction::South => 'S',
            Direction::North => 'N',
            Direction::West => 'W',
        };
        write!(f, "{c}")
    }
}

/// Resolves the cell one step from `cell` in `direction` on a grid of the given dimensions.
/// Returns [None] if that step leaves `[0, rows) x [0, cols)`. Walls are not consulted.
pub fn neighbor(dimensions: (usize, usize), cell: Cell, direction: Direction) -> Option<Cell> {
    let (rows, cols) = dimensions;
    let (d_row, d_col) = direction.delta();
    let row = cell.row.checked_add_signed(d_row).filter(|&r| r < rows)?;
    let col = cell.col.checked_add_signed(d_col).filter(|&c| c < cols)?;
    Some(Cell::new(row, col))
}
