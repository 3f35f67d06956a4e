use core::fmt;

/// A coordinate on the maze, addressed as (row, column). Cells are plain values: equality and
/// hashing are by coordinate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
}

impl Cell {
    pub const fn new(row: usize, col: usize) -> Cell {
        Cell { row, col }
    }

    /// Number of cardinal steps between two cells when no walls are in the way.
    pub fn manhattan_distance(&self, other: &Cell) -> usize {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }

    /// Straight-line distance between the coordinates of two cells.
    pub fn euclidean_distance(&self, other: &Cell) -> f64 {
        let d_row = self.row.abs_diff(other.row) as f64;
        let d_col = self.col.abs_diff(other.col) as f64;
        (d_row * d_row + d_col * d_col).sqrt()
    }

    /// True if the cells differ by exactly one row or exactly one column, but not both.
    pub fn is_adjacent(&self, other: &Cell) -> bool {
        self.manhattan_distance(other) == 1
    }
}

impl From<(usize, usize)> for Cell {
    fn from((row, col): (usize, usize)) -> Cell {
        Cell::new(row, col)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distances() {
        let a = Cell::new(0, 0);
        let b = Cell::new(3, 4);
        assert_eq!(a.manhattan_distance(&b), 7);
        assert_eq!(b.manhattan_distance(&a), 7);
        assert!((a.euclidean_distance(&b) - 5.0).abs() < 1e-12);
    }

    #[test]
    fn adjacency_excludes_diagonals() {
        let c = Cell::new(1, 1);
        assert!(c.is_adjacent(&Cell::new(1, 2)));
        assert!(c.is_adjacent(&Cell::new(0, 1)));
        assert!(!c.is_adjacent(&Cell::new(2, 2)));
        assert!(!c.is_adjacent(&c));
    }
}
