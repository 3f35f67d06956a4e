//! Errors raised while building or querying a [Maze](crate::Maze).
//!
//! A search that fails to reach its goal is not an error: it yields
//! [PathResult::NotFound](crate::PathResult::NotFound).
use crate::Cell;
use core::fmt;

/// One of the two endpoint markers of a maze.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Marker {
    Start,
    Goal,
}

impl Marker {
    /// The character used for this marker in a maze layout.
    pub fn symbol(&self) -> char {
        match self {
            Marker::Start => 'S',
            Marker::Goal => 'G',
        }
    }
}

impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Marker::Start => write!(f, "start"),
            Marker::Goal => write!(f, "goal"),
        }
    }
}

/// Reasons a maze layout is rejected at construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MalformedGrid {
    /// The layout has no rows or no columns.
    Empty,
    /// The grid is too large to address with i32 coordinates.
    TooLarge { rows: usize, cols: usize },
    /// A row differs in length from the first row.
    JaggedRows {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// The layout has no start or no goal marker.
    MissingMarker(Marker),
    /// The layout has more than one start or goal marker.
    DuplicateMarker(Marker),
    /// The start or goal lies outside the grid.
    EndpointOutOfBounds { marker: Marker, cell: Cell },
    /// The start or goal lies on a wall.
    EndpointIsWall { marker: Marker, cell: Cell },
}

impl fmt::Display for MalformedGrid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            MalformedGrid::Empty => write!(f, "maze has no cells"),
            MalformedGrid::TooLarge { rows, cols } => {
                write!(f, "maze of {rows}x{cols} cells is too large")
            }
            MalformedGrid::JaggedRows {
                row,
                expected,
                found,
            } => write!(
                f,
                "row {row} has {found} columns, expected {expected} like the first row"
            ),
            MalformedGrid::MissingMarker(marker) => {
                write!(f, "no {marker} marker '{}' in maze", marker.symbol())
            }
            MalformedGrid::DuplicateMarker(marker) => {
                write!(f, "more than one {marker} marker '{}' in maze", marker.symbol())
            }
            MalformedGrid::EndpointOutOfBounds { marker, cell } => {
                write!(f, "{marker} {cell} lies outside the maze")
            }
            MalformedGrid::EndpointIsWall { marker, cell } => {
                write!(f, "{marker} {cell} lies on a wall")
            }
        }
    }
}

/// Errors produced by [Maze](crate::Maze) construction and accessors.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MazeError {
    /// A coordinate outside `[0, rows) x [0, cols)`.
    OutOfBounds { cell: Cell, rows: usize, cols: usize },
    /// The layout could not be turned into a maze.
    Malformed(MalformedGrid),
}

impl MazeError {
    pub fn is_malformed(&self) -> bool {
        matches!(self, MazeError::Malformed(_))
    }
}

impl From<MalformedGrid> for MazeError {
    fn from(reason: MalformedGrid) -> MazeError {
        MazeError::Malformed(reason)
    }
}

impl fmt::Display for MazeError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            MazeError::OutOfBounds { cell, rows, cols } => {
                write!(f, "cell {cell} is outside the {rows}x{cols} maze")
            }
            MazeError::Malformed(reason) => write!(f, "malformed maze: {reason}"),
        }
    }
}

impl std::error::Error for MazeError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        let err = MazeError::OutOfBounds {
            cell: Cell::new(3, 0),
            rows: 3,
            cols: 3,
        };
        assert_eq!(err.to_string(), "cell (3, 0) is outside the 3x3 maze");
        assert!(!err.is_malformed());

        let err: MazeError = MalformedGrid::MissingMarker(Marker::Goal).into();
        assert!(err.is_malformed());
        assert_eq!(err.to_string(), "malformed maze: no goal marker 'G' in maze");
    }
}
