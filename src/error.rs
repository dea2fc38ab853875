use crate::Point;
use std::fmt;

/// A shorthand for Results with a [`MazeError`]
pub type Result<T> = std::result::Result<T, MazeError>;

/// The Errors that can occur while building or solving a Maze.
///
/// Note that an unreachable End is **not** an Error. It is reported through
/// [`Search::is_found`](crate::Search::is_found) instead.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MazeError {
    /// The Maze was rejected before any search started
    InvalidGrid(InvalidGrid),
    /// Following the predecessors from the End did not lead back to the Start.
    ///
    /// This can only happen if the search itself is broken.
    BrokenPredecessorChain {
        /// the Point the reconstruction started from
        target: Point,
        /// how many steps were taken before giving up
        steps: usize,
    },
}

/// The reasons for rejecting a Maze
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InvalidGrid {
    /// The Maze has no rows or no columns
    Empty,
    /// The Maze is larger than
    /// [`MazeConfig::max_dimension`](crate::maze::MazeConfig::max_dimension)
    TooLarge {
        /// number of rows
        rows: usize,
        /// number of columns
        cols: usize,
        /// the allowed maximum for either
        max: usize,
    },
    /// A row has a different length than the first one
    RaggedRow {
        /// the offending row
        row: usize,
        /// length of the first row
        expected: usize,
        /// length of the offending row
        found: usize,
    },
    /// There is no Start Cell
    MissingStart,
    /// There is more than one Start Cell
    MultipleStarts(Point, Point),
    /// There is no End Cell
    MissingEnd,
    /// There is more than one End Cell
    MultipleEnds(Point, Point),
    /// A token in the text representation is neither a known symbol nor a non-negative Cost
    UnknownSymbol {
        /// row of the token
        row: usize,
        /// column of the token
        col: usize,
        /// the token itself
        symbol: String,
    },
    /// A Point lies outside of the Maze
    OutOfBounds(Point),
    /// The Costs of all walkable Cells add up to more than a [`Cost`](crate::Cost) can hold.
    /// The Point is the Cell at which the sum overflowed.
    CostTooLarge(Point),
}

impl fmt::Display for MazeError {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        match self {
            MazeError::InvalidGrid(reason) => write!(fmt, "invalid maze: {}", reason),
            MazeError::BrokenPredecessorChain { target, steps } => write!(
                fmt,
                "predecessor chain from {:?} did not reach the start after {} steps",
                target, steps
            ),
        }
    }
}

impl fmt::Display for InvalidGrid {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        match self {
            InvalidGrid::Empty => write!(fmt, "the maze has no cells"),
            InvalidGrid::TooLarge { rows, cols, max } => write!(
                fmt,
                "{}x{} exceeds the maximum dimension of {}",
                rows, cols, max
            ),
            InvalidGrid::RaggedRow {
                row,
                expected,
                found,
            } => write!(
                fmt,
                "row {} has {} cells, expected {}",
                row, found, expected
            ),
            InvalidGrid::MissingStart => write!(fmt, "no start cell"),
            InvalidGrid::MultipleStarts(a, b) => {
                write!(fmt, "more than one start cell: {:?} and {:?}", a, b)
            }
            InvalidGrid::MissingEnd => write!(fmt, "no end cell"),
            InvalidGrid::MultipleEnds(a, b) => {
                write!(fmt, "more than one end cell: {:?} and {:?}", a, b)
            }
            InvalidGrid::UnknownSymbol { row, col, symbol } => {
                write!(fmt, "unknown symbol {:?} at {:?}", symbol, (row, col))
            }
            InvalidGrid::OutOfBounds(point) => write!(fmt, "{:?} is outside of the maze", point),
            InvalidGrid::CostTooLarge(point) => {
                write!(fmt, "total cost overflows at {:?}", point)
            }
        }
    }
}

impl std::error::Error for MazeError {}
impl std::error::Error for InvalidGrid {}

impl From<InvalidGrid> for MazeError {
    fn from(reason: InvalidGrid) -> MazeError {
        MazeError::InvalidGrid(reason)
    }
}
