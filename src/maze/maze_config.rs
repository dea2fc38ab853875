use crate::Cost;

/// Options for building a [`Maze`](crate::maze::Maze)
///
/// Default options:
/// ```
/// # use weighted_maze::maze::MazeConfig;
/// assert_eq!(
///     MazeConfig {
///         max_dimension: 50,
///         default_cost: 1,
///     },
///     Default::default()
/// );
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MazeConfig {
    /// The maximum number of rows and of columns (defaults to `50`)
    ///
    /// Larger Mazes are rejected with [`InvalidGrid::TooLarge`](crate::InvalidGrid::TooLarge).
    /// The dense search scans the whole Maze for every expanded Cell, so its running time
    /// grows with the square of the Cell count.
    pub max_dimension: usize,
    /// The Cost of Cells that don't specify one, and of the End Cell (defaults to `1`)
    pub default_cost: Cost,
}

impl MazeConfig {
    /// The limits of the interactive maze solvers this crate replaces
    ///
    /// Values:
    /// ```
    /// # use weighted_maze::maze::MazeConfig;
    /// assert_eq!(
    ///     MazeConfig {
    ///         max_dimension: 50,
    ///         default_cost: 1,
    ///     },
    ///     MazeConfig::LEGACY
    /// );
    /// ```
    pub const LEGACY: MazeConfig = MazeConfig {
        max_dimension: 50,
        default_cost: 1,
    };
    /// No limit on the size of a Maze
    ///
    /// Only use this with [`Algorithm::Frontier`](crate::Algorithm::Frontier) for large Mazes.
    pub const UNBOUNDED: MazeConfig = MazeConfig {
        max_dimension: usize::MAX,
        default_cost: 1,
    };
}

impl Default for MazeConfig {
    fn default() -> MazeConfig {
        MazeConfig::LEGACY
    }
}
