#![warn(
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unstable_features,
    unused_import_braces,
    unused_qualifications
)]

//! A crate to find the cheapest Path through a weighted Maze.
//!
//! ## Introduction
//! A Maze is a rectangular Grid of Cells. Every Cell is either a Wall, which can never be
//! walked across, or has a non-negative Cost for stepping onto it. Exactly one Cell is the
//! Start and exactly one is the End. Agents move along the 4 cardinal directions only.
//!
//! The Cost of a Path is the sum of the Costs of every Cell it steps onto. The Start's own
//! Cost is never paid (the Agent is already standing there), while the End's Cost is.
//!
//! This crate provides two interchangeable implementations of
//! [Dijkstra's Algorithm](https://en.wikipedia.org/wiki/Dijkstra%27s_algorithm):
//! - [`Algorithm::Dense`] works directly on the Grid and looks for the next Cell to expand by
//!   scanning the entire Grid. This is `O((rows * cols)²)` but needs no extra structures.
//! - [`Algorithm::Frontier`] first converts the Grid into an adjacency [`Graph`](graph::Graph)
//!   and then expands Cells in the order given by a binary heap.
//!
//! Both always agree on the total Cost. They only differ in which Path they return when
//! several Paths share the same minimal Cost.
//!
//! ## Examples
//! ```
//! use weighted_maze::prelude::*;
//!
//! // '#' = Wall, 'S' = Start, 'E' = End, '.' = default Cost, numbers = custom Cost
//! let mut maze: Maze = "
//!     S 1 1
//!     ## 1 1
//!     1 1 E
//! "
//! .parse()
//! .unwrap();
//!
//! let solution = maze.solve(Algorithm::Frontier).unwrap();
//!
//! assert!(solution.found());
//! assert_eq!(solution.cost(), Some(4));
//!
//! // the Cells between Start and End are now marked
//! assert_eq!(maze.path_cells().len(), 3);
//! ```
//!
//! Unreachable Ends are not an error:
//! ```
//! use weighted_maze::prelude::*;
//!
//! let mut maze: Maze = "
//!     S # .
//!     ## . .
//!     . . E
//! "
//! .parse()
//! .unwrap();
//!
//! let solution = maze.solve(Algorithm::Dense).unwrap();
//! assert!(!solution.found());
//! assert!(maze.path_cells().is_empty());
//! ```
//!
//! ### Configuration
//! A [`MazeConfig`](maze::MazeConfig) controls the maximum size of a Maze and the Cost of
//! Cells that don't specify one:
//! ```
//! use weighted_maze::prelude::*;
//!
//! let maze = Maze::parse_with_config(
//!     "S . . E",
//!     MazeConfig {
//!         default_cost: 3,
//!         ..MazeConfig::LEGACY
//!     },
//! )
//! .unwrap();
//!
//! assert_eq!(maze.cost_of((0, 1)), Some(3));
//! ```

/// A shorthand for Points on the grid, as `(row, column)`
pub type Point = (usize, usize);

/// A [`HashMap`](hashbrown::HashMap) keyed by [`Point`]s
pub type PointMap<V> = hashbrown::HashMap<Point, V>;
/// A [`HashSet`](hashbrown::HashSet) of [`Point`]s
pub type PointSet = hashbrown::HashSet<Point>;

/// a Type to represent the Cost of traversing a Cell
pub type Cost = usize;

mod error;
pub use self::error::{InvalidGrid, MazeError, Result};

pub mod graph;
pub mod maze;
pub mod neighbors;
pub mod path;
pub mod search;

pub use self::search::{solve, Algorithm, Search, Solution};

/// The prelude for this crate.
pub mod prelude {
    pub use crate::{
        maze::{Cell, Kind, Maze, MazeConfig},
        neighbors::{Dir, ManhattanNeighborhood},
        path::Path,
        search::{Algorithm, Search, Solution},
        Cost, MazeError, Point,
    };
}
