//! The Shortest-Path Solver
//!
//! Two implementations of Dijkstra's Algorithm that share the same contract:
//! given a source and a target, they report whether the target is reachable, the Cost of the
//! cheapest Path and the predecessor of every reached Point.
//!
//! Both expand Points in order of increasing Cost, breaking ties in row-major order, and
//! relax neighbors in the order up, right, down, left. As a consequence they do not only agree
//! on the Cost, but also return the same Path.

pub mod dense;
pub mod frontier;

use crate::{
    graph::Graph,
    maze::Maze,
    path::{reconstruct, Path},
    Cost, Point, PointMap, Result,
};

use std::cmp::Ordering;

/// Selects the implementation used by [`solve`]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Algorithm {
    /// Works directly on the Maze and finds the next Point by scanning every Cell.
    ///
    /// `O((rows * cols)²)`, which is fine for the small Mazes allowed by
    /// [`MazeConfig::LEGACY`](crate::maze::MazeConfig::LEGACY).
    Dense,
    /// Builds a [`Graph`] first and keeps the candidates in a binary heap.
    ///
    /// `O(n log n)` in the number of Cells.
    #[default]
    Frontier,
}

/// The raw outcome of a single search
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Search {
    found: bool,
    cost: Cost,
    predecessors: PointMap<Point>,
    visited: usize,
}

impl Search {
    pub(crate) fn reached(cost: Cost, predecessors: PointMap<Point>, visited: usize) -> Search {
        Search {
            found: true,
            cost,
            predecessors,
            visited,
        }
    }

    pub(crate) fn unreachable(predecessors: PointMap<Point>, visited: usize) -> Search {
        Search {
            found: false,
            cost: 0,
            predecessors,
            visited,
        }
    }

    /// `true` if the target was reached
    pub fn is_found(&self) -> bool {
        self.found
    }
    /// The Cost of the cheapest Path, if the target was reached
    pub fn cost(&self) -> Option<Cost> {
        if self.found {
            Some(self.cost)
        } else {
            None
        }
    }
    /// The Point every reached Point was reached from. The source has no entry.
    pub fn predecessors(&self) -> &PointMap<Point> {
        &self.predecessors
    }
    /// The number of Points whose Cost was finalized
    pub fn visited(&self) -> usize {
        self.visited
    }
}

/// The result of solving a Maze from Start to End
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Solution {
    algorithm: Algorithm,
    path: Option<Path<Point>>,
    visited: usize,
}

impl Solution {
    /// `true` if there is a Path from Start to End
    pub fn found(&self) -> bool {
        self.path.is_some()
    }
    /// The total Cost of the Path, if there is one
    pub fn cost(&self) -> Option<Cost> {
        self.path.as_ref().map(Path::cost)
    }
    /// The Path from Start to End, if there is one
    pub fn path(&self) -> Option<&Path<Point>> {
        self.path.as_ref()
    }
    /// Consumes the Solution, returning the Path
    pub fn into_path(self) -> Option<Path<Point>> {
        self.path
    }
    /// The Algorithm that produced this Solution
    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }
    /// The number of Points whose Cost was finalized during the search
    pub fn visited(&self) -> usize {
        self.visited
    }
}

/// Searches the cheapest Path from Start to End without modifying the Maze.
///
/// See [`Maze::solve`] for a version that also marks the Path on the Maze.
///
/// ## Examples
/// ```
/// use weighted_maze::{prelude::*, solve};
///
/// let maze: Maze = "
///     S 1 1
///     ## 1 1
///     1 1 E
/// "
/// .parse()
/// .unwrap();
///
/// let dense = solve(&maze, Algorithm::Dense).unwrap();
/// let frontier = solve(&maze, Algorithm::Frontier).unwrap();
///
/// assert_eq!(dense.cost(), Some(4));
/// assert_eq!(dense.path(), frontier.path());
///
/// let path = dense.path().unwrap();
/// assert_eq!(path[0], maze.start());
/// assert_eq!(path[path.len() - 1], maze.end());
/// ```
pub fn solve(maze: &Maze, algorithm: Algorithm) -> Result<Solution> {
    let (source, target) = (maze.start(), maze.end());
    log::debug!(
        "solving {}x{} maze from {:?} to {:?} using {:?}",
        maze.rows(),
        maze.cols(),
        source,
        target,
        algorithm
    );

    let search = match algorithm {
        Algorithm::Dense => dense::dijkstra_search(maze, source, target)?,
        Algorithm::Frontier => {
            let graph = Graph::from_maze(maze);
            frontier::dijkstra_search(&graph, source, target)
        }
    };

    let path = match search.cost() {
        Some(cost) => Some(reconstruct(
            search.predecessors(),
            source,
            target,
            cost,
            maze.len(),
        )?),
        None => None,
    };

    match &path {
        Some(path) => log::debug!(
            "found path of cost {} with {} steps, visited {} cells",
            path.cost(),
            path.len() - 1,
            search.visited()
        ),
        None => log::debug!("no path, visited {} cells", search.visited()),
    }

    Ok(Solution {
        algorithm,
        path,
        visited: search.visited(),
    })
}

/// An entry of a min-[`BinaryHeap`](std::collections::BinaryHeap): lowest Cost first, then
/// lowest Id.
#[derive(PartialEq, Eq, Debug)]
pub(crate) struct Element<Id>(pub Id, pub Cost);
impl<Id: Ord> PartialOrd for Element<Id> {
    fn partial_cmp(&self, rhs: &Self) -> Option<Ordering> {
        Some(self.cmp(rhs))
    }
}
impl<Id: Ord> Ord for Element<Id> {
    fn cmp(&self, rhs: &Self) -> Ordering {
        rhs.1.cmp(&self.1).then_with(|| rhs.0.cmp(&self.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BinaryHeap;

    #[test]
    fn element_order() {
        let mut heap = BinaryHeap::new();
        heap.push(Element(3, 5));
        heap.push(Element(1, 7));
        heap.push(Element(2, 5));
        heap.push(Element(0, 9));

        let order: Vec<_> = std::iter::from_fn(|| heap.pop()).collect();
        assert_eq!(
            order,
            vec![Element(2, 5), Element(3, 5), Element(1, 7), Element(0, 9)]
        );
    }

    #[test]
    fn solution_of_unreachable() {
        let maze = Maze::parse("S # E").unwrap();
        for algorithm in [Algorithm::Dense, Algorithm::Frontier] {
            let solution = solve(&maze, algorithm).unwrap();
            assert!(!solution.found());
            assert_eq!(solution.cost(), None);
            assert_eq!(solution.visited(), 1);
            assert_eq!(solution.algorithm(), algorithm);
        }
    }
}
