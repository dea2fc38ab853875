//! Dijkstra directly on the Maze, without any priority structure

use super::Search;
use crate::{maze::Maze, Cost, InvalidGrid, Point, PointMap, Result};

/// Searches the cheapest Path from `source` to `target` on the Maze itself.
///
/// Every iteration scans the whole Maze in row-major order for the unvisited Point with the
/// lowest known Cost, so ties go to the lowest row, then the lowest column. This makes one
/// search `O((rows * cols)²)`.
///
/// Fails only if `source` or `target` is outside the Maze. If either is a Wall, the target is
/// simply not reachable.
///
/// ## Examples
/// ```
/// # use weighted_maze::{prelude::*, search::dense::dijkstra_search};
/// let maze = Maze::parse("S 5 E\n. . .").unwrap();
///
/// let search = dijkstra_search(&maze, maze.start(), maze.end()).unwrap();
///
/// assert!(search.is_found());
/// assert_eq!(search.cost(), Some(4));
/// assert_eq!(search.predecessors()[&(0, 2)], (1, 2));
/// ```
pub fn dijkstra_search(maze: &Maze, source: Point, target: Point) -> Result<Search> {
    for point in [source, target] {
        if !maze.in_bounds(point) {
            return Err(InvalidGrid::OutOfBounds(point).into());
        }
    }

    let cols = maze.cols();
    let index = |(row, col): Point| row * cols + col;

    let mut predecessors = PointMap::default();
    if !maze.is_traversable(source) {
        return Ok(Search::unreachable(predecessors, 0));
    }

    let mut distances: Vec<Option<Cost>> = vec![None; maze.len()];
    let mut visited = vec![false; maze.len()];
    distances[index(source)] = Some(0);

    for count in 0..maze.len() {
        let mut next: Option<(Point, Cost)> = None;
        for point in maze.points() {
            let i = index(point);
            if visited[i] {
                continue;
            }
            if let Some(cost) = distances[i] {
                if next.map_or(true, |(_, best)| cost < best) {
                    next = Some((point, cost));
                }
            }
        }

        let (current, current_cost) = match next {
            Some(next) => next,
            None => return Ok(Search::unreachable(predecessors, count)),
        };
        visited[index(current)] = true;
        log::trace!("finalized {:?} at cost {}", current, current_cost);

        if current == target {
            return Ok(Search::reached(current_cost, predecessors, count + 1));
        }

        for other in maze.traversable_neighbors(current) {
            let i = index(other);
            if visited[i] {
                continue;
            }
            let delta_cost = match maze.cost_of(other) {
                Some(cost) => cost,
                None => continue,
            };
            // cannot overflow, Maze::new rejects grids whose total Cost does not fit
            let other_cost = current_cost + delta_cost;
            if distances[i].map_or(true, |prev_cost| other_cost < prev_cost) {
                distances[i] = Some(other_cost);
                predecessors.insert(other, current);
            }
        }
    }

    Ok(Search::unreachable(predecessors, maze.len()))
}
