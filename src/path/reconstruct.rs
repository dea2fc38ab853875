use super::Path;
use crate::{Cost, MazeError, Point, PointMap, Result};

/// Walks the predecessor links from `target` back to `source`.
///
/// `predecessors` maps every reached Point (except `source`) to the Point it was reached from.
/// The Path may contain at most `limit` Points, which should be the number of Cells in the
/// Maze: a chain that is longer than that must contain a cycle.
///
/// Fails with [`MazeError::BrokenPredecessorChain`] if a link is missing or the chain does not
/// reach `source` in time.
///
/// ## Examples
/// ```
/// # use weighted_maze::{path::reconstruct, PointMap};
/// let mut predecessors = PointMap::new();
/// predecessors.insert((0, 1), (0, 0));
/// predecessors.insert((1, 1), (0, 1));
///
/// let path = reconstruct(&predecessors, (0, 0), (1, 1), 2, 4).unwrap();
/// assert_eq!(path, vec![(0, 0), (0, 1), (1, 1)]);
/// assert_eq!(path.cost(), 2);
/// ```
pub fn reconstruct(
    predecessors: &PointMap<Point>,
    source: Point,
    target: Point,
    cost: Cost,
    limit: usize,
) -> Result<Path<Point>> {
    let mut steps = vec![target];
    let mut current = target;

    while current != source {
        let prev = match predecessors.get(&current) {
            Some(&prev) if steps.len() < limit => prev,
            _ => {
                log::error!(
                    "broken predecessor chain from {:?} after {} steps",
                    target,
                    steps.len() - 1
                );
                return Err(MazeError::BrokenPredecessorChain {
                    target,
                    steps: steps.len() - 1,
                });
            }
        };
        steps.push(prev);
        current = prev;
    }

    steps.reverse();
    Ok(Path::new(steps, cost))
}
