//! Movement along the 4 cardinal directions

use crate::Point;

/// One of the 4 directions an Agent can step in.
///
/// The order of [`Dir::all`] (up, right, down, left) is the order in which neighbors are
/// visited, which decides between Paths of equal Cost.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Dir {
    /// towards row 0
    Up = 0,
    /// towards the last column
    Right = 1,
    /// towards the last row
    Down = 2,
    /// towards column 0
    Left = 3,
}
use self::Dir::*;

const UNIT_CIRCLE: [(isize, isize); 4] = [(-1, 0), (0, 1), (1, 0), (0, -1)];

impl Dir {
    /// All directions in neighbor order
    pub fn all() -> std::iter::Copied<std::slice::Iter<'static, Dir>> {
        [Up, Right, Down, Left].iter().copied()
    }
    /// The index of this direction in [`Dir::all`]
    pub fn num(self) -> usize {
        self as usize
    }
    /// `(row, column)` offset of one step in this direction
    pub fn offset(self) -> (isize, isize) {
        UNIT_CIRCLE[self.num()]
    }
    /// The direction of a single step from `from` to `to`, if they are adjacent
    pub fn between(from: Point, to: Point) -> Option<Dir> {
        Dir::all().find(|dir| {
            let (dr, dc) = dir.offset();
            from.0 as isize + dr == to.0 as isize && from.1 as isize + dc == to.1 as isize
        })
    }
}

/// A Neighborhood for Agents moving along the 4 cardinal directions.
///
/// Also known as [Von Neumann Neighborhood](https://en.wikipedia.org/wiki/Von_Neumann_neighborhood),
/// Manhattan Metric or [Taxicab Geometry](https://en.wikipedia.org/wiki/Taxicab_geometry).
///
/// ```no_code
/// A: Agent, o: reachable in one step
///   o
///   |
/// o-A-o
///   |
///   o
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ManhattanNeighborhood {
    rows: usize,
    cols: usize,
}

impl ManhattanNeighborhood {
    /// Creates a new ManhattanNeighborhood.
    ///
    /// `rows` and `cols` are the size of the Grid to move on.
    pub fn new(rows: usize, cols: usize) -> ManhattanNeighborhood {
        ManhattanNeighborhood { rows, cols }
    }

    /// The Point one step from `point` in `dir`, if it lies within the Grid
    pub fn step(&self, point: Point, dir: Dir) -> Option<Point> {
        let (dr, dc) = dir.offset();
        let row = point.0 as isize + dr;
        let col = point.1 as isize + dc;
        if row >= 0 && col >= 0 && (row as usize) < self.rows && (col as usize) < self.cols {
            Some((row as usize, col as usize))
        } else {
            None
        }
    }

    /// All in-bounds neighbors of `point`, in the order up, right, down, left.
    ///
    /// Note that this does not check weather the neighbors are Walls.
    pub fn get_all_neighbors(&self, point: Point) -> impl Iterator<Item = Point> + '_ {
        Dir::all().filter_map(move |dir| self.step(point, dir))
    }

    /// The number of steps between two Points, ignoring any Walls
    pub fn heuristic(&self, point: Point, goal: Point) -> usize {
        point.0.abs_diff(goal.0) + point.1.abs_diff(goal.1)
    }
}

#[test]
fn test_manhattan_get_all_neighbors() {
    let neighborhood = ManhattanNeighborhood::new(5, 5);
    assert_eq!(
        neighborhood.get_all_neighbors((0, 2)).collect::<Vec<_>>(),
        vec![(0, 3), (1, 2), (0, 1)],
    );
    assert_eq!(
        neighborhood.get_all_neighbors((2, 2)).collect::<Vec<_>>(),
        vec![(1, 2), (2, 3), (3, 2), (2, 1)],
    );
    assert_eq!(
        neighborhood.get_all_neighbors((4, 4)).collect::<Vec<_>>(),
        vec![(3, 4), (4, 3)],
    );
}

#[test]
fn test_manhattan_heuristic() {
    let neighborhood = ManhattanNeighborhood::new(5, 5);
    assert_eq!(neighborhood.heuristic((3, 1), (0, 0)), 3 + 1);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dir_order() {
        assert_eq!(Dir::all().collect::<Vec<_>>(), vec![Up, Right, Down, Left]);
        assert_eq!(Left.num(), 3);
        assert_eq!(Down.offset(), (1, 0));
    }

    #[test]
    fn between() {
        assert_eq!(Dir::between((1, 1), (0, 1)), Some(Up));
        assert_eq!(Dir::between((1, 1), (1, 0)), Some(Left));
        assert_eq!(Dir::between((1, 1), (2, 2)), None);
        assert_eq!(Dir::between((1, 1), (1, 1)), None);
    }

    #[test]
    fn step_out_of_bounds() {
        let neighborhood = ManhattanNeighborhood::new(2, 3);
        assert_eq!(neighborhood.step((0, 0), Up), None);
        assert_eq!(neighborhood.step((0, 2), Right), None);
        assert_eq!(neighborhood.step((1, 0), Down), None);
        assert_eq!(neighborhood.step((0, 2), Down), Some((1, 2)));
    }
}
