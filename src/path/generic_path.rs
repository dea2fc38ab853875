use crate::{neighbors::Dir, Cost};

/// A sequence of Points from a Start to a Goal together with its total Cost.
///
/// The first element is always the Start and the last element the Goal.
/// Note that the individual costs of the steps within the Path cannot be retrieved through this struct.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Path<P> {
    path: Vec<P>,
    cost: Cost,
}

impl<P> Path<P> {
    /// creates a new Path with the given sequence of Points and total Cost
    /// ## Examples
    /// Basic usage:
    /// ```
    /// # use weighted_maze::path::Path;
    /// let path = Path::new(vec!['a', 'b', 'c'], 42);
    ///
    /// assert_eq!(path.len(), 3);
    /// assert_eq!(path.cost(), 42);
    /// ```
    pub fn new(path: Vec<P>, cost: Cost) -> Path<P> {
        Path { path, cost }
    }

    /// The total Cost of walking this Path
    pub fn cost(&self) -> Cost {
        self.cost
    }

    /// The number of Points, including Start and Goal
    pub fn len(&self) -> usize {
        self.path.len()
    }

    /// `true` if the Path has no Points
    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }

    /// Returns an Iterator over the Path
    pub fn iter(&self) -> std::slice::Iter<'_, P> {
        self.path.iter()
    }

    /// The Points strictly between Start and Goal
    pub fn inner(&self) -> &[P] {
        if self.path.len() <= 2 {
            &[]
        } else {
            &self.path[1..self.path.len() - 1]
        }
    }

    /// Consumes the Path, returning its Points
    pub fn into_vec(self) -> Vec<P> {
        self.path
    }
}

impl Path<crate::Point> {
    /// The direction of every step along the Path
    ///
    /// ## Examples
    /// ```
    /// # use weighted_maze::{path::Path, neighbors::Dir};
    /// let path = Path::new(vec![(0, 0), (0, 1), (1, 1)], 2);
    ///
    /// assert_eq!(path.directions(), vec![Some(Dir::Right), Some(Dir::Down)]);
    /// ```
    pub fn directions(&self) -> Vec<Option<Dir>> {
        self.path
            .windows(2)
            .map(|step| Dir::between(step[0], step[1]))
            .collect()
    }

    /// `true` if every consecutive pair of Points is one step apart
    pub fn is_connected(&self) -> bool {
        self.directions().iter().all(Option::is_some)
    }
}

use std::ops::{Deref, Index};

impl<P> Index<usize> for Path<P> {
    type Output = P;
    fn index(&self, index: usize) -> &P {
        &self.path[index]
    }
}

impl<P> Deref for Path<P> {
    type Target = [P];
    fn deref(&self) -> &[P] {
        &self.path
    }
}

impl<P: PartialEq> PartialEq<Vec<P>> for Path<P> {
    fn eq(&self, rhs: &Vec<P>) -> bool {
        self.path == *rhs
    }
}

impl<'a, P> IntoIterator for &'a Path<P> {
    type Item = &'a P;
    type IntoIter = std::slice::Iter<'a, P>;
    fn into_iter(self) -> Self::IntoIter {
        self.path.iter()
    }
}

use std::fmt;
impl<P: fmt::Debug> fmt::Display for Path<P> {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        write!(fmt, "Path[Cost = {}]: ", self.cost)?;
        if self.path.is_empty() {
            write!(fmt, "<empty>")
        } else {
            write!(fmt, "{:?}", self.path[0])?;
            for p in self.path.iter().skip(1) {
                write!(fmt, " -> {:?}", p)?;
            }
            Ok(())
        }
    }
}
