//! The Grid Model: Cells, their Kinds and Costs

mod cell;
pub use self::cell::{Cell, Kind};

mod maze_config;
pub use self::maze_config::MazeConfig;

mod text;

use crate::{
    neighbors::ManhattanNeighborhood, path::Path, search, Algorithm, Cost, InvalidGrid, Point,
    Result, Solution,
};

/// A validated rectangular Grid with exactly one Start and one End.
///
/// Cells are addressed by `(row, column)`, both starting at 0.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Maze {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
    start: Point,
    end: Point,
    config: MazeConfig,
}

impl Maze {
    /// Creates a new Maze from a list of rows, using the default [`MazeConfig`]
    ///
    /// ## Examples
    /// ```
    /// use weighted_maze::prelude::*;
    ///
    /// let maze = Maze::new(vec![
    ///     vec![Cell::start(), Cell::path(5), Cell::end(1)],
    ///     vec![Cell::wall(), Cell::path(1), Cell::path(1)],
    /// ])
    /// .unwrap();
    ///
    /// assert_eq!(maze.start(), (0, 0));
    /// assert_eq!(maze.end(), (0, 2));
    /// assert_eq!(maze.cost_of((0, 1)), Some(5));
    /// assert!(!maze.is_traversable((1, 0)));
    /// ```
    pub fn new(rows: Vec<Vec<Cell>>) -> Result<Maze> {
        Maze::with_config(rows, MazeConfig::default())
    }

    /// Creates a new Maze from a list of rows.
    ///
    /// Fails if the Maze is empty, ragged, larger than `config.max_dimension` or does not
    /// have exactly one Start and one End. It also fails if the Costs of all walkable Cells
    /// other than Start add up to more than a [`Cost`] can hold, since the cheapest Path could
    /// then overflow.
    pub fn with_config(rows: Vec<Vec<Cell>>, config: MazeConfig) -> Result<Maze> {
        let result = Maze::validate(rows, config);
        if let Err(err) = &result {
            log::warn!("rejected maze: {}", err);
        }
        result
    }

    fn validate(rows: Vec<Vec<Cell>>, config: MazeConfig) -> Result<Maze> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        if height == 0 || width == 0 {
            return Err(InvalidGrid::Empty.into());
        }
        if height > config.max_dimension || width > config.max_dimension {
            return Err(InvalidGrid::TooLarge {
                rows: height,
                cols: width,
                max: config.max_dimension,
            }
            .into());
        }

        let mut cells = Vec::with_capacity(height * width);
        let mut start = None;
        let mut end = None;
        let mut total_cost: Cost = 0;

        for (r, row) in rows.into_iter().enumerate() {
            if row.len() != width {
                return Err(InvalidGrid::RaggedRow {
                    row: r,
                    expected: width,
                    found: row.len(),
                }
                .into());
            }
            for (c, mut cell) in row.into_iter().enumerate() {
                match cell.kind() {
                    Kind::Start => match start {
                        Some(first) => {
                            return Err(InvalidGrid::MultipleStarts(first, (r, c)).into());
                        }
                        None => start = Some((r, c)),
                    },
                    Kind::End => match end {
                        Some(first) => {
                            return Err(InvalidGrid::MultipleEnds(first, (r, c)).into());
                        }
                        None => end = Some((r, c)),
                    },
                    Kind::Wall | Kind::Path => {}
                }
                if cell.kind() != Kind::Start {
                    let cost = cell.cost().unwrap_or(0);
                    total_cost = total_cost
                        .checked_add(cost)
                        .ok_or(InvalidGrid::CostTooLarge((r, c)))?;
                }
                cell.set_on_path(false);
                cells.push(cell);
            }
        }

        let start = start.ok_or(InvalidGrid::MissingStart)?;
        let end = end.ok_or(InvalidGrid::MissingEnd)?;

        Ok(Maze {
            rows: height,
            cols: width,
            cells,
            start,
            end,
            config,
        })
    }

    /// The number of rows
    pub fn rows(&self) -> usize {
        self.rows
    }
    /// The number of columns
    pub fn cols(&self) -> usize {
        self.cols
    }
    /// The total number of Cells, `rows * cols`
    pub fn len(&self) -> usize {
        self.cells.len()
    }
    /// Always `false`, since empty Mazes are rejected
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
    /// Position of the Start Cell
    pub fn start(&self) -> Point {
        self.start
    }
    /// Position of the End Cell
    pub fn end(&self) -> Point {
        self.end
    }
    /// The config this Maze was created with
    pub fn config(&self) -> &MazeConfig {
        &self.config
    }

    /// `true` if `point` lies within the Maze
    pub fn in_bounds(&self, (row, col): Point) -> bool {
        row < self.rows && col < self.cols
    }

    fn index(&self, (row, col): Point) -> usize {
        row * self.cols + col
    }

    /// The Cell at `point`, if `point` is within the Maze
    pub fn cell(&self, point: Point) -> Option<&Cell> {
        if self.in_bounds(point) {
            Some(&self.cells[self.index(point)])
        } else {
            None
        }
    }

    /// The Kind of the Cell at `point`, if `point` is within the Maze
    pub fn classify(&self, point: Point) -> Option<Kind> {
        self.cell(point).map(Cell::kind)
    }

    /// The Cost of stepping onto `point`.
    ///
    /// `None` means the Cell can never be stepped onto, either because it is a Wall or
    /// because it is outside the Maze.
    pub fn cost_of(&self, point: Point) -> Option<Cost> {
        self.cell(point).and_then(Cell::cost)
    }

    /// `true` iff `point` is within the Maze and not a Wall
    pub fn is_traversable(&self, point: Point) -> bool {
        self.cell(point).map_or(false, Cell::is_walkable)
    }

    /// The Neighborhood matching the size of this Maze
    pub fn neighborhood(&self) -> ManhattanNeighborhood {
        ManhattanNeighborhood::new(self.rows, self.cols)
    }

    /// All traversable neighbors of `point` in the order up, right, down, left
    pub fn traversable_neighbors(&self, point: Point) -> impl Iterator<Item = Point> + '_ {
        let neighborhood = self.neighborhood();
        crate::neighbors::Dir::all()
            .filter_map(move |dir| neighborhood.step(point, dir))
            .filter(move |&p| self.is_traversable(p))
    }

    /// All Points in row-major order
    pub fn points(&self) -> impl Iterator<Item = Point> {
        let cols = self.cols;
        (0..self.rows).flat_map(move |row| (0..cols).map(move |col| (row, col)))
    }

    /// `true` if the Cell at `point` is marked as part of the Path
    pub fn is_on_path(&self, point: Point) -> bool {
        self.cell(point).map_or(false, Cell::is_on_path)
    }

    /// All Points currently marked as part of the Path, in row-major order
    pub fn path_cells(&self) -> Vec<Point> {
        self.points().filter(|&p| self.is_on_path(p)).collect()
    }

    /// Removes all Path markings
    pub fn clear_path(&mut self) {
        for cell in self.cells.iter_mut() {
            cell.set_on_path(false);
        }
    }

    /// Marks every Cell of `path` except Start and End as being on the Path.
    ///
    /// Previous markings are removed first. Fails without changing anything if `path`
    /// leaves the Maze.
    pub fn mark_path(&mut self, path: &Path<Point>) -> Result<()> {
        if let Some(&outside) = path.iter().find(|&&p| !self.in_bounds(p)) {
            return Err(InvalidGrid::OutOfBounds(outside).into());
        }
        self.clear_path();
        for &point in path.iter() {
            let index = self.index(point);
            let cell = &mut self.cells[index];
            if cell.kind() == Kind::Path {
                cell.set_on_path(true);
            }
        }
        Ok(())
    }

    /// Searches the cheapest Path from Start to End and marks it on the Maze.
    ///
    /// If no Path exists, the Maze is left unchanged and the returned [`Solution`] reports
    /// `found() == false`. Solving the same Maze again yields the same Path.
    ///
    /// ## Examples
    /// ```
    /// use weighted_maze::prelude::*;
    ///
    /// let mut maze: Maze = "
    ///     S 9 E
    ///     . . .
    /// "
    /// .parse()
    /// .unwrap();
    ///
    /// let solution = maze.solve(Algorithm::Dense).unwrap();
    /// assert_eq!(solution.cost(), Some(4));
    /// assert_eq!(maze.path_cells(), vec![(1, 0), (1, 1), (1, 2)]);
    /// ```
    pub fn solve(&mut self, algorithm: Algorithm) -> Result<Solution> {
        let solution = search::solve(self, algorithm)?;
        if let Some(path) = solution.path() {
            self.mark_path(path)?;
        }
        Ok(solution)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MazeError;

    fn maze() -> Maze {
        Maze::parse(
            "
            S 2 #
            . # E
            ",
        )
        .unwrap()
    }

    #[test]
    fn predicates() {
        let maze = maze();
        assert_eq!(maze.classify((0, 2)), Some(Kind::Wall));
        assert_eq!(maze.classify((1, 2)), Some(Kind::End));
        assert_eq!(maze.classify((2, 0)), None);
        assert_eq!(maze.cost_of((0, 1)), Some(2));
        assert_eq!(maze.cost_of((1, 1)), None);
        assert_eq!(maze.cost_of((0, 3)), None);
        assert!(maze.is_traversable((1, 0)));
        assert!(!maze.is_traversable((1, 1)));
        assert!(!maze.is_traversable((5, 5)));
    }

    #[test]
    fn traversable_neighbors() {
        let maze = maze();
        assert_eq!(
            maze.traversable_neighbors((0, 1)).collect::<Vec<_>>(),
            vec![(0, 0)]
        );
        assert_eq!(
            maze.traversable_neighbors((0, 0)).collect::<Vec<_>>(),
            vec![(0, 1), (1, 0)]
        );
    }

    #[test]
    fn mark_path() {
        let mut maze = maze();
        let path = Path::new(vec![(0, 0), (0, 1), (1, 1)], 0);
        maze.mark_path(&path).unwrap();
        assert_eq!(maze.path_cells(), vec![(0, 1)]);

        let outside = Path::new(vec![(0, 0), (0, 3)], 0);
        assert_eq!(
            maze.mark_path(&outside),
            Err(MazeError::InvalidGrid(InvalidGrid::OutOfBounds((0, 3))))
        );
        assert_eq!(maze.path_cells(), vec![(0, 1)]);

        maze.clear_path();
        assert!(maze.path_cells().is_empty());
    }

    #[test]
    fn total_cost_must_fit() {
        let err = Maze::new(vec![vec![
            Cell::start(),
            Cell::path(usize::MAX),
            Cell::end(1),
        ]]);
        assert_eq!(err, Err(InvalidGrid::CostTooLarge((0, 2)).into()));

        // Start is never paid for
        let rows = vec![vec![Cell::start(), Cell::path(usize::MAX - 1), Cell::end(1)]];
        let mut rows_with_wall = rows.clone();
        rows_with_wall.push(vec![Cell::wall(), Cell::wall(), Cell::wall()]);
        assert!(Maze::new(rows).is_ok());
        assert!(Maze::new(rows_with_wall).is_ok());
    }

    #[test]
    fn marks_are_not_taken_from_input() {
        let mut cell = Cell::path(3);
        cell.set_on_path(true);
        let maze = Maze::new(vec![vec![Cell::start(), cell, Cell::end(1)]]).unwrap();
        assert!(!maze.is_on_path((0, 1)));
    }
}
