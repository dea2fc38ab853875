//! Reading and printing Mazes as text
//!
//! ```no_code
//! # # 1 # #     # = Wall
//! S . 5 . E     S = Start, E = End
//! # # . # #     . = default Cost, numbers = custom Cost
//! ```

use super::{Cell, Kind, Maze, MazeConfig};
use crate::{InvalidGrid, MazeError, Result};

use std::fmt;
use std::str::FromStr;

impl Maze {
    /// Parses a Maze using the default [`MazeConfig`].
    ///
    /// Every non-empty line is a row of whitespace-separated tokens:
    /// - `#` a Wall
    /// - `S` the Start
    /// - `E` the End, costing `default_cost`
    /// - `.` a Cell costing `default_cost`
    /// - any non-negative integer: a Cell with that Cost
    ///
    /// ## Examples
    /// ```
    /// use weighted_maze::prelude::*;
    ///
    /// let maze = Maze::parse("S 3 #\n. . E").unwrap();
    ///
    /// assert_eq!((maze.rows(), maze.cols()), (2, 3));
    /// assert_eq!(maze.classify((0, 2)), Some(Kind::Wall));
    /// assert_eq!(maze.cost_of((0, 1)), Some(3));
    /// assert_eq!(maze.cost_of((1, 0)), Some(1));
    /// ```
    pub fn parse(text: &str) -> Result<Maze> {
        Maze::parse_with_config(text, MazeConfig::default())
    }

    /// Parses a Maze. See [`Maze::parse`] for the format.
    pub fn parse_with_config(text: &str, config: MazeConfig) -> Result<Maze> {
        let mut rows = vec![];
        for (row, line) in text.lines().filter(|l| !l.trim().is_empty()).enumerate() {
            let cells = line
                .split_whitespace()
                .enumerate()
                .map(|(col, token)| parse_token(token, row, col, config))
                .collect::<std::result::Result<Vec<_>, InvalidGrid>>();
            match cells {
                Ok(cells) => rows.push(cells),
                Err(reason) => {
                    log::warn!("rejected maze: {}", reason);
                    return Err(reason.into());
                }
            }
        }
        Maze::with_config(rows, config)
    }
}

fn parse_token(
    token: &str,
    row: usize,
    col: usize,
    config: MazeConfig,
) -> std::result::Result<Cell, InvalidGrid> {
    match token {
        "#" => Ok(Cell::wall()),
        "S" => Ok(Cell::start()),
        "E" => Ok(Cell::end(config.default_cost)),
        "." => Ok(Cell::path(config.default_cost)),
        _ => token
            .parse()
            .map(Cell::path)
            .map_err(|_| InvalidGrid::UnknownSymbol {
                row,
                col,
                symbol: token.to_string(),
            }),
    }
}

impl FromStr for Maze {
    type Err = MazeError;
    fn from_str(text: &str) -> Result<Maze> {
        Maze::parse(text)
    }
}

/// Prints the Maze with `*` for every Cell on the marked Path and the Cost for other Cells.
///
/// End is always printed as `E`, so parsing the output again gives End the
/// [`default_cost`](MazeConfig::default_cost) instead of its own Cost.
impl fmt::Display for Maze {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        for row in 0..self.rows() {
            for col in 0..self.cols() {
                if col > 0 {
                    write!(fmt, " ")?;
                }
                let cell = &self.cells[self.index((row, col))];
                match cell.kind() {
                    Kind::Wall => write!(fmt, "#")?,
                    Kind::Start => write!(fmt, "S")?,
                    Kind::End => write!(fmt, "E")?,
                    Kind::Path if cell.is_on_path() => write!(fmt, "*")?,
                    Kind::Path => write!(fmt, "{}", cell.cost().unwrap_or_default())?,
                }
            }
            writeln!(fmt)?;
        }
        Ok(())
    }
}
