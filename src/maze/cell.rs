use crate::Cost;

/// The structural classification of a [`Cell`]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Kind {
    /// can never be walked across
    Wall,
    /// where every Path begins
    Start,
    /// where every Path ends
    End,
    /// a regular walkable Cell
    Path,
}

/// A single Tile of a [`Maze`](crate::maze::Maze).
///
/// Whether a Cell is part of the most recently found Path is stored separately from its
/// [`Kind`], so marking a Path never changes what the Maze looks like structurally.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cell {
    kind: Kind,
    cost: Cost,
    on_path: bool,
}

impl Cell {
    /// A Wall
    pub fn wall() -> Cell {
        Cell {
            kind: Kind::Wall,
            cost: 0,
            on_path: false,
        }
    }
    /// The Start. Its Cost is never paid, so it is always 0.
    pub fn start() -> Cell {
        Cell {
            kind: Kind::Start,
            cost: 0,
            on_path: false,
        }
    }
    /// The End with the Cost of stepping onto it
    pub fn end(cost: Cost) -> Cell {
        Cell {
            kind: Kind::End,
            cost,
            on_path: false,
        }
    }
    /// A walkable Cell with the Cost of stepping onto it
    pub fn path(cost: Cost) -> Cell {
        Cell {
            kind: Kind::Path,
            cost,
            on_path: false,
        }
    }

    /// The Kind of this Cell
    pub fn kind(&self) -> Kind {
        self.kind
    }
    /// The Cost of stepping onto this Cell, or `None` for Walls
    pub fn cost(&self) -> Option<Cost> {
        match self.kind {
            Kind::Wall => None,
            _ => Some(self.cost),
        }
    }
    /// `true` for everything except Walls
    pub fn is_walkable(&self) -> bool {
        self.kind != Kind::Wall
    }
    /// `true` if this Cell lies strictly between Start and End on the marked Path
    pub fn is_on_path(&self) -> bool {
        self.on_path
    }

    pub(crate) fn set_on_path(&mut self, on_path: bool) {
        self.on_path = on_path;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wall_has_no_cost() {
        assert_eq!(Cell::wall().cost(), None);
        assert!(!Cell::wall().is_walkable());
    }

    #[test]
    fn costs() {
        assert_eq!(Cell::start().cost(), Some(0));
        assert_eq!(Cell::end(4).cost(), Some(4));
        assert_eq!(Cell::path(7).cost(), Some(7));
        assert!(Cell::path(0).is_walkable());
    }
}
