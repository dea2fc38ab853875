//! Paths through the Maze and their reconstruction from a finished search

mod generic_path;
pub use self::generic_path::Path;

mod reconstruct;
pub use self::reconstruct::reconstruct;
