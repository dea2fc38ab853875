use super::NodeID;
use crate::{Cost, Point};

/// A directed step from one Node onto an adjacent, walkable Node.
///
/// The weight is the Cost of the destination Cell, so two opposite Edges between the same
/// pair of Nodes usually have different weights.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Edge {
    /// the Node this Edge leads to
    pub target: NodeID,
    /// the position of `target` in the Maze
    pub to: Point,
    /// the Cost of stepping onto `target`
    pub weight: Cost,
}

/// A walkable Cell of the Maze and all Edges leaving it
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Node {
    /// the position in the Maze
    pub pos: Point,
    /// the Cost of stepping onto this Node
    pub walk_cost: Cost,
    /// the outgoing Edges, in the order up, right, down, left
    pub edges: Vec<Edge>,
}

impl Node {
    /// Creates a Node without any Edges
    pub fn new(pos: Point, walk_cost: Cost) -> Node {
        Node {
            pos,
            walk_cost,
            edges: Vec::with_capacity(4),
        }
    }
}
