//! The Maze as an adjacency Graph, used by [`Algorithm::Frontier`](crate::Algorithm::Frontier)

mod node_id;
pub use self::node_id::*;

mod node;
pub use self::node::{Edge, Node};

mod node_list;
use self::node_list::NodeList;

use crate::{maze::Maze, Point};

/// Every walkable Cell of a Maze as a [`Node`], connected to its walkable neighbors.
///
/// Walls have no Node, so they can neither be entered nor left.
#[derive(Clone, Debug)]
pub struct Graph {
    nodes: NodeList,
    edge_count: usize,
}

impl Graph {
    /// Builds the Graph of a Maze.
    ///
    /// Nodes are created in row-major order, and the Edges of every Node are in the order
    /// up, right, down, left.
    ///
    /// ## Examples
    /// ```
    /// use weighted_maze::{graph::Graph, prelude::*};
    ///
    /// let maze = Maze::parse("S 4 #\n. # E").unwrap();
    /// let graph = Graph::from_maze(&maze);
    ///
    /// assert_eq!(graph.len(), 4);
    ///
    /// let start = graph.node_at((0, 0)).unwrap();
    /// let targets: Vec<_> = start.edges.iter().map(|e| (e.to, e.weight)).collect();
    /// assert_eq!(targets, vec![((0, 1), 4), ((1, 0), 1)]);
    ///
    /// assert!(graph.node_at((0, 2)).is_none());
    /// ```
    pub fn from_maze(maze: &Maze) -> Graph {
        let mut nodes = NodeList::with_capacity(maze.len());

        for point in maze.points() {
            if let Some(cost) = maze.cost_of(point) {
                nodes.add_node(point, cost);
            }
        }

        let mut edge_count = 0;
        for point in maze.points() {
            let src = match nodes.id_at(point) {
                Some(src) => src,
                None => continue,
            };
            for neighbor in maze.traversable_neighbors(point) {
                if let Some(target) = nodes.id_at(neighbor) {
                    nodes.add_edge(src, target);
                    edge_count += 1;
                }
            }
        }

        log::debug!(
            "built graph of {}x{} maze: {} nodes, {} edges",
            maze.rows(),
            maze.cols(),
            nodes.len(),
            edge_count
        );

        Graph { nodes, edge_count }
    }

    /// The number of Nodes
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// `true` if there are no Nodes
    pub fn is_empty(&self) -> bool {
        self.nodes.len() == 0
    }

    /// The total number of Edges
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// The id of the Node at `pos`, or `None` if `pos` is a Wall or outside the Maze
    pub fn id_at(&self, pos: Point) -> Option<NodeID> {
        self.nodes.id_at(pos)
    }

    /// The Node at `pos`, or `None` if `pos` is a Wall or outside the Maze
    pub fn node_at(&self, pos: Point) -> Option<&Node> {
        self.id_at(pos).map(|id| &self.nodes[id])
    }

    /// The Node with the given id, if any
    pub fn get(&self, id: NodeID) -> Option<&Node> {
        self.nodes.get(id)
    }

    /// All Nodes with their ids, in row-major order
    pub fn iter(&self) -> impl Iterator<Item = (NodeID, &Node)> + '_ {
        self.nodes.iter()
    }
}

impl std::ops::Index<NodeID> for Graph {
    type Output = Node;
    #[track_caller]
    fn index(&self, index: NodeID) -> &Node {
        &self.nodes[index]
    }
}
