use super::{Edge, Node, NodeID};
use crate::{Cost, Point, PointMap};

#[derive(Clone, Debug)]
pub(crate) struct NodeList {
    nodes: slab::Slab<Node>,
    pos_map: PointMap<NodeID>,
}

impl NodeList {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: slab::Slab::with_capacity(capacity),
            pos_map: PointMap::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.pos_map.len()
    }

    pub fn add_node(&mut self, pos: Point, walk_cost: Cost) -> NodeID {
        let id = self.nodes.insert(Node::new(pos, walk_cost));
        self.pos_map.insert(pos, id);
        id
    }

    /// Adds a directed Edge from `src` to `target`, weighted with the Cost of `target`
    pub fn add_edge(&mut self, src: NodeID, target: NodeID) {
        let target_node = &self[target];
        let edge = Edge {
            target,
            to: target_node.pos,
            weight: target_node.walk_cost,
        };
        self[src].edges.push(edge);
    }

    pub fn iter(&self) -> slab::Iter<Node> {
        self.nodes.iter()
    }

    pub fn id_at(&self, pos: Point) -> Option<NodeID> {
        self.pos_map.get(&pos).copied()
    }

    pub fn get(&self, id: NodeID) -> Option<&Node> {
        self.nodes.get(id)
    }
}

use std::ops::{Index, IndexMut};
impl Index<NodeID> for NodeList {
    type Output = Node;
    #[track_caller]
    fn index(&self, index: NodeID) -> &Node {
        &self.nodes[index]
    }
}
impl IndexMut<NodeID> for NodeList {
    #[track_caller]
    fn index_mut(&mut self, index: NodeID) -> &mut Node {
        &mut self.nodes[index]
    }
}

#[test]
fn add_edge() {
    let mut nodes = NodeList::with_capacity(3);
    let zero_id = nodes.add_node((0, 0), 0);
    let one_id = nodes.add_node((0, 1), 5);
    let two_id = nodes.add_node((1, 1), 2);
    nodes.add_edge(zero_id, one_id);
    nodes.add_edge(one_id, zero_id);
    nodes.add_edge(one_id, two_id);

    assert_eq!(nodes.len(), 3);
    assert_eq!(nodes.id_at((1, 1)), Some(two_id));
    assert_eq!(nodes.id_at((1, 0)), None);
    assert_eq!(nodes[zero_id].edges[0].weight, 5);
    assert_eq!(nodes[one_id].edges[0].weight, 0);
    assert_eq!(nodes[one_id].edges[1].to, (1, 1));
    assert_eq!(nodes[one_id].edges[1].weight, 2);
}
