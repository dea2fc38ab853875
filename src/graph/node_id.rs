//! Identifiers of Nodes in the [`Graph`](super::Graph)

/// The Type used to reference a Node in the [`Graph`](super::Graph)
pub type NodeID = usize;

/// A specialized [`HashMap`](hashbrown::HashMap) for NodeIDs
pub type NodeIDMap<V> = hashbrown::HashMap<NodeID, V>;
/// A specialized [`HashSet`](hashbrown::HashSet) for NodeIDs
pub type NodeIDSet = hashbrown::HashSet<NodeID>;
