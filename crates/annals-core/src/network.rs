//! Node and edge lists for participant networks.
//!
//! A [`RawNetwork`] is the sparse description handed to the adjacency builder:
//! nodes in a fixed order (their position is their index for one computation)
//! and edges that reference nodes by [`NodeId`], never by index.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::event::AgentId;

/// Opaque identifier of a network node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(u32);

impl NodeId {
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    /// Returns the raw identifier value
    pub fn get(self) -> u32 {
        self.0
    }
}

impl From<u32> for NodeId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl From<AgentId> for NodeId {
    fn from(agent: AgentId) -> Self {
        Self(agent.get())
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A network node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    id: NodeId,
}

impl Node {
    pub fn new(id: NodeId) -> Self {
        Self { id }
    }

    pub fn id(&self) -> NodeId {
        self.id
    }
}

/// An edge from `origin` to `target`, both given by node identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge {
    origin: NodeId,
    target: NodeId,
}

impl Edge {
    pub fn new(origin: NodeId, target: NodeId) -> Self {
        Self { origin, target }
    }

    /// Returns the identifier of the node the edge starts from
    pub fn origin(&self) -> NodeId {
        self.origin
    }

    /// Returns the identifier of the node the edge points to
    pub fn target(&self) -> NodeId {
        self.target
    }

    /// Returns the same edge pointing the other way
    pub fn reversed(&self) -> Self {
        Self {
            origin: self.target,
            target: self.origin,
        }
    }
}

/// A node list plus an edge list referencing those nodes by identifier.
///
/// # Examples
///
/// ```
/// # use annals_core::network::{Edge, Node, NodeId, RawNetwork};
/// let (a, b) = (NodeId::new(10), NodeId::new(20));
/// let network = RawNetwork::new(vec![Node::new(a), Node::new(b)], vec![Edge::new(a, b)]);
///
/// assert_eq!(network.node_count(), 2);
/// assert_eq!(network.index_of(b), Some(1));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawNetwork {
    #[serde(default)]
    nodes: Vec<Node>,
    #[serde(default)]
    edges: Vec<Edge>,
}

impl RawNetwork {
    pub fn new(nodes: Vec<Node>, edges: Vec<Edge>) -> Self {
        Self { nodes, edges }
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Returns the position of the first node carrying `id`
    pub fn index_of(&self, id: NodeId) -> Option<usize> {
        self.nodes.iter().position(|node| node.id == id)
    }

    /// Iterates over the edges whose origin is `id`, in edge-list order
    pub fn edges_from(&self, id: NodeId) -> impl Iterator<Item = &Edge> {
        self.edges.iter().filter(move |edge| edge.origin == id)
    }
}
