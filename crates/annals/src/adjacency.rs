//! Adjacency matrix construction.
//!
//! Turns a [`RawNetwork`] into a dense `n × n` [`AdjacencyMatrix`] whose rows
//! follow the order of the node list. Two column assignments are available,
//! selected by [`ColumnIndex`].

use std::collections::HashMap;

use log::{debug, warn};
use serde::Deserialize;

use annals_core::{
    matrix::AdjacencyMatrix,
    network::{NodeId, RawNetwork},
};

use crate::error::AnnalsError;

/// How an edge picks its matrix column.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnIndex {
    /// The k-th outgoing edge of a node marks column `k`, regardless of its target.
    EdgeOrdinal,
    /// An edge marks the column of its target node.
    #[default]
    TargetNode,
}

/// Builds the edge-ordinal adjacency matrix of `network`.
///
/// For the node at row `i`, the edges originating at that node are taken in
/// edge-list order and the k-th of them sets cell `[i][k]` to `1`. Targets do
/// not influence the column. Ordinals that do not fit in the `n` columns are
/// skipped.
///
/// # Examples
///
/// ```
/// # use annals::adjacency::build_adjacency;
/// # use annals_core::network::{Edge, Node, NodeId, RawNetwork};
/// let (a, b, c) = (NodeId::new(1), NodeId::new(2), NodeId::new(3));
/// let network = RawNetwork::new(
///     vec![Node::new(a), Node::new(b), Node::new(c)],
///     vec![Edge::new(a, b)],
/// );
///
/// let matrix = build_adjacency(&network);
/// assert_eq!(matrix.to_rows(), vec![vec![1, 0, 0], vec![0, 0, 0], vec![0, 0, 0]]);
/// ```
pub fn build_adjacency(network: &RawNetwork) -> AdjacencyMatrix {
    let dim = network.node_count();
    let mut matrix = AdjacencyMatrix::new(dim);

    for (row, node) in network.nodes().iter().enumerate() {
        for (ordinal, edge) in network.edges_from(node.id()).enumerate() {
            if ordinal >= dim {
                warn!(
                    origin:% = edge.origin(),
                    target:% = edge.target(),
                    ordinal,
                    dim;
                    "Edge ordinal exceeds matrix dimension, skipping"
                );
                continue;
            }
            // In range by construction
            let _ = matrix.set(row, ordinal, 1);
        }
    }

    debug!(dim, edges = matrix.edge_count(); "Built edge-ordinal adjacency matrix");
    matrix
}

/// Builder for adjacency matrices with a configurable [`ColumnIndex`].
#[derive(Debug, Default, Clone, Copy)]
pub struct AdjacencyBuilder {
    columns: ColumnIndex,
}

impl AdjacencyBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the column assignment
    pub fn with_columns(mut self, columns: ColumnIndex) -> Self {
        self.columns = columns;
        self
    }

    /// Builds the adjacency matrix of `network`.
    ///
    /// # Errors
    ///
    /// With [`ColumnIndex::TargetNode`], returns [`AnnalsError::Graph`] when two
    /// nodes share an id or an edge references an id missing from the node list.
    pub fn build(&self, network: &RawNetwork) -> Result<AdjacencyMatrix, AnnalsError> {
        match self.columns {
            ColumnIndex::EdgeOrdinal => Ok(build_adjacency(network)),
            ColumnIndex::TargetNode => build_target_adjacency(network),
        }
    }
}

fn build_target_adjacency(network: &RawNetwork) -> Result<AdjacencyMatrix, AnnalsError> {
    let mut index_of: HashMap<NodeId, usize> = HashMap::with_capacity(network.node_count());
    for (index, node) in network.nodes().iter().enumerate() {
        if index_of.insert(node.id(), index).is_some() {
            return Err(AnnalsError::Graph(format!("duplicate node id {}", node.id())));
        }
    }

    let lookup = |id: NodeId| {
        index_of
            .get(&id)
            .copied()
            .ok_or_else(|| AnnalsError::Graph(format!("edge references unknown node {id}")))
    };

    let mut matrix = AdjacencyMatrix::new(network.node_count());
    for edge in network.edges() {
        let origin = lookup(edge.origin())?;
        let target = lookup(edge.target())?;
        if origin == target {
            debug!(node:% = edge.origin(); "Skipping self-loop");
            continue;
        }
        matrix.set(origin, target, 1)?;
    }

    debug!(dim = matrix.dim(), edges = matrix.edge_count(); "Built target-node adjacency matrix");
    Ok(matrix)
}
