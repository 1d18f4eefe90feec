//! Participant co-occurrence networks.
//!
//! Participants that appear together in at least one event are linked. The
//! resulting [`RawNetwork`] feeds the adjacency builder like any other network.

use indexmap::IndexSet;
use log::debug;

use annals_core::{
    event::HistoricalEvent,
    network::{Edge, Node, NodeId, RawNetwork},
};

/// Builds the co-occurrence network of `events`.
///
/// Nodes are the distinct participants in order of first appearance. Each
/// pair of distinct participants sharing an event yields one edge, oriented
/// from the participant listed first; a pair already linked in either
/// direction is not linked again.
///
/// # Examples
///
/// ```
/// # use annals::cooccurrence::participants_network;
/// # use annals_core::event::{AgentId, EventId, HistoricalEvent, TimeSpan};
/// let treaty = HistoricalEvent::new(EventId::new(1), "Treaty", TimeSpan::Instant(1569.0))
///     .with_participants(vec![AgentId::new(7), AgentId::new(3)]);
///
/// let network = participants_network([&treaty]);
/// assert_eq!(network.node_count(), 2);
/// assert_eq!(network.edges().len(), 1);
/// ```
pub fn participants_network<'a>(
    events: impl IntoIterator<Item = &'a HistoricalEvent>,
) -> RawNetwork {
    let mut participants: IndexSet<NodeId> = IndexSet::new();
    let mut edges: IndexSet<Edge> = IndexSet::new();

    for event in events {
        let present: IndexSet<NodeId> = event
            .participants()
            .iter()
            .copied()
            .map(NodeId::from)
            .collect();

        for (position, &agent) in present.iter().enumerate() {
            participants.insert(agent);
            for &other in present.iter().skip(position + 1) {
                let edge = Edge::new(agent, other);
                if !edges.contains(&edge.reversed()) {
                    edges.insert(edge);
                }
            }
        }
    }

    debug!(
        node_count = participants.len(),
        edge_count = edges.len();
        "Built participant co-occurrence network"
    );

    RawNetwork::new(
        participants.into_iter().map(Node::new).collect(),
        edges.into_iter().collect(),
    )
}
