//! Input datasets.
//!
//! A dataset is a JSON document holding either a network directly:
//!
//! ```json
//! { "nodes": [{ "id": 1 }, { "id": 2 }], "edges": [{ "origin": 1, "target": 2 }] }
//! ```
//!
//! or historical events with their participants:
//!
//! ```json
//! {
//!   "agents": [{ "id": 0, "name": "Poland" }],
//!   "events": [{ "id": 1, "eventName": "Union of Lublin", "eventTime": 1569, "participants": [0] }]
//! }
//! ```

use serde::Deserialize;

use annals_core::{
    event::{Agent, HistoricalEvent},
    network::{Edge, Node, NodeId, RawNetwork},
};

use crate::error::AnnalsError;

/// A parsed input dataset.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "DatasetRepr")]
pub enum Dataset {
    /// A node and edge list.
    Network(RawNetwork),
    /// Events whose participants form a co-occurrence network.
    Events {
        agents: Vec<Agent>,
        events: Vec<HistoricalEvent>,
    },
}

impl Dataset {
    /// Parses a JSON dataset.
    ///
    /// # Errors
    ///
    /// Returns [`AnnalsError::Input`] carrying `source` when the document is
    /// not valid JSON or matches neither dataset shape.
    pub fn from_json(source: &str) -> Result<Self, AnnalsError> {
        serde_json::from_str(source).map_err(|err| AnnalsError::new_input_error(err, source))
    }

    /// Returns the events of an events dataset; empty for a network dataset.
    pub fn events(&self) -> &[HistoricalEvent] {
        match self {
            Self::Network(_) => &[],
            Self::Events { events, .. } => events.as_slice(),
        }
    }

    /// Returns the display name of a node, if the dataset names it.
    pub fn name_of(&self, id: NodeId) -> Option<&str> {
        match self {
            Self::Network(_) => None,
            Self::Events { agents, .. } => agents
                .iter()
                .find(|agent| NodeId::from(agent.id()) == id)
                .map(Agent::name),
        }
    }
}

/// Wire form accepting the fields of both dataset shapes.
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct DatasetRepr {
    #[serde(default)]
    nodes: Option<Vec<Node>>,
    #[serde(default)]
    edges: Option<Vec<Edge>>,
    #[serde(default)]
    agents: Option<Vec<Agent>>,
    #[serde(default)]
    events: Option<Vec<HistoricalEvent>>,
}

impl TryFrom<DatasetRepr> for Dataset {
    type Error = String;

    fn try_from(repr: DatasetRepr) -> Result<Self, Self::Error> {
        match (repr.nodes, repr.events) {
            (Some(nodes), None) => {
                if repr.agents.is_some() {
                    return Err("`agents` belongs to an events dataset, not a network".to_string());
                }
                Ok(Self::Network(RawNetwork::new(
                    nodes,
                    repr.edges.unwrap_or_default(),
                )))
            }
            (None, Some(events)) => {
                if repr.edges.is_some() {
                    return Err("`edges` belongs to a network dataset, not an events dataset".to_string());
                }
                Ok(Self::Events {
                    agents: repr.agents.unwrap_or_default(),
                    events,
                })
            }
            (Some(_), Some(_)) => {
                Err("dataset must contain either `nodes` or `events`, not both".to_string())
            }
            (None, None) => Err("dataset must contain either `nodes` or `events`".to_string()),
        }
    }
}
