//! Layout documents.
//!
//! A [`NetworkLayout`] bundles everything a front-end needs to draw the
//! network and its adjacency matrix: the canvas size, one placed node per
//! matrix row, the matrix itself and, for event datasets, timeline entries.

use serde::Serialize;

use annals_core::{
    event::{EventId, TimeSpan},
    geometry::Point,
    matrix::AdjacencyMatrix,
    network::NodeId,
};

use crate::error::AnnalsError;

/// A node with its computed position.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlacedNode {
    /// Row of the node in the adjacency matrix.
    pub index: usize,
    pub id: NodeId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub x: f32,
    pub y: f32,
}

impl PlacedNode {
    pub fn new(index: usize, id: NodeId, name: Option<String>, position: Point) -> Self {
        Self {
            index,
            id,
            name,
            x: position.x(),
            y: position.y(),
        }
    }
}

/// An event placed on the unit timeline.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimelineEntry {
    pub id: EventId,
    pub name: String,
    /// Display form of the event date.
    pub dates: String,
    /// Position in `[0, 1]` between the earliest and the latest event.
    pub position: f64,
}

impl TimelineEntry {
    pub fn new(id: EventId, name: impl Into<String>, time: TimeSpan, position: f64) -> Self {
        Self {
            id,
            name: name.into(),
            dates: crate::timeline::format_dates(time),
            position,
        }
    }
}

/// The complete output of a layout run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NetworkLayout {
    pub width: f32,
    pub height: f32,
    pub nodes: Vec<PlacedNode>,
    pub adjacency: AdjacencyMatrix,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub events: Vec<TimelineEntry>,
}

impl NetworkLayout {
    /// Serializes the document as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns [`AnnalsError::Output`] if serialization fails.
    pub fn to_json(&self) -> Result<String, AnnalsError> {
        serde_json::to_string_pretty(self).map_err(AnnalsError::Output)
    }
}

#[cfg(test)]
mod tests {
    use annals_core::matrix::Matrix;
    use serde_json::json;

    use super::*;

    #[test]
    fn test_layout_document_shape() {
        let layout = NetworkLayout {
            width: 100.0,
            height: 50.0,
            nodes: vec![
                PlacedNode::new(0, NodeId::new(3), Some("Poland".to_string()), Point::new(10.0, 20.0)),
                PlacedNode::new(1, NodeId::new(5), None, Point::new(90.0, 30.0)),
            ],
            adjacency: Matrix::from_rows(vec![vec![0, 1], vec![0, 0]]).unwrap(),
            events: Vec::new(),
        };

        let value: serde_json::Value = serde_json::from_str(&layout.to_json().unwrap()).unwrap();
        assert_eq!(
            value,
            json!({
                "width": 100.0,
                "height": 50.0,
                "nodes": [
                    {"index": 0, "id": 3, "name": "Poland", "x": 10.0, "y": 20.0},
                    {"index": 1, "id": 5, "x": 90.0, "y": 30.0}
                ],
                "adjacency": [[0, 1], [0, 0]]
            })
        );
    }

    #[test]
    fn test_timeline_entry_dates() {
        let entry = TimelineEntry::new(
            EventId::new(2),
            "Deluge",
            TimeSpan::Period {
                start: 1655.0,
                end: 1660.0,
            },
            0.25,
        );
        assert_eq!(entry.dates, "1655 - 1660");

        let value = serde_json::to_value(&entry).unwrap();
        assert_eq!(value["position"], json!(0.25));
    }
}
