//! Integration tests for the NetworkBuilder API
//!
//! These tests run datasets through every stage of the public API.

use annals::{
    AnnalsError, Dataset, NetworkBuilder,
    adjacency::ColumnIndex,
    config::{AdjacencyConfig, AppConfig, LayoutConfig, TimelineConfig},
    layout::LayoutEngine,
};

const NETWORK: &str = r#"{
    "nodes": [{"id": 0}, {"id": 1}, {"id": 2}, {"id": 3}, {"id": 4}, {"id": 5}],
    "edges": [
        {"origin": 0, "target": 1},
        {"origin": 0, "target": 2},
        {"origin": 0, "target": 3},
        {"origin": 1, "target": 4},
        {"origin": 2, "target": 5}
    ]
}"#;

const EVENTS: &str = r#"{
    "agents": [
        {"id": 0, "name": "Poland"},
        {"id": 1, "name": "Lithuania"},
        {"id": 2, "name": "Sweden"},
        {"id": 3, "name": "Russia"}
    ],
    "events": [
        {"id": 0, "eventName": "First Partition", "eventTime": 1772, "participants": [0, 3]},
        {"id": 1, "eventName": "Union of Lublin", "eventTime": 1569, "participants": [1, 0]},
        {"id": 2, "eventName": "Deluge", "eventTime": {"start": 1655, "end": 1660}, "participants": [2, 0, 1]}
    ]
}"#;

#[test]
fn test_builder_api_exists() {
    let _builder = NetworkBuilder::default();
}

#[test]
fn test_render_network_dataset() {
    let builder = NetworkBuilder::default();
    let dataset = builder.parse(NETWORK).expect("Failed to parse dataset");
    let layout = builder.render(&dataset).expect("Failed to render");

    assert_eq!(layout.nodes.len(), 6);
    assert_eq!(layout.adjacency.dim(), 6);
    assert_eq!(layout.adjacency.edge_count(), 5);
    assert!(layout.events.is_empty());
    for node in &layout.nodes {
        assert!((0.0..=layout.width).contains(&node.x), "{node:?}");
        assert!((0.0..=layout.height).contains(&node.y), "{node:?}");
        assert!(node.name.is_none());
    }
}

#[test]
fn test_render_is_deterministic() {
    let builder = NetworkBuilder::default();
    let dataset = builder.parse(NETWORK).unwrap();

    let first = builder.render_json(&dataset).unwrap();
    let second = builder.render_json(&dataset).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_render_events_dataset() {
    let builder = NetworkBuilder::default();
    let dataset = builder.parse(EVENTS).expect("Failed to parse dataset");
    let layout = builder.render(&dataset).expect("Failed to render");

    // Participants in first-appearance order: 0, 3, 1, 2
    let names: Vec<_> = layout
        .nodes
        .iter()
        .map(|node| node.name.as_deref().unwrap_or_default())
        .collect();
    assert_eq!(names, vec!["Poland", "Russia", "Lithuania", "Sweden"]);

    // Pairs: 0-3, 1-0, 2-0, 2-1
    assert_eq!(layout.adjacency.edge_count(), 4);

    let timeline: Vec<_> = layout
        .events
        .iter()
        .map(|entry| (entry.name.as_str(), entry.dates.as_str()))
        .collect();
    assert_eq!(
        timeline,
        vec![
            ("Union of Lublin", "1569"),
            ("Deluge", "1655 - 1660"),
            ("First Partition", "1772"),
        ]
    );
    assert_eq!(layout.events[0].position, 0.0);
    assert_eq!(layout.events[2].position, 1.0);
}

#[test]
fn test_timeline_window_limits_network() {
    let config = AppConfig::new(
        LayoutConfig::default(),
        AdjacencyConfig::default(),
        TimelineConfig::new(Some(1600.0), Some(1700.0)),
    );
    let builder = NetworkBuilder::new(config);
    let dataset = builder.parse(EVENTS).unwrap();

    let network = builder.network(&dataset);
    assert_eq!(network.node_count(), 3);
    assert_eq!(network.edges().len(), 3);

    let layout = builder.render(&dataset).unwrap();
    assert_eq!(layout.events.len(), 1);
    assert_eq!(layout.events[0].position, 0.5);
}

#[test]
fn test_edge_ordinal_columns() {
    let config = AppConfig::new(
        LayoutConfig::default(),
        AdjacencyConfig::new(ColumnIndex::EdgeOrdinal),
        TimelineConfig::default(),
    );
    let builder = NetworkBuilder::new(config);
    let dataset = builder.parse(NETWORK).unwrap();
    let adjacency = builder.adjacency(&builder.network(&dataset)).unwrap();

    assert_eq!(adjacency.row(0), Some(&[1i8, 1, 1, 0, 0, 0][..]));
    assert_eq!(adjacency.row(1), Some(&[1i8, 0, 0, 0, 0, 0][..]));
    assert_eq!(adjacency.row(5), Some(&[0i8; 6][..]));
}

#[test]
fn test_basic_engine_grid() {
    let mut config = AppConfig::default();
    config
        .layout_mut()
        .set_engine(LayoutEngine::Basic)
        .set_extent(300.0, 200.0);
    let builder = NetworkBuilder::new(config);
    let dataset = builder.parse(NETWORK).unwrap();
    let layout = builder.render(&dataset).unwrap();

    // 3 columns, 2 rows
    assert_eq!((layout.nodes[0].x, layout.nodes[0].y), (50.0, 50.0));
    assert_eq!((layout.nodes[5].x, layout.nodes[5].y), (250.0, 150.0));
}

#[test]
fn test_invalid_extent_is_rejected() {
    let mut config = AppConfig::default();
    config.layout_mut().set_extent(0.0, 100.0);
    let builder = NetworkBuilder::new(config);
    let dataset = builder.parse(NETWORK).unwrap();

    assert!(matches!(
        builder.render(&dataset),
        Err(AnnalsError::Layout(_))
    ));
}

#[test]
fn test_unknown_edge_target_is_rejected() {
    let builder = NetworkBuilder::default();
    let dataset = builder
        .parse(r#"{"nodes": [{"id": 1}], "edges": [{"origin": 1, "target": 2}]}"#)
        .unwrap();

    assert!(matches!(
        builder.render(&dataset),
        Err(AnnalsError::Graph(_))
    ));
}

#[test]
fn test_malformed_dataset() {
    let builder = NetworkBuilder::default();
    let result = builder.parse(r#"{"nodes": [{"id": "one"}]}"#);
    assert!(matches!(result, Err(AnnalsError::Input { .. })));
}

#[test]
fn test_empty_network_renders() {
    let builder = NetworkBuilder::default();
    let dataset = Dataset::Network(Default::default());
    let json = builder.render_json(&dataset).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["nodes"], serde_json::json!([]));
    assert_eq!(value["adjacency"], serde_json::json!([]));
}
