//! Annals - Participant networks and force-directed layouts for historical events.
//!
//! Datasets of dated events are turned into participant co-occurrence
//! networks, adjacency matrices and node positions ready for drawing. Plain
//! node and edge lists are accepted as well.

pub mod adjacency;
pub mod config;
pub mod cooccurrence;
pub mod dataset;
pub mod export;
pub mod layout;
pub mod timeline;

mod error;

pub use annals_core::{event, geometry, matrix, network};

pub use dataset::Dataset;
pub use error::AnnalsError;
pub use export::NetworkLayout;

use log::{debug, info, trace};

use annals_core::{geometry::Point, matrix::AdjacencyMatrix, network::RawNetwork};

use adjacency::AdjacencyBuilder;
use config::AppConfig;
use export::{PlacedNode, TimelineEntry};
use timeline::TimelinePositioner;

/// Builder for turning datasets into network layouts.
///
/// This provides an API for processing datasets through the parsing,
/// network, adjacency and layout stages.
///
/// # Examples
///
/// ```rust
/// use annals::{NetworkBuilder, config::AppConfig};
///
/// let source = r#"{
///     "nodes": [{"id": 1}, {"id": 2}, {"id": 3}],
///     "edges": [{"origin": 1, "target": 2}, {"origin": 2, "target": 3}]
/// }"#;
///
/// // With custom config
/// let config = AppConfig::default();
/// let builder = NetworkBuilder::new(config);
///
/// // Parse the dataset
/// let dataset = builder.parse(source)
///     .expect("Failed to parse");
///
/// // Lay it out and serialize the result
/// let json = builder.render_json(&dataset)
///     .expect("Failed to render");
/// assert!(json.contains("\"adjacency\""));
///
/// // Or use default config
/// let builder = NetworkBuilder::default();
/// ```
#[derive(Default)]
pub struct NetworkBuilder {
    config: AppConfig,
}

impl NetworkBuilder {
    /// Create a new network builder with the given configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Application configuration including layout, adjacency and timeline settings
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration this builder runs with.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Parse a JSON dataset.
    ///
    /// # Errors
    ///
    /// Returns [`AnnalsError::Input`] carrying the source when the document
    /// is malformed or matches no dataset shape.
    pub fn parse(&self, source: &str) -> Result<Dataset, AnnalsError> {
        info!("Parsing dataset");
        let dataset = Dataset::from_json(source)?;

        debug!("Dataset parsed successfully");
        trace!(dataset:?; "Parsed dataset");

        Ok(dataset)
    }

    /// Derive the network of a dataset.
    ///
    /// Network datasets are returned as they are. For event datasets the
    /// configured timeline window is applied first, then the participant
    /// co-occurrence network is built.
    pub fn network(&self, dataset: &Dataset) -> RawNetwork {
        match dataset {
            Dataset::Network(network) => network.clone(),
            Dataset::Events { events, .. } => {
                let filter = self.config.timeline().filter();
                let selected = filter.apply(events);
                debug!(
                    total = events.len(),
                    selected = selected.len();
                    "Applied timeline window"
                );
                cooccurrence::participants_network(selected)
            }
        }
    }

    /// Build the adjacency matrix of a network with the configured column mode.
    ///
    /// # Errors
    ///
    /// Returns [`AnnalsError::Graph`] when the network references unknown or
    /// duplicated node ids.
    pub fn adjacency(&self, network: &RawNetwork) -> Result<AdjacencyMatrix, AnnalsError> {
        AdjacencyBuilder::new()
            .with_columns(self.config.adjacency().columns())
            .build(network)
    }

    /// Lay out an adjacency matrix with the configured engine.
    ///
    /// # Errors
    ///
    /// Returns [`AnnalsError::Layout`] for invalid canvas bounds.
    pub fn layout(&self, adjacency: &AdjacencyMatrix) -> Result<Vec<Point>, AnnalsError> {
        layout::layout_with_config(adjacency, self.config.layout())
    }

    /// Run every stage and collect the result into a [`NetworkLayout`].
    ///
    /// # Errors
    ///
    /// Returns any error raised by the adjacency or layout stages.
    pub fn render(&self, dataset: &Dataset) -> Result<NetworkLayout, AnnalsError> {
        let network = self.network(dataset);
        info!(
            node_count = network.node_count(),
            edge_count = network.edges().len();
            "Building adjacency matrix"
        );
        let adjacency = self.adjacency(&network)?;

        info!(engine:% = self.config.layout().engine(); "Calculating layout");
        let positions = self.layout(&adjacency)?;
        info!(positioned = positions.len(); "Layout calculated");

        let nodes = network
            .nodes()
            .iter()
            .zip(positions)
            .enumerate()
            .map(|(index, (node, position))| {
                let name = dataset.name_of(node.id()).map(str::to_string);
                PlacedNode::new(index, node.id(), name, position)
            })
            .collect();

        let layout_config = self.config.layout();
        Ok(NetworkLayout {
            width: layout_config.width(),
            height: layout_config.height(),
            nodes,
            adjacency,
            events: self.timeline_entries(dataset),
        })
    }

    /// Run every stage and serialize the result as JSON.
    ///
    /// # Errors
    ///
    /// Returns any error raised by [`NetworkBuilder::render`], or
    /// [`AnnalsError::Output`] if serialization fails.
    pub fn render_json(&self, dataset: &Dataset) -> Result<String, AnnalsError> {
        let json = self.render(dataset)?.to_json()?;
        info!("Layout serialized successfully");
        Ok(json)
    }

    /// Events inside the timeline window, ordered by start.
    fn timeline_entries(&self, dataset: &Dataset) -> Vec<TimelineEntry> {
        let mut events: Vec<_> = self
            .config
            .timeline()
            .filter()
            .apply(dataset.events())
            .into_iter()
            .cloned()
            .collect();
        timeline::sort_by_start(&mut events);

        let Some(positioner) = TimelinePositioner::for_events(&events) else {
            return Vec::new();
        };

        events
            .iter()
            .map(|event| {
                TimelineEntry::new(
                    event.id(),
                    event.name(),
                    event.time(),
                    positioner.position_of(event.time()),
                )
            })
            .collect()
    }
}
