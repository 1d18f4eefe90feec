//! Configuration types for Annals network layouts.
//!
//! This module provides configuration structures that control how networks
//! are derived from datasets and laid out. All types implement
//! [`serde::Deserialize`] for flexible loading from external sources.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining all sections.
//! - [`LayoutConfig`] - Canvas extent, engine choice and simulation parameters.
//! - [`AdjacencyConfig`] - How adjacency matrix columns are assigned.
//! - [`TimelineConfig`] - Date window applied to events before building networks.
//!
//! # Example
//!
//! ```
//! # use annals::config::AppConfig;
//! // Use default configuration
//! let config = AppConfig::default();
//! assert_eq!(config.layout().width(), 300.0);
//! assert!(config.timeline().filter().is_unbounded());
//! ```

use serde::Deserialize;

use crate::{
    adjacency::ColumnIndex,
    layout::{LayoutEngine, Placement},
    timeline::EventFilter,
};

/// Seed used for initial placement unless the configuration names another one.
pub const DEFAULT_SEED: u64 = 0x00A1_1A15;

/// Top-level configuration combining layout, adjacency and timeline settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Layout configuration section.
    #[serde(default)]
    layout: LayoutConfig,

    /// Adjacency configuration section.
    #[serde(default)]
    adjacency: AdjacencyConfig,

    /// Timeline configuration section.
    #[serde(default)]
    timeline: TimelineConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] from its sections.
    pub fn new(layout: LayoutConfig, adjacency: AdjacencyConfig, timeline: TimelineConfig) -> Self {
        Self {
            layout,
            adjacency,
            timeline,
        }
    }

    /// Returns the layout configuration.
    pub fn layout(&self) -> &LayoutConfig {
        &self.layout
    }

    /// Returns a mutable reference to the layout configuration.
    pub fn layout_mut(&mut self) -> &mut LayoutConfig {
        &mut self.layout
    }

    /// Returns the adjacency configuration.
    pub fn adjacency(&self) -> &AdjacencyConfig {
        &self.adjacency
    }

    /// Returns the timeline configuration.
    pub fn timeline(&self) -> &TimelineConfig {
        &self.timeline
    }
}

/// Canvas extent and simulation parameters for network layouts.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Which [`LayoutEngine`] positions the nodes.
    engine: LayoutEngine,

    /// Canvas width in layout units.
    width: f32,

    /// Canvas height in layout units.
    height: f32,

    /// Number of simulation steps; every run performs all of them.
    iterations: usize,

    /// Seed for the initial placement.
    seed: u64,

    /// How nodes are placed before the simulation starts.
    placement: Placement,

    /// Strength of the pull toward the canvas center; `0` disables it.
    gravity: f32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            engine: LayoutEngine::default(),
            width: 300.0,
            height: 300.0,
            iterations: 100,
            seed: DEFAULT_SEED,
            placement: Placement::default(),
            gravity: 0.0,
        }
    }
}

impl LayoutConfig {
    /// Returns the [`LayoutEngine`] to use.
    pub fn engine(&self) -> LayoutEngine {
        self.engine
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn iterations(&self) -> usize {
        self.iterations
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn placement(&self) -> Placement {
        self.placement
    }

    pub fn gravity(&self) -> f32 {
        self.gravity
    }

    /// Sets the layout engine
    pub fn set_engine(&mut self, engine: LayoutEngine) -> &mut Self {
        self.engine = engine;
        self
    }

    /// Sets the canvas extent
    pub fn set_extent(&mut self, width: f32, height: f32) -> &mut Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Sets the number of simulation steps
    pub fn set_iterations(&mut self, iterations: usize) -> &mut Self {
        self.iterations = iterations;
        self
    }

    /// Sets the placement seed
    pub fn set_seed(&mut self, seed: u64) -> &mut Self {
        self.seed = seed;
        self
    }

    /// Sets the initial placement strategy
    pub fn set_placement(&mut self, placement: Placement) -> &mut Self {
        self.placement = placement;
        self
    }

    /// Sets the gravity strength
    pub fn set_gravity(&mut self, gravity: f32) -> &mut Self {
        self.gravity = gravity;
        self
    }
}

/// Adjacency matrix construction settings.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct AdjacencyConfig {
    /// How matrix columns are assigned to edges.
    #[serde(default)]
    columns: ColumnIndex,
}

impl AdjacencyConfig {
    pub fn new(columns: ColumnIndex) -> Self {
        Self { columns }
    }

    /// Returns the [`ColumnIndex`] mode.
    pub fn columns(&self) -> ColumnIndex {
        self.columns
    }
}

/// Date window applied to events before deriving the participant network.
///
/// Bounds that are not set leave that side of the window open.
#[derive(Debug, Default, Clone, Copy, PartialEq, Deserialize)]
pub struct TimelineConfig {
    /// Earliest allowed event start.
    #[serde(default)]
    from: Option<f64>,

    /// Latest allowed event end.
    #[serde(default)]
    until: Option<f64>,
}

impl TimelineConfig {
    pub fn new(from: Option<f64>, until: Option<f64>) -> Self {
        Self { from, until }
    }

    /// Returns the [`EventFilter`] described by this section.
    pub fn filter(&self) -> EventFilter {
        EventFilter::new(self.from, self.until)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config.layout(), &LayoutConfig::default());
        assert_eq!(config.adjacency().columns(), ColumnIndex::TargetNode);
        assert!(config.timeline().filter().is_unbounded());
    }

    #[test]
    fn test_partial_layout_section() {
        let config: AppConfig = toml::from_str(
            r#"
            [layout]
            width = 640.0
            iterations = 250
            placement = "grid"
            "#,
        )
        .unwrap();

        let layout = config.layout();
        assert_eq!(layout.width(), 640.0);
        assert_eq!(layout.height(), 300.0);
        assert_eq!(layout.iterations(), 250);
        assert_eq!(layout.placement(), Placement::Grid);
        assert_eq!(layout.engine(), LayoutEngine::Force);
        assert_eq!(layout.seed(), DEFAULT_SEED);
    }

    #[test]
    fn test_adjacency_and_timeline_sections() {
        let config: AppConfig = toml::from_str(
            r#"
            [adjacency]
            columns = "edge_ordinal"

            [timeline]
            from = 1600.0
            "#,
        )
        .unwrap();

        assert_eq!(config.adjacency().columns(), ColumnIndex::EdgeOrdinal);
        assert_eq!(config.timeline().filter(), EventFilter::new(Some(1600.0), None));
    }

    #[test]
    fn test_unknown_engine_is_rejected() {
        let result: Result<AppConfig, _> = toml::from_str(
            r#"
            [layout]
            engine = "sugiyama"
            "#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_setters_chain() {
        let mut layout = LayoutConfig::default();
        layout
            .set_extent(100.0, 50.0)
            .set_iterations(10)
            .set_seed(7)
            .set_gravity(0.2)
            .set_engine(LayoutEngine::Basic);

        assert_eq!(layout.width(), 100.0);
        assert_eq!(layout.height(), 50.0);
        assert_eq!(layout.iterations(), 10);
        assert_eq!(layout.seed(), 7);
        assert_eq!(layout.gravity(), 0.2);
        assert_eq!(layout.engine(), LayoutEngine::Basic);
    }
}
