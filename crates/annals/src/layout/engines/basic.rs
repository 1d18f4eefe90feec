//! Basic network layout engine
//!
//! This module places nodes on a near-square grid covering the canvas,
//! filled row by row in node order. It runs no simulation, so the result
//! depends only on the node count and the extent.

use log::debug;

use annals_core::geometry::{Bounds, Point, Size};

use crate::{
    error::AnnalsError,
    layout::{Connectivity, engines::NetworkEngine, placement::grid_positions, validate_extent},
};

/// Grid layout engine; links do not influence placement
#[derive(Default)]
pub struct Engine;

impl Engine {
    /// Create a new basic layout engine
    pub fn new() -> Self {
        Self
    }
}

impl NetworkEngine for Engine {
    fn calculate(
        &self,
        connectivity: &Connectivity,
        extent: Size,
    ) -> Result<Vec<Point>, AnnalsError> {
        validate_extent(extent)?;
        let bounds = Bounds::from_size(extent);

        let node_count = connectivity.node_count();
        debug!(node_count; "Placing nodes on a grid");

        if node_count == 1 {
            return Ok(vec![bounds.center()]);
        }
        Ok(grid_positions(node_count, bounds))
    }
}
