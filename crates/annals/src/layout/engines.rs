//! Layout engine factory module
//!
//! This module provides the [`NetworkEngine`] trait implemented by every
//! layout algorithm, and an [`EngineBuilder`] that configures an engine and
//! hands it out by [`LayoutEngine`] kind.

mod basic;
mod force;

use annals_core::geometry::{Point, Size};

use crate::{
    config::{DEFAULT_SEED, LayoutConfig},
    error::AnnalsError,
    layout::{Connectivity, LayoutEngine, Placement},
};

/// Trait defining the interface for network layout engines
pub trait NetworkEngine {
    /// Calculate one position per node of `connectivity`
    ///
    /// - `connectivity`: Which node pairs are linked
    /// - `extent`: Canvas size; every returned point lies in
    ///   `[0, width] × [0, height]`
    ///
    /// # Errors
    /// Returns `AnnalsError::Layout` if the extent is not finite and positive.
    fn calculate(
        &self,
        connectivity: &Connectivity,
        extent: Size,
    ) -> Result<Vec<Point>, AnnalsError>;
}

/// Builder for creating and configuring layout engines.
#[derive(Debug, Clone)]
pub struct EngineBuilder {
    iterations: usize,
    seed: Option<u64>,
    placement: Placement,
    gravity: f32,
}

impl Default for EngineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl EngineBuilder {
    /// Create a new engine builder with default settings
    pub fn new() -> Self {
        Self {
            iterations: 100,
            seed: Some(DEFAULT_SEED),
            placement: Placement::default(),
            gravity: 0.0,
        }
    }

    /// Create a builder carrying the simulation settings of a [`LayoutConfig`]
    pub fn from_config(config: &LayoutConfig) -> Self {
        Self::new()
            .with_iterations(config.iterations())
            .with_seed(Some(config.seed()))
            .with_placement(config.placement())
            .with_gravity(config.gravity())
    }

    /// Set the number of simulation steps
    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }

    /// Set the placement seed; `None` draws a fresh seed on every run
    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    /// Set the initial placement strategy
    pub fn with_placement(mut self, placement: Placement) -> Self {
        self.placement = placement;
        self
    }

    /// Set the strength of the pull toward the canvas center
    pub fn with_gravity(mut self, gravity: f32) -> Self {
        self.gravity = gravity;
        self
    }

    /// Build an engine of the given kind with the configured options
    pub fn build(&self, engine_type: LayoutEngine) -> Box<dyn NetworkEngine> {
        match engine_type {
            LayoutEngine::Force => {
                let mut engine = force::Engine::new();
                engine
                    .set_iterations(self.iterations)
                    .set_seed(self.seed)
                    .set_placement(self.placement)
                    .set_gravity(self.gravity);
                Box::new(engine)
            }
            LayoutEngine::Basic => Box::new(basic::Engine::new()),
        }
    }
}
