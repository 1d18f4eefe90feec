//! Force-directed network layout engine
//!
//! This module implements the Fruchterman–Reingold spring embedder. Every
//! pair of nodes repels with strength `k² / d`, every linked pair attracts
//! with strength `d² / k`, where `k = sqrt(area / n)` is the ideal link
//! length. Per-step movement is capped by a temperature that cools linearly
//! to zero over the iteration budget, and nodes never leave the canvas.
//!
//! Forces are accumulated in `f64`. Squared lengths of a canvas near the
//! `f32` limits overflow or underflow in `f32`.

use std::f64::consts::TAU;

use log::{debug, trace};

use annals_core::geometry::{Bounds, Point, Size};

use crate::{
    config::DEFAULT_SEED,
    error::AnnalsError,
    layout::{
        Connectivity, Placement,
        engines::NetworkEngine,
        placement::initial_positions,
        validate_extent,
    },
};

/// Distances below this fraction of the ideal link length are treated as
/// coincident nodes.
const MIN_DISTANCE_RATIO: f64 = 1e-4;

/// A position or force in simulation space.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
struct Vector {
    x: f64,
    y: f64,
}

impl Vector {
    fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    fn add(self, other: Vector) -> Self {
        Self::new(self.x + other.x, self.y + other.y)
    }

    fn sub(self, other: Vector) -> Self {
        Self::new(self.x - other.x, self.y - other.y)
    }

    fn scale(self, factor: f64) -> Self {
        Self::new(self.x * factor, self.y * factor)
    }

    fn length(self) -> f64 {
        self.x.hypot(self.y)
    }
}

impl From<Point> for Vector {
    fn from(point: Point) -> Self {
        Self::new(point.x().into(), point.y().into())
    }
}

/// Canvas rectangle in simulation space.
#[derive(Debug, Clone, Copy)]
struct Canvas {
    min: Vector,
    max: Vector,
}

impl Canvas {
    fn width(self) -> f64 {
        self.max.x - self.min.x
    }

    fn height(self) -> f64 {
        self.max.y - self.min.y
    }

    fn center(self) -> Vector {
        self.min.add(self.max).scale(0.5)
    }

    fn clamp(self, position: Vector) -> Vector {
        Vector::new(
            position.x.max(self.min.x).min(self.max.x),
            position.y.max(self.min.y).min(self.max.y),
        )
    }

    /// Converts back to a layout point.
    ///
    /// Rounding to the nearest `f32` keeps a clamped coordinate inside the
    /// `f32` bounds it came from.
    fn to_point(self, position: Vector) -> Point {
        let position = self.clamp(position);
        Point::new(position.x as f32, position.y as f32)
    }
}

impl From<Bounds> for Canvas {
    fn from(bounds: Bounds) -> Self {
        Self {
            min: Vector::new(bounds.min_x().into(), bounds.min_y().into()),
            max: Vector::new(bounds.max_x().into(), bounds.max_y().into()),
        }
    }
}

/// Force layout engine for participant networks
///
/// The simulation always runs the full iteration schedule; there is no
/// convergence-based early exit.
pub struct Engine {
    // Simulation parameters
    iterations: usize,
    // Starting temperature as a fraction of the larger canvas side
    temperature_ratio: f64,
    gravity: f64,
    // Initial placement
    placement: Placement,
    seed: Option<u64>,
}

impl Engine {
    /// Create a new force layout engine
    pub fn new() -> Self {
        Self {
            iterations: 100,
            temperature_ratio: 0.1,
            gravity: 0.0,
            placement: Placement::Random,
            seed: Some(DEFAULT_SEED),
        }
    }

    /// Set the number of iterations for the force simulation
    pub fn set_iterations(&mut self, iterations: usize) -> &mut Self {
        self.iterations = iterations;
        self
    }

    /// Set the seed used by random initial placement
    pub fn set_seed(&mut self, seed: Option<u64>) -> &mut Self {
        self.seed = seed;
        self
    }

    /// Set the initial placement strategy
    pub fn set_placement(&mut self, placement: Placement) -> &mut Self {
        self.placement = placement;
        self
    }

    /// Set the strength of the pull toward the canvas center
    pub fn set_gravity(&mut self, gravity: f32) -> &mut Self {
        self.gravity = gravity.into();
        self
    }

    /// Run the simulation from the given starting positions
    fn run_force_simulation(
        &self,
        positions: Vec<Point>,
        connectivity: &Connectivity,
        bounds: Bounds,
    ) -> Vec<Point> {
        let canvas = Canvas::from(bounds);
        let mut positions: Vec<Vector> = positions.into_iter().map(Vector::from).collect();

        let node_count = positions.len() as f64;
        let ideal_length = (canvas.width() * canvas.height() / node_count).sqrt();
        let initial_temperature = canvas.width().max(canvas.height()) * self.temperature_ratio;

        for iteration in 0..self.iterations {
            let temperature =
                initial_temperature * (1.0 - iteration as f64 / self.iterations as f64);

            let displacements = self.displacements(&positions, connectivity, ideal_length, canvas);

            for (position, displacement) in positions.iter_mut().zip(displacements) {
                let length = displacement.length();
                if length > 0.0 && length.is_finite() {
                    let step = displacement.scale(length.min(temperature) / length);
                    *position = canvas.clamp(position.add(step));
                }
            }

            trace!(iteration, temperature; "Force simulation step");
        }

        positions
            .into_iter()
            .map(|position| canvas.to_point(position))
            .collect()
    }

    #[cfg(not(feature = "parallel"))]
    fn displacements(
        &self,
        positions: &[Vector],
        connectivity: &Connectivity,
        ideal_length: f64,
        canvas: Canvas,
    ) -> Vec<Vector> {
        (0..positions.len())
            .map(|index| self.displacement(index, positions, connectivity, ideal_length, canvas))
            .collect()
    }

    #[cfg(feature = "parallel")]
    fn displacements(
        &self,
        positions: &[Vector],
        connectivity: &Connectivity,
        ideal_length: f64,
        canvas: Canvas,
    ) -> Vec<Vector> {
        use rayon::prelude::*;

        (0..positions.len())
            .into_par_iter()
            .map(|index| self.displacement(index, positions, connectivity, ideal_length, canvas))
            .collect()
    }

    /// Sum of all forces acting on one node
    fn displacement(
        &self,
        index: usize,
        positions: &[Vector],
        connectivity: &Connectivity,
        ideal_length: f64,
        canvas: Canvas,
    ) -> Vector {
        let position = positions[index];
        let min_distance = ideal_length * MIN_DISTANCE_RATIO;
        let mut total = Vector::default();

        // Repulsion from every other node
        for (other, &other_position) in positions.iter().enumerate() {
            if other == index {
                continue;
            }
            let (direction, distance) =
                separation(index, position, other, other_position, min_distance);
            total = total.add(direction.scale(ideal_length * ideal_length / distance));
        }

        // Attraction toward linked nodes
        for &neighbor in connectivity.neighbors(index) {
            let (direction, distance) =
                separation(index, position, neighbor, positions[neighbor], min_distance);
            total = total.sub(direction.scale(distance * distance / ideal_length));
        }

        if self.gravity > 0.0 {
            total = total.add(canvas.center().sub(position).scale(self.gravity));
        }

        total
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
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
        match node_count {
            0 => return Ok(Vec::new()),
            1 => return Ok(vec![bounds.center()]),
            _ => {}
        }

        debug!(
            node_count,
            link_count = connectivity.link_count(),
            iterations = self.iterations;
            "Running force simulation"
        );

        let positions = initial_positions(self.placement, node_count, bounds, self.seed);
        Ok(self.run_force_simulation(positions, connectivity, bounds))
    }
}

/// Unit vector pointing from node `other` to node `index`, and their distance.
///
/// Nodes closer than `min_distance` are coincident. They get a direction
/// derived from the pair of indices, opposite for the two members of the
/// pair, and `min_distance` as their distance.
fn separation(
    index: usize,
    position: Vector,
    other: usize,
    other_position: Vector,
    min_distance: f64,
) -> (Vector, f64) {
    let delta = position.sub(other_position);
    let distance = delta.length();
    if distance > min_distance {
        return (delta.scale(1.0 / distance), distance);
    }

    let (low, high) = if index < other {
        (index, other)
    } else {
        (other, index)
    };
    let angle = ((low as f64) * 0.618_034 + (high as f64) * 0.414_214) * TAU;
    let direction = Vector::new(angle.cos(), angle.sin());
    if index < other {
        (direction, min_distance)
    } else {
        (direction.scale(-1.0), min_distance)
    }
}


#[cfg(test)]
mod proptest_tests {
    use annals_core::matrix::Matrix;
    use proptest::prelude::*;

    use super::*;

    // ===================
    // Strategies
    // ===================

    fn adjacency_strategy() -> impl Strategy<Value = Matrix<i8>> {
        (0usize..9).prop_flat_map(|n| {
            prop::collection::vec(prop::collection::vec(0i8..=1, n), n)
                .prop_map(|rows| Matrix::from_rows(rows).unwrap())
        })
    }

    /// Canvas sides sampled log-uniformly over forty orders of magnitude.
    fn extent_strategy() -> impl Strategy<Value = Size> {
        (-20.0f32..20.0, -20.0f32..20.0)
            .prop_map(|(w, h)| Size::new(10f32.powf(w), 10f32.powf(h)))
    }

    // ===================
    // Property Test Functions
    // ===================

    /// Every coordinate lies in the canvas and is finite.
    fn check_positions_in_bounds(
        adjacency: &Matrix<i8>,
        extent: Size,
        seed: u64,
    ) -> Result<(), TestCaseError> {
        let mut engine = Engine::new();
        engine.set_iterations(30).set_seed(Some(seed));
        let positions = engine
            .calculate(&Connectivity::from_matrix(adjacency), extent)
            .unwrap();

        prop_assert_eq!(positions.len(), adjacency.dim());
        for p in positions {
            prop_assert!(p.is_finite(), "non-finite position {:?}", p);
            prop_assert!(p.x() >= 0.0 && p.x() <= extent.width(), "x out of range: {:?}", p);
            prop_assert!(p.y() >= 0.0 && p.y() <= extent.height(), "y out of range: {:?}", p);
        }
        Ok(())
    }

    // ===================
    // Proptest Wrappers
    // ===================

    proptest! {
        #[test]
        fn positions_in_bounds(
            adjacency in adjacency_strategy(),
            extent in extent_strategy(),
            seed in any::<u64>(),
        ) {
            check_positions_in_bounds(&adjacency, extent, seed)?;
        }
    }
}
