//! Network layout.
//!
//! Layout engines turn an adjacency matrix into one [`Point`] per node inside
//! a `width × height` canvas. The matrix is first reduced to a
//! [`Connectivity`] view: a pair of nodes is connected when either direction
//! carries a nonzero cell, and each connected pair contributes one link
//! regardless of direction.

mod engines;
mod placement;

pub use engines::{EngineBuilder, NetworkEngine};

use std::{fmt, str::FromStr};

use log::debug;
use serde::{Deserialize, Serialize};

use annals_core::{
    geometry::{Point, Size},
    matrix::{Cell, Matrix},
};

use crate::{config::LayoutConfig, error::AnnalsError};

/// Available layout engines.
///
/// The names match external configuration strings (snake_case).
///
/// # Variants
///
/// - `Force` - Fruchterman–Reingold force-directed simulation (default)
/// - `Basic` - Deterministic grid placement without simulation
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LayoutEngine {
    #[default]
    Force,
    Basic,
}

impl FromStr for LayoutEngine {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "force" => Ok(Self::Force),
            "basic" => Ok(Self::Basic),
            _ => Err("Unsupported layout engine"),
        }
    }
}

impl From<LayoutEngine> for &'static str {
    fn from(val: LayoutEngine) -> Self {
        match val {
            LayoutEngine::Force => "force",
            LayoutEngine::Basic => "basic",
        }
    }
}

impl fmt::Display for LayoutEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s: &'static str = (*self).into();
        write!(f, "{s}")
    }
}

/// How nodes are placed before a simulation starts.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Placement {
    /// Uniformly random inside the canvas, drawn from a seeded generator.
    #[default]
    Random,
    /// Centers of a near-square grid of cells covering the canvas.
    Grid,
}

/// Symmetric neighbor lists derived from an adjacency matrix.
///
/// # Examples
///
/// ```
/// # use annals::layout::Connectivity;
/// # use annals_core::matrix::Matrix;
/// // Only the forward edge 0 -> 2 is marked
/// let matrix = Matrix::from_rows(vec![
///     vec![0i8, 0, 1],
///     vec![0, 0, 0],
///     vec![0, 0, 0],
/// ]).unwrap();
///
/// let connectivity = Connectivity::from_matrix(&matrix);
/// assert_eq!(connectivity.neighbors(0), &[2]);
/// assert_eq!(connectivity.neighbors(2), &[0]);
/// assert_eq!(connectivity.link_count(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Connectivity {
    neighbors: Vec<Vec<usize>>,
}

impl Connectivity {
    /// Builds the neighbor lists; diagonal cells are ignored.
    pub fn from_matrix<T: Cell>(adjacency: &Matrix<T>) -> Self {
        let dim = adjacency.dim();
        let mut neighbors = vec![Vec::new(); dim];

        for i in 0..dim {
            for j in (i + 1)..dim {
                if adjacency.has_edge(i, j) || adjacency.has_edge(j, i) {
                    neighbors[i].push(j);
                    neighbors[j].push(i);
                }
            }
        }

        Self { neighbors }
    }

    /// Returns the number of nodes
    pub fn node_count(&self) -> usize {
        self.neighbors.len()
    }

    /// Returns the nodes linked to `node`, in ascending order
    pub fn neighbors(&self, node: usize) -> &[usize] {
        self.neighbors
            .get(node)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Returns the number of undirected links
    pub fn link_count(&self) -> usize {
        self.neighbors.iter().map(Vec::len).sum::<usize>() / 2
    }

    /// Returns true if `a` and `b` are linked
    pub fn is_linked(&self, a: usize, b: usize) -> bool {
        self.neighbors(a).binary_search(&b).is_ok()
    }
}

/// Lays out an adjacency matrix with the default force-directed engine.
///
/// Returns one position per matrix row, each inside `[0, width] × [0, height]`.
///
/// # Errors
///
/// Returns [`AnnalsError::Layout`] when `width` or `height` is not a finite,
/// strictly positive number.
///
/// # Examples
///
/// ```
/// # use annals::layout::layout;
/// # use annals_core::matrix::Matrix;
/// let matrix = Matrix::from_rows(vec![vec![0i8, 1], vec![0, 0]]).unwrap();
/// let positions = layout(&matrix, 300.0, 200.0).unwrap();
///
/// assert_eq!(positions.len(), 2);
/// for p in positions {
///     assert!((0.0..=300.0).contains(&p.x()));
///     assert!((0.0..=200.0).contains(&p.y()));
/// }
/// ```
pub fn layout<T: Cell>(
    adjacency: &Matrix<T>,
    width: f32,
    height: f32,
) -> Result<Vec<Point>, AnnalsError> {
    let mut config = LayoutConfig::default();
    config.set_extent(width, height);
    layout_with_config(adjacency, &config)
}

/// Lays out an adjacency matrix using every setting of a [`LayoutConfig`].
///
/// # Errors
///
/// Returns [`AnnalsError::Layout`] for invalid canvas bounds.
pub fn layout_with_config<T: Cell>(
    adjacency: &Matrix<T>,
    config: &LayoutConfig,
) -> Result<Vec<Point>, AnnalsError> {
    let connectivity = Connectivity::from_matrix(adjacency);
    debug!(
        node_count = connectivity.node_count(),
        link_count = connectivity.link_count(),
        engine:% = config.engine();
        "Laying out network"
    );

    let engine = EngineBuilder::from_config(config).build(config.engine());
    engine.calculate(
        &connectivity,
        Size::new(config.width(), config.height()),
    )
}

/// Checks that a canvas extent can hold a layout.
fn validate_extent(extent: Size) -> Result<(), AnnalsError> {
    if extent.is_positive() {
        Ok(())
    } else {
        Err(AnnalsError::Layout(format!(
            "layout bounds must be finite and positive, got {}x{}",
            extent.width(),
            extent.height()
        )))
    }
}
