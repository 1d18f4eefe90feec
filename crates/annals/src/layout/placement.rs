//! Initial node placement shared by the layout engines.

use log::debug;
use rand::{Rng, SeedableRng, rngs::StdRng};

use annals_core::geometry::{Bounds, Point};

use super::Placement;

/// Places `count` nodes inside `bounds`.
///
/// Random placement draws from a [`StdRng`] seeded with `seed`; without a seed
/// a fresh one is drawn and logged so the run can be reproduced.
pub(super) fn initial_positions(
    placement: Placement,
    count: usize,
    bounds: Bounds,
    seed: Option<u64>,
) -> Vec<Point> {
    match placement {
        Placement::Random => random_positions(count, bounds, seed),
        Placement::Grid => grid_positions(count, bounds),
    }
}

fn random_positions(count: usize, bounds: Bounds, seed: Option<u64>) -> Vec<Point> {
    let seed = seed.unwrap_or_else(|| {
        let seed = rand::rng().random::<u64>();
        debug!(seed; "Drew a fresh placement seed");
        seed
    });
    let mut rng = StdRng::seed_from_u64(seed);

    (0..count)
        .map(|_| {
            Point::new(
                rng.random_range(bounds.min_x()..=bounds.max_x()),
                rng.random_range(bounds.min_y()..=bounds.max_y()),
            )
        })
        .collect()
}

/// Centers of the cells of a near-square grid, filled row by row.
pub(super) fn grid_positions(count: usize, bounds: Bounds) -> Vec<Point> {
    if count == 0 {
        return Vec::new();
    }

    let columns = (count as f32).sqrt().ceil() as usize;
    let rows = count.div_ceil(columns);
    let cell_width = bounds.width() / columns as f32;
    let cell_height = bounds.height() / rows as f32;

    (0..count)
        .map(|i| {
            let row = i / columns;
            let col = i % columns;
            Point::new(
                bounds.min_x() + (col as f32 + 0.5) * cell_width,
                bounds.min_y() + (row as f32 + 0.5) * cell_height,
            )
        })
        .collect()
}
