//! Point cloud tables
//!
//! A cloud is a fixed-size table of rows, each carrying a raw `x` coordinate
//! (kept for diagnostics), a 3D position, and an RGB fill color. The fill
//! color is the only field rewritten after construction.

use rand_distr::{Distribution, Normal};
use serde::Serialize;
use tracing::{debug, trace};

/// One row of a point cloud table.
///
/// Serializes as a record (`{"x": .., "position": [..], "fcolor": [..]}`) so a
/// cloud renders into scene JSON as a list of records.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PointRow {
    /// Raw x coordinate, duplicated from `position[0]` for debugging.
    pub x: f64,
    /// Position as `[x, y, z]`.
    pub position: [f64; 3],
    /// Fill color as `[r, g, b]` in the 0..=255 range.
    pub fcolor: [f64; 3],
}

/// A labeled table of 3D points with per-point fill color.
///
/// Row count is fixed at construction; only `fcolor` mutates afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct PointCloud {
    rows: Vec<PointRow>,
}

impl PointCloud {
    /// Sample a cloud of `num_points` rows with normally distributed x/y
    /// coordinates and a constant z-plane and fill color.
    pub fn sampled(
        num_points: usize,
        mean: f64,
        std_dev: f64,
        z_plane: f64,
        fcolor: [f64; 3],
    ) -> Self {
        let xs = sample_normal(mean, std_dev, num_points);
        let ys = sample_normal(mean, std_dev, num_points);

        let rows = xs
            .into_iter()
            .zip(ys)
            .map(|(x, y)| PointRow {
                x,
                position: [x, y, z_plane],
                fcolor,
            })
            .collect();

        debug!(num_points, z_plane, "Point cloud sampled");
        Self { rows }
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows(&self) -> &[PointRow] {
        &self.rows
    }

    /// Rewrite every row's fill color in place.
    pub fn set_fill_color(&mut self, fcolor: [f64; 3]) {
        for row in &mut self.rows {
            row.fcolor = fcolor;
        }
        trace!(rows = self.rows.len(), ?fcolor, "Fill color rewritten");
    }
}

/// Draw `count` samples from a normal distribution.
///
/// Panics on a non-finite or non-positive `std_dev`.
pub fn sample_normal(mean: f64, std_dev: f64, count: usize) -> Vec<f64> {
    let normal = Normal::new(mean, std_dev).expect("std_dev must be finite and positive");
    let mut rng = rand::thread_rng();
    (0..count).map(|_| normal.sample(&mut rng)).collect()
}
