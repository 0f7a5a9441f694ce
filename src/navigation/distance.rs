//! Distance metrics for ranking candidate targets.

use serde::{Deserialize, Serialize};

use crate::core::{GridCoord, GridDims};

/// Metric used to rank unmowed cells when picking a long-range target.
///
/// Ranking only: the mower itself never wraps across an edge, the fence
/// stops it. With `ToroidalManhattan` a cell that is close "through the
/// wall" can therefore outrank one that is closer on foot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DistanceMetric {
    /// Per-axis minimum of the direct and the wrap-around difference
    #[default]
    ToroidalManhattan,
    /// Plain |Δrow| + |Δcol|
    Manhattan,
}

impl DistanceMetric {
    /// Distance between `a` and `b` on a grid of size `dims`
    pub fn distance(self, a: GridCoord, b: GridCoord, dims: GridDims) -> u32 {
        match self {
            DistanceMetric::ToroidalManhattan => toroidal_manhattan(a, b, dims),
            DistanceMetric::Manhattan => a.manhattan_distance(&b),
        }
    }
}

/// Manhattan distance where each axis may wrap around the grid edge.
#[inline]
pub fn toroidal_manhattan(a: GridCoord, b: GridCoord, dims: GridDims) -> u32 {
    wrapped_axis(a.row, b.row, dims.rows) + wrapped_axis(a.col, b.col, dims.cols)
}

#[inline]
fn wrapped_axis(a: i32, b: i32, len: usize) -> u32 {
    let direct = a.abs_diff(b);
    let around = (len as u32).saturating_sub(direct);
    direct.min(around)
}
