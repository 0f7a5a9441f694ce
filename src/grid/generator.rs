//! Random terrain generation.
//!
//! The border is always fence. Each interior cell is grass unless a
//! draw under the obstacle rate turns it into a stone or a tree.

use rand::Rng;

use crate::core::{Cell, GridCoord, ObstacleKind};
use crate::error::{MowerError, Result};

use super::storage::LawnGrid;

/// Generate a fenced lawn with randomly scattered obstacles.
///
/// # Arguments
/// * `width` - Columns including the fence
/// * `height` - Rows including the fence
/// * `obstacle_rate` - Percent chance (0-100) that an interior cell is an obstacle
/// * `rng` - Random source; seed it for reproducible maps
pub fn generate_terrain<R: Rng + ?Sized>(
    width: usize,
    height: usize,
    obstacle_rate: u8,
    rng: &mut R,
) -> Result<LawnGrid> {
    if obstacle_rate > 100 {
        return Err(MowerError::InvalidObstacleRate(obstacle_rate));
    }

    let mut grid = LawnGrid::fenced(width, height)?;

    for row in 1..height - 1 {
        for col in 1..width - 1 {
            if rng.gen_range(0..100u8) < obstacle_rate {
                let kind = if rng.gen_bool(0.5) {
                    ObstacleKind::Stone
                } else {
                    ObstacleKind::Tree
                };
                grid.set_interior(GridCoord::new(row as i32, col as i32), Cell::obstacle(kind));
            }
        }
    }

    let (grass, obstacles) = grid.count_grass_and_obstacles();
    log::debug!(
        "Generated {}x{} terrain: {} grass, {} obstacles (rate {}%)",
        width,
        height,
        grass,
        obstacles,
        obstacle_rate
    );

    Ok(grid)
}
