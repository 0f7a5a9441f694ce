//! Lawn grid: fixed-size cell storage and terrain generation.

mod generator;
mod storage;

pub use generator::generate_terrain;
pub use storage::{CellCounts, LawnGrid, MAX_GRID_SIDE, MIN_GRID_SIDE, check_grid_size};
