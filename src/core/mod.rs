//! Core types for the lawn grid.

mod cell;
mod point;

pub use cell::{Cell, CellContent, ObstacleKind};
pub use point::{Direction, GridCoord, GridDims};
