//! Error types for lawnkeeper

use thiserror::Error;

use crate::core::GridCoord;

/// Lawnkeeper error type
#[derive(Error, Debug)]
pub enum MowerError {
    #[error("Grid {width}x{height} is too small (need at least 3x3 for fence and lawn)")]
    DegenerateGrid { width: usize, height: usize },

    #[error("Grid {width}x{height} is too large (at most {max} cells per side)")]
    OversizedGrid {
        width: usize,
        height: usize,
        max: usize,
    },

    #[error("Obstacle rate {0}% out of range (0-100)")]
    InvalidObstacleRate(u8),

    #[error("Invalid navigator configuration: {0}")]
    InvalidNavigatorConfig(String),

    #[error("Start cell ({row}, {col}) is not mowable")]
    StartNotMowable { row: i32, col: i32 },

    #[error("No mowable cell to place the mower on")]
    NoMowableCell,

    #[error("Illegal move from {from} to {to}")]
    IllegalMove { from: GridCoord, to: GridCoord },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_yaml::Error> for MowerError {
    fn from(e: serde_yaml::Error) -> Self {
        MowerError::Config(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, MowerError>;
