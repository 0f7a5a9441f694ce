//! Coordinate and heading types for the lawn grid.
//!
//! Rows grow southward, columns grow eastward. Cell `(0, 0)` is the
//! north-west fence corner.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Sub};

/// Grid coordinates (integer cell indices)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct GridCoord {
    /// Row index (0 = north edge)
    pub row: i32,
    /// Column index (0 = west edge)
    pub col: i32,
}

impl GridCoord {
    /// Create a new grid coordinate
    #[inline]
    pub fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Plain Manhattan distance to another coordinate (no wrap-around)
    #[inline]
    pub fn manhattan_distance(&self, other: &GridCoord) -> u32 {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }

    /// Neighbor one cell away in the given direction
    #[inline]
    pub fn step(&self, direction: Direction) -> GridCoord {
        *self + direction.offset()
    }

    /// Get the 4 cardinal neighbors (N, E, S, W)
    #[inline]
    pub fn neighbors_4(&self) -> [GridCoord; 4] {
        [
            self.step(Direction::North),
            self.step(Direction::East),
            self.step(Direction::South),
            self.step(Direction::West),
        ]
    }

    /// Direction of a 4-adjacent coordinate, if `other` is one
    pub fn direction_to(&self, other: &GridCoord) -> Option<Direction> {
        Direction::ALL
            .into_iter()
            .find(|&d| self.step(d) == *other)
    }

    /// Does stepping in `direction` reduce the gap to `target` along that axis?
    #[inline]
    pub fn approaches(&self, direction: Direction, target: &GridCoord) -> bool {
        match direction {
            Direction::North => target.row < self.row,
            Direction::South => target.row > self.row,
            Direction::East => target.col > self.col,
            Direction::West => target.col < self.col,
        }
    }
}

impl Add for GridCoord {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        GridCoord::new(self.row + other.row, self.col + other.col)
    }
}

impl Sub for GridCoord {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        GridCoord::new(self.row - other.row, self.col - other.col)
    }
}

impl fmt::Display for GridCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Grid dimensions in cells
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridDims {
    /// Number of rows
    pub rows: usize,
    /// Number of columns
    pub cols: usize,
}

impl GridDims {
    /// Create new dimensions
    #[inline]
    pub fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }

    /// Total number of cells
    #[inline]
    pub fn cell_count(&self) -> usize {
        self.rows * self.cols
    }

    /// Is the coordinate inside these dimensions?
    #[inline]
    pub fn contains(&self, coord: GridCoord) -> bool {
        coord.row >= 0
            && coord.col >= 0
            && (coord.row as usize) < self.rows
            && (coord.col as usize) < self.cols
    }
}

/// Compass heading of the mower.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Direction {
    /// Toward row 0
    North,
    /// Toward the last column
    #[default]
    East,
    /// Toward the last row
    South,
    /// Toward column 0
    West,
}

impl Direction {
    /// All headings in clockwise order starting at North
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// Coordinate delta for one step
    #[inline]
    pub fn offset(self) -> GridCoord {
        match self {
            Direction::North => GridCoord::new(-1, 0),
            Direction::East => GridCoord::new(0, 1),
            Direction::South => GridCoord::new(1, 0),
            Direction::West => GridCoord::new(0, -1),
        }
    }

    /// Heading after a quarter turn clockwise
    #[inline]
    pub fn right(self) -> Direction {
        match self {
            Direction::North => Direction::East,
            Direction::East => Direction::South,
            Direction::South => Direction::West,
            Direction::West => Direction::North,
        }
    }

    /// Heading after a quarter turn counter-clockwise
    #[inline]
    pub fn left(self) -> Direction {
        self.right().opposite()
    }

    /// Reverse heading
    #[inline]
    pub fn opposite(self) -> Direction {
        self.right().right()
    }

    /// Neighbor scan order relative to this heading: ahead, right, left, behind.
    ///
    /// Facing East this yields East, South, North, West, which keeps the
    /// mower on straight runs as long as grass lies ahead.
    #[inline]
    pub fn scan_order(self) -> [Direction; 4] {
        [self, self.right(), self.left(), self.opposite()]
    }

    /// Single character representation for debugging
    pub fn as_char(self) -> char {
        match self {
            Direction::North => '^',
            Direction::East => '>',
            Direction::South => 'v',
            Direction::West => '<',
        }
    }
}
