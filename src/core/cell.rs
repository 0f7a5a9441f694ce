//! Cell types for the lawn grid.
//!
//! A cell's content is a tagged variant rather than a type hierarchy:
//! the mower occupies a cell but its navigation state lives elsewhere
//! (see [`crate::navigation::CoverageNavigator`]).

use serde::{Deserialize, Serialize};

/// Impassable interior obstacle kinds
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ObstacleKind {
    /// Rock lying in the lawn
    Stone,
    /// Tree trunk
    Tree,
}

/// What occupies a cell.
///
/// - `Grass` - Mowable lawn, mowed or not
/// - `Obstacle` - Stone or tree inside the lawn
/// - `Fence` - Border cell, never traversable
/// - `AgentOccupied` - Grass cell currently under the mower
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CellContent {
    /// Lawn cell
    Grass {
        /// Has the mower already passed over this cell?
        mowed: bool,
    },

    /// Interior obstacle
    Obstacle(ObstacleKind),

    /// Border fence
    Fence,

    /// Grass cell under the mower
    AgentOccupied,
}

impl Default for CellContent {
    fn default() -> Self {
        CellContent::Grass { mowed: false }
    }
}

impl CellContent {
    /// Can the mower drive onto this cell?
    #[inline]
    pub fn is_mowable(self) -> bool {
        matches!(self, CellContent::Grass { .. })
    }

    /// Is this grass that still needs mowing?
    #[inline]
    pub fn is_unmowed_grass(self) -> bool {
        matches!(self, CellContent::Grass { mowed: false })
    }

    /// Does this cell count toward the session's grass total?
    ///
    /// The mower's own cell is grass underneath.
    #[inline]
    pub fn is_grass(self) -> bool {
        matches!(self, CellContent::Grass { .. } | CellContent::AgentOccupied)
    }

    /// Is this an interior obstacle (fence excluded)?
    #[inline]
    pub fn is_obstacle(self) -> bool {
        matches!(self, CellContent::Obstacle(_))
    }

    /// Single character representation for rendering
    pub fn as_char(self) -> char {
        match self {
            CellContent::Grass { mowed: false } => 'W',
            CellContent::Grass { mowed: true } => 'v',
            CellContent::Obstacle(ObstacleKind::Stone) => 'O',
            CellContent::Obstacle(ObstacleKind::Tree) => 'T',
            CellContent::Fence => 'H',
            CellContent::AgentOccupied => '@',
        }
    }
}

/// A single cell in the grid with retry bookkeeping
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Cell {
    /// What occupies the cell
    pub content: CellContent,

    /// Ticks spent chasing this cell as a long-range target
    pub attempts: u32,

    /// Excluded from target selection after exhausting its retry budget
    pub inaccessible: bool,
}

impl Cell {
    /// Create a cell with a specific content
    #[inline]
    pub fn with_content(content: CellContent) -> Self {
        Self {
            content,
            attempts: 0,
            inaccessible: false,
        }
    }

    /// Create an unmowed grass cell
    #[inline]
    pub fn grass() -> Self {
        Self::with_content(CellContent::Grass { mowed: false })
    }

    /// Create a fence cell
    #[inline]
    pub fn fence() -> Self {
        Self::with_content(CellContent::Fence)
    }

    /// Create an obstacle cell
    #[inline]
    pub fn obstacle(kind: ObstacleKind) -> Self {
        Self::with_content(CellContent::Obstacle(kind))
    }

    /// Is this cell mowable?
    #[inline]
    pub fn is_mowable(&self) -> bool {
        self.content.is_mowable()
    }

    /// Is this cell a valid long-range target?
    #[inline]
    pub fn is_target_candidate(&self) -> bool {
        self.content.is_unmowed_grass() && !self.inaccessible
    }
}
