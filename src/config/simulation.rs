//! Main SimulationConfig and YAML loading.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::GridCoord;
use crate::error::{MowerError, Result};
use crate::grid::check_grid_size;

use super::defaults;
use super::navigation::NavigatorConfig;

/// Preset lawn sizes (fence included)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MapSize {
    /// 10 x 10
    #[default]
    Small,
    /// 20 x 20
    Normal,
    /// 30 x 30
    Large,
}

impl MapSize {
    /// `(width, height)` in cells
    pub fn dimensions(self) -> (usize, usize) {
        match self {
            MapSize::Small => (10, 10),
            MapSize::Normal => (20, 20),
            MapSize::Large => (30, 30),
        }
    }
}

/// Where the mower starts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "policy", rename_all = "snake_case")]
pub enum StartPolicy {
    /// Any mowable cell, drawn from the session RNG
    #[default]
    Random,
    /// A remembered start cell
    Fixed {
        /// Row index
        row: i32,
        /// Column index
        col: i32,
    },
}

impl StartPolicy {
    /// Fixed start at `coord`
    pub fn fixed(coord: GridCoord) -> Self {
        StartPolicy::Fixed {
            row: coord.row,
            col: coord.col,
        }
    }
}

/// Full simulation configuration loaded from YAML
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Preset lawn size
    #[serde(default)]
    pub map_size: MapSize,

    /// Width override (cells, fence included)
    #[serde(default)]
    pub width: Option<usize>,

    /// Height override (cells, fence included)
    #[serde(default)]
    pub height: Option<usize>,

    /// Percent of interior cells drawn as obstacles
    #[serde(default = "defaults::obstacle_rate")]
    pub obstacle_rate: u8,

    /// RNG seed (0 = fresh entropy each run)
    #[serde(default)]
    pub seed: u64,

    /// Start placement
    #[serde(default)]
    pub start: StartPolicy,

    /// Navigator settings
    #[serde(default)]
    pub navigation: NavigatorConfig,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            map_size: MapSize::Small,
            width: None,
            height: None,
            obstacle_rate: 10,
            seed: 0,
            start: StartPolicy::Random,
            navigation: NavigatorConfig::default(),
        }
    }
}

impl SimulationConfig {
    /// Load configuration from a YAML file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml(&contents)
    }

    /// Load from default config path (configs/lawnkeeper.yaml), or defaults
    pub fn load_default() -> Result<Self> {
        let path = Path::new("configs/lawnkeeper.yaml");
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        Ok(config)
    }

    /// Serialize to YAML string
    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Effective `(width, height)`, overrides applied
    pub fn dimensions(&self) -> (usize, usize) {
        let (w, h) = self.map_size.dimensions();
        (self.width.unwrap_or(w), self.height.unwrap_or(h))
    }

    /// Reject settings that cannot produce a session.
    pub fn validate(&self) -> Result<()> {
        let (width, height) = self.dimensions();
        check_grid_size(width, height)?;
        if self.obstacle_rate > 100 {
            return Err(MowerError::InvalidObstacleRate(self.obstacle_rate));
        }
        self.navigation.validate()
    }

    /// Builder-style setter for map size.
    pub fn with_map_size(mut self, size: MapSize) -> Self {
        self.map_size = size;
        self
    }

    /// Builder-style setter for explicit dimensions.
    pub fn with_dimensions(mut self, width: usize, height: usize) -> Self {
        self.width = Some(width);
        self.height = Some(height);
        self
    }

    /// Builder-style setter for obstacle rate.
    pub fn with_obstacle_rate(mut self, rate: u8) -> Self {
        self.obstacle_rate = rate;
        self
    }

    /// Builder-style setter for seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Builder-style setter for start policy.
    pub fn with_start(mut self, start: StartPolicy) -> Self {
        self.start = start;
        self
    }

    /// Builder-style setter for navigator config.
    pub fn with_navigation(mut self, navigation: NavigatorConfig) -> Self {
        self.navigation = navigation;
        self
    }
}
