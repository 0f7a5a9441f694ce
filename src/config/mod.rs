//! Simulation configuration.
//!
//! Loads everything from a single YAML file with sensible defaults.
//!
//! ## Example YAML
//!
//! ```yaml
//! map_size: normal      # small (10x10) | normal (20x20) | large (30x30)
//! obstacle_rate: 15     # percent of interior cells
//! seed: 42              # 0 = random each run
//! start:
//!   policy: fixed
//!   row: 1
//!   col: 1
//! navigation:
//!   retry_limit: 6
//!   history_len: 2
//!   metric: toroidal_manhattan
//! ```

mod defaults;
mod navigation;
mod simulation;

pub use navigation::NavigatorConfig;
pub use simulation::{MapSize, SimulationConfig, StartPolicy};
