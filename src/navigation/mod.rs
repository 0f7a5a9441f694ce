//! Greedy coverage navigation.
//!
//! The navigator decides one step per tick using only local information
//! plus a full-grid scan for the nearest unmowed cell. It never plans a
//! path.
//!
//! # Per-tick decision
//!
//! 1. Look at the four neighbors, ahead first, then right, left, behind.
//!    The first unmowed one becomes the target.
//! 2. Otherwise rank every unmowed, not-inaccessible cell by the
//!    configured [`DistanceMetric`] and take the nearest (row-major ties).
//!    A target chased for more than `retry_limit` ticks is flagged
//!    inaccessible.
//! 3. Step candidates are mowable neighbors that close in on the target
//!    along an axis, or any mowable neighbor when none do.
//! 4. Recently vacated cells are dropped unless that empties the set.
//! 5. Remaining ties are broken by the injected RNG.
//!
//! # Example
//!
//! ```rust,ignore
//! use lawnkeeper::navigation::CoverageNavigator;
//!
//! let mut nav = CoverageNavigator::place(&mut grid, start, Direction::East, config)?;
//! while let Some(step) = nav.select_step(&mut grid, &mut rng) {
//!     nav.apply_move(&mut grid, step)?;
//! }
//! ```

mod distance;
mod history;
mod navigator;
mod state;

pub use distance::{DistanceMetric, toroidal_manhattan};
pub use history::MoveHistory;
pub use navigator::{CoverageNavigator, TickOutcome};
pub use state::{NavigatorState, StepDecision};
