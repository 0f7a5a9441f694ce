//! # Lawnkeeper: Greedy Coverage Navigation for a Grid Lawn Mower
//!
//! Simulates an autonomous mower that has to visit every reachable grass
//! cell of a fenced lawn. There is no path planning: each tick the mower
//! picks a nearby target and takes one step toward it.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::sync::atomic::AtomicBool;
//! use lawnkeeper::{AutoStep, Session, SimulationConfig};
//!
//! let config = SimulationConfig::default().with_seed(42);
//! let mut session = Session::new(&config).unwrap();
//! let stop = AtomicBool::new(false);
//! let report = session.run(&mut AutoStep::new(), &stop, |_, _| {}).unwrap();
//! println!("{}", report);
//! ```
//!
//! ## Architecture
//!
//! - [`core`]: Coordinates, directions and cell contents
//! - [`grid`]: Lawn storage and terrain generation
//! - [`navigation`]: The coverage navigator and its helpers
//! - [`session`]: Tick loop, step pacing and the end-of-run report
//! - [`config`]: YAML configuration
//! - [`render`]: Plain-text lawn rendering
//!
//! ## Data Flow
//!
//! ```text
//!   Session::tick
//!        │
//!        ▼
//!   CoverageNavigator::select_step(grid) ──► None: done
//!        │ StepDecision
//!        ▼
//!   CoverageNavigator::apply_move(grid)  ──► vacated cell mowed
//! ```

pub mod config;
pub mod core;
pub mod error;
pub mod grid;
pub mod navigation;
pub mod render;
pub mod session;

pub use config::{MapSize, NavigatorConfig, SimulationConfig, StartPolicy};
pub use error::{MowerError, Result};
pub use grid::{LawnGrid, generate_terrain};
pub use navigation::{
    CoverageNavigator, DistanceMetric, NavigatorState, StepDecision, TickOutcome,
};
pub use render::render_ascii;
pub use session::{
    AutoStep, Session, SessionReport, StepControl, StepSignal, Termination, compute_optimality,
    create_session, place_agent,
};
