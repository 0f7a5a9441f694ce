//! Simulation session: one lawn, one mower, one tick loop.
//!
//! A session owns its grid, navigator and random source exclusively.
//! The driver loop is strictly sequential: wait for a step signal, run
//! one tick, report it, repeat until the mower stops moving.
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::atomic::AtomicBool;
//! use lawnkeeper::{AutoStep, Session, SimulationConfig};
//!
//! let mut session = Session::new(&SimulationConfig::default())?;
//! let stop = AtomicBool::new(false);
//! let report = session.run(&mut AutoStep::new(), &stop, |_, _| {})?;
//! println!("{}", report);
//! ```

mod control;
mod report;
mod rng;

pub use control::{AutoStep, StepBudget, StepControl, StepSignal};
pub use report::{SessionReport, Termination, compute_optimality};
pub use rng::SessionRng;

use std::sync::atomic::{AtomicBool, Ordering};

use rand::Rng;

use crate::config::{NavigatorConfig, SimulationConfig, StartPolicy};
use crate::core::{Direction, GridCoord};
use crate::error::{MowerError, Result};
use crate::grid::{LawnGrid, generate_terrain};
use crate::navigation::{CoverageNavigator, TickOutcome};

/// Generate a lawn and the random source that keeps driving the session.
pub fn create_session(
    width: usize,
    height: usize,
    obstacle_rate: u8,
    seed: u64,
) -> Result<(LawnGrid, SessionRng)> {
    let mut rng = SessionRng::new(seed);
    let grid = generate_terrain(width, height, obstacle_rate, &mut rng)?;
    Ok((grid, rng))
}

/// Put the mower on the lawn according to `policy`.
///
/// Random placement picks uniformly among mowable cells. The mower
/// always starts facing east.
pub fn place_agent<R: Rng + ?Sized>(
    grid: &mut LawnGrid,
    policy: StartPolicy,
    config: NavigatorConfig,
    rng: &mut R,
) -> Result<CoverageNavigator> {
    let position = match policy {
        StartPolicy::Fixed { row, col } => GridCoord::new(row, col),
        StartPolicy::Random => {
            let mowable = grid.mowable_coords();
            if mowable.is_empty() {
                return Err(MowerError::NoMowableCell);
            }
            mowable[rng.gen_range(0..mowable.len())]
        }
    };

    let navigator = CoverageNavigator::place(grid, position, Direction::East, config)?;
    log::info!("Mower placed at {}", position);
    Ok(navigator)
}

/// A running simulation.
#[derive(Clone, Debug)]
pub struct Session {
    grid: LawnGrid,
    navigator: CoverageNavigator,
    rng: SessionRng,
    grass_total: usize,
    obstacle_total: usize,
    steps: u64,
    moves: u64,
    finished: bool,
}

impl Session {
    /// Generate a lawn from `config` and place the mower on it.
    pub fn new(config: &SimulationConfig) -> Result<Self> {
        config.validate()?;
        let (width, height) = config.dimensions();
        let (grid, rng) = create_session(width, height, config.obstacle_rate, config.seed)?;
        Self::start(grid, config.start, config.navigation.clone(), rng)
    }

    /// Run on a prepared lawn instead of a generated one.
    pub fn from_grid(
        grid: LawnGrid,
        start: StartPolicy,
        navigation: NavigatorConfig,
        seed: u64,
    ) -> Result<Self> {
        navigation.validate()?;
        Self::start(grid, start, navigation, SessionRng::new(seed))
    }

    fn start(
        mut grid: LawnGrid,
        start: StartPolicy,
        navigation: NavigatorConfig,
        mut rng: SessionRng,
    ) -> Result<Self> {
        let navigator = place_agent(&mut grid, start, navigation, &mut rng)?;
        let (grass_total, obstacle_total) = grid.count_grass_and_obstacles();

        log::info!(
            "Session created: {}x{} lawn, {} grass, {} obstacles, seed {}",
            grid.cols(),
            grid.rows(),
            grass_total,
            obstacle_total,
            rng.seed()
        );

        Ok(Self {
            grid,
            navigator,
            rng,
            grass_total,
            obstacle_total,
            steps: 0,
            moves: 0,
            finished: false,
        })
    }

    /// The lawn.
    pub fn grid(&self) -> &LawnGrid {
        &self.grid
    }

    /// The mower's navigator.
    pub fn navigator(&self) -> &CoverageNavigator {
        &self.navigator
    }

    /// Ticks run so far, the final no-move tick included.
    pub fn steps(&self) -> u64 {
        self.steps
    }

    /// Ticks in which the mower moved.
    pub fn moves(&self) -> u64 {
        self.moves
    }

    /// Grass cells counted before the first tick.
    pub fn grass_total(&self) -> usize {
        self.grass_total
    }

    /// Obstacle cells counted before the first tick.
    pub fn obstacle_total(&self) -> usize {
        self.obstacle_total
    }

    /// Has the mower stopped for good?
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Run one tick: select a step and apply it.
    ///
    /// Ticks after the session finished change nothing and are not counted.
    pub fn tick(&mut self) -> Result<TickOutcome> {
        let outcome = self.navigator.tick(&mut self.grid, &mut self.rng)?;

        if !self.finished {
            self.steps += 1;
            if outcome.moved {
                self.moves += 1;
            } else {
                self.finished = true;
            }
        }

        Ok(outcome)
    }

    /// Drive the session until the mower stops, `control` aborts or `stop`
    /// is raised. `on_tick` sees the session after every tick.
    pub fn run<C, F>(
        &mut self,
        control: &mut C,
        stop: &AtomicBool,
        mut on_tick: F,
    ) -> Result<SessionReport>
    where
        C: StepControl + ?Sized,
        F: FnMut(&Session, &TickOutcome),
    {
        let termination = loop {
            if stop.load(Ordering::SeqCst) {
                break Termination::Interrupted;
            }
            if control.next_signal()? == StepSignal::Abort {
                break Termination::Aborted;
            }
            // The signal wait may block (manual stepping) while Ctrl-C arrives.
            if stop.load(Ordering::SeqCst) {
                break Termination::Interrupted;
            }

            let outcome = self.tick()?;
            on_tick(&*self, &outcome);

            if !outcome.moved {
                break Termination::Exhausted;
            }
        };

        let report = self.report(termination);
        match report.optimality {
            Some(pct) => log::info!(
                "Session {} after {} steps, optimality {:.2}%",
                termination.name(),
                report.steps,
                pct
            ),
            None => log::info!(
                "Session {} after {} steps, no grass to mow",
                termination.name(),
                report.steps
            ),
        }
        Ok(report)
    }

    /// Summarize the session as it stands.
    pub fn report(&self, termination: Termination) -> SessionReport {
        let counts = self.grid.count_by_content();
        SessionReport {
            termination,
            steps: self.steps,
            moves: self.moves,
            grass_total: self.grass_total,
            obstacle_total: self.obstacle_total,
            mowed: counts.mowed,
            covered: counts.mowed + counts.occupied,
            inaccessible: self.grid.inaccessible_count(),
            optimality: compute_optimality(self.steps, self.grass_total),
        }
    }
}
