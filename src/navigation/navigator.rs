//! Coverage navigator.
//!
//! Greedy, local decision engine: every tick it picks a target (an
//! adjacent unmowed cell if there is one, otherwise the nearest unmowed
//! cell anywhere) and a single step toward it. No path is planned.

use rand::Rng;

use crate::config::NavigatorConfig;
use crate::core::{Direction, GridCoord};
use crate::error::Result;
use crate::grid::LawnGrid;

use super::history::MoveHistory;
use super::state::{NavigatorState, StepDecision};

/// Result of a single tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TickOutcome {
    /// Did the mower move this tick?
    pub moved: bool,

    /// Position after the tick.
    pub position: GridCoord,

    /// Heading after the tick.
    pub facing: Direction,

    /// Navigator state after the tick.
    pub state: NavigatorState,

    /// Step taken (None when the mower stayed put).
    pub decision: Option<StepDecision>,
}

/// Coverage navigator.
///
/// Holds the mower's position, heading, short move history and state.
/// Retry counters live on the grid cells they belong to.
///
/// # Usage
///
/// ```rust,ignore
/// use lawnkeeper::{CoverageNavigator, LawnGrid, NavigatorConfig};
/// use lawnkeeper::core::{Direction, GridCoord};
///
/// let mut grid = LawnGrid::fenced(5, 5)?;
/// let mut nav = CoverageNavigator::place(
///     &mut grid,
///     GridCoord::new(1, 1),
///     Direction::East,
///     NavigatorConfig::default(),
/// )?;
///
/// while nav.tick(&mut grid, &mut rng)?.moved {}
/// ```
#[derive(Clone, Debug)]
pub struct CoverageNavigator {
    /// Current cell.
    position: GridCoord,

    /// Heading of the last step.
    facing: Direction,

    /// Recently vacated cells.
    history: MoveHistory,

    /// Current state.
    state: NavigatorState,

    /// Configuration.
    config: NavigatorConfig,
}

impl CoverageNavigator {
    /// Create a navigator at `position` without touching any grid.
    pub fn new(position: GridCoord, facing: Direction, config: NavigatorConfig) -> Self {
        Self {
            position,
            facing,
            history: MoveHistory::new(config.history_len),
            state: NavigatorState::Seeking,
            config,
        }
    }

    /// Put the mower on a mowable cell of `grid` and create its navigator.
    pub fn place(
        grid: &mut LawnGrid,
        position: GridCoord,
        facing: Direction,
        config: NavigatorConfig,
    ) -> Result<Self> {
        grid.place_agent(position)?;
        Ok(Self::new(position, facing, config))
    }

    /// Current position.
    pub fn position(&self) -> GridCoord {
        self.position
    }

    /// Current heading.
    pub fn facing(&self) -> Direction {
        self.facing
    }

    /// Current state.
    pub fn state(&self) -> NavigatorState {
        self.state
    }

    /// Move history.
    pub fn history(&self) -> &MoveHistory {
        &self.history
    }

    /// Get the current configuration.
    pub fn config(&self) -> &NavigatorConfig {
        &self.config
    }

    /// Check if coverage is finished.
    pub fn is_done(&self) -> bool {
        self.state.is_terminal()
    }

    /// Forget history and state; position and heading are kept.
    pub fn reset(&mut self) {
        self.state = NavigatorState::Seeking;
        self.history.clear();
    }

    /// Nearest unmowed, not-inaccessible grass cell by the configured metric.
    ///
    /// Ties go to the first cell in row-major order.
    pub fn select_target(&self, grid: &LawnGrid) -> Option<GridCoord> {
        let dims = grid.dims();
        let mut best: Option<(GridCoord, u32)> = None;

        for (coord, cell) in grid.iter() {
            if !cell.is_target_candidate() {
                continue;
            }
            let distance = self.config.metric.distance(self.position, coord, dims);
            match best {
                Some((_, best_distance)) if distance >= best_distance => {}
                _ => best = Some((coord, distance)),
            }
        }

        best.map(|(coord, _)| coord)
    }

    /// Decide the next single step.
    ///
    /// Updates the heading and state. Returns `None` when coverage is
    /// finished or the mower cannot move at all; the state is then `Done`.
    pub fn select_step<R: Rng + ?Sized>(
        &mut self,
        grid: &mut LawnGrid,
        rng: &mut R,
    ) -> Option<StepDecision> {
        if self.state.is_terminal() {
            return None;
        }

        let target = match self.adjacent_unmowed(grid) {
            Some(target) => {
                self.state = NavigatorState::Approaching { target };
                target
            }
            None => match self.select_target(grid) {
                Some(target) => {
                    self.chase(grid, target);
                    target
                }
                None => {
                    log::info!("Coverage finished at {}", self.position);
                    self.state = NavigatorState::Done;
                    return None;
                }
            },
        };

        let candidates = self.step_candidates(grid, target);
        let (direction, to) = match candidates.len() {
            0 => {
                log::warn!("Mower boxed in at {}, no mowable neighbor", self.position);
                self.state = NavigatorState::Done;
                return None;
            }
            1 => candidates[0],
            n => candidates[rng.gen_range(0..n)],
        };

        self.facing = direction;
        log::debug!(
            "{} -> {} heading {:?} for target {} [{}]",
            self.position,
            to,
            direction,
            target,
            self.state.name()
        );

        Some(StepDecision {
            direction,
            to,
            target,
        })
    }

    /// Carry out a step: the vacated cell is mowed and joins the history.
    pub fn apply_move(&mut self, grid: &mut LawnGrid, decision: StepDecision) -> Result<()> {
        grid.relocate_agent(self.position, decision.to)?;
        self.history.push(self.position);
        self.position = decision.to;
        self.facing = decision.direction;
        Ok(())
    }

    /// Select a step and apply it.
    pub fn tick<R: Rng + ?Sized>(
        &mut self,
        grid: &mut LawnGrid,
        rng: &mut R,
    ) -> Result<TickOutcome> {
        let decision = self.select_step(grid, rng);
        if let Some(step) = decision {
            self.apply_move(grid, step)?;
        }

        Ok(TickOutcome {
            moved: decision.is_some(),
            position: self.position,
            facing: self.facing,
            state: self.state,
            decision,
        })
    }

    /// First unmowed neighbor in heading-relative scan order.
    fn adjacent_unmowed(&self, grid: &LawnGrid) -> Option<GridCoord> {
        self.facing
            .scan_order()
            .into_iter()
            .map(|d| self.position.step(d))
            .find(|&c| grid.is_unmowed_grass(c))
    }

    /// Spend one tick of `target`'s retry budget.
    fn chase(&mut self, grid: &mut LawnGrid, target: GridCoord) {
        let attempts = grid.record_attempt(target);
        if attempts > self.config.retry_limit {
            log::warn!(
                "Target {} not reached after {} ticks, marking inaccessible",
                target,
                attempts
            );
            grid.mark_inaccessible(target);
            self.state = NavigatorState::Stuck { target };
        } else {
            self.state = NavigatorState::Approaching { target };
        }
    }

    /// Mowable neighbors toward `target`, minus recent cells where possible.
    fn step_candidates(&self, grid: &LawnGrid, target: GridCoord) -> Vec<(Direction, GridCoord)> {
        let mowable: Vec<(Direction, GridCoord)> = self
            .facing
            .scan_order()
            .into_iter()
            .map(|d| (d, self.position.step(d)))
            .filter(|&(_, c)| grid.is_mowable(c))
            .collect();

        let approaching: Vec<(Direction, GridCoord)> = mowable
            .iter()
            .copied()
            .filter(|&(d, _)| self.position.approaches(d, &target))
            .collect();

        let candidates = if approaching.is_empty() {
            mowable
        } else {
            approaching
        };

        let fresh: Vec<(Direction, GridCoord)> = candidates
            .iter()
            .copied()
            .filter(|(_, c)| !self.history.contains(c))
            .collect();

        if fresh.is_empty() { candidates } else { fresh }
    }
}
