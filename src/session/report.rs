//! End-of-session summary and the optimality score.

use std::fmt;

/// Why the driver loop stopped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Termination {
    /// No reachable unmowed grass remained (or the mower could not move).
    Exhausted,
    /// The step control asked to stop.
    Aborted,
    /// The stop flag was raised (e.g. Ctrl-C).
    Interrupted,
}

impl Termination {
    /// Short name for logging
    pub fn name(&self) -> &'static str {
        match self {
            Termination::Exhausted => "exhausted",
            Termination::Aborted => "aborted",
            Termination::Interrupted => "interrupted",
        }
    }
}

/// Summary of a finished (or stopped) session.
#[derive(Clone, Debug, PartialEq)]
pub struct SessionReport {
    /// Why the loop stopped
    pub termination: Termination,
    /// Ticks executed, the final no-move tick included
    pub steps: u64,
    /// Ticks in which the mower actually moved
    pub moves: u64,
    /// Grass cells at session start (mower's cell included)
    pub grass_total: usize,
    /// Stone and tree cells
    pub obstacle_total: usize,
    /// Grass cells mowed so far
    pub mowed: usize,
    /// Grass cells visited, the mower's current cell included
    pub covered: usize,
    /// Cells still flagged inaccessible
    pub inaccessible: usize,
    /// Optimality percentage, `None` when there is no grass
    pub optimality: Option<f64>,
}

impl SessionReport {
    /// Share of grass visited, as a percentage.
    pub fn coverage_percent(&self) -> Option<f64> {
        if self.grass_total == 0 {
            return None;
        }
        Some(100.0 * self.covered as f64 / self.grass_total as f64)
    }
}

impl fmt::Display for SessionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Session {}", self.termination.name())?;
        writeln!(f, "  Steps:        {} ({} moves)", self.steps, self.moves)?;
        writeln!(
            f,
            "  Grass:        {} ({} obstacles)",
            self.grass_total, self.obstacle_total
        )?;
        writeln!(f, "  Covered:      {}/{}", self.covered, self.grass_total)?;
        writeln!(f, "  Inaccessible: {}", self.inaccessible)?;
        match self.optimality {
            Some(pct) => write!(f, "  Optimality:   {:.2}%", pct),
            None => write!(f, "  Optimality:   n/a"),
        }
    }
}

/// Optimality of a run: `100 - 100 * (steps - grass) / grass`.
///
/// 100 means every tick mowed a fresh cell. Returns `None` when the lawn
/// has no grass.
pub fn compute_optimality(steps: u64, grass_total: usize) -> Option<f64> {
    if grass_total == 0 {
        return None;
    }
    let grass = grass_total as f64;
    Some(100.0 - 100.0 * (steps as f64 - grass) / grass)
}
