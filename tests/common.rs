//! Shared helpers for lawnkeeper integration tests.

#![allow(dead_code)]

use std::sync::atomic::AtomicBool;

use lawnkeeper::core::{CellContent, GridCoord};
use lawnkeeper::{
    AutoStep, LawnGrid, NavigatorConfig, Session, SessionReport, StartPolicy, TickOutcome,
};

/// Initialize logging once per test binary.
pub fn init_logging() {
    env_logger::builder().is_test(true).try_init().ok();
}

/// Fenced 5x5 lawn: nine interior grass cells.
pub fn open_5x5() -> LawnGrid {
    LawnGrid::from_rows(&["HHHHH", "HWWWH", "HWWWH", "HWWWH", "HHHHH"]).unwrap()
}

/// Five-cell corridor plus one grass cell walled in by stones and fence.
pub fn corridor_with_isolated_cell() -> LawnGrid {
    LawnGrid::from_rows(&[
        "HHHHHHH",
        "HWWWWWH",
        "HOOOOOH",
        "HOOWOOH",
        "HHHHHHH",
    ])
    .unwrap()
}

/// Session on `grid` starting at `(row, col)`.
pub fn session_at(
    grid: LawnGrid,
    row: i32,
    col: i32,
    config: NavigatorConfig,
    seed: u64,
) -> Session {
    Session::from_grid(grid, StartPolicy::Fixed { row, col }, config, seed).unwrap()
}

/// Tick until the mower stops, collecting every outcome.
pub fn run_to_end(session: &mut Session, max_ticks: usize) -> Vec<TickOutcome> {
    let mut outcomes = Vec::new();
    for _ in 0..max_ticks {
        let outcome = session.tick().unwrap();
        outcomes.push(outcome);
        if !outcome.moved {
            break;
        }
    }
    outcomes
}

/// Drive the session through the regular run loop.
pub fn run_auto(session: &mut Session) -> SessionReport {
    let stop = AtomicBool::new(false);
    session.run(&mut AutoStep::new(), &stop, |_, _| {}).unwrap()
}

/// Snapshot of every cell's content in row-major order.
pub fn contents(grid: &LawnGrid) -> Vec<CellContent> {
    grid.iter().map(|(_, cell)| cell.content).collect()
}

/// Coordinates of every unmowed grass cell.
pub fn unmowed_cells(grid: &LawnGrid) -> Vec<GridCoord> {
    grid.iter()
        .filter(|(_, cell)| cell.content == CellContent::Grass { mowed: false })
        .map(|(coord, _)| coord)
        .collect()
}
