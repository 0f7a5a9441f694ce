//! Invariants checked over many seeded random lawns.

mod common;

use common::*;
use lawnkeeper::core::CellContent;
use lawnkeeper::{NavigatorConfig, Session, SimulationConfig, TickOutcome};

const SEEDS: std::ops::RangeInclusive<u64> = 1..=30;

fn random_session(seed: u64, config: NavigatorConfig) -> Session {
    let width = 6 + (seed % 7) as usize;
    let height = 5 + (seed % 5) as usize;
    let rate = (seed * 7 % 35) as u8;
    let sim = SimulationConfig::default()
        .with_dimensions(width, height)
        .with_obstacle_rate(rate)
        .with_seed(seed)
        .with_navigation(config);
    Session::new(&sim).unwrap()
}

fn step_bound(session: &Session) -> u64 {
    let limit = session.navigator().config().retry_limit as u64;
    session.grass_total() as u64 * (limit + 2) + 1
}

#[test]
fn test_every_move_is_a_single_step_onto_grass() {
    init_logging();

    for seed in SEEDS {
        let mut session = random_session(seed, NavigatorConfig::default());
        let bound = step_bound(&session) as usize;

        for _ in 0..bound {
            let from = session.navigator().position();
            let before = session.grid().clone();
            let outcome = session.tick().unwrap();

            if !outcome.moved {
                assert_eq!(outcome.position, from, "seed {}", seed);
                break;
            }
            let step = outcome.decision.unwrap();
            assert_eq!(from.manhattan_distance(&outcome.position), 1, "seed {}", seed);
            assert_eq!(from.step(step.direction), outcome.position, "seed {}", seed);
            assert!(before.is_mowable(outcome.position), "seed {}", seed);
            assert_eq!(outcome.facing, step.direction);
        }
        assert!(session.is_finished(), "seed {} did not finish", seed);
    }
}

#[test]
fn test_mowing_is_never_undone() {
    for seed in SEEDS {
        let mut session = random_session(seed, NavigatorConfig::default());
        let initial = session.grid().count_grass_and_obstacles();
        let mut covered = 1;

        loop {
            let before = contents(session.grid());
            let outcome = session.tick().unwrap();
            let after = contents(session.grid());

            for (old, new) in before.iter().zip(&after) {
                match old {
                    CellContent::Grass { mowed: true } => assert!(
                        matches!(
                            new,
                            CellContent::Grass { mowed: true } | CellContent::AgentOccupied
                        ),
                        "seed {}",
                        seed
                    ),
                    CellContent::Obstacle(_) | CellContent::Fence => assert_eq!(old, new),
                    _ => {}
                }
            }

            let counts = session.grid().count_by_content();
            let now = counts.mowed + counts.occupied;
            assert!(now >= covered, "seed {}", seed);
            covered = now;
            assert_eq!(session.grid().count_grass_and_obstacles(), initial);

            if !outcome.moved {
                break;
            }
        }
    }
}

#[test]
fn test_replay_is_deterministic() {
    for seed in SEEDS {
        let trace = |session: &mut Session| -> Vec<TickOutcome> {
            let bound = step_bound(session) as usize;
            run_to_end(session, bound)
        };

        let mut a = random_session(seed, NavigatorConfig::default());
        let mut b = random_session(seed, NavigatorConfig::default());
        assert_eq!(contents(a.grid()), contents(b.grid()));
        assert_eq!(trace(&mut a), trace(&mut b), "seed {}", seed);
        assert_eq!(contents(a.grid()), contents(b.grid()));
    }
}

#[test]
fn test_session_terminates_within_bound() {
    for limit in [1, 3, 6] {
        for seed in SEEDS {
            let config = NavigatorConfig::default().with_retry_limit(limit);
            let mut session = random_session(seed, config);
            let bound = step_bound(&session);
            let report = run_auto(&mut session);

            assert!(
                report.steps <= bound,
                "seed {} limit {}: {} steps > {}",
                seed,
                limit,
                report.steps,
                bound
            );
            assert_eq!(report.moves + 1, report.steps);
            assert!(report.optimality.is_some());
        }
    }
}

#[test]
fn test_leftover_grass_is_flagged_inaccessible() {
    for seed in SEEDS {
        let mut session = random_session(seed, NavigatorConfig::default());
        let report = run_auto(&mut session);
        if report.moves == 0 {
            continue;
        }

        for coord in unmowed_cells(session.grid()) {
            assert!(
                session.grid().get(coord).unwrap().inaccessible,
                "seed {}: {} left unmowed without being flagged",
                seed,
                coord
            );
        }
    }
}
