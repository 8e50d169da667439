//! End-to-end exploration scenarios over the public session API.
//!
//! These runs exercise the full per-tick pipeline — obstacle stepping,
//! frontier planning, the A* endgame, move application — on grids
//! small enough to reason about by hand.

use rove_core::{CellState, Coord};
use rove_engine::{Session, SessionConfig, TickOutcome};

fn c(x: i32, y: i32) -> Coord {
    Coord::new(x, y)
}

/// Tick until `Complete`, panicking if the session stalls or exceeds
/// `max_ticks`. Returns the number of ticks consumed.
fn run_to_completion(session: &mut Session, max_ticks: usize) -> usize {
    for ticks in 1..=max_ticks {
        match session.tick() {
            TickOutcome::Complete => return ticks,
            TickOutcome::Progressed { .. } => {}
            TickOutcome::Waiting { blocked } => {
                assert!(
                    !blocked.is_empty(),
                    "stalled with reachable cells remaining"
                );
            }
        }
    }
    panic!("no completion within {max_ticks} ticks");
}

#[test]
fn single_agent_covers_a_room_with_static_obstacles() {
    let mut session = Session::new(SessionConfig {
        width: 6,
        height: 5,
        static_obstacles: vec![c(2, 1), c(2, 2), c(2, 3), c(4, 2)],
        agent_starts: vec![c(0, 0)],
        dynamic_obstacle_count: 0,
        seed: 0,
    })
    .unwrap();

    run_to_completion(&mut session, 500);

    assert!(session.is_complete());
    assert_eq!(
        session.grid().visited_count(),
        session.grid().free_cell_count()
    );
    // Obstacle terrain is untouched by coverage.
    assert_eq!(session.grid().cell(c(2, 2)), CellState::Obstacle);
}

#[test]
fn three_agents_cover_the_grid_without_sharing_cells() {
    let mut session = Session::new(SessionConfig {
        width: 8,
        height: 8,
        static_obstacles: vec![c(3, 3), c(4, 3), c(3, 4)],
        agent_starts: SessionConfig::corner_starts(8, 8, 3),
        dynamic_obstacle_count: 0,
        seed: 11,
    })
    .unwrap();

    for _ in 0..500 {
        let outcome = session.tick();

        // No two agents ever share a coordinate after a committed move.
        let positions: Vec<Coord> = session.agents().iter().map(|a| a.position()).collect();
        for (i, a) in positions.iter().enumerate() {
            for b in &positions[i + 1..] {
                assert_ne!(a, b, "two agents share a cell");
            }
        }

        if outcome == TickOutcome::Complete {
            break;
        }
    }

    assert!(session.is_complete());
}

#[test]
fn movers_are_reported_in_agent_id_order() {
    let mut session = Session::new(SessionConfig {
        width: 6,
        height: 6,
        static_obstacles: vec![],
        agent_starts: SessionConfig::corner_starts(6, 6, 4),
        dynamic_obstacle_count: 0,
        seed: 3,
    })
    .unwrap();

    for _ in 0..200 {
        match session.tick() {
            TickOutcome::Progressed { moved } => {
                for pair in moved.windows(2) {
                    assert!(pair[0].0 < pair[1].0);
                }
            }
            TickOutcome::Waiting { .. } => {}
            TickOutcome::Complete => return,
        }
    }
    panic!("no completion within 200 ticks");
}

#[test]
fn dynamic_obstacles_leave_session_state_consistent() {
    let static_obstacles = vec![c(1, 1), c(5, 4), c(3, 2)];
    let mut session = Session::new(SessionConfig {
        width: 7,
        height: 7,
        static_obstacles: static_obstacles.clone(),
        agent_starts: vec![c(0, 0)],
        dynamic_obstacle_count: 3,
        seed: 29,
    })
    .unwrap();

    for _ in 0..300 {
        let outcome = session.tick();

        let grid = session.grid();
        assert_eq!(
            grid.visited_count() + grid.unvisited_count(),
            grid.free_cell_count()
        );
        for &pos in session.obstacle_positions() {
            // Mobile obstacles sit where the matrix says they sit, and
            // never on static obstacle terrain.
            assert_eq!(grid.cell(pos), CellState::DynamicObstacle);
            assert!(!static_obstacles.contains(&pos));
        }

        if outcome == TickOutcome::Complete {
            break;
        }
    }
}

#[test]
fn snapshot_reflects_agent_histories() {
    let mut session = Session::new(SessionConfig {
        width: 4,
        height: 4,
        static_obstacles: vec![],
        agent_starts: vec![c(0, 0)],
        dynamic_obstacle_count: 0,
        seed: 0,
    })
    .unwrap();

    let ticks = run_to_completion(&mut session, 100);
    let view = session.snapshot();

    assert_eq!(view.width, 4);
    assert_eq!(view.height, 4);
    assert_eq!(view.agents.len(), 1);
    let history = &view.agents[0].history;
    // Start plus one destination per committed move; the final tick
    // only observes completion.
    assert_eq!(history[0], c(0, 0));
    assert_eq!(history.len(), ticks - 1 + 1);
    assert_eq!(*history.last().unwrap(), view.agents[0].position);
}
