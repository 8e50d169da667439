//! The exploration session: per-tick orchestration of obstacles and
//! agents.

use rove_core::{AgentId, CellState, Coord, Path, TickId};
use rove_grid::GridState;
use rove_search::{nearest_unexplored, shortest_path, unvisited_reachable};

use crate::agent::{Agent, AgentPhase};
use crate::config::{ConfigError, SessionConfig};
use crate::obstacles::ObstacleStepper;

// ── TickOutcome ────────────────────────────────────────────────────

/// What one call to [`Session::tick`] accomplished.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TickOutcome {
    /// At least one agent moved. Carries each mover's ID and the path
    /// it took, in processing order. Agents that were blocked this
    /// tick simply retry next tick.
    Progressed {
        /// `(agent, path taken)` for every agent that moved.
        moved: Vec<(AgentId, Path)>,
    },
    /// No agent moved. `blocked` lists the agents whose planned path
    /// was obstructed by a dynamic obstacle; it is empty when every
    /// live agent has retired with unvisited cells still unreachable.
    Waiting {
        /// Agents holding position behind a dynamic obstacle.
        blocked: Vec<AgentId>,
    },
    /// Every free cell has been visited. Terminal: subsequent ticks
    /// keep returning `Complete` and nothing moves again.
    Complete,
}

// ── Snapshot views ─────────────────────────────────────────────────

/// Read-only per-agent state for rendering layers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgentView {
    /// The agent's identifier.
    pub id: AgentId,
    /// The cell the agent currently occupies.
    pub position: Coord,
    /// Lifecycle phase at snapshot time.
    pub phase: AgentPhase,
    /// Every cell the agent has occupied, oldest first.
    pub history: Vec<Coord>,
}

/// A read-only snapshot of the whole session, taken without planning
/// side effects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridView {
    /// Grid width in cells.
    pub width: u32,
    /// Grid height in cells.
    pub height: u32,
    /// Row-major copy of the cell-state matrix.
    pub cells: Vec<CellState>,
    /// The tick this snapshot reflects.
    pub tick: TickId,
    /// One entry per agent, in ID order.
    pub agents: Vec<AgentView>,
}

// ── Session ────────────────────────────────────────────────────────

/// An exploration session over one grid.
///
/// Owns the [`GridState`], the agents, and the dynamic obstacles.
/// Built from a validated [`SessionConfig`]; stepped with
/// [`tick()`](Session::tick) until it reports
/// [`TickOutcome::Complete`]. Timing between ticks is the caller's
/// business — the session never sleeps.
///
/// # Example
///
/// ```
/// use rove_engine::{Session, SessionConfig, TickOutcome};
/// use rove_core::Coord;
///
/// let mut session = Session::new(SessionConfig {
///     width: 4,
///     height: 4,
///     static_obstacles: vec![],
///     agent_starts: vec![Coord::new(0, 0)],
///     dynamic_obstacle_count: 0,
///     seed: 7,
/// })
/// .unwrap();
///
/// let mut ticks = 0;
/// while session.tick() != TickOutcome::Complete {
///     ticks += 1;
///     assert!(ticks < 1000, "exploration must terminate");
/// }
/// assert!(session.is_complete());
/// ```
#[derive(Debug)]
pub struct Session {
    grid: GridState,
    agents: Vec<Agent>,
    obstacles: ObstacleStepper,
    tick: TickId,
    seed: u64,
}

impl Session {
    /// Validate `config` and build a ready-to-tick session.
    ///
    /// Construction order matters and mirrors the validation rules:
    /// agents are seated first (their start cells count as visited),
    /// then static obstacles, then dynamic obstacles over whatever
    /// unvisited cells remain.
    ///
    /// # Errors
    ///
    /// Any [`ConfigError`]; nothing is created on failure.
    pub fn new(config: SessionConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut grid = GridState::new(config.width, config.height)?;
        let mut agents = Vec::with_capacity(config.agent_starts.len());
        for (index, &start) in config.agent_starts.iter().enumerate() {
            grid.place_agent(start)?;
            agents.push(Agent::new(AgentId(index as u16), start));
        }
        grid.place_static_obstacles(&config.static_obstacles)?;
        let obstacles =
            ObstacleStepper::place(&mut grid, config.dynamic_obstacle_count, config.seed)?;

        Ok(Self {
            grid,
            agents,
            obstacles,
            tick: TickId(0),
            seed: config.seed,
        })
    }

    /// Advance the session by one tick.
    ///
    /// If coverage is already complete, returns
    /// [`TickOutcome::Complete`] immediately and touches nothing.
    /// Otherwise: dynamic obstacles step first, then each non-retired
    /// agent, in ID order, plans and (if possible) moves. Each agent
    /// sees the grid exactly as the previous one left it — that
    /// sequencing is the whole multi-agent coordination policy.
    pub fn tick(&mut self) -> TickOutcome {
        if self.grid.is_complete() {
            for agent in &mut self.agents {
                agent.phase = AgentPhase::Done;
            }
            return TickOutcome::Complete;
        }

        self.tick = TickId(self.tick.0 + 1);
        self.obstacles.step(&mut self.grid, self.tick);

        let mut moved = Vec::new();
        let mut blocked = Vec::new();

        for index in 0..self.agents.len() {
            if self.agents[index].is_done() {
                continue;
            }
            self.agents[index].phase = AgentPhase::PathRequested;

            let start = self.agents[index].position;
            // The frontier heuristic wanders near the end of coverage;
            // with a single cell left, route straight to it instead.
            let path = match self.grid.last_unvisited() {
                Some(target) => shortest_path(&self.grid, start, target),
                None => nearest_unexplored(&self.grid, start),
            };

            let Some(path) = path else {
                // A failed search is ambiguous: the remainder may be
                // walled off for good, or merely plugged by a mobile
                // obstacle. Only the former retires the agent.
                if unvisited_reachable(&self.grid, start) {
                    self.agents[index].phase = AgentPhase::Waiting;
                    blocked.push(self.agents[index].id);
                } else {
                    self.agents[index].phase = AgentPhase::Done;
                }
                continue;
            };

            if path
                .iter()
                .any(|&cell| self.grid.cell(cell) == CellState::DynamicObstacle)
            {
                self.agents[index].phase = AgentPhase::Waiting;
                blocked.push(self.agents[index].id);
                continue;
            }

            self.agents[index].phase = AgentPhase::Moving;
            self.apply_move(index, &path);
            moved.push((self.agents[index].id, path));
        }

        if !moved.is_empty() {
            TickOutcome::Progressed { moved }
        } else {
            TickOutcome::Waiting { blocked }
        }
    }

    /// Commit a planned move: retrace the cells passed over, restore
    /// the vacated cell, occupy the destination, and update the
    /// coverage partition and the agent's history.
    fn apply_move(&mut self, index: usize, path: &[Coord]) {
        let Some((&destination, transit)) = path.split_last() else {
            return;
        };

        for &cell in transit {
            self.grid.mark_retraced(cell);
        }

        let from = self.agents[index].position;
        self.grid.restore(from);
        self.grid.mark_visited(destination);
        self.grid.set_agent(destination);

        let agent = &mut self.agents[index];
        agent.position = destination;
        agent.history.push(destination);
        agent.phase = AgentPhase::Idle;
    }

    /// A read-only snapshot for rendering; no planning side effects.
    pub fn snapshot(&self) -> GridView {
        GridView {
            width: self.grid.width(),
            height: self.grid.height(),
            cells: self.grid.cells().to_vec(),
            tick: self.tick,
            agents: self
                .agents
                .iter()
                .map(|agent| AgentView {
                    id: agent.id,
                    position: agent.position,
                    phase: agent.phase,
                    history: agent.history.clone(),
                })
                .collect(),
        }
    }

    /// Plan a direct route from an agent's current cell to `target`
    /// under the current obstacle placement, without moving anything.
    ///
    /// Returns `None` for an unknown agent or an unreachable target.
    pub fn route_to(&self, id: AgentId, target: Coord) -> Option<Path> {
        let agent = self.agents.iter().find(|a| a.id == id)?;
        shortest_path(&self.grid, agent.position, target)
    }

    /// The tick counter: 0 until the first [`tick()`](Session::tick).
    pub fn current_tick(&self) -> TickId {
        self.tick
    }

    /// True once every free cell has been visited.
    pub fn is_complete(&self) -> bool {
        self.grid.is_complete()
    }

    /// The seed this session was built with.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// The underlying grid.
    pub fn grid(&self) -> &GridState {
        &self.grid
    }

    /// All agents, in ID order.
    pub fn agents(&self) -> &[Agent] {
        &self.agents
    }

    /// Current dynamic obstacle positions.
    pub fn obstacle_positions(&self) -> &[Coord] {
        self.obstacles.positions()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(x: i32, y: i32) -> Coord {
        Coord::new(x, y)
    }

    fn bare_config(width: u32, height: u32) -> SessionConfig {
        SessionConfig {
            width,
            height,
            static_obstacles: vec![],
            agent_starts: vec![c(0, 0)],
            dynamic_obstacle_count: 0,
            seed: 0,
        }
    }

    // ── Construction ────────────────────────────────────────────

    #[test]
    fn new_validates_before_building() {
        let mut cfg = bare_config(3, 3);
        cfg.agent_starts = vec![];
        assert_eq!(Session::new(cfg).unwrap_err(), ConfigError::NoAgents);
    }

    #[test]
    fn new_seats_agents_and_obstacles() {
        let session = Session::new(SessionConfig {
            width: 5,
            height: 5,
            static_obstacles: vec![c(2, 2)],
            agent_starts: vec![c(0, 0), c(4, 4)],
            dynamic_obstacle_count: 3,
            seed: 21,
        })
        .unwrap();

        assert_eq!(session.agents().len(), 2);
        assert_eq!(session.grid().cell(c(0, 0)), CellState::AgentPresent);
        assert_eq!(session.grid().cell(c(2, 2)), CellState::Obstacle);
        assert_eq!(session.obstacle_positions().len(), 3);
        assert_eq!(session.current_tick(), TickId(0));
        // Partition: 24 free cells, 2 visited (the starts).
        assert_eq!(session.grid().visited_count(), 2);
        assert_eq!(session.grid().unvisited_count(), 22);
    }

    // ── Single-agent coverage ───────────────────────────────────

    #[test]
    fn four_by_four_completes_after_fifteen_moves() {
        let mut session = Session::new(bare_config(4, 4)).unwrap();
        let mut moves = 0;
        loop {
            match session.tick() {
                TickOutcome::Progressed { moved } => {
                    // Single agent: one move per progressed tick, each
                    // move visits exactly one new cell.
                    assert_eq!(moved.len(), 1);
                    moves += moved.len();
                }
                TickOutcome::Waiting { .. } => {
                    panic!("nothing can block on an empty grid")
                }
                TickOutcome::Complete => break,
            }
            assert!(moves <= 15, "covered more cells than exist");
        }
        // 16 cells, one pre-visited at the start.
        assert_eq!(moves, 15);
        assert!(session.is_complete());
    }

    #[test]
    fn complete_is_terminal_and_quiet() {
        let mut session = Session::new(bare_config(2, 2)).unwrap();
        while session.tick() != TickOutcome::Complete {}
        let position = session.agents()[0].position();
        let tick = session.current_tick();
        for _ in 0..5 {
            assert_eq!(session.tick(), TickOutcome::Complete);
        }
        // The agent rests at its final cell and the clock has stopped.
        assert_eq!(session.agents()[0].position(), position);
        assert_eq!(session.current_tick(), tick);
        assert!(session.agents()[0].is_done());
    }

    #[test]
    fn single_cell_grid_is_complete_immediately() {
        let mut session = Session::new(bare_config(1, 1)).unwrap();
        assert!(session.is_complete());
        assert_eq!(session.tick(), TickOutcome::Complete);
    }

    // ── Unreachable remainders ──────────────────────────────────

    #[test]
    fn walled_off_cell_retires_the_agent() {
        // (4, 0) is sealed behind obstacles; everything else is open.
        let mut session = Session::new(SessionConfig {
            width: 5,
            height: 3,
            static_obstacles: vec![c(3, 0), c(3, 1), c(4, 1)],
            agent_starts: vec![c(0, 0)],
            dynamic_obstacle_count: 0,
            seed: 0,
        })
        .unwrap();

        let outcome = loop {
            match session.tick() {
                TickOutcome::Progressed { .. } => {}
                other => break other,
            }
        };
        assert_eq!(outcome, TickOutcome::Waiting { blocked: vec![] });
        assert!(session.agents()[0].is_done());
        assert!(!session.is_complete());
        assert_eq!(session.grid().unvisited_count(), 1);
        assert!(session.grid().is_unvisited(c(4, 0)));
        // The stall is stable: later ticks look the same.
        assert_eq!(session.tick(), TickOutcome::Waiting { blocked: vec![] });
    }

    #[test]
    fn corridor_plugged_by_mobile_obstacle_waits_instead_of_retiring() {
        // 3×1 corridor: the single mobile obstacle ends up trapped
        // between the agent and the far wall, leaving the last cell
        // plugged. The blockage is mobile, not terrain, so the agent
        // must report Waiting and never retire.
        let mut session = Session::new(SessionConfig {
            width: 3,
            height: 1,
            static_obstacles: vec![],
            agent_starts: vec![c(0, 0)],
            dynamic_obstacle_count: 1,
            seed: 1,
        })
        .unwrap();

        let mut saw_blocked_wait = false;
        for _ in 0..10 {
            match session.tick() {
                TickOutcome::Waiting { blocked } => {
                    assert_eq!(blocked, vec![AgentId(0)]);
                    saw_blocked_wait = true;
                }
                TickOutcome::Progressed { .. } => {}
                TickOutcome::Complete => panic!("the plugged cell cannot be covered"),
            }
        }
        assert!(saw_blocked_wait);
        assert!(!session.agents()[0].is_done());
        assert!(!session.is_complete());
        assert_eq!(session.grid().unvisited_count(), 1);
    }

    // ── Direct routes ───────────────────────────────────────────

    #[test]
    fn route_to_plans_without_side_effects() {
        let session = Session::new(bare_config(5, 5)).unwrap();
        let before = session.snapshot();
        let path = session.route_to(AgentId(0), c(4, 4)).unwrap();
        assert_eq!(path.len(), 8);
        assert_eq!(session.snapshot(), before);
        assert_eq!(session.route_to(AgentId(9), c(4, 4)), None);
    }

    // ── Determinism ─────────────────────────────────────────────

    #[test]
    fn identical_seeds_replay_identically() {
        let run = |seed| {
            let mut session = Session::new(SessionConfig {
                width: 6,
                height: 6,
                static_obstacles: vec![c(2, 2), c(3, 2)],
                agent_starts: vec![c(0, 0), c(5, 5)],
                dynamic_obstacle_count: 2,
                seed,
            })
            .unwrap();
            let mut outcomes = Vec::new();
            for _ in 0..200 {
                let outcome = session.tick();
                let done = outcome == TickOutcome::Complete;
                outcomes.push(outcome);
                if done {
                    break;
                }
            }
            (outcomes, session.snapshot())
        };
        assert_eq!(run(33), run(33));
    }
}
