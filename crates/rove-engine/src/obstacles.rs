//! Dynamic obstacle placement and per-tick stepping.
//!
//! Obstacles perform a local, non-blocking, best-effort random walk:
//! one cell per tick in a shuffled cardinal direction, or stay put when
//! every neighbour is blocked. Degenerate oscillation between two cells
//! is accepted behaviour — obstacles never plan globally.
//!
//! Respects the determinism contract: each tick's walk uses a ChaCha8
//! RNG seeded from `seed XOR tick_id`, so identical sessions replay
//! identical obstacle motion, and any tick's moves depend only on the
//! seed, the tick number, and the current positions.

use rand::seq::SliceRandom;
use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rove_core::{CellState, Coord, Direction, TickId};
use rove_grid::GridState;

use crate::config::ConfigError;

/// The mobile obstacles of one session.
#[derive(Debug, Clone)]
pub struct ObstacleStepper {
    positions: Vec<Coord>,
    seed: u64,
}

impl ObstacleStepper {
    /// Scatter `count` obstacles over the grid and return the stepper.
    ///
    /// Positions are drawn uniformly, without replacement, from the
    /// cells whose matrix state is plain `Unvisited` at call time —
    /// never onto static obstacles, agents, or each other.
    ///
    /// # Errors
    ///
    /// `ConfigError::TooManyDynamicObstacles` if fewer candidate cells
    /// exist than requested. Config validation catches this earlier for
    /// well-formed sessions; the check here keeps placement total.
    pub fn place(grid: &mut GridState, count: usize, seed: u64) -> Result<Self, ConfigError> {
        let mut candidates: Vec<Coord> = Vec::new();
        for y in 0..grid.height() as i32 {
            for x in 0..grid.width() as i32 {
                let coord = Coord::new(x, y);
                if grid.cell(coord) == CellState::Unvisited {
                    candidates.push(coord);
                }
            }
        }
        if candidates.len() < count {
            return Err(ConfigError::TooManyDynamicObstacles {
                requested: count,
                available: candidates.len(),
            });
        }

        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut positions = Vec::with_capacity(count);
        for _ in 0..count {
            let pick = rng.random_range(0..candidates.len());
            let cell = candidates.swap_remove(pick);
            grid.set_dynamic_obstacle(cell);
            positions.push(cell);
        }

        Ok(Self { positions, seed })
    }

    /// Advance every obstacle by at most one cell.
    ///
    /// Per obstacle: restore the vacated cell to its derived logical
    /// state, shuffle the four cardinal directions, and take the first
    /// neighbour that is in bounds and steppable (plain terrain — not
    /// an obstacle of either kind and not an agent). If none qualifies
    /// the obstacle stays and its cell is re-marked, so the matrix
    /// always shows exactly where the obstacles are.
    pub fn step(&mut self, grid: &mut GridState, tick: TickId) {
        let mut rng = ChaCha8Rng::seed_from_u64(self.seed ^ tick.0);
        for slot in self.positions.iter_mut() {
            let from = *slot;
            grid.restore(from);

            let mut directions = Direction::CARDINALS;
            directions.shuffle(&mut rng);

            let target = directions
                .into_iter()
                .map(|dir| from.step(dir))
                .find(|&nb| grid.in_bounds(nb) && grid.cell(nb).is_steppable());

            match target {
                Some(to) => {
                    grid.set_dynamic_obstacle(to);
                    *slot = to;
                }
                None => grid.set_dynamic_obstacle(from),
            }
        }
    }

    /// Current obstacle positions, in placement order.
    pub fn positions(&self) -> &[Coord] {
        &self.positions
    }
}
