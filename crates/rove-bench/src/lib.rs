//! Shared scenario builders for the Rove benchmarks.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

use rove_core::Coord;
use rove_engine::SessionConfig;
use rove_grid::GridState;

/// A grid with pillar obstacles on a regular lattice — enough clutter
/// to make the planners work without disconnecting anything.
pub fn pillared_grid(width: u32, height: u32) -> GridState {
    let mut grid = GridState::new(width, height).expect("bench grid dimensions");
    let mut pillars = Vec::new();
    for y in (2..height as i32 - 1).step_by(4) {
        for x in (2..width as i32 - 1).step_by(4) {
            pillars.push(Coord::new(x, y));
        }
    }
    grid.place_static_obstacles(&pillars)
        .expect("bench pillar placement");
    grid
}

/// Mark the `size × size` block at the origin visited, so frontier
/// searches launched from inside it have real distance to cover.
pub fn explore_block(grid: &mut GridState, size: u32) {
    for y in 0..size.min(grid.height()) as i32 {
        for x in 0..size.min(grid.width()) as i32 {
            let coord = Coord::new(x, y);
            if grid.is_free(coord) {
                grid.mark_visited(coord);
            }
        }
    }
}

/// The reference session profile used by the whole-run benchmarks.
pub fn reference_config(width: u32, height: u32, agents: usize, seed: u64) -> SessionConfig {
    SessionConfig {
        width,
        height,
        static_obstacles: vec![
            Coord::new(width as i32 / 2, height as i32 / 2),
            Coord::new(width as i32 / 2, height as i32 / 2 - 1),
        ],
        agent_starts: SessionConfig::corner_starts(width, height, agents),
        dynamic_obstacle_count: 3,
        seed,
    }
}
