//! Rove: a deterministic grid-coverage exploration engine.
//!
//! This is the top-level facade crate that re-exports the public API
//! from all Rove sub-crates. For most users, adding `rove` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use rove::prelude::*;
//!
//! // A 10×10 room with a few pillars, two agents in opposite
//! // corners, and three wandering obstacles.
//! let config = SessionConfig {
//!     width: 10,
//!     height: 10,
//!     static_obstacles: vec![Coord::new(4, 4), Coord::new(5, 4)],
//!     agent_starts: vec![Coord::new(0, 0), Coord::new(9, 9)],
//!     dynamic_obstacle_count: 3,
//!     seed: 42,
//! };
//! let mut session = Session::new(config).unwrap();
//!
//! // Tick until every reachable cell has been visited. Pacing between
//! // ticks (and drawing the snapshot) is the caller's job.
//! for _ in 0..10_000 {
//!     match session.tick() {
//!         TickOutcome::Complete => break,
//!         TickOutcome::Progressed { .. } | TickOutcome::Waiting { .. } => {}
//!     }
//! }
//! let view = session.snapshot();
//! assert_eq!(view.agents.len(), 2);
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in
//! the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `rove-core` | Coordinates, directions, cell states, IDs |
//! | [`grid`] | `rove-grid` | The cell matrix and coverage partition |
//! | [`search`] | `rove-search` | Frontier and shortest-path planners |
//! | [`engine`] | `rove-engine` | Session configuration and orchestration |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types (`rove-core`).
///
/// Coordinates, cardinal directions, the [`types::CellState`] model,
/// and strongly-typed identifiers.
pub use rove_core as types;

/// Grid state and coverage partition (`rove-grid`).
///
/// [`grid::GridState`] is the single authoritative copy of the world,
/// borrowed by every other component.
pub use rove_grid as grid;

/// Path searches (`rove-search`).
///
/// [`search::nearest_unexplored`] for frontier exploration and
/// [`search::shortest_path`] for explicit targets.
pub use rove_search as search;

/// Session orchestration (`rove-engine`).
///
/// [`engine::Session`] ties the grid, agents, and mobile obstacles
/// together into a tick loop.
pub use rove_engine as engine;

/// Common imports for typical Rove usage.
///
/// ```rust
/// use rove::prelude::*;
/// ```
pub mod prelude {
    pub use rove_core::{AgentId, CellState, Coord, Direction, Path, TickId};
    pub use rove_engine::{
        AgentPhase, AgentView, ConfigError, GridView, Session, SessionConfig, TickOutcome,
    };
    pub use rove_grid::{GridError, GridState};
    pub use rove_search::{nearest_unexplored, shortest_path};
}
