//! Path searches for the Rove exploration engine.
//!
//! Two planners over a borrowed [`GridState`](rove_grid::GridState),
//! both 4-connected and read-only:
//!
//! - [`frontier::nearest_unexplored`] — greedy best-first search for a
//!   path to *an* unvisited cell, biased toward cells with many
//!   unexplored neighbours. The session's workhorse.
//! - [`astar::shortest_path`] — classic A* to an explicit target.
//!   Fallback for the last remaining cell and for direct-route
//!   requests.
//!
//! Both return `None` when no route exists under the current obstacle
//! placement. That is a normal outcome — obstacles move — and callers
//! treat it as "agent done" or "retry later", never as an error.
//! [`reachability::unvisited_reachable`] tells the two cases apart by
//! probing static terrain only.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod astar;
pub mod frontier;
pub mod reachability;

pub use astar::shortest_path;
pub use frontier::nearest_unexplored;
pub use reachability::unvisited_reachable;
