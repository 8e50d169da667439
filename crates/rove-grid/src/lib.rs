//! Cell-state grid and coverage partition for the Rove exploration engine.
//!
//! [`GridState`] owns the single authoritative copy of the world: a
//! row-major cell-state matrix plus the visited/unvisited coordinate
//! sets that partition the free cells. Every other component — the
//! searches, the obstacle stepper, the session — borrows it; none keeps
//! its own copy of terrain or occupancy data.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod state;

pub use error::GridError;
pub use state::GridState;
