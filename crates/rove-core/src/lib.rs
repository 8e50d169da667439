//! Core types for the Rove grid exploration engine.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the fundamental vocabulary used throughout the Rove workspace:
//! grid coordinates, cardinal directions, cell states, and
//! strongly-typed identifiers.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod cell;
pub mod coord;
pub mod id;

pub use cell::CellState;
pub use coord::{Coord, Direction, Path};
pub use id::{AgentId, TickId};
