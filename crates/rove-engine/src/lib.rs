//! Session orchestration for the Rove exploration engine.
//!
//! A [`Session`] owns the grid, the agents, and the dynamic obstacles,
//! and advances them one [`tick`](Session::tick) at a time: obstacles
//! step first, then each agent in ID order plans a path and either
//! moves, waits, or retires. Construction goes through
//! [`SessionConfig`], which validates every knob up front — no partial
//! session is ever created.
//!
//! The engine is single-threaded and tick-driven. `Session` is `Send`
//! but all mutation takes `&mut self`, so the borrow checker enforces
//! the one-writer-per-tick model; within a tick, agents are strictly
//! sequenced, which is what prevents two agents from claiming the same
//! cell.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod agent;
pub mod config;
pub mod obstacles;
pub mod session;

pub use agent::{Agent, AgentPhase};
pub use config::{ConfigError, SessionConfig};
pub use obstacles::ObstacleStepper;
pub use session::{AgentView, GridView, Session, TickOutcome};
