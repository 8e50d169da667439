//! Session configuration, validation, and error types.
//!
//! [`SessionConfig`] is the single input to
//! [`Session::new`](crate::session::Session::new). Every knob is
//! explicit — grid dimensions, static obstacles, agent starts, dynamic
//! obstacle count, RNG seed — and
//! [`validate()`](SessionConfig::validate) is a pure pass over all
//! structural invariants, run before anything is built.

use rove_core::Coord;
use rove_grid::{GridError, GridState};
use std::collections::HashSet;
use std::error::Error;
use std::fmt;

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected during [`SessionConfig::validate()`].
///
/// All of these are fatal at construction: the session constructor
/// surfaces them to the caller and creates nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Width or height is zero.
    InvalidDimensions {
        /// Configured width.
        width: u32,
        /// Configured height.
        height: u32,
    },
    /// No agent start positions were supplied.
    NoAgents,
    /// An agent start position lies outside the grid.
    StartOutOfBounds {
        /// The offending coordinate.
        coord: Coord,
    },
    /// A static obstacle lies outside the grid.
    ObstacleOutOfBounds {
        /// The offending coordinate.
        coord: Coord,
    },
    /// Two agents share the same start position.
    OverlappingStarts {
        /// The duplicated coordinate.
        coord: Coord,
    },
    /// An agent start position coincides with a static obstacle.
    StartOnObstacle {
        /// The offending coordinate.
        coord: Coord,
    },
    /// More dynamic obstacles requested than free unvisited cells exist
    /// to hold them.
    TooManyDynamicObstacles {
        /// How many were requested.
        requested: usize,
        /// How many cells were available.
        available: usize,
    },
    /// The grid itself rejected construction or placement.
    Grid(GridError),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimensions { width, height } => {
                write!(f, "grid dimensions must be positive, got {width}x{height}")
            }
            Self::NoAgents => write!(f, "at least one agent start position is required"),
            Self::StartOutOfBounds { coord } => {
                write!(f, "agent start {coord} out of bounds")
            }
            Self::ObstacleOutOfBounds { coord } => {
                write!(f, "static obstacle {coord} out of bounds")
            }
            Self::OverlappingStarts { coord } => {
                write!(f, "two agents share start position {coord}")
            }
            Self::StartOnObstacle { coord } => {
                write!(f, "agent start {coord} coincides with a static obstacle")
            }
            Self::TooManyDynamicObstacles {
                requested,
                available,
            } => {
                write!(
                    f,
                    "{requested} dynamic obstacles requested but only {available} free cells available"
                )
            }
            Self::Grid(e) => write!(f, "grid: {e}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Grid(e) => Some(e),
            _ => None,
        }
    }
}

impl From<GridError> for ConfigError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}

// ── SessionConfig ──────────────────────────────────────────────────

/// Complete configuration for constructing an exploration session.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Grid width in cells.
    pub width: u32,
    /// Grid height in cells.
    pub height: u32,
    /// Cells fixed as impassable terrain for the whole session.
    pub static_obstacles: Vec<Coord>,
    /// One start position per agent; `AgentId(n)` gets the n-th entry.
    pub agent_starts: Vec<Coord>,
    /// How many mobile obstacles to scatter over unvisited cells at
    /// construction (historically 3 or 5).
    pub dynamic_obstacle_count: usize,
    /// Seed for all randomness: obstacle placement and per-tick walks.
    /// Identical configurations replay identically.
    pub seed: u64,
}

impl SessionConfig {
    /// Agent start positions at the grid corners, in the conventional
    /// order: top-left, bottom-left, top-right, bottom-right. `count`
    /// is clamped to 4.
    pub fn corner_starts(width: u32, height: u32, count: usize) -> Vec<Coord> {
        let right = width as i32 - 1;
        let bottom = height as i32 - 1;
        let corners = [
            Coord::new(0, 0),
            Coord::new(0, bottom),
            Coord::new(right, 0),
            Coord::new(right, bottom),
        ];
        corners.into_iter().take(count.min(4)).collect()
    }

    fn in_bounds(&self, coord: Coord) -> bool {
        coord.x >= 0
            && coord.y >= 0
            && (coord.x as u32) < self.width
            && (coord.y as u32) < self.height
    }

    /// Validate all structural invariants without building anything.
    ///
    /// # Errors
    ///
    /// See [`ConfigError`] — one variant per rejected invariant. The
    /// first violation encountered is returned.
    pub fn validate(&self) -> Result<(), ConfigError> {
        // 1. Dimensions: positive and within coordinate range.
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }
        if self.width > GridState::MAX_DIM {
            return Err(ConfigError::Grid(GridError::DimensionTooLarge {
                name: "width",
                value: self.width,
                max: GridState::MAX_DIM,
            }));
        }
        if self.height > GridState::MAX_DIM {
            return Err(ConfigError::Grid(GridError::DimensionTooLarge {
                name: "height",
                value: self.height,
                max: GridState::MAX_DIM,
            }));
        }

        // 2. At least one agent, all starts in bounds and distinct.
        if self.agent_starts.is_empty() {
            return Err(ConfigError::NoAgents);
        }
        let mut starts = HashSet::new();
        for &coord in &self.agent_starts {
            if !self.in_bounds(coord) {
                return Err(ConfigError::StartOutOfBounds { coord });
            }
            if !starts.insert(coord) {
                return Err(ConfigError::OverlappingStarts { coord });
            }
        }

        // 3. Obstacles in bounds and not under an agent start.
        let mut obstacles = HashSet::new();
        for &coord in &self.static_obstacles {
            if !self.in_bounds(coord) {
                return Err(ConfigError::ObstacleOutOfBounds { coord });
            }
            if starts.contains(&coord) {
                return Err(ConfigError::StartOnObstacle { coord });
            }
            obstacles.insert(coord);
        }

        // 4. Enough plain unvisited cells to seat every dynamic obstacle.
        let total = (self.width as usize) * (self.height as usize);
        let available = total - obstacles.len() - starts.len();
        if self.dynamic_obstacle_count > available {
            return Err(ConfigError::TooManyDynamicObstacles {
                requested: self.dynamic_obstacle_count,
                available,
            });
        }

        Ok(())
    }
}
