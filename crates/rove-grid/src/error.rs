//! Error types for grid construction and mutation.

use rove_core::{CellState, Coord};
use std::fmt;

/// Errors arising from grid construction or cell placement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// Attempted to construct a grid with a zero dimension.
    EmptyGrid,
    /// A dimension exceeds the maximum (coordinates use `i32`).
    DimensionTooLarge {
        /// Which dimension was too large.
        name: &'static str,
        /// The offending value.
        value: u32,
        /// The maximum allowed value.
        max: u32,
    },
    /// A coordinate is outside the bounds of the grid.
    OutOfBounds {
        /// The offending coordinate.
        coord: Coord,
        /// Grid width.
        width: u32,
        /// Grid height.
        height: u32,
    },
    /// The target cell already holds something that placement may not
    /// overwrite.
    Occupied {
        /// The offending coordinate.
        coord: Coord,
        /// What the cell currently holds.
        state: CellState,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyGrid => write!(f, "grid must have at least one cell"),
            Self::DimensionTooLarge { name, value, max } => {
                write!(f, "{name} {value} exceeds maximum {max}")
            }
            Self::OutOfBounds {
                coord,
                width,
                height,
            } => {
                write!(f, "coordinate {coord} out of bounds for {width}x{height} grid")
            }
            Self::Occupied { coord, state } => {
                write!(f, "cell {coord} already holds {state:?}")
            }
        }
    }
}

impl std::error::Error for GridError {}
