//! The authoritative grid state: cell matrix plus coverage partition.

use crate::error::GridError;
use indexmap::IndexSet;
use rove_core::{CellState, Coord, Direction};
use smallvec::SmallVec;

/// A fixed-size `width × height` grid of cell states together with the
/// visited/unvisited coordinate sets.
///
/// The two sets partition the free (non-[`Obstacle`](CellState::Obstacle))
/// cells: at every instant each free cell is in exactly one of them, and
/// `|visited| + |unvisited|` equals the free cell count. All mutation
/// goes through the placement and occupancy methods below, which keep
/// the matrix and the partition in step.
///
/// Occupancy markers ([`AgentPresent`](CellState::AgentPresent),
/// [`DynamicObstacle`](CellState::DynamicObstacle)) are written into the
/// matrix on top of the terrain; the terrain itself is never stored
/// twice — [`logical_state`](GridState::logical_state) re-derives it
/// from set membership whenever a marker is removed.
///
/// # Examples
///
/// ```
/// use rove_grid::GridState;
/// use rove_core::Coord;
///
/// let mut grid = GridState::new(4, 3).unwrap();
/// assert_eq!(grid.free_cell_count(), 12);
///
/// grid.place_static_obstacles(&[Coord::new(1, 1)]).unwrap();
/// assert_eq!(grid.free_cell_count(), 11);
/// assert_eq!(grid.unvisited_count(), 11);
/// ```
#[derive(Debug, Clone)]
pub struct GridState {
    width: u32,
    height: u32,
    cells: Vec<CellState>,
    visited: IndexSet<Coord>,
    unvisited: IndexSet<Coord>,
}

impl GridState {
    /// Maximum dimension size: coordinates use `i32`, so each axis must fit.
    pub const MAX_DIM: u32 = i32::MAX as u32;

    /// Create a grid of the given size with every cell `Unvisited`.
    ///
    /// Returns `Err(GridError::EmptyGrid)` if either dimension is 0, or
    /// `Err(GridError::DimensionTooLarge)` if either exceeds `i32::MAX`.
    pub fn new(width: u32, height: u32) -> Result<Self, GridError> {
        if width == 0 || height == 0 {
            return Err(GridError::EmptyGrid);
        }
        if width > Self::MAX_DIM {
            return Err(GridError::DimensionTooLarge {
                name: "width",
                value: width,
                max: Self::MAX_DIM,
            });
        }
        if height > Self::MAX_DIM {
            return Err(GridError::DimensionTooLarge {
                name: "height",
                value: height,
                max: Self::MAX_DIM,
            });
        }

        let cell_count = (width as usize) * (height as usize);
        let mut unvisited = IndexSet::with_capacity(cell_count);
        for y in 0..height as i32 {
            for x in 0..width as i32 {
                unvisited.insert(Coord::new(x, y));
            }
        }

        Ok(Self {
            width,
            height,
            cells: vec![CellState::Unvisited; cell_count],
            visited: IndexSet::new(),
            unvisited,
        })
    }

    /// Grid width in cells.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Grid height in cells.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Whether `coord` lies on the grid.
    pub fn in_bounds(&self, coord: Coord) -> bool {
        coord.x >= 0
            && coord.y >= 0
            && (coord.x as u32) < self.width
            && (coord.y as u32) < self.height
    }

    fn index(&self, coord: Coord) -> usize {
        debug_assert!(self.in_bounds(coord), "coordinate {coord} out of bounds");
        (coord.y as usize) * (self.width as usize) + (coord.x as usize)
    }

    /// The current matrix state of a cell.
    ///
    /// # Panics
    ///
    /// Panics if `coord` is out of bounds; callers bounds-check first
    /// (searches only probe coordinates they have already validated).
    pub fn cell(&self, coord: Coord) -> CellState {
        self.cells[self.index(coord)]
    }

    /// The full cell matrix in row-major order, for rendering layers.
    pub fn cells(&self) -> &[CellState] {
        &self.cells
    }

    // ── Construction-time placement ─────────────────────────────

    /// Mark cells as static obstacles and remove them from the
    /// unvisited set.
    ///
    /// Placement is idempotent for duplicate coordinates. Fails without
    /// modifying anything on the first out-of-bounds coordinate, and
    /// with `GridError::Occupied` if a coordinate already holds an
    /// agent.
    pub fn place_static_obstacles(&mut self, coords: &[Coord]) -> Result<(), GridError> {
        for &coord in coords {
            if !self.in_bounds(coord) {
                return Err(GridError::OutOfBounds {
                    coord,
                    width: self.width,
                    height: self.height,
                });
            }
            if self.cell(coord) == CellState::AgentPresent {
                return Err(GridError::Occupied {
                    coord,
                    state: CellState::AgentPresent,
                });
            }
        }
        for &coord in coords {
            let idx = self.index(coord);
            self.cells[idx] = CellState::Obstacle;
            self.unvisited.swap_remove(&coord);
        }
        Ok(())
    }

    /// Place an agent at its start cell: the cell becomes
    /// `AgentPresent` and counts as visited from tick 0.
    ///
    /// Fails if the cell is out of bounds or already holds an obstacle,
    /// a dynamic obstacle, or another agent.
    pub fn place_agent(&mut self, coord: Coord) -> Result<(), GridError> {
        if !self.in_bounds(coord) {
            return Err(GridError::OutOfBounds {
                coord,
                width: self.width,
                height: self.height,
            });
        }
        let state = self.cell(coord);
        if matches!(
            state,
            CellState::Obstacle | CellState::AgentPresent | CellState::DynamicObstacle
        ) {
            return Err(GridError::Occupied { coord, state });
        }
        let idx = self.index(coord);
        self.cells[idx] = CellState::AgentPresent;
        self.unvisited.swap_remove(&coord);
        self.visited.insert(coord);
        Ok(())
    }

    // ── Coverage partition ──────────────────────────────────────

    /// Move a coordinate from the unvisited to the visited set.
    ///
    /// Idempotent if already visited. The matrix is updated only when
    /// the cell currently shows plain `Unvisited` terrain — occupancy
    /// markers are left for their owners to manage. Must not be called
    /// on obstacle terrain, which is outside the partition.
    pub fn mark_visited(&mut self, coord: Coord) {
        debug_assert!(
            self.cell(coord) != CellState::Obstacle,
            "obstacle cell {coord} cannot be visited"
        );
        self.unvisited.swap_remove(&coord);
        self.visited.insert(coord);
        let idx = self.index(coord);
        if self.cells[idx] == CellState::Unvisited {
            self.cells[idx] = CellState::Visited;
        }
    }

    /// Whether `coord` is still in the unvisited set.
    pub fn is_unvisited(&self, coord: Coord) -> bool {
        self.unvisited.contains(&coord)
    }

    /// Whether `coord` is in the visited set.
    pub fn is_visited(&self, coord: Coord) -> bool {
        self.visited.contains(&coord)
    }

    /// True once every free cell has been visited.
    pub fn is_complete(&self) -> bool {
        self.unvisited.is_empty()
    }

    /// Number of cells in the visited set.
    pub fn visited_count(&self) -> usize {
        self.visited.len()
    }

    /// Number of cells in the unvisited set.
    pub fn unvisited_count(&self) -> usize {
        self.unvisited.len()
    }

    /// Number of non-obstacle cells in the matrix.
    pub fn free_cell_count(&self) -> usize {
        self.cells
            .iter()
            .filter(|&&s| s != CellState::Obstacle)
            .count()
    }

    /// Iterate the visited set in deterministic order.
    pub fn visited_cells(&self) -> impl Iterator<Item = Coord> + '_ {
        self.visited.iter().copied()
    }

    /// Iterate the unvisited set in deterministic order.
    pub fn unvisited_cells(&self) -> impl Iterator<Item = Coord> + '_ {
        self.unvisited.iter().copied()
    }

    /// The single remaining unvisited cell, if exactly one is left.
    ///
    /// Near the end of coverage the session switches from the frontier
    /// heuristic to a direct shortest-path route; this is the target.
    pub fn last_unvisited(&self) -> Option<Coord> {
        if self.unvisited.len() == 1 {
            self.unvisited.iter().next().copied()
        } else {
            None
        }
    }

    // ── Terrain derivation and occupancy markers ────────────────

    /// The logical terrain state of a cell, derived from set membership:
    /// `Visited` if the coordinate is in the visited set, `Unvisited` if
    /// it is in the unvisited set, `RetracedPath` otherwise.
    ///
    /// This is the restoration rule applied whenever an occupancy marker
    /// is removed — the terrain is never stored alongside the marker, so
    /// the two can never diverge.
    pub fn logical_state(&self, coord: Coord) -> CellState {
        if self.visited.contains(&coord) {
            CellState::Visited
        } else if self.unvisited.contains(&coord) {
            CellState::Unvisited
        } else {
            CellState::RetracedPath
        }
    }

    /// Write the derived [`logical_state`](GridState::logical_state)
    /// back into the matrix, clearing any occupancy marker.
    pub fn restore(&mut self, coord: Coord) {
        let idx = self.index(coord);
        self.cells[idx] = self.logical_state(coord);
    }

    /// Mark a cell as holding a dynamic obstacle.
    ///
    /// The caller (the obstacle stepper) is responsible for only
    /// targeting steppable terrain; the coverage partition is not
    /// touched — the cell keeps its visited/unvisited membership while
    /// occupied.
    pub fn set_dynamic_obstacle(&mut self, coord: Coord) {
        let idx = self.index(coord);
        self.cells[idx] = CellState::DynamicObstacle;
    }

    /// Mark a cell as holding an agent.
    pub fn set_agent(&mut self, coord: Coord) {
        let idx = self.index(coord);
        self.cells[idx] = CellState::AgentPresent;
    }

    /// Downgrade a `Visited` cell to `RetracedPath`; no-op for any
    /// other state. Applied to the cells an agent passes over in
    /// transit.
    pub fn mark_retraced(&mut self, coord: Coord) {
        let idx = self.index(coord);
        if self.cells[idx] == CellState::Visited {
            self.cells[idx] = CellState::RetracedPath;
        }
    }

    // ── Neighbourhood ───────────────────────────────────────────

    /// Whether a cell can currently be moved through: in bounds, not an
    /// `Obstacle`, and not presently held by a dynamic obstacle.
    ///
    /// A cell occupied by an agent is free — agents are routed over
    /// one another's cells by design, and destination conflicts are
    /// prevented by the session's in-tick sequencing.
    pub fn is_free(&self, coord: Coord) -> bool {
        self.in_bounds(coord) && !self.cell(coord).blocks_search()
    }

    /// The ≤4 in-bounds 4-connected neighbours of `coord`.
    ///
    /// The iteration order here is not part of the contract: searches
    /// that depend on tie-break order walk [`Direction::CARDINALS`]
    /// themselves instead of calling this.
    pub fn neighbours(&self, coord: Coord) -> SmallVec<[Coord; 4]> {
        let mut result = SmallVec::new();
        for dir in Direction::CARDINALS {
            let nb = coord.step(dir);
            if self.in_bounds(nb) {
                result.push(nb);
            }
        }
        result
    }
}
