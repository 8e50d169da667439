//! The per-cell state model.

/// The state of one grid cell.
///
/// Exactly one state applies to a coordinate at any instant.
/// [`AgentPresent`](CellState::AgentPresent) and
/// [`DynamicObstacle`](CellState::DynamicObstacle) are occupancy markers
/// layered over the logical terrain state; when the occupant leaves, the
/// cell is restored to the terrain state derived from the grid's
/// visited/unvisited partition. Any mapping of states to colours or
/// glyphs belongs to the rendering layer, not here.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CellState {
    /// Free cell that no agent has reached yet.
    Unvisited,
    /// Free cell some agent has visited at least once.
    Visited,
    /// Static obstacle, fixed at construction.
    Obstacle,
    /// A cell currently occupied by an agent.
    AgentPresent,
    /// A visited cell an agent has passed over again while in transit.
    RetracedPath,
    /// A cell currently occupied by a mobile obstacle.
    DynamicObstacle,
}

impl CellState {
    /// Whether path searches must treat this cell as impassable.
    ///
    /// Static obstacles and dynamic obstacles block expansion; agents do
    /// not — an agent cell is free terrain that happens to be occupied,
    /// and routing across it is the coordinator's concern.
    pub const fn blocks_search(self) -> bool {
        matches!(self, CellState::Obstacle | CellState::DynamicObstacle)
    }

    /// Whether a dynamic obstacle may step onto this cell.
    ///
    /// Obstacles walk only over plain terrain: never onto a static
    /// obstacle, another dynamic obstacle, or a cell holding an agent.
    pub const fn is_steppable(self) -> bool {
        matches!(
            self,
            CellState::Unvisited | CellState::Visited | CellState::RetracedPath
        )
    }
}
