//! Static reachability probe used to classify failed searches.

use rove_core::{CellState, Coord, Direction};
use rove_grid::GridState;
use std::collections::{HashSet, VecDeque};

/// Whether any member of the unvisited set can be reached from `start`
/// over non-`Obstacle` terrain, ignoring dynamic obstacles entirely.
///
/// The planners treat dynamic obstacles as walls, so a failed search
/// is ambiguous: the remainder may be walled off for good, or merely
/// plugged by an obstacle that will wander away. This breadth-first
/// sweep over static terrain resolves the ambiguity — `false` means
/// no amount of waiting will help, `true` means the blockage is
/// mobile and retrying is worthwhile.
pub fn unvisited_reachable(grid: &GridState, start: Coord) -> bool {
    if !grid.in_bounds(start) {
        return false;
    }

    let mut seen: HashSet<Coord> = HashSet::new();
    let mut queue: VecDeque<Coord> = VecDeque::new();
    seen.insert(start);
    queue.push_back(start);

    while let Some(current) = queue.pop_front() {
        for dir in Direction::CARDINALS {
            let nb = current.step(dir);
            if !grid.in_bounds(nb)
                || grid.cell(nb) == CellState::Obstacle
                || seen.contains(&nb)
            {
                continue;
            }
            if grid.is_unvisited(nb) {
                return true;
            }
            seen.insert(nb);
            queue.push_back(nb);
        }
    }

    false
}
