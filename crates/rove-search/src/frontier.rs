//! Greedy best-first search for the nearest unexplored cell.

use rove_core::{CellState, Coord, Direction, Path};
use rove_grid::GridState;
use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashSet};

/// A partial path in the open set.
///
/// Ordered so that the binary heap pops the lowest priority first, with
/// ties broken by discovery order (`seq`). The priority of a candidate
/// is `path length − unexplored neighbour count`: short paths toward
/// cells with much unexplored territory around them win.
#[derive(Debug, Clone)]
struct Candidate {
    priority: i32,
    seq: u64,
    cell: Coord,
    path: Path,
}

impl PartialEq for Candidate {
    fn eq(&self, other: &Self) -> bool {
        self.priority == other.priority && self.seq == other.seq
    }
}

impl Eq for Candidate {}

impl Ord for Candidate {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed: BinaryHeap is a max-heap, we want lowest priority out.
        other
            .priority
            .cmp(&self.priority)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for Candidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Number of 4-connected neighbours of `cell` whose matrix state is
/// plain `Unvisited`.
///
/// This reads the matrix, not the partition: an unvisited cell
/// currently covered by a dynamic obstacle does not attract the search.
fn unexplored_neighbours(grid: &GridState, cell: Coord) -> i32 {
    let mut count = 0;
    for dir in Direction::CARDINALS {
        let nb = cell.step(dir);
        if grid.in_bounds(nb) && grid.cell(nb) == CellState::Unvisited {
            count += 1;
        }
    }
    count
}

/// Find a path from `start` to the nearest unexplored cell.
///
/// Expands partial paths in priority order; neighbours are examined in
/// the fixed [`Direction::CARDINALS`] order, skipping out-of-bounds
/// cells, obstacles of either kind, and cells already seen by this
/// search. The first neighbour that is a member of the grid's unvisited
/// set ends the search immediately — the result is the first unvisited
/// cell the priority order surfaces, not necessarily the globally
/// nearest one.
///
/// The returned path excludes `start` and ends at the unvisited cell.
/// Returns `None` once the whole reachable component has been expanded
/// without touching an unvisited cell: nothing unvisited is reachable
/// under the current obstacle placement.
pub fn nearest_unexplored(grid: &GridState, start: Coord) -> Option<Path> {
    let mut open = BinaryHeap::new();
    let mut seen: HashSet<Coord> = HashSet::new();
    let mut seq = 0u64;

    seen.insert(start);
    open.push(Candidate {
        priority: 0,
        seq,
        cell: start,
        path: Path::new(),
    });

    while let Some(current) = open.pop() {
        for dir in Direction::CARDINALS {
            let nb = current.cell.step(dir);
            if !grid.in_bounds(nb) || grid.cell(nb).blocks_search() || seen.contains(&nb) {
                continue;
            }

            let mut path = current.path.clone();
            path.push(nb);

            if grid.is_unvisited(nb) {
                return Some(path);
            }

            seen.insert(nb);
            let priority = path.len() as i32 - unexplored_neighbours(grid, nb);
            seq += 1;
            open.push(Candidate {
                priority,
                seq,
                cell: nb,
                path,
            });
        }
    }

    None
}
