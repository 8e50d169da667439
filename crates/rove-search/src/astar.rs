//! A* shortest path to an explicit target cell.

use rove_core::{Coord, Direction, Path};
use rove_grid::GridState;
use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap, HashSet};

/// An open-set node ordered for a min-heap on `f`, ties broken by
/// insertion order.
#[derive(Debug, Clone, Copy)]
struct Node {
    f: u32,
    seq: u64,
    cell: Coord,
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        self.f == other.f && self.seq == other.seq
    }
}

impl Eq for Node {}

impl Ord for Node {
    fn cmp(&self, other: &Self) -> Ordering {
        other.f.cmp(&self.f).then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for Node {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Standard A* over 4-connected cells: unit step cost, Manhattan
/// heuristic, best-known cost map with relaxation re-push.
///
/// Expansion excludes `Obstacle` and `DynamicObstacle` cells. The
/// returned path runs `start → target`, exclusive of `start` and
/// inclusive of `target` (a single-element path containing `start`
/// when the two coincide).
///
/// Returns `None` when no route exists under the current obstacle
/// placement. Obstacles may have moved since the caller last looked,
/// so an unreachable target is an expected outcome to be handled, not
/// a failure.
pub fn shortest_path(grid: &GridState, start: Coord, target: Coord) -> Option<Path> {
    if !grid.in_bounds(start) || !grid.in_bounds(target) {
        return None;
    }
    if start == target {
        return Some(vec![start]);
    }

    let mut open = BinaryHeap::new();
    let mut best_cost: HashMap<Coord, u32> = HashMap::new();
    let mut came_from: HashMap<Coord, Coord> = HashMap::new();
    let mut closed: HashSet<Coord> = HashSet::new();
    let mut seq = 0u64;

    best_cost.insert(start, 0);
    open.push(Node {
        f: start.manhattan(target),
        seq,
        cell: start,
    });

    while let Some(Node { cell: current, .. }) = open.pop() {
        if current == target {
            return Some(reconstruct(&came_from, start, target));
        }
        if !closed.insert(current) {
            continue;
        }

        let current_cost = best_cost[&current];
        for dir in Direction::CARDINALS {
            let nb = current.step(dir);
            if !grid.in_bounds(nb) || grid.cell(nb).blocks_search() {
                continue;
            }
            let tentative = current_cost + 1;
            if best_cost.get(&nb).is_none_or(|&known| tentative < known) {
                best_cost.insert(nb, tentative);
                came_from.insert(nb, current);
                seq += 1;
                open.push(Node {
                    f: tentative + nb.manhattan(target),
                    seq,
                    cell: nb,
                });
            }
        }
    }

    None
}

/// Walk the parent links back from `target` and reverse into a
/// start-exclusive path.
fn reconstruct(came_from: &HashMap<Coord, Coord>, start: Coord, target: Coord) -> Path {
    let mut path = vec![target];
    let mut current = target;
    while let Some(&prev) = came_from.get(&current) {
        if prev == start {
            break;
        }
        path.push(prev);
        current = prev;
    }
    path.reverse();
    path
}
