//! Test fixtures for Rove development.
//!
//! The main entry point is [`grid_from_ascii`], which builds a
//! [`GridState`] from a small picture so test scenarios read as
//! layouts rather than coordinate lists:
//!
//! ```
//! use rove_test_utils::grid_from_ascii;
//!
//! let grid = grid_from_ascii(
//!     "A . .
//!      ## # .
//!      . . .",
//! );
//! assert_eq!(grid.width(), 3);
//! assert_eq!(grid.free_cell_count(), 7);
//! ```

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

use rove_core::Coord;
use rove_grid::GridState;

/// Build a [`GridState`] from an ASCII picture.
///
/// One character per cell, cells separated by whitespace, one line per
/// row. Legend:
///
/// | char | cell |
/// |------|------|
/// | `.`  | unvisited |
/// | `v`  | visited |
/// | `r`  | retraced (visited, then passed over again) |
/// | `#`  | static obstacle |
/// | `A`  | agent (its cell counts as visited) |
/// | `o`  | dynamic obstacle (over unvisited terrain) |
///
/// # Panics
///
/// Panics on ragged rows, unknown characters, or placements the grid
/// itself rejects — a malformed fixture is a test bug.
pub fn grid_from_ascii(art: &str) -> GridState {
    let rows: Vec<Vec<char>> = art
        .lines()
        .map(|line| line.split_whitespace().flat_map(str::chars).collect())
        .filter(|row: &Vec<char>| !row.is_empty())
        .collect();
    assert!(!rows.is_empty(), "ascii grid has no rows");
    let width = rows[0].len();
    assert!(
        rows.iter().all(|r| r.len() == width),
        "ascii grid rows are ragged"
    );

    let mut grid = GridState::new(width as u32, rows.len() as u32).expect("ascii grid dimensions");

    let mut obstacles = Vec::new();
    for (y, row) in rows.iter().enumerate() {
        for (x, ch) in row.iter().enumerate() {
            let coord = Coord::new(x as i32, y as i32);
            match ch {
                '.' => {}
                'v' => grid.mark_visited(coord),
                'r' => {
                    grid.mark_visited(coord);
                    grid.mark_retraced(coord);
                }
                '#' => obstacles.push(coord),
                'A' => grid.place_agent(coord).expect("ascii agent placement"),
                'o' => grid.set_dynamic_obstacle(coord),
                other => panic!("unknown ascii grid cell {other:?} at {coord}"),
            }
        }
    }
    grid.place_static_obstacles(&obstacles)
        .expect("ascii obstacle placement");
    grid
}

/// Shorthand coordinate constructor for test bodies.
pub fn c(x: i32, y: i32) -> Coord {
    Coord::new(x, y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rove_core::CellState;

    #[test]
    fn legend_round_trips() {
        let grid = grid_from_ascii(
            "A v .
             # r o
             . . .",
        );
        assert_eq!(grid.cell(c(0, 0)), CellState::AgentPresent);
        assert_eq!(grid.cell(c(1, 0)), CellState::Visited);
        assert_eq!(grid.cell(c(2, 0)), CellState::Unvisited);
        assert_eq!(grid.cell(c(0, 1)), CellState::Obstacle);
        assert_eq!(grid.cell(c(1, 1)), CellState::RetracedPath);
        assert_eq!(grid.cell(c(2, 1)), CellState::DynamicObstacle);
        // Partition: 8 free cells, 3 of them visited (A, v, r).
        assert_eq!(grid.free_cell_count(), 8);
        assert_eq!(grid.visited_count(), 3);
        assert_eq!(grid.unvisited_count(), 5);
    }

    #[test]
    #[should_panic(expected = "ragged")]
    fn ragged_rows_panic() {
        grid_from_ascii(
            ". .
             . . .",
        );
    }
}
