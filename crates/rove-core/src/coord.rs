//! Grid coordinates, cardinal directions, and paths.

use std::fmt;

/// A cell coordinate on a 2D grid.
///
/// `x` is the column and `y` the row; `y` grows downward, matching the
/// row-major cell ordering used by the grid. Coordinates are signed so
/// that off-grid neighbours can be formed and rejected by a bounds
/// check, rather than wrapping silently.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    /// Column index.
    pub x: i32,
    /// Row index.
    pub y: i32,
}

impl Coord {
    /// Create a coordinate from column and row indices.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The coordinate one unit step in `dir` from `self`.
    ///
    /// The result may be out of bounds for any particular grid; callers
    /// are expected to bounds-check it.
    pub fn step(self, dir: Direction) -> Self {
        let (dx, dy) = dir.offset();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Manhattan (L1) distance to `other` — the grid geodesic for
    /// 4-connected movement.
    pub fn manhattan(self, other: Self) -> u32 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// A cardinal movement direction.
///
/// Variant order matters: [`Direction::CARDINALS`] is the fixed
/// expansion order used by the searches (down, right, up, left), so the
/// tie-break behaviour of path planning is owned here, by the caller of
/// the grid, rather than hidden inside grid neighbour lookup.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    /// One row down (`y + 1`).
    South,
    /// One column right (`x + 1`).
    East,
    /// One row up (`y - 1`).
    North,
    /// One column left (`x - 1`).
    West,
}

impl Direction {
    /// All four directions in search expansion order: down, right, up, left.
    pub const CARDINALS: [Direction; 4] = [
        Direction::South,
        Direction::East,
        Direction::North,
        Direction::West,
    ];

    /// The `(dx, dy)` unit offset for this direction.
    pub const fn offset(self) -> (i32, i32) {
        match self {
            Direction::South => (0, 1),
            Direction::East => (1, 0),
            Direction::North => (0, -1),
            Direction::West => (-1, 0),
        }
    }
}

/// An ordered sequence of adjacent coordinates, exclusive of the
/// position it starts from and inclusive of the destination.
pub type Path = Vec<Coord>;

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn step_follows_offsets() {
        let c = Coord::new(3, 5);
        assert_eq!(c.step(Direction::South), Coord::new(3, 6));
        assert_eq!(c.step(Direction::East), Coord::new(4, 5));
        assert_eq!(c.step(Direction::North), Coord::new(3, 4));
        assert_eq!(c.step(Direction::West), Coord::new(2, 5));
    }

    #[test]
    fn cardinals_order_is_down_right_up_left() {
        assert_eq!(
            Direction::CARDINALS,
            [
                Direction::South,
                Direction::East,
                Direction::North,
                Direction::West,
            ]
        );
    }

    #[test]
    fn manhattan_basic() {
        assert_eq!(Coord::new(0, 0).manhattan(Coord::new(4, 4)), 8);
        assert_eq!(Coord::new(2, 3).manhattan(Coord::new(2, 3)), 0);
        assert_eq!(Coord::new(-1, 0).manhattan(Coord::new(1, 0)), 2);
    }

    #[test]
    fn display_format() {
        assert_eq!(Coord::new(7, -2).to_string(), "(7, -2)");
    }

    proptest! {
        #[test]
        fn manhattan_is_metric(
            ax in -50i32..50, ay in -50i32..50,
            bx in -50i32..50, by in -50i32..50,
            cx in -50i32..50, cy in -50i32..50,
        ) {
            let a = Coord::new(ax, ay);
            let b = Coord::new(bx, by);
            let c = Coord::new(cx, cy);

            prop_assert_eq!(a.manhattan(a), 0);
            prop_assert_eq!(a.manhattan(b), b.manhattan(a));
            prop_assert!(a.manhattan(c) <= a.manhattan(b) + b.manhattan(c));
        }

        #[test]
        fn step_moves_exactly_one_cell(x in -50i32..50, y in -50i32..50) {
            let c = Coord::new(x, y);
            for dir in Direction::CARDINALS {
                prop_assert_eq!(c.step(dir).manhattan(c), 1);
            }
        }
    }
}
