//! Cell coordinates on the Life plane.
//!
//! The plane is unbounded in principle but limited to the `i32` range in
//! practice. Neighbor arithmetic is checked: a neighbor that would fall
//! outside the representable range simply does not exist, so no coordinate
//! ever wraps around silently.
//!
//! ## Usage
//!
//! ```
//! use conway_life::core::Coordinate;
//!
//! let origin = Coordinate::new(0, 0);
//! assert_eq!(origin.neighbors().count(), 8);
//! assert!(origin.neighbors().any(|n| n == Coordinate::new(1, 1)));
//!
//! let edge = Coordinate::new(i32::MAX, 0);
//! assert_eq!(edge.neighbors().count(), 5);
//! ```

use serde::{Deserialize, Serialize};

/// Offsets of the Moore neighborhood, in the order neighbors are visited.
pub const MOORE_OFFSETS: [(i32, i32); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

/// A signed `(x, y)` cell position. `x` grows to the right, `y` downward.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coordinate {
    pub x: i32,
    pub y: i32,
}

impl Coordinate {
    /// Create a new coordinate.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Offset by `(dx, dy)`, or `None` if either axis leaves the `i32` range.
    #[must_use]
    pub fn offset(self, dx: i32, dy: i32) -> Option<Self> {
        Some(Self {
            x: self.x.checked_add(dx)?,
            y: self.y.checked_add(dy)?,
        })
    }

    /// Iterate the Moore neighborhood (up to 8 coordinates).
    ///
    /// Fewer than 8 are yielded only at the edges of the `i32` range.
    pub fn neighbors(self) -> impl Iterator<Item = Coordinate> {
        MOORE_OFFSETS
            .into_iter()
            .filter_map(move |(dx, dy)| self.offset(dx, dy))
    }

    /// Chebyshev (king-move) distance to another coordinate.
    #[must_use]
    pub fn chebyshev_distance(self, other: Coordinate) -> u64 {
        let dx = (i64::from(self.x) - i64::from(other.x)).unsigned_abs();
        let dy = (i64::from(self.y) - i64::from(other.y)).unsigned_abs();
        dx.max(dy)
    }
}

impl From<(i32, i32)> for Coordinate {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
