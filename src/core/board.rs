//! Sparse board: the set of live cells, each tagged with a display state.
//!
//! ## Representation
//!
//! A `Board` maps [`Coordinate`] to [`CellState`]. Presence means alive;
//! a dead cell is never a key. There is no ordering guarantee.
//!
//! Uses an `im` persistent hash map (with an Fx hasher) so that cloning a
//! board is O(1). The simulation keeps the previous generation around for
//! the renderer without copying it.
//!
//! ## Usage
//!
//! ```
//! use conway_life::core::{Board, CellState, Coordinate};
//!
//! let board = Board::from_cells([(0, 0), (1, 0), (0, 1)]);
//! assert_eq!(board.len(), 3);
//! assert!(board.is_alive(Coordinate::new(1, 0)));
//! assert_eq!(board.state(Coordinate::new(0, 1)), Some(CellState::Stable));
//! assert!(!board.is_alive(Coordinate::new(1, 1)));
//! ```

use std::hash::BuildHasherDefault;

use rustc_hash::FxHasher;

use super::cell::CellState;
use super::coord::Coordinate;

type CellMap = im::HashMap<Coordinate, CellState, BuildHasherDefault<FxHasher>>;

/// The live cells of one generation.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Board {
    cells: CellMap,
}

impl Board {
    /// Create an empty board.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a board from coordinates, every cell `Stable`.
    pub fn from_cells<I, C>(cells: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<Coordinate>,
    {
        cells
            .into_iter()
            .map(|c| (Into::<Coordinate>::into(c), CellState::Stable))
            .collect()
    }

    /// Mark a cell alive with the given state, returning its previous state.
    pub fn insert(&mut self, coord: Coordinate, state: CellState) -> Option<CellState> {
        self.cells.insert(coord, state)
    }

    /// Is the cell alive this generation?
    #[must_use]
    pub fn is_alive(&self, coord: Coordinate) -> bool {
        self.cells.contains_key(&coord)
    }

    /// Display state of a live cell, `None` if dead.
    #[must_use]
    pub fn state(&self, coord: Coordinate) -> Option<CellState> {
        self.cells.get(&coord).copied()
    }

    /// Number of live cells.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Iterate live cells with their states, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (Coordinate, CellState)> + '_ {
        self.cells.iter().map(|(c, s)| (*c, *s))
    }

    /// Iterate live coordinates, in no particular order.
    pub fn coordinates(&self) -> impl Iterator<Item = Coordinate> + '_ {
        self.cells.keys().copied()
    }

    /// Union with another board. Cells alive in `self` keep their state.
    #[must_use]
    pub fn merge(&self, other: &Board) -> Board {
        Board {
            cells: self.cells.clone().union(other.cells.clone()),
        }
    }

    /// Inclusive bounding box `(min, max)` of the live cells.
    #[must_use]
    pub fn bounds(&self) -> Option<(Coordinate, Coordinate)> {
        let mut coords = self.coordinates();
        let first = coords.next()?;
        Some(coords.fold((first, first), |(lo, hi), c| {
            (
                Coordinate::new(lo.x.min(c.x), lo.y.min(c.y)),
                Coordinate::new(hi.x.max(c.x), hi.y.max(c.y)),
            )
        }))
    }

    /// Shift every cell by `(dx, dy)`. Cells pushed out of the `i32` range are dropped.
    #[must_use]
    pub fn translate(&self, dx: i32, dy: i32) -> Board {
        self.iter()
            .filter_map(|(c, s)| c.offset(dx, dy).map(|moved| (moved, s)))
            .collect()
    }
}

impl FromIterator<(Coordinate, CellState)> for Board {
    fn from_iter<I: IntoIterator<Item = (Coordinate, CellState)>>(iter: I) -> Self {
        Self {
            cells: iter.into_iter().collect(),
        }
    }
}

impl Extend<(Coordinate, CellState)> for Board {
    fn extend<I: IntoIterator<Item = (Coordinate, CellState)>>(&mut self, iter: I) {
        for (coord, state) in iter {
            self.cells.insert(coord, state);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_board() {
        let board = Board::new();
        assert!(board.is_empty());
        assert_eq!(board.len(), 0);
        assert_eq!(board.bounds(), None);
    }

    #[test]
    fn test_from_cells_collapses_duplicates() {
        let board = Board::from_cells([(1, 1), (1, 1), (2, 3)]);
        assert_eq!(board.len(), 2);
    }

    #[test]
    fn test_insert_replaces_state() {
        let mut board = Board::new();
        let c = Coordinate::new(4, 5);

        assert_eq!(board.insert(c, CellState::Born), None);
        assert_eq!(board.insert(c, CellState::Survived), Some(CellState::Born));
        assert_eq!(board.state(c), Some(CellState::Survived));
        assert_eq!(board.len(), 1);
    }

    #[test]
    fn test_clone_is_independent() {
        let original = Board::from_cells([(0, 0)]);
        let mut copy = original.clone();
        copy.insert(Coordinate::new(9, 9), CellState::Born);

        assert_eq!(original.len(), 1);
        assert_eq!(copy.len(), 2);
    }

    #[test]
    fn test_merge_keeps_existing_states() {
        let mut base = Board::new();
        base.insert(Coordinate::new(0, 0), CellState::Born);
        let fresh = Board::from_cells([(0, 0), (5, 5)]);

        let merged = base.merge(&fresh);

        assert_eq!(merged.len(), 2);
        assert_eq!(merged.state(Coordinate::new(0, 0)), Some(CellState::Born));
        assert_eq!(merged.state(Coordinate::new(5, 5)), Some(CellState::Stable));
        // Inputs untouched
        assert_eq!(base.len(), 1);
    }

    #[test]
    fn test_bounds() {
        let board = Board::from_cells([(3, -1), (-2, 4), (0, 0)]);
        assert_eq!(
            board.bounds(),
            Some((Coordinate::new(-2, -1), Coordinate::new(3, 4)))
        );
    }

    #[test]
    fn test_translate_drops_out_of_range() {
        let board = Board::from_cells([(0, 0), (i32::MAX, 0)]);
        let moved = board.translate(1, 2);

        assert_eq!(moved.len(), 1);
        assert!(moved.is_alive(Coordinate::new(1, 2)));
    }

    #[test]
    fn test_equality_is_structural() {
        let a = Board::from_cells([(0, 0), (1, 1)]);
        let b = Board::from_cells([(1, 1), (0, 0)]);
        assert_eq!(a, b);

        let mut c = b.clone();
        c.insert(Coordinate::new(0, 0), CellState::Born);
        assert_ne!(a, c);
    }
}
