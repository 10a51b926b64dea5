//! The Life transition: one generation to the next.
//!
//! Only live cells and their Moore neighborhoods are examined, so a step
//! costs time proportional to the population, not the screen area.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::boundary::BoundaryPolicy;
use crate::core::{Board, CellState, Coordinate};

/// Where the boundary policy is consulted while counting neighbors.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NeighborMode {
    /// Count raw, unmapped neighbors. The policy only decides where a
    /// surviving or newborn cell is placed.
    #[default]
    Placement,
    /// Map every neighbor through the policy before the alive check, so a
    /// wrapping policy lets cells see across the edge.
    BoundaryReads,
}

/// Conway's rule (B3/S23) with display annotation.
///
/// Returns the next display state, or `None` if the cell is dead next
/// generation. `alive` is the only input that matters about the current
/// cell; its display state never feeds back.
#[must_use]
pub const fn transition(alive: bool, live_neighbors: usize) -> Option<CellState> {
    match (alive, live_neighbors) {
        (true, 3) => Some(CellState::Stable),
        (false, 3) => Some(CellState::Born),
        (true, 2) => Some(CellState::Survived),
        _ => None,
    }
}

/// Computes successive generations.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LifeEngine {
    mode: NeighborMode,
}

impl LifeEngine {
    /// Create an engine with the given neighbor mode.
    #[must_use]
    pub const fn new(mode: NeighborMode) -> Self {
        Self { mode }
    }

    #[must_use]
    pub const fn mode(&self) -> NeighborMode {
        self.mode
    }

    /// Compute the next generation.
    ///
    /// Never mutates `board`. The result only holds coordinates the
    /// boundary policy accepted.
    #[must_use]
    pub fn advance<B>(&self, board: &Board, boundary: &B) -> Board
    where
        B: BoundaryPolicy + ?Sized,
    {
        let mut next = Board::new();
        if board.is_empty() {
            return next;
        }

        for point in candidates(board) {
            let alive = board.is_alive(point);
            let Some(state) = transition(alive, self.live_neighbors(board, point, boundary)) else {
                continue;
            };
            if let Some(placed) = boundary.apply(point) {
                next.insert(placed, state);
            }
        }

        next
    }

    /// Count the live neighbors of `point` under this engine's mode.
    #[must_use]
    pub fn live_neighbors<B>(&self, board: &Board, point: Coordinate, boundary: &B) -> usize
    where
        B: BoundaryPolicy + ?Sized,
    {
        match self.mode {
            NeighborMode::Placement => point.neighbors().filter(|n| board.is_alive(*n)).count(),
            NeighborMode::BoundaryReads => point
                .neighbors()
                .filter_map(|n| boundary.apply(n))
                .filter(|n| board.is_alive(*n))
                .count(),
        }
    }
}

/// Live cells plus every neighbor of a live cell.
///
/// No coordinate outside this set can be alive next generation.
#[must_use]
pub fn candidates(board: &Board) -> FxHashSet<Coordinate> {
    let mut set = FxHashSet::default();
    set.reserve(board.len() * 9);
    for cell in board.coordinates() {
        set.insert(cell);
        set.extend(cell.neighbors());
    }
    set
}

/// Next generation with the default [`NeighborMode::Placement`].
///
/// ```
/// use conway_life::boundary::Identity;
/// use conway_life::core::{Board, CellState, Coordinate};
/// use conway_life::rules::advance;
///
/// let l_shape = Board::from_cells([(0, 0), (1, 0), (0, 1)]);
/// let next = advance(&l_shape, &Identity);
/// assert_eq!(next.state(Coordinate::new(1, 1)), Some(CellState::Born));
/// ```
#[must_use]
pub fn advance<B>(board: &Board, boundary: &B) -> Board
where
    B: BoundaryPolicy + ?Sized,
{
    LifeEngine::default().advance(board, boundary)
}

/// Births and deaths between two consecutive boards.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepCounts {
    /// Cells alive in `next` but not in `previous`.
    pub births: usize,
    /// Cells alive in `previous` but not in `next`.
    pub deaths: usize,
}

impl StepCounts {
    #[must_use]
    pub fn between(previous: &Board, next: &Board) -> Self {
        Self {
            births: next.coordinates().filter(|c| !previous.is_alive(*c)).count(),
            deaths: previous.coordinates().filter(|c| !next.is_alive(*c)).count(),
        }
    }
}
