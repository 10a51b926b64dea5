//! Display state attached to each live cell.
//!
//! The state records *how* a cell came to be alive this generation. It is
//! purely cosmetic: the transition rule only ever asks whether a cell is
//! alive, never which state it carries.

use serde::{Deserialize, Serialize};

/// How a live cell became alive in the current generation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CellState {
    /// Alive with exactly 3 live neighbors, and alive before. Seeded cells start here.
    #[default]
    Stable,
    /// Dead last generation, born from exactly 3 live neighbors.
    Born,
    /// Alive with exactly 2 live neighbors; kept, but thinly supported.
    Survived,
}

impl CellState {
    /// All states in index order.
    pub const ALL: [CellState; 3] = [CellState::Stable, CellState::Born, CellState::Survived];

    /// Stable index in `0..3`, used to pick a glyph or color.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            CellState::Stable => 0,
            CellState::Born => 1,
            CellState::Survived => 2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_order() {
        for (i, state) in CellState::ALL.iter().enumerate() {
            assert_eq!(state.index(), i);
        }
    }

    #[test]
    fn test_default_is_stable() {
        assert_eq!(CellState::default(), CellState::Stable);
    }
}
