//! Literal seeding: named patterns and the plaintext format.
//!
//! ```
//! use conway_life::patterns::Pattern;
//!
//! let glider = Pattern::builtin("Glider").unwrap();
//! assert_eq!(glider.cells().len(), 5);
//! assert_eq!((glider.width(), glider.height()), (3, 3));
//!
//! let board = glider.centered(80, 24);
//! assert_eq!(board.len(), 5);
//! ```

pub mod catalog;
pub mod plaintext;

use crate::core::{Board, Coordinate};
use crate::error::PatternError;

/// A set of live cells relative to a top-left origin.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pattern {
    name: String,
    cells: Vec<Coordinate>,
}

impl Pattern {
    /// Parse a plaintext pattern.
    pub fn from_plaintext(name: impl Into<String>, text: &str) -> Result<Self, PatternError> {
        Ok(Self {
            name: name.into(),
            cells: plaintext::parse(text)?,
        })
    }

    /// Look up a built-in pattern by name (case-insensitive).
    pub fn builtin(name: &str) -> Result<Self, PatternError> {
        let builtin = catalog::find(name).ok_or_else(|| PatternError::Unknown(name.to_string()))?;
        Self::from_plaintext(builtin.name, builtin.text)
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn cells(&self) -> &[Coordinate] {
        &self.cells
    }

    /// Columns spanned by the live cells.
    #[must_use]
    pub fn width(&self) -> u32 {
        self.cells.iter().map(|c| c.x + 1).max().unwrap_or(0).unsigned_abs()
    }

    /// Rows spanned by the live cells.
    #[must_use]
    pub fn height(&self) -> u32 {
        self.cells.iter().map(|c| c.y + 1).max().unwrap_or(0).unsigned_abs()
    }

    /// Place the pattern with its top-left corner at `origin`.
    #[must_use]
    pub fn board_at(&self, origin: Coordinate) -> Board {
        Board::from_cells(
            self.cells
                .iter()
                .filter_map(|c| origin.offset(c.x, c.y)),
        )
    }

    /// Place the pattern in the middle of a `width × height` screen.
    ///
    /// Patterns larger than the screen are anchored at the origin.
    #[must_use]
    pub fn centered(&self, width: u32, height: u32) -> Board {
        let x = width.saturating_sub(self.width()) / 2;
        let y = height.saturating_sub(self.height()) / 2;
        self.board_at(Coordinate::new(
            i32::try_from(x).unwrap_or(i32::MAX),
            i32::try_from(y).unwrap_or(i32::MAX),
        ))
    }
}
