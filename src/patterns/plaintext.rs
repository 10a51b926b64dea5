//! Plaintext (`.cells`) pattern reader.
//!
//! ```text
//! !Name: Glider
//! .O.
//! ..O
//! OOO
//! ```
//!
//! `!` starts a comment line, `.` is a dead cell, `O`, `o` or `*` a live
//! one. Rows may be ragged; missing cells are dead. Whitespace at the end
//! of a row is ignored.

use crate::core::Coordinate;
use crate::error::PatternError;

/// Parse a plaintext pattern into live coordinates relative to its top-left.
pub fn parse(text: &str) -> Result<Vec<Coordinate>, PatternError> {
    let mut cells = Vec::new();
    let mut row = 0i32;

    for (line_no, line) in text.lines().enumerate() {
        if line.starts_with('!') {
            continue;
        }
        for (column, ch) in line.trim_end().chars().enumerate() {
            match ch {
                '.' => {}
                'O' | 'o' | '*' => {
                    let x = i32::try_from(column).map_err(|_| PatternError::InvalidCell {
                        line: line_no + 1,
                        column: column + 1,
                        found: ch,
                    })?;
                    cells.push(Coordinate::new(x, row));
                }
                found => {
                    return Err(PatternError::InvalidCell {
                        line: line_no + 1,
                        column: column + 1,
                        found,
                    })
                }
            }
        }
        row += 1;
    }

    if cells.is_empty() {
        return Err(PatternError::Empty);
    }
    Ok(cells)
}
