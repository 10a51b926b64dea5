//! Draws a board into a ratatui buffer.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::widgets::Widget;

use super::palette::Palette;
use crate::core::Board;

/// Renders each live cell inside the area; everything else is left blank.
///
/// Board coordinate `(0, 0)` is the area's top-left corner. Cells outside
/// the area, negative ones included, are skipped. The terminal's buffer
/// diff takes care of erasing cells drawn last frame.
pub struct BoardWidget<'a> {
    board: &'a Board,
    palette: &'a Palette,
}

impl<'a> BoardWidget<'a> {
    #[must_use]
    pub fn new(board: &'a Board, palette: &'a Palette) -> Self {
        Self { board, palette }
    }
}

impl Widget for BoardWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        for (coord, state) in self.board.iter() {
            let (Ok(dx), Ok(dy)) = (u16::try_from(coord.x), u16::try_from(coord.y)) else {
                continue;
            };
            if dx >= area.width || dy >= area.height {
                continue;
            }
            let glyph = self.palette.glyph(state);
            if let Some(cell) = buf.cell_mut((area.x + dx, area.y + dy)) {
                cell.set_symbol(glyph.symbol).set_style(glyph.style);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{CellState, Coordinate};
    use crate::term::palette::ColorSupport;
    use ratatui::style::Modifier;

    #[test]
    fn test_renders_inside_area_only() {
        let palette = Palette::for_support(ColorSupport::Monochrome);
        let mut board = Board::new();
        board.insert(Coordinate::new(0, 0), CellState::Stable);
        board.insert(Coordinate::new(2, 1), CellState::Survived);
        board.insert(Coordinate::new(-1, 0), CellState::Born);
        board.insert(Coordinate::new(4, 0), CellState::Born);

        let area = Rect::new(0, 0, 4, 2);
        let mut buf = Buffer::empty(area);
        BoardWidget::new(&board, &palette).render(area, &mut buf);

        assert!(buf[(0, 0)].modifier.contains(Modifier::REVERSED));
        assert_eq!(buf[(2, 1)].symbol(), "▒");
        assert!(!buf[(2, 1)].modifier.contains(Modifier::REVERSED));
        assert_eq!(buf[(3, 0)].symbol(), " ");
        assert!(!buf[(3, 0)].modifier.contains(Modifier::REVERSED));
    }

    #[test]
    fn test_offset_area() {
        let palette = Palette::for_support(ColorSupport::Monochrome);
        let board = Board::from_cells([(0, 0)]);

        let full = Rect::new(0, 0, 5, 5);
        let inner = Rect::new(2, 3, 2, 2);
        let mut buf = Buffer::empty(full);
        BoardWidget::new(&board, &palette).render(inner, &mut buf);

        assert!(buf[(2, 3)].modifier.contains(Modifier::REVERSED));
        assert!(!buf[(0, 0)].modifier.contains(Modifier::REVERSED));
    }
}
