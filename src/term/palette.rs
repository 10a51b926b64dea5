//! Glyphs for each cell state, picked from what the terminal can show.

use ratatui::style::{Color, Modifier, Style};
use supports_color::{on_cached, ColorLevel, Stream};

use crate::core::CellState;

/// How much color the terminal supports.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColorSupport {
    /// 16 colors or more.
    Bright,
    /// Only the 8 basic ANSI colors.
    Basic,
    /// No color at all.
    Monochrome,
}

impl ColorSupport {
    /// Ask the environment about stdout.
    #[must_use]
    pub fn detect() -> Self {
        Self::from_level(on_cached(Stream::Stdout))
    }

    /// `supports-color` cannot tell 8 colors from 16, so any basic ANSI
    /// support counts as 16.
    #[must_use]
    pub fn from_level(level: Option<ColorLevel>) -> Self {
        let colors = match level {
            Some(level) if level.has_256 || level.has_16m => 256,
            Some(level) if level.has_basic => 16,
            _ => 0,
        };
        Self::from_color_count(colors)
    }

    /// Pick a palette from the number of colors the terminal can show.
    #[must_use]
    pub const fn from_color_count(colors: u32) -> Self {
        if colors >= 16 {
            ColorSupport::Bright
        } else if colors >= 8 {
            ColorSupport::Basic
        } else {
            ColorSupport::Monochrome
        }
    }
}

/// One drawn cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Glyph {
    pub symbol: &'static str,
    pub style: Style,
}

/// Glyphs indexed by [`CellState::index`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    glyphs: [Glyph; 3],
}

impl Palette {
    /// Detect terminal support and build the richest palette it allows.
    #[must_use]
    pub fn detect() -> Self {
        Self::for_support(ColorSupport::detect())
    }

    #[must_use]
    pub fn for_support(support: ColorSupport) -> Self {
        let background = |color| Glyph {
            symbol: " ",
            style: Style::default().bg(color),
        };
        let glyphs = match support {
            ColorSupport::Bright => [
                background(Color::LightRed),
                background(Color::LightGreen),
                background(Color::LightCyan),
            ],
            ColorSupport::Basic => [
                background(Color::Red),
                background(Color::Green),
                background(Color::Blue),
            ],
            // Reverse video and the checkerboard shade
            ColorSupport::Monochrome => [
                Glyph {
                    symbol: " ",
                    style: Style::default().add_modifier(Modifier::REVERSED),
                },
                Glyph {
                    symbol: "▒",
                    style: Style::default().add_modifier(Modifier::REVERSED),
                },
                Glyph {
                    symbol: "▒",
                    style: Style::default(),
                },
            ],
        };
        Self { glyphs }
    }

    #[must_use]
    pub fn glyph(&self, state: CellState) -> Glyph {
        self.glyphs[state.index()]
    }
}
