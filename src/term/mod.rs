//! Terminal host: palette detection, board widget, paced loop.
//!
//! Everything here is I/O around a [`Simulation`](crate::sim::Simulation);
//! the simulation itself never touches the terminal.

pub mod palette;
pub mod runner;
pub mod widget;

pub use palette::{ColorSupport, Glyph, Palette};
pub use runner::{headless_frames_from_env, run_headless, run_terminal, Control};
pub use widget::BoardWidget;
