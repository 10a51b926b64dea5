//! Core data model: coordinates, cell states, boards, RNG.
//!
//! Nothing here knows about boundaries or the Life rule; those live in
//! `boundary` and `rules` and operate on these types.

pub mod coord;
pub mod cell;
pub mod board;
pub mod rng;

pub use coord::{Coordinate, MOORE_OFFSETS};
pub use cell::CellState;
pub use board::Board;
pub use rng::LifeRng;
