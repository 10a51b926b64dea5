//! # conway-life
//!
//! Conway's Game of Life on a sparse integer plane, drawn to the terminal.
//!
//! ## Design Principles
//!
//! 1. **Sparse**: A board is the set of live cells. A step only looks at
//!    live cells and their neighbors, so cost follows the population,
//!    not the screen.
//!
//! 2. **Pure steps**: `advance` returns a new board and never mutates
//!    its input; the previous generation stays readable.
//!
//! 3. **Pluggable edges**: The rule never bounds-checks. A boundary policy
//!    decides whether a cell is clipped, wrapped or kept.
//!
//! ## Architecture
//!
//! - **Persistent boards**: `im` hash maps make keeping the previous
//!   generation O(1).
//!
//! - **Stagnation**: A population-size heuristic spots still lifes and
//!   short oscillators and triggers a reseed.
//!
//! ## Modules
//!
//! - `core`: Coordinates, cell states, boards, RNG
//! - `boundary`: Clip, Identity, Wrap policies
//! - `rules`: The transition rule and engine
//! - `stagnation`: Cycle detection
//! - `sim`: Tick driver, configuration, random seeding
//! - `patterns`: Built-in and plaintext patterns
//! - `term`: Terminal rendering and the paced loop

pub mod core;
pub mod boundary;
pub mod rules;
pub mod stagnation;
pub mod sim;
pub mod patterns;
pub mod term;
pub mod error;

// Re-export commonly used types
pub use crate::core::{Board, CellState, Coordinate, LifeRng};

pub use crate::boundary::{Boundary, BoundaryKind, BoundaryPolicy, Clip, Identity, Wrap};

pub use crate::rules::{advance, LifeEngine, NeighborMode, StepCounts};

pub use crate::stagnation::{StagnationConfig, StagnationDetector};

pub use crate::sim::{random_board, RunStats, Simulation, SimulationConfig, TickReport};

pub use crate::patterns::Pattern;

pub use crate::error::{ConfigError, PatternError};
