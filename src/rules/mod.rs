//! The Life transition rule.
//!
//! `LifeEngine::advance` turns one board into the next:
//! - candidates are live cells and their neighbors
//! - B3/S23 decides who lives
//! - the boundary policy decides where survivors land
//!
//! The engine never bounds-checks on its own; it only calls the policy.

pub mod engine;

pub use engine::{advance, candidates, transition, LifeEngine, NeighborMode, StepCounts};
