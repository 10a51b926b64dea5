//! Stagnation (cycle) detection.
//!
//! The detector watches the live-cell count tick by tick and says when a
//! run has most likely fallen into a still life or short oscillator, so
//! the host can inject fresh cells.

pub mod config;
pub mod detector;

pub use config::StagnationConfig;
pub use detector::StagnationDetector;
