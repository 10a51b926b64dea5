//! Simulation driver: one tick is advance, observe, maybe reseed.
//!
//! Nothing in here renders or sleeps; pacing belongs to the host.

pub mod config;
pub mod report;
pub mod seed;
pub mod simulation;

pub use config::{parse_size, SimulationConfig};
pub use report::{RunStats, TickReport};
pub use seed::{draw_count, random_board};
pub use simulation::Simulation;
