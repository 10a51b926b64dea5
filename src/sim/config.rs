//! Simulation configuration.
//!
//! Resolved in order: defaults, then an optional JSON file, then
//! command-line flags. Screen dimensions normally come from the terminal.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::boundary::BoundaryKind;
use crate::error::ConfigError;
use crate::rules::NeighborMode;
use crate::stagnation::StagnationConfig;

/// Everything needed to build a [`Simulation`](super::Simulation).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Screen columns (default: 80).
    pub width: u32,

    /// Screen rows (default: 24).
    pub height: u32,

    /// Seed for random boards and detector jitter. `None` seeds from entropy.
    pub seed: Option<u64>,

    /// Random boards get `width * height / load_factor` cells.
    /// Smaller means more crowded (default: 9).
    pub load_factor: u32,

    /// Load factor for reseeding a stagnant board. `None` means three times
    /// `load_factor`, a nudge rather than a fresh start.
    pub nudge_load_factor: Option<u32>,

    /// Milliseconds per tick (default: 50).
    pub tick_ms: u64,

    /// Edge handling (default: clip).
    pub boundary: BoundaryKind,

    /// Whether the boundary applies to neighbor reads (default: placement only).
    pub neighbor_mode: NeighborMode,

    /// Stagnation detector parameters.
    pub stagnation: StagnationConfig,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            width: 80,
            height: 24,
            seed: None,
            load_factor: 9,
            nudge_load_factor: None,
            tick_ms: 50,
            boundary: BoundaryKind::Clip,
            neighbor_mode: NeighborMode::Placement,
            stagnation: StagnationConfig::default(),
        }
    }
}

impl SimulationConfig {
    /// Check values that would otherwise fail at first use.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.load_factor == 0 || self.nudge_load_factor == Some(0) {
            return Err(ConfigError::ZeroLoadFactor);
        }
        if self.boundary == BoundaryKind::Wrap && (self.width == 0 || self.height == 0) {
            return Err(ConfigError::ZeroWrap {
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }

    /// Load factor used when reseeding.
    #[must_use]
    pub fn nudge_factor(&self) -> u32 {
        self.nudge_load_factor
            .unwrap_or_else(|| self.load_factor.saturating_mul(3))
    }

    #[must_use]
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }

    #[must_use]
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    #[must_use]
    pub fn with_boundary(mut self, boundary: BoundaryKind) -> Self {
        self.boundary = boundary;
        self
    }

    #[must_use]
    pub fn with_neighbor_mode(mut self, mode: NeighborMode) -> Self {
        self.neighbor_mode = mode;
        self
    }

    #[must_use]
    pub fn with_load_factor(mut self, load_factor: u32) -> Self {
        self.load_factor = load_factor;
        self
    }

    #[must_use]
    pub fn with_nudge_load_factor(mut self, nudge_load_factor: u32) -> Self {
        self.nudge_load_factor = Some(nudge_load_factor);
        self
    }

    #[must_use]
    pub fn with_tick_ms(mut self, tick_ms: u64) -> Self {
        self.tick_ms = tick_ms;
        self
    }

    #[must_use]
    pub fn with_stagnation(mut self, stagnation: StagnationConfig) -> Self {
        self.stagnation = stagnation;
        self
    }
}

/// Parse a `WIDTHxHEIGHT` size such as `120x40`.
pub fn parse_size(text: &str) -> Result<(u32, u32), ConfigError> {
    let invalid = || ConfigError::InvalidSize(text.to_string());
    let (w, h) = text
        .trim()
        .split_once(|c: char| c == 'x' || c == 'X')
        .ok_or_else(invalid)?;
    let width = w.trim().parse().map_err(|_| invalid())?;
    let height = h.trim().parse().map_err(|_| invalid())?;
    Ok((width, height))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SimulationConfig::default();
        assert_eq!((config.width, config.height), (80, 24));
        assert_eq!(config.load_factor, 9);
        assert_eq!(config.tick_interval(), Duration::from_millis(50));
        assert_eq!(config.boundary, BoundaryKind::Clip);
        assert_eq!(config.neighbor_mode, NeighborMode::Placement);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = SimulationConfig::default()
            .with_size(120, 40)
            .with_seed(7)
            .with_boundary(BoundaryKind::Wrap)
            .with_neighbor_mode(NeighborMode::BoundaryReads)
            .with_tick_ms(16);

        assert_eq!((config.width, config.height), (120, 40));
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.boundary, BoundaryKind::Wrap);
        assert_eq!(config.tick_ms, 16);
    }

    #[test]
    fn test_nudge_factor_follows_load_factor() {
        assert_eq!(SimulationConfig::default().nudge_factor(), 27);
        assert_eq!(SimulationConfig::default().with_load_factor(4).nudge_factor(), 12);
        assert_eq!(
            SimulationConfig::default()
                .with_load_factor(4)
                .with_nudge_load_factor(5)
                .nudge_factor(),
            5
        );
        assert_eq!(
            SimulationConfig::default().with_load_factor(u32::MAX).nudge_factor(),
            u32::MAX
        );

        let config: SimulationConfig = serde_json::from_str(r#"{"load_factor": 2}"#).unwrap();
        assert_eq!(config.nudge_load_factor, None);
        assert_eq!(config.nudge_factor(), 6);
    }

    #[test]
    fn test_validate() {
        assert_eq!(
            SimulationConfig::default().with_load_factor(0).validate(),
            Err(ConfigError::ZeroLoadFactor)
        );
        assert_eq!(
            SimulationConfig::default()
                .with_boundary(BoundaryKind::Wrap)
                .with_size(0, 10)
                .validate(),
            Err(ConfigError::ZeroWrap { width: 0, height: 10 })
        );
        assert_eq!(
            SimulationConfig::default().with_nudge_load_factor(0).validate(),
            Err(ConfigError::ZeroLoadFactor)
        );
        assert!(SimulationConfig::default().with_size(0, 0).validate().is_ok());
    }

    #[test]
    fn test_serialization() {
        let config = SimulationConfig::default()
            .with_seed(99)
            .with_boundary(BoundaryKind::Identity);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: SimulationConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: SimulationConfig = serde_json::from_str(
            r#"{"boundary": "wrap", "neighbor_mode": "boundary-reads", "stagnation": {"repetitions": 5}}"#,
        )
        .unwrap();
        assert_eq!(config.boundary, BoundaryKind::Wrap);
        assert_eq!(config.neighbor_mode, NeighborMode::BoundaryReads);
        assert_eq!(config.stagnation.repetitions, 5);
        assert_eq!(config.stagnation.pattern_length, 4);
        assert_eq!(config.width, 80);
    }

    #[test]
    fn test_parse_size() {
        assert_eq!(parse_size("120x40"), Ok((120, 40)));
        assert_eq!(parse_size(" 8X3 "), Ok((8, 3)));
        assert_eq!(
            parse_size("120"),
            Err(ConfigError::InvalidSize("120".to_string()))
        );
        assert!(parse_size("ax3").is_err());
        assert!(parse_size("-1x3").is_err());
    }
}
