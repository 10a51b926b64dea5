//! Stagnation detector parameters.

use serde::{Deserialize, Serialize};

/// Stagnation detector parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StagnationConfig {
    /// Matching observations needed before the run is declared stuck (default: 14).
    pub repetitions: u32,

    /// Longest cycle period the detector is meant to catch (default: 4).
    /// The detection window is `repetitions * pattern_length` ticks.
    pub pattern_length: u32,

    /// Seed for the reset jitter. `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl Default for StagnationConfig {
    fn default() -> Self {
        Self {
            repetitions: 14,
            pattern_length: 4,
            seed: None,
        }
    }
}

impl StagnationConfig {
    /// Ticks after which the baseline is refreshed even without a match.
    ///
    /// Saturates one below `i64::MAX` so the detector's first increment
    /// still lands past the window.
    #[must_use]
    pub fn window(&self) -> i64 {
        i64::from(self.repetitions)
            .saturating_mul(i64::from(self.pattern_length))
            .min(i64::MAX - 1)
    }

    pub fn with_repetitions(mut self, repetitions: u32) -> Self {
        self.repetitions = repetitions;
        self
    }

    pub fn with_pattern_length(mut self, pattern_length: u32) -> Self {
        self.pattern_length = pattern_length;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}
