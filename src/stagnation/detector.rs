//! Population-size cycle heuristic.
//!
//! ## How it works
//!
//! At each reset the detector records the live-cell count as a baseline.
//! Every later observation whose count equals the baseline bumps a match
//! counter; more than `repetitions` matches means the board is probably a
//! still life or a short-period oscillator. Independently, the baseline is
//! refreshed every `repetitions * pattern_length` ticks so that a slowly
//! drifting population does not accumulate stale matches.
//!
//! Only the population *size* is compared: O(1) and allocation-free per
//! tick. A field of gliders holding a constant count is a false positive;
//! an oscillator whose count varies outside the window is a false negative.
//!
//! Resets start `iteration` at a random value in `[-2, 0]` so that
//! windows of separate runs do not line up.

use tracing::debug;

use super::config::StagnationConfig;
use crate::core::{Board, LifeRng};

/// Flags a simulation that has settled into a repeating pattern.
#[derive(Clone, Debug)]
pub struct StagnationDetector {
    config: StagnationConfig,
    rng: LifeRng,
    /// Ticks since the last reset (may start negative).
    iteration: i64,
    /// Live-cell count recorded at the last reset.
    num: usize,
    /// Observations since the last reset that matched `num`.
    times: u32,
    /// Resets performed, boredom or window expiry alike.
    resets: u64,
}

impl StagnationDetector {
    /// Create a detector whose first observation establishes the baseline.
    #[must_use]
    pub fn new(config: StagnationConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => LifeRng::new(seed).for_context("stagnation"),
            None => LifeRng::from_entropy(),
        };
        Self::with_rng(config, rng)
    }

    /// Create a detector drawing its jitter from `rng`.
    #[must_use]
    pub fn with_rng(config: StagnationConfig, rng: LifeRng) -> Self {
        let iteration = config.window();
        Self {
            config,
            rng,
            iteration,
            num: 0,
            times: 0,
            resets: 0,
        }
    }

    /// Observe a board. Returns `true` if the run should be disturbed now.
    pub fn observe(&mut self, board: &Board) -> bool {
        self.observe_population(board.len())
    }

    /// Observe a bare live-cell count.
    pub fn observe_population(&mut self, population: usize) -> bool {
        self.iteration = self.iteration.saturating_add(1);
        if population == self.num {
            self.times = self.times.saturating_add(1);
        }

        let is_bored = self.times > self.config.repetitions;
        if self.iteration > self.config.window() || is_bored {
            self.reset(population);
        }
        if is_bored {
            debug!(population, resets = self.resets, "stagnation detected");
        }
        is_bored
    }

    fn reset(&mut self, population: usize) {
        self.iteration = self.rng.gen_range_inclusive(-2..=0);
        self.num = population;
        self.times = 0;
        self.resets += 1;
    }

    #[must_use]
    pub fn config(&self) -> &StagnationConfig {
        &self.config
    }

    #[must_use]
    pub fn iteration(&self) -> i64 {
        self.iteration
    }

    /// Baseline live-cell count.
    #[must_use]
    pub fn num(&self) -> usize {
        self.num
    }

    #[must_use]
    pub fn times(&self) -> u32 {
        self.times
    }

    #[must_use]
    pub fn resets(&self) -> u64 {
        self.resets
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detector(repetitions: u32, pattern_length: u32) -> StagnationDetector {
        StagnationDetector::new(
            StagnationConfig::default()
                .with_repetitions(repetitions)
                .with_pattern_length(pattern_length)
                .with_seed(42),
        )
    }

    #[test]
    fn test_first_observation_sets_baseline() {
        let mut d = detector(14, 4);
        assert_eq!(d.iteration(), 56);

        assert!(!d.observe_population(37));
        assert_eq!(d.num(), 37);
        assert_eq!(d.times(), 0);
        assert_eq!(d.resets(), 1);
        assert!((-2..=0).contains(&d.iteration()));
    }

    #[test]
    fn test_constant_population_declares_boredom() {
        let mut d = detector(14, 4);
        d.observe_population(10);

        for _ in 0..14 {
            assert!(!d.observe_population(10));
        }
        assert_eq!(d.times(), 14);
        assert!(d.observe_population(10));

        // Reset happened in the same call
        assert_eq!(d.times(), 0);
        assert_eq!(d.num(), 10);
        assert!((-2..=0).contains(&d.iteration()));
    }

    #[test]
    fn test_non_matching_population_does_not_count() {
        let mut d = detector(2, 100);
        d.observe_population(5);
        d.observe_population(6);
        d.observe_population(5);
        assert_eq!(d.times(), 1);
    }

    #[test]
    fn test_window_expiry_refreshes_baseline() {
        let mut d = detector(3, 2);
        d.observe_population(1);
        let resets = d.resets();

        // Strictly growing population never matches; the window forces a reset.
        let mut population = 2;
        while d.resets() == resets {
            assert!(!d.observe_population(population));
            population += 1;
        }
        assert_eq!(d.num(), population - 1);
        assert!((-2..=0).contains(&d.iteration()));
    }

    #[test]
    fn test_huge_parameters_do_not_overflow() {
        let mut d = detector(u32::MAX, u32::MAX);
        assert_eq!(d.iteration(), i64::MAX - 1);

        // First call still takes the baseline.
        assert!(!d.observe_population(3));
        assert_eq!(d.resets(), 1);
        assert_eq!(d.num(), 3);
        for _ in 0..100 {
            assert!(!d.observe_population(3));
        }
        assert_eq!(d.times(), 100);
        assert_eq!(d.resets(), 1);
    }

    #[test]
    fn test_empty_board_is_boring() {
        let mut d = detector(2, 4);
        let empty = Board::new();
        // Baseline of 0 already matches the initial `num`.
        let results: Vec<bool> = (0..5).map(|_| d.observe(&empty)).collect();
        assert_eq!(results, vec![false, false, false, true, false]);
    }
}
