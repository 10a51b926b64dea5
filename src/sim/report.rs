//! Per-tick reports and run statistics.

use serde::{Deserialize, Serialize};

/// What happened during one tick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickReport {
    /// Generation number after this tick (first tick is 1).
    pub generation: u64,

    /// Live cells after the tick, including any reseeded ones.
    pub population: usize,

    /// Cells that came alive through the rule.
    pub births: usize,

    /// Cells that died through the rule.
    pub deaths: usize,

    /// Whether stagnation was declared and fresh cells merged in.
    pub reseeded: bool,
}

/// Statistics accumulated over a run.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunStats {
    /// Ticks recorded.
    pub ticks: u64,

    /// Reseeds triggered by stagnation.
    pub reseeds: u64,

    /// Total births through the rule.
    pub births: u64,

    /// Total deaths through the rule.
    pub deaths: u64,

    /// Highest population seen.
    pub peak_population: usize,

    /// Population after the last tick.
    pub final_population: usize,
}

impl RunStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one tick into the totals.
    pub fn record(&mut self, report: &TickReport) {
        self.ticks += 1;
        self.reseeds += u64::from(report.reseeded);
        self.births += report.births as u64;
        self.deaths += report.deaths as u64;
        self.peak_population = self.peak_population.max(report.population);
        self.final_population = report.population;
    }

    /// Average births per tick.
    #[must_use]
    pub fn births_per_tick(&self) -> f64 {
        if self.ticks == 0 {
            0.0
        } else {
            self.births as f64 / self.ticks as f64
        }
    }
}
