//! The tick driver: engine, detector and reseeding, without any I/O.

use tracing::{debug, trace};

use super::config::SimulationConfig;
use super::report::TickReport;
use super::seed::random_board;
use crate::boundary::Boundary;
use crate::core::{Board, LifeRng};
use crate::error::ConfigError;
use crate::patterns::Pattern;
use crate::rules::{LifeEngine, StepCounts};
use crate::stagnation::StagnationDetector;

/// A running Game of Life.
///
/// Owns the current board and the one before it. Each [`tick`](Self::tick)
/// replaces the board wholesale; the previous generation stays readable
/// for renderers that diff or clear.
#[derive(Clone, Debug)]
pub struct Simulation {
    config: SimulationConfig,
    boundary: Boundary,
    engine: LifeEngine,
    detector: StagnationDetector,
    rng: LifeRng,
    board: Board,
    previous: Board,
    generation: u64,
}

impl Simulation {
    /// Start from the given board.
    pub fn new(config: SimulationConfig, board: Board) -> Result<Self, ConfigError> {
        config.validate()?;
        let boundary = Boundary::resolve(config.boundary, config.width, config.height)?;

        let root = config.seed.map_or_else(LifeRng::from_entropy, LifeRng::new);
        let jitter = match config.stagnation.seed {
            Some(seed) => LifeRng::new(seed).for_context("stagnation"),
            None => root.for_context("stagnation"),
        };

        Ok(Self {
            engine: LifeEngine::new(config.neighbor_mode),
            detector: StagnationDetector::with_rng(config.stagnation.clone(), jitter),
            rng: root.for_context("seeding"),
            boundary,
            previous: board.clone(),
            board,
            generation: 0,
            config,
        })
    }

    /// Start from a random board filling the screen.
    pub fn random(config: SimulationConfig) -> Result<Self, ConfigError> {
        let mut sim = Self::new(config, Board::new())?;
        let mut rng = sim.rng.fork();
        sim.board = sim.fresh_cells(sim.config.load_factor, &mut rng);
        sim.previous = sim.board.clone();
        Ok(sim)
    }

    /// Start from a pattern centered on the screen.
    pub fn with_pattern(config: SimulationConfig, pattern: &Pattern) -> Result<Self, ConfigError> {
        let board = pattern.centered(config.width, config.height);
        Self::new(config, board)
    }

    /// Advance one generation.
    ///
    /// If the detector declares stagnation, a sparse scatter of random
    /// cells is dropped onto the new board before returning.
    pub fn tick(&mut self) -> TickReport {
        let next = self.engine.advance(&self.board, &self.boundary);
        let counts = StepCounts::between(&self.board, &next);
        self.previous = std::mem::replace(&mut self.board, next);
        self.generation += 1;

        let reseeded = self.detector.observe(&self.board);
        if reseeded {
            self.reseed();
        }

        let report = TickReport {
            generation: self.generation,
            population: self.board.len(),
            births: counts.births,
            deaths: counts.deaths,
            reseeded,
        };
        trace!(
            generation = report.generation,
            population = report.population,
            births = report.births,
            deaths = report.deaths,
            "tick"
        );
        report
    }

    /// Nudge the board with random cells drawn at the nudge load factor.
    ///
    /// Drawn cells that were already alive are reset to `Stable`. Returns
    /// how many cells came alive.
    pub fn reseed(&mut self) -> usize {
        let mut branch = self.rng.fork();
        let fresh = self.fresh_cells(self.config.nudge_factor(), &mut branch);
        let before = self.board.len();
        self.board = fresh.merge(&self.board);
        let added = self.board.len() - before;
        debug!(
            generation = self.generation,
            added,
            population = self.board.len(),
            "reseeded board"
        );
        added
    }

    /// Adopt a new screen size; the boundary is rebuilt for it.
    pub fn resize(&mut self, width: u32, height: u32) -> Result<(), ConfigError> {
        self.boundary = Boundary::resolve(self.config.boundary, width, height)?;
        self.config.width = width;
        self.config.height = height;
        debug!(width, height, boundary = %self.config.boundary, "resized");
        Ok(())
    }

    fn fresh_cells(&self, load_factor: u32, rng: &mut LifeRng) -> Board {
        random_board(
            self.config.width.saturating_sub(1),
            self.config.height.saturating_sub(1),
            load_factor,
            rng,
        )
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The generation before the current one.
    #[must_use]
    pub fn previous(&self) -> &Board {
        &self.previous
    }

    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    #[must_use]
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    #[must_use]
    pub fn boundary(&self) -> &Boundary {
        &self.boundary
    }

    #[must_use]
    pub fn detector(&self) -> &StagnationDetector {
        &self.detector
    }
}
