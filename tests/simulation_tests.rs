//! Simulation driver integration tests.

use conway_life::core::Coordinate;
use conway_life::{
    BoundaryKind, ConfigError, NeighborMode, Pattern, RunStats, Simulation, SimulationConfig,
    StagnationConfig,
};

fn seeded(seed: u64) -> SimulationConfig {
    SimulationConfig::default().with_size(40, 20).with_seed(seed)
}

// =============================================================================
// Construction Tests
// =============================================================================

#[test]
fn test_pattern_simulation_is_centered() {
    let glider = Pattern::builtin("glider").unwrap();
    let sim = Simulation::with_pattern(seeded(1), &glider).unwrap();

    assert_eq!(sim.board().len(), 5);
    let (lo, hi) = sim.board().bounds().unwrap();
    assert_eq!(lo, Coordinate::new(18, 8));
    assert_eq!(hi, Coordinate::new(20, 10));
}

#[test]
fn test_zero_sized_wrap_is_rejected() {
    let config = seeded(1).with_size(0, 10).with_boundary(BoundaryKind::Wrap);
    let err = Simulation::random(config).unwrap_err();

    assert_eq!(err, ConfigError::ZeroWrap { width: 0, height: 10 });
}

#[test]
fn test_zero_load_factor_is_rejected() {
    let config = seeded(1).with_load_factor(0);
    assert_eq!(
        Simulation::random(config).unwrap_err(),
        ConfigError::ZeroLoadFactor
    );
}

// =============================================================================
// Tick Tests
// =============================================================================

#[test]
fn test_blinker_reports_births_and_deaths() {
    let blinker = Pattern::builtin("blinker").unwrap();
    let mut sim = Simulation::with_pattern(seeded(3), &blinker).unwrap();

    let report = sim.tick();

    assert_eq!(report.births, 2);
    assert_eq!(report.deaths, 2);
    assert_eq!(report.population, 3);
    assert!(!report.reseeded);
}

#[test]
fn test_stagnant_block_is_reseeded() {
    let block = Pattern::builtin("block").unwrap();
    let mut sim = Simulation::with_pattern(seeded(4), &block).unwrap();
    let repetitions = sim.config().stagnation.repetitions;

    // One tick for the baseline, then `repetitions` matches.
    for _ in 0..=repetitions {
        let report = sim.tick();
        assert!(!report.reseeded);
        assert_eq!(report.population, 4);
    }

    let report = sim.tick();
    assert!(report.reseeded);
    assert!(report.population > 4);
    assert_eq!(report.population, sim.board().len());
}

#[test]
fn test_reseed_keeps_existing_cells_alive() {
    let block = Pattern::builtin("block").unwrap();
    let mut sim = Simulation::with_pattern(seeded(5), &block).unwrap();
    let before = sim.board().clone();

    let added = sim.reseed();

    assert_eq!(sim.board().len(), before.len() + added);
    assert!(before.coordinates().all(|c| sim.board().is_alive(c)));
}

#[test]
fn test_reseed_uses_nudge_load_factor() {
    let sparse = seeded(5).with_nudge_load_factor(1_000);
    let dense = seeded(5).with_nudge_load_factor(1);

    let mut few = Simulation::new(sparse, conway_life::Board::new()).unwrap();
    let mut many = Simulation::new(dense, conway_life::Board::new()).unwrap();

    // 39 * 19 / 1000 rounds down to nothing.
    assert_eq!(few.reseed(), 0);
    assert!(many.reseed() > 300);
}

#[test]
fn test_same_seed_reproduces_run() {
    let config = seeded(6).with_stagnation(StagnationConfig::default().with_repetitions(3));
    let mut a = Simulation::random(config.clone()).unwrap();
    let mut b = Simulation::random(config).unwrap();

    for _ in 0..60 {
        assert_eq!(a.tick(), b.tick());
    }
    assert_eq!(a.board(), b.board());
}

#[test]
fn test_clip_simulation_stays_on_screen() {
    let mut sim = Simulation::random(seeded(7)).unwrap();
    for _ in 0..40 {
        sim.tick();
    }
    for c in sim.board().coordinates() {
        assert!((0..40).contains(&c.x) && (0..20).contains(&c.y), "{c} off screen");
    }
}

#[test]
fn test_wrap_simulation_with_boundary_reads() {
    let config = seeded(8)
        .with_boundary(BoundaryKind::Wrap)
        .with_neighbor_mode(NeighborMode::BoundaryReads)
        .with_stagnation(StagnationConfig::default().with_repetitions(1_000));
    let glider = Pattern::builtin("glider").unwrap();
    let mut sim = Simulation::with_pattern(config, &glider).unwrap();

    // 20 rows: 80 ticks bring the glider back to its start row.
    let start = sim.board().clone();
    for _ in 0..80 {
        sim.tick();
    }
    let shift = start.translate(20, 20);
    let wrapped: Vec<_> = shift
        .coordinates()
        .map(|c| Coordinate::new(c.x.rem_euclid(40), c.y.rem_euclid(20)))
        .collect();
    assert_eq!(sim.board().len(), 5);
    for c in wrapped {
        assert!(sim.board().is_alive(c), "{c} missing");
    }
}

#[test]
fn test_resize_rebuilds_boundary() {
    let mut sim = Simulation::random(seeded(9)).unwrap();
    sim.resize(10, 5).unwrap();
    sim.tick();

    assert_eq!(sim.config().width, 10);
    for c in sim.board().coordinates() {
        assert!((0..10).contains(&c.x) && (0..5).contains(&c.y), "{c} off screen");
    }
}

#[test]
fn test_run_stats_accumulate() {
    let mut sim = Simulation::random(seeded(10)).unwrap();
    let mut stats = RunStats::new();
    for _ in 0..25 {
        stats.record(&sim.tick());
    }

    assert_eq!(stats.ticks, 25);
    assert_eq!(stats.final_population, sim.board().len());
    assert!(stats.peak_population >= stats.final_population);
}
