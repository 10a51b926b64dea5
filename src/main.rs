use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use conway_life::patterns::{catalog, Pattern};
use conway_life::sim::parse_size;
use conway_life::term::{
    headless_frames_from_env, run_headless, run_terminal, ColorSupport, Palette,
};
use conway_life::{BoundaryKind, NeighborMode, Simulation, SimulationConfig};
use tracing::info;

#[derive(Parser, Debug)]
#[command(
    name = "conway-life",
    version,
    about = "Conway's Game of Life in the terminal"
)]
struct Cli {
    /// JSON file with a SimulationConfig; flags override its values.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Seed for random boards and stagnation jitter.
    #[arg(long)]
    seed: Option<u64>,

    /// What happens at the screen edges.
    #[arg(long, value_enum)]
    boundary: Option<BoundaryArg>,

    /// Whether edge handling also applies when counting neighbors.
    #[arg(long, value_enum)]
    neighbor_mode: Option<NeighborModeArg>,

    /// Start from a built-in pattern instead of a random board.
    #[arg(long, conflicts_with = "pattern_file")]
    pattern: Option<String>,

    /// Start from a plaintext (.cells) pattern file.
    #[arg(long)]
    pattern_file: Option<PathBuf>,

    /// Random boards get width*height/LOAD_FACTOR cells; smaller is more crowded.
    #[arg(long)]
    load_factor: Option<u32>,

    /// Load factor for reseeding a stagnant board (default: 3 * load factor).
    #[arg(long)]
    nudge_load_factor: Option<u32>,

    /// Milliseconds per generation.
    #[arg(long)]
    tick_ms: Option<u64>,

    /// Matching populations needed to declare stagnation.
    #[arg(long)]
    repetitions: Option<u32>,

    /// Longest oscillator period stagnation detection aims at.
    #[arg(long)]
    pattern_length: Option<u32>,

    /// Run this many generations without a terminal, then exit
    /// (also read from CONWAY_HEADLESS_FRAMES).
    #[arg(long)]
    headless: Option<usize>,

    /// Board size for headless runs, e.g. 120x40.
    #[arg(long)]
    size: Option<String>,

    /// Cell colors; detected from the terminal by default.
    #[arg(long, value_enum, default_value_t = PaletteArg::Auto)]
    palette: PaletteArg,

    /// List built-in patterns and exit.
    #[arg(long)]
    list_patterns: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum BoundaryArg {
    Clip,
    Identity,
    Wrap,
}

impl From<BoundaryArg> for BoundaryKind {
    fn from(arg: BoundaryArg) -> Self {
        match arg {
            BoundaryArg::Clip => BoundaryKind::Clip,
            BoundaryArg::Identity => BoundaryKind::Identity,
            BoundaryArg::Wrap => BoundaryKind::Wrap,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum NeighborModeArg {
    Placement,
    BoundaryReads,
}

impl From<NeighborModeArg> for NeighborMode {
    fn from(arg: NeighborModeArg) -> Self {
        match arg {
            NeighborModeArg::Placement => NeighborMode::Placement,
            NeighborModeArg::BoundaryReads => NeighborMode::BoundaryReads,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum PaletteArg {
    Auto,
    Bright,
    Basic,
    Mono,
}

impl PaletteArg {
    fn palette(self) -> Palette {
        match self {
            PaletteArg::Auto => Palette::detect(),
            PaletteArg::Bright => Palette::for_support(ColorSupport::Bright),
            PaletteArg::Basic => Palette::for_support(ColorSupport::Basic),
            PaletteArg::Mono => Palette::for_support(ColorSupport::Monochrome),
        }
    }
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    if cli.list_patterns {
        for name in catalog::names() {
            println!("{name}");
        }
        return Ok(());
    }

    let headless = cli.headless.or_else(headless_frames_from_env);
    let mut config = load_config(&cli)?;
    if headless.is_none() {
        let (width, height) =
            crossterm::terminal::size().context("failed to read terminal size")?;
        config.width = u32::from(width);
        config.height = u32::from(height);
    }

    let mut sim = build_simulation(&cli, config)?;
    let palette = cli.palette.palette();
    info!(
        width = sim.config().width,
        height = sim.config().height,
        boundary = %sim.config().boundary,
        population = sim.board().len(),
        "starting simulation"
    );

    match headless {
        Some(frames) => {
            let stats = run_headless(&mut sim, &palette, frames)?;
            println!("{}", serde_json::to_string_pretty(&stats)?);
        }
        None => {
            run_terminal(&mut sim, &palette)?;
        }
    }
    Ok(())
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .try_init();
}

fn load_config(cli: &Cli) -> Result<SimulationConfig> {
    let mut config = match &cli.config {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .with_context(|| format!("failed to read config {}", path.display()))?;
            serde_json::from_str(&raw)
                .with_context(|| format!("failed to parse config {}", path.display()))?
        }
        None => SimulationConfig::default(),
    };

    if let Some(seed) = cli.seed {
        config.seed = Some(seed);
    }
    if let Some(boundary) = cli.boundary {
        config.boundary = boundary.into();
    }
    if let Some(mode) = cli.neighbor_mode {
        config.neighbor_mode = mode.into();
    }
    if let Some(load_factor) = cli.load_factor {
        config.load_factor = load_factor;
    }
    if let Some(nudge) = cli.nudge_load_factor {
        config.nudge_load_factor = Some(nudge);
    }
    if let Some(tick_ms) = cli.tick_ms {
        config.tick_ms = tick_ms;
    }
    if let Some(repetitions) = cli.repetitions {
        config.stagnation.repetitions = repetitions;
    }
    if let Some(pattern_length) = cli.pattern_length {
        config.stagnation.pattern_length = pattern_length;
    }
    if let Some(size) = &cli.size {
        let (width, height) = parse_size(size)?;
        config.width = width;
        config.height = height;
    }
    Ok(config)
}

fn build_simulation(cli: &Cli, config: SimulationConfig) -> Result<Simulation> {
    let pattern = match (&cli.pattern, &cli.pattern_file) {
        (Some(name), _) => Some(Pattern::builtin(name)?),
        (None, Some(path)) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("failed to read pattern {}", path.display()))?;
            let name = path
                .file_stem()
                .map_or_else(|| "pattern".to_string(), |s| s.to_string_lossy().into_owned());
            Some(Pattern::from_plaintext(name, &text)?)
        }
        (None, None) => None,
    };

    let sim = match pattern {
        Some(pattern) => Simulation::with_pattern(config, &pattern)?,
        None => Simulation::random(config)?,
    };
    Ok(sim)
}
