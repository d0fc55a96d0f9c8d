use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};
use x2048::config::AppConfig;
use x2048::modes::{PlayMode, SimulateMode};

#[derive(Parser)]
#[command(name = "x2048")]
#[command(version, about = "2048 tile merging game")]
struct Cli {
    /// Game mode
    #[arg(long, default_value = "play")]
    mode: Mode,

    /// JSON configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Seed for tile spawns (random when omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Tiles placed on the board when a game starts
    #[arg(long)]
    initial_tiles: Option<usize>,

    /// Frames per second in play mode
    #[arg(long)]
    fps: Option<u32>,

    /// Move limit in simulate mode
    #[arg(long)]
    max_moves: Option<u32>,

    /// Tracing filter, e.g. "info", "debug"
    #[arg(long, default_value = "info")]
    log: String,

    /// Write logs to this file
    #[arg(long)]
    log_file: Option<PathBuf>,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Mode {
    /// Play with keyboard controls
    Play,
    /// Play random moves headless and print the final board
    Simulate,
}

impl Cli {
    /// Configuration file values with command line overrides applied
    fn app_config(&self) -> Result<AppConfig> {
        let mut config = match &self.config {
            Some(path) => AppConfig::load(path)?,
            None => AppConfig::default(),
        };

        if let Some(seed) = self.seed {
            config.game.seed = Some(seed);
        }
        if let Some(initial_tiles) = self.initial_tiles {
            config.game.initial_tiles = initial_tiles;
        }
        if let Some(fps) = self.fps {
            config.play.frame_rate_hz = fps;
        }
        if let Some(max_moves) = self.max_moves {
            config.simulate.max_moves = max_moves;
        }

        config.validate()?;
        Ok(config)
    }
}

/// Install the tracing subscriber
///
/// Play mode owns the terminal, so without a log file its events are dropped.
fn init_tracing(filter: &str, log_file: Option<&Path>, mode: Mode) -> Result<()> {
    let registry = tracing_subscriber::registry().with(EnvFilter::new(filter));

    match log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create log file {:?}", path))?;
            registry
                .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
                .init();
        }
        None if mode == Mode::Simulate => {
            registry.with(fmt::layer().with_writer(std::io::stderr)).init();
        }
        None => {}
    }

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(&cli.log, cli.log_file.as_deref(), cli.mode)?;

    let config = cli.app_config()?;

    // Dispatch to appropriate mode
    match cli.mode {
        Mode::Play => {
            let mut play_mode = PlayMode::new(config.game, config.play);
            play_mode.run().await?;
        }
        Mode::Simulate => {
            let mut simulate_mode = SimulateMode::new(config.game, config.simulate);
            let summary = simulate_mode.run();
            print!("{summary}");
        }
    }

    Ok(())
}
