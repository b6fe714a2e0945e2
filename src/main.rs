//! Stick Bridge entry point
//!
//! Headless runner: plays a seeded game with the autopilot at a simulated
//! 60 Hz and logs what happens.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use env_logger::{Builder, Env};
use log::LevelFilter;

use stick_bridge::audio::LogAudio;
use stick_bridge::autopilot::Autopilot;
use stick_bridge::consts::TICK_DT;
use stick_bridge::sim::{GameEvent, GameState};
use stick_bridge::{Driver, GameConfig, Presenter};

#[derive(Debug, Parser)]
#[command(
    name = "stick-bridge",
    version,
    about = "Headless Stick Bridge runner played by the autopilot"
)]
struct Cli {
    #[arg(long, help = "Run seed (random when omitted)")]
    seed: Option<u64>,
    #[arg(long, default_value_t = 36_000, help = "Stop after this many frames")]
    frames: u64,
    #[arg(long, help = "Path to a JSON game config")]
    config: Option<PathBuf>,
    #[arg(
        long,
        default_value_t = 0.3,
        help = "Autopilot aim error as a fraction of platform width"
    )]
    aim_error: f32,
    #[arg(long, help = "Print the final game state as JSON")]
    dump_state: bool,
    #[arg(short, long, help = "Enable debug logging")]
    verbose: bool,
}

/// Stands in for the screen: logs progress instead of drawing
#[derive(Default)]
struct LogPresenter {
    frames: u64,
}

impl Presenter for LogPresenter {
    fn present(&mut self, state: &GameState) {
        self.frames += 1;
        if self.frames % 600 == 0 {
            log::debug!(
                "Frame {}: {} at x={:.1}, score {}",
                self.frames,
                state.phase.name(),
                state.player.pos.x,
                state.score
            );
        }
    }

    fn on_event(&mut self, event: &GameEvent) {
        match event {
            GameEvent::ScoreChanged { score } => log::info!("Score: {score}"),
            GameEvent::GameOver { score } => log::info!("Game over! Final score: {score}"),
            other => log::trace!("{other:?}"),
        }
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    let env = Env::default().default_filter_or(level.to_string());
    Builder::from_env(env).init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = match &cli.config {
        Some(path) => GameConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => GameConfig::default(),
    };
    let seed = cli.seed.unwrap_or_else(rand::random);
    log::info!("Stick Bridge (headless) starting with seed {seed}");

    let mut driver = Driver::new(config, LogPresenter::default(), LogAudio);
    let mut pilot = Autopilot::new(seed, cli.aim_error);
    driver.start(seed);

    let mut frames = 0;
    while frames < cli.frames {
        pilot.apply(&mut driver);
        if !driver.frame(TICK_DT) {
            break;
        }
        frames += 1;
    }
    if driver.is_running() {
        log::info!("Frame limit of {} reached", cli.frames);
        driver.stop();
    }

    let state = driver.state();
    log::info!(
        "Finished after {} ticks: score {}, {} platforms generated",
        state.ticks,
        state.score,
        state.platforms.len()
    );

    if cli.dump_state {
        println!("{}", serde_json::to_string_pretty(state)?);
    }
    Ok(())
}
