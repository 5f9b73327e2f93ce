mod frontend;
mod media;

use anyhow::{anyhow, Context};
use clap::Parser;
use frontend::RaylibFrontend;
use media::{Sounds, Sprites};
use raylib::core::audio::RaylibAudio;
use simulation::constants::TARGET_FPS;
use simulation::{preload, run, GameConfig, GameState};
use std::path::PathBuf;
use std::time::Duration;
use tracing::info;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "brick-breaker", about = "Break every block without dropping the ball")]
struct Args {
    /// Directory holding the `img/` and `sounds/` folders.
    #[arg(long, default_value = "assets")]
    assets: PathBuf,

    /// JSON file overriding the default tuning.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Seed for reproducible ball launches.
    #[arg(long)]
    seed: Option<u64>,

    /// Give up if the assets are not loaded within this many seconds.
    #[arg(long)]
    load_timeout_secs: Option<u64>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();

    let args = Args::parse();

    let config = match &args.config {
        Some(path) => GameConfig::load(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => GameConfig::default(),
    };

    let new_session = || match args.seed {
        Some(seed) => GameState::with_seed(&config, seed),
        None => GameState::new(&config),
    };

    let mut state = new_session();

    info!("Loading assets from {}...", args.assets.display());
    let assets = preload(&args.assets, args.load_timeout_secs.map(Duration::from_secs))
        .await
        .with_context(|| format!("failed to load assets from {}", args.assets.display()))?;

    let (mut handle, thread) = raylib::init()
        .size(config.world.width as i32, config.world.height as i32)
        .title("Brick Breaker")
        .vsync()
        .build();
    handle.set_target_fps(TARGET_FPS);

    let audio = RaylibAudio::init_audio_device()
        .map_err(|e| anyhow!("failed to initialise audio device: {e}"))?;

    let sprites = Sprites::decode(&mut handle, &thread, &assets)?;
    let sounds = Sounds::decode(&audio, &assets)?;
    let mut frontend = RaylibFrontend::new(handle, thread, sprites, sounds, config.world);

    state.start();

    while let Some(outcome) = run(&mut state, &mut frontend) {
        if !frontend.announce(outcome, state.score()) {
            break;
        }

        state = new_session();
        state.start();
    }

    info!("Window closed, exiting.");
    Ok(())
}

fn init_logging() {
    let env_filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_target(true)
        .with_level(true)
        .with_env_filter(env_filter)
        .init();
}
