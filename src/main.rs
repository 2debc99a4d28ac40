//! Diamond Orbit entry point
//!
//! Without a window backend the native binary runs a headless session driven
//! by the autopilot and traces what it would draw.
//!
//! Usage: `diamond-orbit [settings.json]` (set `RUST_LOG=debug` for details)

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::{SystemTime, UNIX_EPOCH};

use diamond_orbit::platform::Autopilot;
use diamond_orbit::renderer::LogRenderer;
use diamond_orbit::{Game, GameError, Settings};

/// Frame budget for the autopilot when settings don't set one
const DEFAULT_DEMO_FRAMES: u64 = 10_000;

fn wall_clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs()
}

fn run() -> Result<(), GameError> {
    let path = std::env::args_os().nth(1).map(PathBuf::from);
    let settings = Settings::load(path.as_deref())?;
    let seed = settings.seed.unwrap_or_else(wall_clock_seed);

    log::info!(
        "{} ({}x{}) starting...",
        settings.window_title,
        settings.screen_width,
        settings.screen_height
    );

    let mut game = Game::new(&settings, seed)?;
    let mut pilot = Autopilot::new(&settings, settings.max_frames.unwrap_or(DEFAULT_DEMO_FRAMES));
    let mut renderer = LogRenderer::default();

    let frames = game.run(&mut pilot, &mut renderer)?;

    log::info!(
        "Session over after {frames} frames: score {} ({} draw calls)",
        game.state.score,
        renderer.draws
    );
    match serde_json::to_string(&game.state.draw_list()) {
        Ok(json) => log::debug!("Final draw list: {json}"),
        Err(e) => log::warn!("Could not serialize draw list: {e}"),
    }
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
