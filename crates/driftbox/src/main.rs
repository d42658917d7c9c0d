//! Driftbox demo
//!
//! Runs the drift animation against the terminal renderer for a fixed frame
//! budget, pausing, resetting, and resuming once along the way to exercise
//! the whole control surface.

mod renderer;

use drift_engine::prelude::*;
use renderer::AsciiRenderer;
use std::thread;
use std::time::Duration;

const CONFIG_PATH: &str = "driftbox.toml";
const FRAME_INTERVAL: Duration = Duration::from_millis(33);

fn frame_budget() -> u32 {
    std::env::var("DRIFTBOX_FRAMES")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(120)
}

fn step_mode() -> StepMode {
    if std::env::args().any(|arg| arg == "--fixed") {
        StepMode::Fixed(FRAME_INTERVAL.as_secs_f32())
    } else {
        StepMode::Measured
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    drift_engine::foundation::logging::init();

    let config = SessionConfig::load_or_default(CONFIG_PATH)?;
    let mode = step_mode();
    let frames = frame_budget();
    log::info!(
        "driftbox: {}x{} world, {} enemies, {frames} frames, {mode:?}",
        config.world.width,
        config.world.height,
        config.enemy_count
    );

    let session = Session::new(config, rand::thread_rng());
    let renderer = AsciiRenderer::new(std::io::stdout().lock(), 80, 24);
    let mut driver = Driver::new(session, mode, renderer);

    for frame in 0..frames {
        driver.frame();
        thread::sleep(FRAME_INTERVAL);

        // Halfway through: pause, re-spawn everything, resume.
        if frame == frames / 2 {
            driver.stop();
            driver.reset();
            driver.start();
        }
    }
    driver.stop();

    Ok(())
}
