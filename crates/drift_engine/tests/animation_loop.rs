//! End-to-end loop behavior through the public API.

use drift_engine::prelude::*;
use rand::rngs::SmallRng;
use rand::SeedableRng;

struct RecordingRenderer {
    frames: usize,
}

impl Renderer for RecordingRenderer {
    fn draw(&mut self, _frame: &Frame) {
        self.frames += 1;
    }
}

fn new_driver(seed: u64) -> Driver<SmallRng, RecordingRenderer> {
    let session = Session::new(SessionConfig::default(), SmallRng::seed_from_u64(seed));
    Driver::new(
        session,
        StepMode::Fixed(1.0 / 30.0),
        RecordingRenderer { frames: 0 },
    )
}

#[test]
fn entities_stay_in_wrap_range_over_long_run() {
    let mut driver = new_driver(11);
    let bounds = driver.session().config().world.clone();

    for _ in 0..5_000 {
        driver.frame();

        let all = std::iter::once(driver.session().player()).chain(driver.session().enemies());
        for entity in all {
            assert!(entity.position.x >= -entity.size.x && entity.position.x <= bounds.width);
            assert!(entity.position.y >= -entity.size.y && entity.position.y <= bounds.height);
        }
    }
}

#[test]
fn stop_reset_start_cycle_matches_control_surface() {
    let mut driver = new_driver(23);

    driver.frame();
    driver.stop();
    driver.frame();
    let frames_while_paused = driver.renderer().frames;

    driver.reset();
    assert_eq!(driver.renderer().frames, frames_while_paused + 1);
    assert!(!driver.session().is_playing());

    driver.start();
    driver.frame();
    assert!(driver.session().is_playing());
    assert_eq!(driver.renderer().frames, frames_while_paused + 2);
}

#[test]
fn enemies_spawn_outside_safety_zone_every_reset() {
    let mut driver = new_driver(37);
    let center = driver.session().config().world.center();
    let zone = driver.session().config().player.safety_zone;

    for _ in 0..50 {
        driver.reset();

        for enemy in driver.session().enemies() {
            let inside_x = enemy.position.x >= center.x - zone.0 && enemy.position.x < center.x + zone.0;
            let inside_y = enemy.position.y >= center.y - zone.1 && enemy.position.y < center.y + zone.1;
            assert!(!(inside_x && inside_y), "enemy spawned inside safety zone");
        }
    }
}
