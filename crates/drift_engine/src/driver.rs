//! Animation driver
//!
//! Couples a [`Session`] to a [`Renderer`] and a time source. The host event
//! loop calls [`Driver::frame`] once per scheduled tick; each tick is
//! synchronous and atomic, and control returns to the host between frames.

use crate::foundation::time::Timer;
use crate::render::Renderer;
use crate::session::Session;
use rand::Rng;

/// How elapsed time per frame is obtained.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StepMode {
    /// Fixed step in seconds, regardless of wall time. The fixed-interval
    /// re-trigger variant of the demo.
    Fixed(f32),

    /// Measured wall-clock delta per frame. The frame-callback variant.
    Measured,
}

/// Drives a session: one `frame()` call per host tick.
pub struct Driver<G: Rng, R: Renderer> {
    session: Session<G>,
    renderer: R,
    timer: Timer,
    mode: StepMode,
}

impl<G: Rng, R: Renderer> Driver<G, R> {
    /// Create a driver around an existing session.
    pub fn new(session: Session<G>, mode: StepMode, renderer: R) -> Self {
        Self {
            session,
            renderer,
            timer: Timer::new(),
            mode,
        }
    }

    /// Run one tick: measure elapsed time, update entities, render.
    ///
    /// While paused this neither moves entities nor renders; the host may
    /// keep scheduling frames or stop, either works.
    pub fn frame(&mut self) {
        let dt = self.step();

        if !self.session.is_playing() {
            return;
        }

        self.session.tick(dt);
        self.renderer.draw(&self.session.snapshot());
    }

    /// Resume ticking. Restarts delta measurement so the paused wall time
    /// does not land in the first resumed frame.
    pub fn start(&mut self) {
        log::info!("animation started");
        self.timer.resume();
        self.session.start();
    }

    /// Pause ticking.
    pub fn stop(&mut self) {
        log::info!(
            "animation stopped after {} frames ({:.1} fps avg)",
            self.timer.frame_count(),
            self.timer.average_fps()
        );
        self.session.stop();
    }

    /// Re-spawn all entities and render once.
    ///
    /// Motion timing is untouched: a paused driver stays paused and does not
    /// resume from here.
    pub fn reset(&mut self) {
        log::info!("session reset");
        self.session.reset();
        self.renderer.draw(&self.session.snapshot());
    }

    /// The underlying session.
    pub fn session(&self) -> &Session<G> {
        &self.session
    }

    /// The renderer.
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    fn step(&mut self) -> f32 {
        match self.mode {
            StepMode::Fixed(step) => step,
            StepMode::Measured => {
                self.timer.update();
                self.timer.delta_time()
            }
        }
    }
}
