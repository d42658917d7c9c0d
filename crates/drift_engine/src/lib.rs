//! # Drift Engine
//!
//! A minimal real-time animation core: a player rectangle and a set of enemy
//! rectangles drift inside fixed world bounds, wrapping around the edges.
//!
//! The crate owns the per-frame logic only. Drawing and timing stay outside:
//! a [`render::Renderer`] consumes read-only frame snapshots, and the host
//! loop supplies elapsed time through the [`driver::Driver`].
//!
//! ## Quick Start
//!
//! ```rust
//! use drift_engine::prelude::*;
//! use rand::SeedableRng;
//! use rand::rngs::SmallRng;
//!
//! struct NullRenderer;
//!
//! impl Renderer for NullRenderer {
//!     fn draw(&mut self, _frame: &Frame) {}
//! }
//!
//! let config = SessionConfig::default();
//! let rng = SmallRng::seed_from_u64(7);
//! let session = Session::new(config, rng);
//! let mut driver = Driver::new(session, StepMode::Fixed(1.0 / 30.0), NullRenderer);
//! driver.frame();
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names)]

pub mod config;
pub mod driver;
pub mod entity;
pub mod foundation;
pub mod motion;
pub mod render;
pub mod session;
pub mod spawn;

/// Common imports for engine users
pub mod prelude {
    pub use crate::{
        config::{Config, ConfigError},
        driver::{Driver, StepMode},
        entity::{Entity, WorldBounds},
        foundation::{math::Vec2, time::Timer},
        render::{Frame, Renderer},
        session::{Session, SessionConfig},
    };
}
