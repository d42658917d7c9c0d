//! Renderer seam
//!
//! Drawing lives outside the engine. Each frame the driver hands the
//! renderer a read-only snapshot; what happens with it (canvas, terminal,
//! nothing at all) is the host's business.

use crate::entity::{Entity, WorldBounds};

/// Read-only view of one frame's worth of state.
///
/// Player velocity is reachable through the entity so renderers can show an
/// info readout next to the scene.
#[derive(Debug, Clone, Copy)]
pub struct Frame<'a> {
    /// The player rectangle
    pub player: &'a Entity,

    /// All enemy rectangles
    pub enemies: &'a [Entity],

    /// World bounds the frame was simulated in
    pub bounds: &'a WorldBounds,
}

/// Consumer of frame snapshots.
///
/// Implementations draw the frame however they like; there is no return
/// value and no error channel.
pub trait Renderer {
    /// Draw one frame.
    fn draw(&mut self, frame: &Frame);
}
