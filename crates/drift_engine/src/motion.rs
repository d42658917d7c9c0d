//! Per-frame motion step
//!
//! Advances an entity by its velocity scaled with elapsed time, then applies
//! the move-through edge wrap: an entity that has fully left one edge while
//! still heading outward reappears at the opposite edge. Teleport, not
//! bounce.

use crate::entity::{Entity, WorldBounds};

/// Advance `entity` by `dt` seconds and wrap it at the world edges.
///
/// Total function over mutable state; valid for any `dt >= 0`.
pub fn advance(entity: &mut Entity, dt: f32, bounds: &WorldBounds) {
    entity.position += entity.velocity * dt;
    wrap(entity, bounds);
}

/// Apply the edge-wrap policy to an already-moved entity.
///
/// The velocity sign check keeps an entity that is outside but heading back
/// inward untouched, matching the move-through border rule.
pub fn wrap(entity: &mut Entity, bounds: &WorldBounds) {
    // right
    if entity.position.x > bounds.width && entity.velocity.x > 0.0 {
        entity.position.x = -entity.size.x;
    }

    // left
    if entity.position.x < -entity.size.x && entity.velocity.x < 0.0 {
        entity.position.x = bounds.width;
    }

    // bottom
    if entity.position.y > bounds.height && entity.velocity.y > 0.0 {
        entity.position.y = -entity.size.y;
    }

    // top
    if entity.position.y < -entity.size.y && entity.velocity.y < 0.0 {
        entity.position.y = bounds.height;
    }
}
