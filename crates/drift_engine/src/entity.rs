//! Entity model: moving rectangles and the world they drift in
//!
//! Player and enemy share one plain record; the session tells them apart by
//! where it stores them, not by type.

use crate::foundation::math::Vec2;
use serde::{Deserialize, Serialize};

/// A moving rectangle with a display color.
#[derive(Debug, Clone, PartialEq)]
pub struct Entity {
    /// Top-left corner position in world units
    pub position: Vec2,

    /// Width and height, positive
    pub size: Vec2,

    /// Velocity in world units per second, signed per axis
    pub velocity: Vec2,

    /// Display color as a hex string, e.g. `"#EFC9FF"`
    pub color: String,
}

impl Entity {
    /// Create a new entity
    pub fn new(position: Vec2, size: Vec2, velocity: Vec2, color: impl Into<String>) -> Self {
        Self {
            position,
            size,
            velocity,
            color: color.into(),
        }
    }
}

/// Fixed world bounds for a session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorldBounds {
    /// World width in world units
    pub width: f32,

    /// World height in world units
    pub height: f32,

    /// Inner border margin kept clear when spawning
    pub border: f32,
}

impl WorldBounds {
    /// Create new bounds with the given border margin
    pub fn new(width: f32, height: f32, border: f32) -> Self {
        Self {
            width,
            height,
            border,
        }
    }

    /// Center point of the world
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }
}

impl Default for WorldBounds {
    fn default() -> Self {
        Self::new(400.0, 400.0, 4.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_center() {
        let bounds = WorldBounds::new(400.0, 300.0, 4.0);
        assert_eq!(bounds.center(), Vec2::new(200.0, 150.0));
    }

    #[test]
    fn test_entity_creation() {
        let entity = Entity::new(
            Vec2::new(1.0, 2.0),
            Vec2::new(16.0, 16.0),
            Vec2::new(-50.0, 75.0),
            "#EFC9FF",
        );

        assert_eq!(entity.position, Vec2::new(1.0, 2.0));
        assert_eq!(entity.size, Vec2::new(16.0, 16.0));
        assert_eq!(entity.velocity, Vec2::new(-50.0, 75.0));
        assert_eq!(entity.color, "#EFC9FF");
    }
}
