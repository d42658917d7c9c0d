//! Math utilities and types
//!
//! Provides the fundamental math types for 2D animation.

pub use nalgebra::Vector2;

/// 2D vector type
pub type Vec2 = Vector2<f32>;

/// Math utility functions
pub mod utils {
    use super::Vec2;

    /// Linear interpolation
    pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
        a + (b - a) * t
    }

    /// Check whether `point` lies inside the axis-aligned rectangle spanned
    /// by `min` (inclusive) and `max` (exclusive).
    pub fn rect_contains(min: Vec2, max: Vec2, point: Vec2) -> bool {
        point.x >= min.x && point.x < max.x && point.y >= min.y && point.y < max.y
    }
}
