//! Randomized spawn attributes
//!
//! Produces initial positions, sizes, and velocities for entities. All
//! functions are generic over [`rand::Rng`] so sessions can run on a seeded
//! generator for reproducibility.
//!
//! Positions assume valid world bounds: the quadrant sub-rectangles must be
//! non-empty for the requested entity size and safety zone (the defaults
//! are, comfortably).

use crate::entity::WorldBounds;
use crate::foundation::math::Vec2;
use rand::Rng;

/// A random velocity: each component's magnitude is drawn uniformly from
/// `[min, max)` with an independent 50/50 sign per axis.
pub fn random_speed<R: Rng>(rng: &mut R, min: f32, max: f32) -> Vec2 {
    Vec2::new(random_signed(rng, min, max), random_signed(rng, min, max))
}

/// A random enemy size: `randint(min, max) * factor` per axis,
/// independently.
pub fn random_enemy_size<R: Rng>(rng: &mut R, min: f32, max: f32, factor: f32) -> Vec2 {
    Vec2::new(
        random_int(rng, min, max) * factor,
        random_int(rng, min, max) * factor,
    )
}

/// A quadrant-avoiding spawn position for a box of `size`.
///
/// Independently picks the left/right half and the top/bottom half (50/50
/// each), then a uniform integer position within the chosen sub-rectangle.
/// The sub-rectangle excludes a `zone`-sized margin around the world center
/// and the world border, so the spawn point never lands in the safety
/// rectangle around the center.
pub fn random_safety_position<R: Rng>(
    rng: &mut R,
    size: Vec2,
    zone: Vec2,
    bounds: &WorldBounds,
) -> Vec2 {
    let center = bounds.center();

    let (min_x, max_x) = if rng.gen_bool(0.5) {
        // left
        (bounds.border, center.x - zone.x - size.x)
    } else {
        // right
        (center.x + zone.x, bounds.width - bounds.border - size.x)
    };

    let (min_y, max_y) = if rng.gen_bool(0.5) {
        // top
        (bounds.border, center.y - zone.y - size.y)
    } else {
        // bottom
        (center.y + zone.y, bounds.height - bounds.border - size.y)
    };

    Vec2::new(random_int(rng, min_x, max_x), random_int(rng, min_y, max_y))
}

/// The position that centers a box of `size` in the world.
pub fn centered_position(size: Vec2, bounds: &WorldBounds) -> Vec2 {
    Vec2::new(
        bounds.width / 2.0 - size.x / 2.0,
        bounds.height / 2.0 - size.y / 2.0,
    )
}

/// Uniform integer in `[min, max)`, as the floor of a uniform float.
fn random_int<R: Rng>(rng: &mut R, min: f32, max: f32) -> f32 {
    rng.gen_range(min..max).floor()
}

/// Uniform magnitude in `[min, max)` with a random sign.
fn random_signed<R: Rng>(rng: &mut R, min: f32, max: f32) -> f32 {
    let magnitude = rng.gen_range(min..max);
    if rng.gen_bool(0.5) {
        magnitude
    } else {
        -magnitude
    }
}
