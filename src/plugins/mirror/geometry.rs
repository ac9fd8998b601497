//! Axis-aligned overlap testing.
//!
//! One overlap test serves both mirror-vs-swing and mirror-vs-bolt checks;
//! nothing here is special-cased by entity kind.

use bevy::prelude::*;

/// Half-extents of an entity's gameplay hitbox, centered on its `Transform`.
#[derive(Component, Debug, Clone, Copy)]
pub struct CollisionBox {
    pub half: Vec2,
}

impl CollisionBox {
    pub fn square(size: f32) -> Self {
        Self {
            half: Vec2::splat(size * 0.5),
        }
    }
}

/// A centered axis-aligned box in world space, rebuilt from the entity's
/// current transform every tick so it can never go stale.
#[derive(Debug, Clone, Copy)]
pub struct Aabb {
    pub center: Vec2,
    pub half: Vec2,
}

impl Aabb {
    pub fn of(tf: &Transform, hitbox: &CollisionBox) -> Self {
        Self {
            center: tf.translation.truncate(),
            half: hitbox.half,
        }
    }
}

/// Strict intersection test: edges that merely touch do not overlap.
#[inline]
pub fn overlaps(a: &Aabb, b: &Aabb) -> bool {
    (a.center.x - b.center.x).abs() < a.half.x + b.half.x
        && (a.center.y - b.center.y).abs() < a.half.y + b.half.y
}
