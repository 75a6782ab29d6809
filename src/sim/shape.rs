//! Shape geometry for entities and projectiles
//!
//! Screen space with the origin at the top-left and y growing downward.
//! Rectangles are anchored at their top-left corner, circles at their center.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::config::Bounds;

/// An axis-aligned rectangle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    #[inline]
    pub fn min(&self) -> Vec2 {
        self.pos
    }

    #[inline]
    pub fn max(&self) -> Vec2 {
        self.pos + self.size
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.pos + self.size * 0.5
    }

    #[inline]
    pub fn half_extents(&self) -> Vec2 {
        self.size * 0.5
    }
}

/// Collision shape of a projectile
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Shape {
    Rect { width: f32, height: f32 },
    Circle { radius: f32 },
}

impl Shape {
    /// Bounding box of this shape anchored at `pos`
    pub fn bounds_at(&self, pos: Vec2) -> Rect {
        match *self {
            Shape::Rect { width, height } => Rect::new(pos.x, pos.y, width, height),
            Shape::Circle { radius } => {
                Rect::new(pos.x - radius, pos.y - radius, radius * 2.0, radius * 2.0)
            }
        }
    }
}

/// Clamp a rectangle's top-left so it stays inside the world
pub fn clamp_into(pos: Vec2, size: Vec2, bounds: &Bounds) -> Vec2 {
    Vec2::new(
        pos.x.clamp(0.0, (bounds.width - size.x).max(0.0)),
        pos.y.clamp(0.0, (bounds.height - size.y).max(0.0)),
    )
}
