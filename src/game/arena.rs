//! Arena bounds
//!
//! The fixed rectangular play field. All circular entities are kept fully
//! inside after clamping to their radius.

use super::math::Vec2;

/// Default arena width in world units
pub const ARENA_WIDTH: f32 = 900.0;
/// Default arena height in world units
pub const ARENA_HEIGHT: f32 = 520.0;

/// The rectangular play field
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Arena {
    pub width: f32,
    pub height: f32,
}

impl Arena {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Clamp a circle's center so the circle stays fully inside the bounds
    pub fn clamp_circle(&self, pos: Vec2, radius: f32) -> Vec2 {
        Vec2::new(
            pos.x.clamp(radius, self.width - radius),
            pos.y.clamp(radius, self.height - radius),
        )
    }
}

impl Default for Arena {
    fn default() -> Self {
        Self::new(ARENA_WIDTH, ARENA_HEIGHT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_keeps_circle_inside() {
        let arena = Arena::default();
        let clamped = arena.clamp_circle(Vec2::new(-50.0, 10_000.0), 14.0);
        assert_eq!(clamped, Vec2::new(14.0, arena.height - 14.0));
    }

    #[test]
    fn clamp_leaves_interior_points_alone() {
        let arena = Arena::default();
        let pos = Vec2::new(180.0, 260.0);
        assert_eq!(arena.clamp_circle(pos, 14.0), pos);
    }
}
