//! Friendly entities
//!
//! Static, non-combat actors. Immutable during play; respawned alongside
//! the enemy wave on player death.

use crate::game::math::Vec2;

/// Friendly draw color
pub const FRIENDLY_COLOR: (u8, u8, u8) = (20, 184, 95);

/// A static friendly actor with a floating label
#[derive(Debug, Clone)]
pub struct Friendly {
    pub id: String,
    pub pos: Vec2,
    pub radius: f32,
    pub label: String,
    pub color: (u8, u8, u8),
}

/// The canonical friendly batch
pub fn initial_friendlies() -> Vec<Friendly> {
    vec![Friendly {
        id: "friendly-guide".to_string(),
        pos: Vec2::new(120.0, 120.0),
        radius: 12.0,
        label: "Guide".to_string(),
        color: FRIENDLY_COLOR,
    }]
}
