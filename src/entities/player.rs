//! The player avatar
//!
//! Movement, facing and the two defensive timers. Facing persists from the
//! last nonzero movement input, so a stationary player keeps attacking in
//! the direction they last walked.

use crate::game::arena::Arena;
use crate::game::input::{InputState, Key};
use crate::game::math::Vec2;
use crate::items::Inventory;

/// Where the player (re)spawns
pub const PLAYER_SPAWN: Vec2 = Vec2::new(180.0, 260.0);
/// Player collision radius
pub const PLAYER_RADIUS: f32 = 14.0;
/// Movement speed in units per second
pub const PLAYER_SPEED: f32 = 220.0;
/// Starting and maximum hit points
pub const PLAYER_MAX_HP: f32 = 100.0;
/// Player draw color
pub const PLAYER_COLOR: (u8, u8, u8) = (22, 115, 255);

/// The player-controlled avatar
#[derive(Debug, Clone)]
pub struct Player {
    pub pos: Vec2,
    pub radius: f32,
    pub speed: f32,
    pub hp: f32,
    pub max_hp: f32,
    /// Flat armor rating, display only
    pub armor: i32,
    /// Equipped weapon label, display only
    pub weapon: String,
    /// Unit vector of the last nonzero movement input
    pub facing: Vec2,
    /// Seconds of remaining contact-damage immunity
    pub invuln_timer: f32,
    /// Seconds of remaining block mitigation
    pub block_timer: f32,
    pub inventory: Inventory,
}

impl Player {
    pub fn new() -> Self {
        Self {
            pos: PLAYER_SPAWN,
            radius: PLAYER_RADIUS,
            speed: PLAYER_SPEED,
            hp: PLAYER_MAX_HP,
            max_hp: PLAYER_MAX_HP,
            armor: 10,
            weapon: "sword(Jian)".to_string(),
            facing: Vec2::new(1.0, 0.0),
            invuln_timer: 0.0,
            block_timer: 0.0,
            inventory: Inventory::new(),
        }
    }

    /// Whether block mitigation is currently active
    pub fn is_blocking(&self) -> bool {
        self.block_timer > 0.0
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}

/// Apply held movement keys, clamp to the arena and tick down the defensive
/// timers. Returns true when any movement input was applied this tick.
pub fn update_movement(player: &mut Player, arena: &Arena, input: &InputState, dt: f32) -> bool {
    let mut dx = 0.0;
    let mut dy = 0.0;
    if input.is_down(Key::Up) {
        dy -= 1.0;
    }
    if input.is_down(Key::Down) {
        dy += 1.0;
    }
    if input.is_down(Key::Left) {
        dx -= 1.0;
    }
    if input.is_down(Key::Right) {
        dx += 1.0;
    }

    let moved = dx != 0.0 || dy != 0.0;
    if moved {
        let direction = Vec2::new(dx, dy).normalized();
        player.pos += direction * (player.speed * dt);
        player.facing = direction;
    }

    player.pos = arena.clamp_circle(player.pos, player.radius);
    player.invuln_timer = (player.invuln_timer - dt).max(0.0);
    player.block_timer = (player.block_timer - dt).max(0.0);

    moved
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn diagonal_movement_is_normalized() {
        let arena = Arena::default();
        let mut player = Player::new();
        let mut input = InputState::new();
        input.press(Key::Right);
        input.press(Key::Down);

        let start = player.pos;
        let moved = update_movement(&mut player, &arena, &input, 1.0);
        assert!(moved);
        let travelled = player.pos.distance(start);
        assert!((travelled - PLAYER_SPEED).abs() < 1e-3);
    }

    #[test]
    fn position_stays_clamped_to_arena() {
        let arena = Arena::default();
        let mut player = Player::new();
        let mut input = InputState::new();
        input.press(Key::Right);

        // Far longer than it takes to cross the arena.
        for _ in 0..100 {
            update_movement(&mut player, &arena, &input, 0.033);
            assert!(player.pos.x >= player.radius);
            assert!(player.pos.x <= arena.width - player.radius);
            assert!(player.pos.y >= player.radius);
            assert!(player.pos.y <= arena.height - player.radius);
        }
        assert_eq!(player.pos.x, arena.width - player.radius);
    }

    #[test]
    fn facing_persists_when_stationary() {
        let arena = Arena::default();
        let mut player = Player::new();
        let mut input = InputState::new();
        input.press(Key::Up);
        update_movement(&mut player, &arena, &input, 0.016);
        let facing = player.facing;

        input.release(Key::Up);
        let moved = update_movement(&mut player, &arena, &input, 0.016);
        assert!(!moved);
        assert_eq!(player.facing, facing);
    }

    #[test]
    fn timers_decay_to_zero() {
        let arena = Arena::default();
        let mut player = Player::new();
        player.invuln_timer = 0.05;
        player.block_timer = 0.05;
        let input = InputState::new();

        update_movement(&mut player, &arena, &input, 0.1);
        assert_eq!(player.invuln_timer, 0.0);
        assert_eq!(player.block_timer, 0.0);
    }
}
