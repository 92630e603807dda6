//! Enemies
//!
//! Greedy seek steering and contact damage. Contact damage is gated by a
//! single invulnerability timer shared across all enemies, so any hit grants
//! the player a brief global immunity window.

use crate::game::math::Vec2;

use super::player::Player;

/// Contact damage while the player is blocking
pub const CONTACT_DAMAGE_BLOCKED: f32 = 3.0;
/// Contact damage while unblocked
pub const CONTACT_DAMAGE: f32 = 9.0;
/// Immunity window after a blocked hit, in seconds
pub const INVULN_AFTER_BLOCKED: f32 = 0.3;
/// Immunity window after an unblocked hit, in seconds
pub const INVULN_AFTER_HIT: f32 = 0.5;
/// Enemy draw color
pub const ENEMY_COLOR: (u8, u8, u8) = (222, 47, 47);

/// A hostile arena entity
#[derive(Debug, Clone)]
pub struct Enemy {
    pub id: String,
    pub pos: Vec2,
    pub radius: f32,
    pub hp: f32,
    pub speed: f32,
    pub color: (u8, u8, u8),
}

impl Enemy {
    fn new(id: &str, x: f32, y: f32, speed: f32) -> Self {
        Self {
            id: id.to_string(),
            pos: Vec2::new(x, y),
            radius: 13.0,
            hp: 60.0,
            speed,
            color: ENEMY_COLOR,
        }
    }
}

/// The canonical initial wave, respawned in full on player death
pub fn initial_wave() -> Vec<Enemy> {
    vec![
        Enemy::new("enemy-1", 700.0, 120.0, 75.0),
        Enemy::new("enemy-2", 820.0, 260.0, 70.0),
        Enemy::new("enemy-3", 730.0, 420.0, 80.0),
    ]
}

/// Steer every enemy toward the player and apply contact damage.
///
/// Steering is recomputed every tick from the player's current position;
/// no pathfinding or prediction. The respawn check runs after this, in the
/// frame driver, because it depends on the contact damage applied here.
pub fn update_enemies(enemies: &mut [Enemy], player: &mut Player, dt: f32) {
    for enemy in enemies.iter_mut() {
        let direction = (player.pos - enemy.pos).normalized();
        enemy.pos += direction * (enemy.speed * dt);

        let in_contact = enemy.pos.distance(player.pos) <= enemy.radius + player.radius;
        if in_contact && player.invuln_timer <= 0.0 {
            let blocked = player.is_blocking();
            if blocked {
                player.hp -= CONTACT_DAMAGE_BLOCKED;
                player.invuln_timer = INVULN_AFTER_BLOCKED;
            } else {
                player.hp -= CONTACT_DAMAGE;
                player.invuln_timer = INVULN_AFTER_HIT;
            }
            log::debug!(
                "Contact from {}: blocked={}, hp now {:.0}",
                enemy.id,
                blocked,
                player.hp
            );
        }
    }
}
