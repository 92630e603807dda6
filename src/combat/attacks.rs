//! Attack volumes
//!
//! Triggering spawns a short-lived circular hitbox along the player's facing
//! direction; resolution ages volumes, applies damage and knockback, and
//! prunes defeated enemies after the whole pass (deferred removal, so no
//! comparison is skipped mid-iteration).

use std::collections::HashSet;

use crate::data::{stat_value, SkillIndex};
use crate::entities::{Enemy, Player};
use crate::game::math::Vec2;

/// Spawn offset from the player along the facing direction
pub const ATTACK_OFFSET: f32 = 30.0;
/// Hitbox radius
pub const ATTACK_RADIUS: f32 = 34.0;
/// Hitbox lifetime in seconds
pub const ATTACK_TTL: f32 = 0.16;
/// No attack ever deals less than this
pub const DAMAGE_FLOOR: f32 = 8.0;
/// Knockback displacement applied on hit, directly away from the player
pub const KNOCKBACK: f32 = 18.0;
/// Minimum block window raised by a defensive skill, in seconds
pub const BLOCK_WINDOW: f32 = 0.35;

/// A transient circular hitbox spawned by an attack trigger
#[derive(Debug, Clone)]
pub struct AttackVolume {
    pub pos: Vec2,
    pub radius: f32,
    pub damage: f32,
    /// Remaining lifetime in seconds; the volume is dropped at <= 0
    pub ttl: f32,
    /// Name of the attack that spawned this volume
    pub name: String,
    /// Enemy ids already damaged by this volume
    hit: HashSet<String>,
}

impl AttackVolume {
    /// Whether this volume has already damaged the given enemy
    pub fn has_hit(&self, enemy_id: &str) -> bool {
        self.hit.contains(enemy_id)
    }
}

/// Trigger the attack assigned to a slot. Empty slots are a silent no-op;
/// a slot name absent from the index still fires at the damage floor.
/// Returns true when a volume was spawned.
pub fn trigger_attack(
    player: &mut Player,
    attacks: &mut Vec<AttackVolume>,
    index: &SkillIndex,
    slot: usize,
) -> bool {
    let Some(name) = player.inventory.slot(slot).map(str::to_string) else {
        return false;
    };

    let node = index.lookup(&name);
    let damage = stat_value(node, "Damage", 0.0).max(DAMAGE_FLOOR);
    let armor_boost = stat_value(node, "Armor", 0.0);

    // A pure defensive skill (armor stat, no damage above the floor) raises
    // the block window instead of shortening it.
    if armor_boost > 0.0 && damage <= DAMAGE_FLOOR {
        player.block_timer = player.block_timer.max(BLOCK_WINDOW);
    }

    let facing = player.facing.normalized();
    attacks.push(AttackVolume {
        pos: player.pos + facing * ATTACK_OFFSET,
        radius: ATTACK_RADIUS,
        damage,
        ttl: ATTACK_TTL,
        name,
        hit: HashSet::new(),
    });

    true
}

/// Age all volumes, resolve hits and drop defeated enemies.
///
/// Each volume damages a given enemy at most once over its whole lifetime,
/// but can damage any number of distinct enemies. Knockback pushes the enemy
/// directly away from the player, not from the attack origin.
pub fn resolve_attacks(
    attacks: &mut Vec<AttackVolume>,
    enemies: &mut Vec<Enemy>,
    player_pos: Vec2,
    dt: f32,
) {
    for attack in attacks.iter_mut() {
        attack.ttl -= dt;
    }
    attacks.retain(|attack| attack.ttl > 0.0);

    for attack in attacks.iter_mut() {
        for enemy in enemies.iter_mut() {
            if attack.hit.contains(&enemy.id) {
                continue;
            }
            if attack.pos.distance(enemy.pos) <= attack.radius + enemy.radius {
                enemy.hp -= attack.damage;
                attack.hit.insert(enemy.id.clone());

                let knock = (enemy.pos - player_pos).normalized();
                enemy.pos += knock * KNOCKBACK;
                log::debug!(
                    "{} hit {} for {:.0} (hp {:.0})",
                    attack.name,
                    enemy.id,
                    attack.damage,
                    enemy.hp
                );
            }
        }
    }

    enemies.retain(|enemy| enemy.hp > 0.0);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::SkillTreeDoc;
    use crate::entities::initial_wave;

    fn demo_index() -> SkillIndex {
        let doc: SkillTreeDoc = serde_json::from_value(serde_json::json!({
            "tags": [],
            "nodes": [
                {
                    "id": "n1",
                    "name": "Stab",
                    "tagIds": [],
                    "stats": { "quantitative": { "Damage": 15.0 } }
                },
                {
                    "id": "n2",
                    "name": "Flick",
                    "tagIds": [],
                    "stats": { "quantitative": { "Damage": 3.0 } }
                },
                {
                    "id": "n3",
                    "name": "Guard",
                    "tagIds": [],
                    "stats": { "quantitative": { "Armor": 4.0 } }
                }
            ]
        }))
        .unwrap();
        SkillIndex::build(&doc)
    }

    fn player_with_slot(name: &str) -> Player {
        let mut player = Player::new();
        player.inventory.attack_slots[0] = Some(name.to_string());
        player
    }

    #[test]
    fn damage_uses_the_floor() {
        let index = demo_index();
        let mut attacks = Vec::new();

        let mut player = player_with_slot("Stab");
        assert!(trigger_attack(&mut player, &mut attacks, &index, 0));
        assert_eq!(attacks[0].damage, 15.0);

        let mut player = player_with_slot("Flick");
        assert!(trigger_attack(&mut player, &mut attacks, &index, 0));
        assert_eq!(attacks[1].damage, DAMAGE_FLOOR);
    }

    #[test]
    fn unresolvable_name_still_fires_at_floor() {
        let index = demo_index();
        let mut attacks = Vec::new();
        let mut player = player_with_slot("No Such Attack");

        assert!(trigger_attack(&mut player, &mut attacks, &index, 0));
        assert_eq!(attacks[0].damage, DAMAGE_FLOOR);
        assert_eq!(player.block_timer, 0.0);
    }

    #[test]
    fn empty_slot_is_a_noop() {
        let index = demo_index();
        let mut attacks = Vec::new();
        let mut player = Player::new();

        assert!(!trigger_attack(&mut player, &mut attacks, &index, 0));
        assert!(attacks.is_empty());
    }

    #[test]
    fn defensive_skill_raises_block_window_monotonically() {
        let index = demo_index();
        let mut attacks = Vec::new();
        let mut player = player_with_slot("Guard");

        trigger_attack(&mut player, &mut attacks, &index, 0);
        assert_eq!(player.block_timer, BLOCK_WINDOW);

        // A longer existing window is never shortened.
        player.block_timer = 1.0;
        trigger_attack(&mut player, &mut attacks, &index, 0);
        assert_eq!(player.block_timer, 1.0);
    }

    #[test]
    fn volume_spawns_along_facing() {
        let index = demo_index();
        let mut attacks = Vec::new();
        let mut player = player_with_slot("Stab");
        player.facing = Vec2::new(0.0, 1.0);

        trigger_attack(&mut player, &mut attacks, &index, 0);
        assert_eq!(attacks[0].pos, player.pos + Vec2::new(0.0, ATTACK_OFFSET));
    }

    #[test]
    fn volume_hits_each_enemy_at_most_once() {
        let mut enemies = initial_wave();
        enemies.truncate(1);
        enemies[0].hp = 100.0;
        let player_pos = Vec2::new(600.0, 120.0);

        let mut attacks = vec![AttackVolume {
            pos: enemies[0].pos,
            radius: ATTACK_RADIUS,
            damage: 10.0,
            ttl: ATTACK_TTL,
            name: "Stab".to_string(),
            hit: HashSet::new(),
        }];

        // Several ticks while the volume is still alive and overlapping.
        resolve_attacks(&mut attacks, &mut enemies, player_pos, 0.01);
        let hp_after_first = enemies[0].hp;
        resolve_attacks(&mut attacks, &mut enemies, player_pos, 0.01);
        resolve_attacks(&mut attacks, &mut enemies, player_pos, 0.01);

        assert_eq!(hp_after_first, 90.0);
        assert_eq!(enemies[0].hp, 90.0);
        assert!(attacks[0].has_hit("enemy-1"));
    }

    #[test]
    fn volume_can_hit_multiple_distinct_enemies() {
        let mut enemies = initial_wave();
        let spot = Vec2::new(500.0, 200.0);
        for enemy in enemies.iter_mut() {
            enemy.pos = spot;
            enemy.hp = 100.0;
        }

        let mut attacks = vec![AttackVolume {
            pos: spot,
            radius: ATTACK_RADIUS,
            damage: 10.0,
            ttl: ATTACK_TTL,
            name: "Stab".to_string(),
            hit: HashSet::new(),
        }];

        resolve_attacks(&mut attacks, &mut enemies, Vec2::new(100.0, 100.0), 0.01);
        assert!(enemies.iter().all(|e| e.hp == 90.0));
    }

    #[test]
    fn knockback_pushes_away_from_player() {
        let player_pos = Vec2::new(100.0, 100.0);
        let mut enemies = initial_wave();
        enemies.truncate(1);
        enemies[0].pos = Vec2::new(150.0, 100.0);
        enemies[0].hp = 100.0;

        let mut attacks = vec![AttackVolume {
            pos: enemies[0].pos,
            radius: ATTACK_RADIUS,
            damage: 10.0,
            ttl: ATTACK_TTL,
            name: "Stab".to_string(),
            hit: HashSet::new(),
        }];

        resolve_attacks(&mut attacks, &mut enemies, player_pos, 0.01);
        assert_eq!(enemies[0].pos, Vec2::new(150.0 + KNOCKBACK, 100.0));
    }

    #[test]
    fn defeated_enemies_are_removed_after_the_pass() {
        let mut enemies = initial_wave();
        enemies.truncate(1);
        enemies[0].hp = 5.0;

        let mut attacks = vec![AttackVolume {
            pos: enemies[0].pos,
            radius: ATTACK_RADIUS,
            damage: 10.0,
            ttl: ATTACK_TTL,
            name: "Stab".to_string(),
            hit: HashSet::new(),
        }];

        resolve_attacks(&mut attacks, &mut enemies, Vec2::ZERO, 0.01);
        assert!(enemies.is_empty());
    }

    #[test]
    fn expired_volumes_are_dropped() {
        let mut enemies = Vec::new();
        let mut attacks = vec![AttackVolume {
            pos: Vec2::ZERO,
            radius: ATTACK_RADIUS,
            damage: 10.0,
            ttl: ATTACK_TTL,
            name: "Stab".to_string(),
            hit: HashSet::new(),
        }];

        resolve_attacks(&mut attacks, &mut enemies, Vec2::ZERO, ATTACK_TTL + 0.01);
        assert!(attacks.is_empty());
    }
}
