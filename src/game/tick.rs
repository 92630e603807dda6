//! Frame driver
//!
//! Owns the authoritative per-tick order of operations:
//! movement -> combat resolution -> enemy AI and respawn -> tutorial ->
//! snapshot. The order is a correctness invariant: the tutorial must observe
//! the post-AI enemy count to detect a cleared arena, and the respawn check
//! must run after contact damage.

use crate::combat;
use crate::data::SkillIndex;
use crate::entities;
use crate::game::input::{InputState, ATTACK_KEYS, Key};

use super::snapshot::RenderSnapshot;
use super::world::WorldState;

/// Longest simulated step in seconds. Elapsed time beyond this is discarded
/// (no sub-stepping or catch-up), bounding work after long pauses such as a
/// suspended terminal.
pub const MAX_STEP_SECS: f32 = 0.033;

/// Advance the simulation by one tick and hand back a render snapshot.
///
/// `dt` is clamped to [`MAX_STEP_SECS`]. The just-pressed set is consumed
/// here and cleared before returning, so every key-down is observed by
/// exactly one tick.
pub fn step(
    world: &mut WorldState,
    index: &SkillIndex,
    input: &mut InputState,
    dt: f32,
) -> RenderSnapshot {
    let dt = dt.clamp(0.0, MAX_STEP_SECS);

    // Movement and defensive timers, then attack triggers from this tick's
    // just-pressed keys.
    let moved = entities::update_movement(&mut world.player, &world.arena, input, dt);
    if moved {
        world.tutorial.moved = true;
    }
    for (slot, key) in ATTACK_KEYS.into_iter().enumerate() {
        if input.just_pressed(key)
            && combat::trigger_attack(&mut world.player, &mut world.attacks, index, slot)
        {
            world.tutorial.used_attack = true;
        }
    }

    // Resolve live attack volumes against the enemy set.
    combat::resolve_attacks(&mut world.attacks, &mut world.enemies, world.player.pos, dt);

    // Enemy steering and contact damage, then the respawn check that
    // depends on it.
    entities::update_enemies(&mut world.enemies, &mut world.player, dt);
    if world.player.hp <= 0.0 {
        world.respawn_player(index);
    }

    // Tutorial runs last so it sees this tick's effects.
    let WorldState {
        tutorial,
        player,
        enemies,
        ..
    } = world;
    tutorial.update(enemies.len(), &mut player.inventory, index);

    if input.just_pressed(Key::Inventory) {
        world.inventory_open = !world.inventory_open;
    }

    let snapshot = RenderSnapshot::capture(world);
    input.end_tick();
    snapshot
}
