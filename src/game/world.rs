//! World state
//!
//! The explicit aggregate of everything the simulation mutates. The frame
//! driver owns it exclusively; the skill index stays outside as shared,
//! read-only data.

use crate::combat::AttackVolume;
use crate::data::SkillIndex;
use crate::entities::{initial_friendlies, initial_wave, Enemy, Friendly, Player, PLAYER_SPAWN};
use crate::progression::Tutorial;

use super::arena::Arena;

/// All mutable game state for one running session
#[derive(Debug, Clone)]
pub struct WorldState {
    pub arena: Arena,
    pub player: Player,
    pub enemies: Vec<Enemy>,
    pub friendlies: Vec<Friendly>,
    pub attacks: Vec<AttackVolume>,
    pub tutorial: Tutorial,
    /// Whether the inventory panel is showing
    pub inventory_open: bool,
}

impl WorldState {
    /// Fresh world: starter loadout granted, initial actors spawned
    pub fn new(index: &SkillIndex) -> Self {
        let mut player = Player::new();
        player.inventory.grant_starter_loadout(index);

        Self {
            arena: Arena::default(),
            player,
            enemies: initial_wave(),
            friendlies: initial_friendlies(),
            attacks: Vec::new(),
            tutorial: Tutorial::new(),
            inventory_open: false,
        }
    }

    /// Respawn after death: a state reset, not object destruction. Restores
    /// hp and spawn position, rewinds the tutorial, revokes the granted
    /// sword-basic skill and respawns the full initial wave.
    pub fn respawn_player(&mut self, index: &SkillIndex) {
        log::info!("Player defeated; respawning");
        self.player.hp = self.player.max_hp;
        self.player.pos = PLAYER_SPAWN;
        self.tutorial.reset();
        self.player
            .inventory
            .unlocked_skills
            .remove(index.sword_basic_name());
        self.enemies = initial_wave();
        self.friendlies = initial_friendlies();
    }
}
