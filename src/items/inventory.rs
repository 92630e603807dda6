//! Player inventory
//!
//! Five ordered attack slots plus unordered sets of unlocked attack and
//! skill names. Slot order is load-bearing (slots map positionally onto the
//! attack keys); the unlocked sets are pure membership and get sorted
//! explicitly before display.

use std::collections::HashSet;

use crate::data::SkillIndex;

/// Number of attack slots
pub const ATTACK_SLOT_COUNT: usize = 5;

/// Preference-ordered starter attacks assigned positionally into the slots
pub const STARTER_ATTACKS: [&str; 5] = ["Stab", "Burst", "Chop", "Hang", "Flick"];

/// The player's assigned attacks and unlocked sets
#[derive(Debug, Clone, Default)]
pub struct Inventory {
    /// Attack name per slot, `None` for an empty slot
    pub attack_slots: [Option<String>; ATTACK_SLOT_COUNT],
    /// Attack names unlocked so far
    pub unlocked_attacks: HashSet<String>,
    /// Skill names unlocked so far
    pub unlocked_skills: HashSet<String>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    /// One-time initialization: unlock every "basic"-tagged node and fill
    /// the slots from the fixed preference list. Re-adding an already
    /// unlocked name is a no-op, so this is idempotent.
    pub fn grant_starter_loadout(&mut self, index: &SkillIndex) {
        for node in index.basic_nodes() {
            self.unlocked_attacks.insert(node.name.clone());
        }

        for (slot, name) in self.attack_slots.iter_mut().zip(STARTER_ATTACKS) {
            *slot = Some(name.to_string());
        }

        log::debug!(
            "Starter loadout granted: {} attacks unlocked",
            self.unlocked_attacks.len()
        );
    }

    /// The attack name assigned to a slot, if any
    pub fn slot(&self, index: usize) -> Option<&str> {
        self.attack_slots.get(index)?.as_deref()
    }

    /// Unlocked attack names, sorted for display
    pub fn sorted_attacks(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.unlocked_attacks.iter().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Unlocked skill names, sorted for display
    pub fn sorted_skills(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.unlocked_skills.iter().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}
