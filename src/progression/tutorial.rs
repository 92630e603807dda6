//! Tutorial state machine
//!
//! A strictly linear three-trial progression. Exit conditions are evaluated
//! against already-mutated world state at the end of each tick, so the clear
//! trial observes this tick's enemy removals. There are no backward
//! transitions; the whole machine resets only on player respawn.

use crate::data::SkillIndex;
use crate::items::Inventory;

/// The tutorial steps, in order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum TutorialStep {
    /// Trial 1: move
    MoveTrial,
    /// Trial 2: use an attack
    AttackTrial,
    /// Trial 3: defeat all enemies
    ClearTrial,
    /// Terminal display state until the next respawn
    Complete,
}

/// Tutorial progression for the current life
#[derive(Debug, Clone)]
pub struct Tutorial {
    step: TutorialStep,
    /// Set by movement; monotonic within one life
    pub moved: bool,
    /// Set by the first triggered attack; monotonic within one life
    pub used_attack: bool,
    /// Guards the sword-basic grant so it happens once per life
    sword_basic_granted: bool,
}

impl Tutorial {
    pub fn new() -> Self {
        Self {
            step: TutorialStep::MoveTrial,
            moved: false,
            used_attack: false,
            sword_basic_granted: false,
        }
    }

    /// Back to the initial state (on player respawn)
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    pub fn step(&self) -> TutorialStep {
        self.step
    }

    /// Evaluate the current step's exit condition. Run last in the tick so
    /// it sees the tick's combat and AI effects.
    pub fn update(&mut self, enemies_remaining: usize, inventory: &mut Inventory, index: &SkillIndex) {
        match self.step {
            TutorialStep::MoveTrial => {
                if self.moved {
                    self.advance(TutorialStep::AttackTrial);
                }
            }
            TutorialStep::AttackTrial => {
                if self.used_attack {
                    self.advance(TutorialStep::ClearTrial);
                }
            }
            TutorialStep::ClearTrial => {
                if enemies_remaining == 0 {
                    self.advance(TutorialStep::Complete);
                    self.grant_sword_basic(inventory, index);
                }
            }
            TutorialStep::Complete => {}
        }
    }

    /// Grant the sword-basic skill exactly once per life, even if the
    /// triggering condition is observed on multiple consecutive ticks.
    pub fn grant_sword_basic(&mut self, inventory: &mut Inventory, index: &SkillIndex) {
        if self.sword_basic_granted {
            return;
        }
        let name = index.sword_basic_name();
        inventory.unlocked_skills.insert(name.to_string());
        self.sword_basic_granted = true;
        log::info!("Tutorial complete: granted skill \"{}\"", name);
    }

    /// Instructional text for the current step
    pub fn status_text(&self) -> &'static str {
        match self.step {
            TutorialStep::MoveTrial => "Trial 1/3: Move with WASD.",
            TutorialStep::AttackTrial => "Trial 2/3: Use attacks with J K L ; '.",
            TutorialStep::ClearTrial => "Trial 3/3: Defeat all red enemies.",
            TutorialStep::Complete => {
                "Trial complete: Sword basic unlocked. Press I for inventory."
            }
        }
    }

    fn advance(&mut self, next: TutorialStep) {
        log::debug!("Tutorial: {:?} -> {:?}", self.step, next);
        self.step = next;
    }
}

impl Default for Tutorial {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{SkillIndex, SkillTreeDoc};

    fn empty_index() -> SkillIndex {
        SkillIndex::build(&SkillTreeDoc::default())
    }

    #[test]
    fn advances_linearly() {
        let index = empty_index();
        let mut inv = Inventory::new();
        let mut tutorial = Tutorial::new();
        assert_eq!(tutorial.step(), TutorialStep::MoveTrial);

        tutorial.update(3, &mut inv, &index);
        assert_eq!(tutorial.step(), TutorialStep::MoveTrial);

        tutorial.moved = true;
        tutorial.update(3, &mut inv, &index);
        assert_eq!(tutorial.step(), TutorialStep::AttackTrial);

        tutorial.used_attack = true;
        tutorial.update(3, &mut inv, &index);
        assert_eq!(tutorial.step(), TutorialStep::ClearTrial);

        // Enemies still alive: no transition.
        tutorial.update(1, &mut inv, &index);
        assert_eq!(tutorial.step(), TutorialStep::ClearTrial);

        tutorial.update(0, &mut inv, &index);
        assert_eq!(tutorial.step(), TutorialStep::Complete);
        assert!(inv.unlocked_skills.contains("Sword basic"));
    }

    #[test]
    fn step_never_decreases() {
        let index = empty_index();
        let mut inv = Inventory::new();
        let mut tutorial = Tutorial::new();
        tutorial.moved = true;
        tutorial.used_attack = true;

        let mut last = tutorial.step();
        for enemies in [3, 0, 3, 0, 5] {
            tutorial.update(enemies, &mut inv, &index);
            assert!(tutorial.step() >= last);
            last = tutorial.step();
        }
        assert_eq!(last, TutorialStep::Complete);
    }

    #[test]
    fn grant_is_idempotent_within_a_life() {
        let index = empty_index();
        let mut inv = Inventory::new();
        let mut tutorial = Tutorial::new();

        tutorial.grant_sword_basic(&mut inv, &index);
        tutorial.grant_sword_basic(&mut inv, &index);
        assert_eq!(inv.unlocked_skills.len(), 1);
    }

    #[test]
    fn reset_allows_regrant() {
        let index = empty_index();
        let mut inv = Inventory::new();
        let mut tutorial = Tutorial::new();

        tutorial.grant_sword_basic(&mut inv, &index);
        inv.unlocked_skills.remove(index.sword_basic_name());
        tutorial.reset();
        tutorial.grant_sword_basic(&mut inv, &index);
        assert!(inv.unlocked_skills.contains("Sword basic"));
    }
}
