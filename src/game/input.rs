//! Logical input state
//!
//! The simulation reads a fixed logical key set: four movement directions,
//! five attack triggers and the inventory toggle. The frontend maps physical
//! key events onto this set; the core never sees terminal key codes.
//!
//! A key-down arriving between ticks lands in the just-pressed set and is
//! observed by exactly one tick; the driver clears the set at end of tick.

use std::collections::HashSet;

/// A logical game key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    // Movement
    Up,
    Down,
    Left,
    Right,

    // Attack triggers, one per slot
    Attack1,
    Attack2,
    Attack3,
    Attack4,
    Attack5,

    // Panels
    Inventory,
}

/// Attack keys in slot order
pub const ATTACK_KEYS: [Key; 5] = [
    Key::Attack1,
    Key::Attack2,
    Key::Attack3,
    Key::Attack4,
    Key::Attack5,
];

/// Display labels for the attack keys, in slot order
pub const ATTACK_KEY_LABELS: [&str; 5] = ["J", "K", "L", ";", "'"];

/// Currently-held and just-pressed key sets
#[derive(Debug, Clone, Default)]
pub struct InputState {
    down: HashSet<Key>,
    just_pressed: HashSet<Key>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a key-down event. Auto-repeat while held does not re-enter
    /// the just-pressed set.
    pub fn press(&mut self, key: Key) {
        if !self.down.contains(&key) {
            self.just_pressed.insert(key);
        }
        self.down.insert(key);
    }

    /// Record a key-up event
    pub fn release(&mut self, key: Key) {
        self.down.remove(&key);
    }

    /// Whether a key is currently held
    pub fn is_down(&self, key: Key) -> bool {
        self.down.contains(&key)
    }

    /// Whether a key was newly pressed since the last tick
    pub fn just_pressed(&self, key: Key) -> bool {
        self.just_pressed.contains(&key)
    }

    /// Called by the frame driver at the end of every tick
    pub fn end_tick(&mut self) {
        self.just_pressed.clear();
    }

    /// Drop all held keys (e.g. on focus loss)
    pub fn clear(&mut self) {
        self.down.clear();
        self.just_pressed.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn press_enters_just_pressed_once() {
        let mut input = InputState::new();
        input.press(Key::Attack1);
        assert!(input.just_pressed(Key::Attack1));
        assert!(input.is_down(Key::Attack1));

        input.end_tick();
        assert!(!input.just_pressed(Key::Attack1));
        assert!(input.is_down(Key::Attack1));
    }

    #[test]
    fn auto_repeat_does_not_retrigger() {
        let mut input = InputState::new();
        input.press(Key::Up);
        input.end_tick();
        input.press(Key::Up);
        assert!(!input.just_pressed(Key::Up));
    }

    #[test]
    fn clear_drops_held_and_pending_keys() {
        let mut input = InputState::new();
        input.press(Key::Up);
        input.press(Key::Attack1);
        input.clear();
        assert!(!input.is_down(Key::Up));
        assert!(!input.just_pressed(Key::Attack1));
    }

    #[test]
    fn release_then_press_retriggers() {
        let mut input = InputState::new();
        input.press(Key::Up);
        input.end_tick();
        input.release(Key::Up);
        input.press(Key::Up);
        assert!(input.just_pressed(Key::Up));
    }
}
