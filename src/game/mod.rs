//! Simulation core
//!
//! The world aggregate, arena geometry, logical input, and the frame driver
//! that advances everything in a fixed, documented order.

pub mod arena;
pub mod input;
pub mod math;
pub mod snapshot;
pub mod tick;
pub mod world;

pub use arena::Arena;
pub use input::{InputState, Key, ATTACK_KEYS, ATTACK_KEY_LABELS};
pub use math::Vec2;
pub use snapshot::RenderSnapshot;
pub use tick::{step, MAX_STEP_SECS};
pub use world::WorldState;
