//! Ironridge Arena - a minimal real-time arena action game
//!
//! Move a circle, swing data-driven attacks at red circles, and clear the
//! three tutorial trials. The simulation core is a deterministic fixed-step
//! `step(dt, input) -> RenderSnapshot`; the terminal frontend is glue.

pub mod combat;
pub mod data;
pub mod entities;
pub mod game;
pub mod items;
pub mod progression;
pub mod ui;

// Re-export commonly used types
pub use data::{load_skill_tree, SkillIndex, SkillTreeDoc};
pub use game::{step, InputState, Key, RenderSnapshot, WorldState};
