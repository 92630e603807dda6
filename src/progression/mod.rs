//! Player progression

pub mod tutorial;

pub use tutorial::{Tutorial, TutorialStep};
