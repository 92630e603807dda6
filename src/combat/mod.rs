//! Combat resolution

pub mod attacks;

pub use attacks::{resolve_attacks, trigger_attack, AttackVolume, DAMAGE_FLOOR};
