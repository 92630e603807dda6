//! Arena entities

pub mod enemies;
pub mod friendlies;
pub mod player;

pub use enemies::{initial_wave, update_enemies, Enemy};
pub use friendlies::{initial_friendlies, Friendly};
pub use player::{update_movement, Player, PLAYER_SPAWN};
