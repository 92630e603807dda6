//! Items and loadout

pub mod inventory;

pub use inventory::{Inventory, ATTACK_SLOT_COUNT, STARTER_ATTACKS};
