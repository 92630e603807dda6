//! Render snapshot
//!
//! What the presentation layer consumes each tick. The snapshot owns its
//! data so the frontend never reaches into live simulation state.

use crate::game::input::ATTACK_KEY_LABELS;
use crate::game::math::Vec2;

use super::arena::Arena;
use super::world::WorldState;

/// Player data the renderer needs
#[derive(Debug, Clone)]
pub struct PlayerView {
    pub pos: Vec2,
    pub radius: f32,
    pub color: (u8, u8, u8),
    /// Draw the block ring when true
    pub blocking: bool,
}

/// Enemy data the renderer needs
#[derive(Debug, Clone)]
pub struct EnemyView {
    pub pos: Vec2,
    pub radius: f32,
    pub color: (u8, u8, u8),
}

/// Friendly data the renderer needs
#[derive(Debug, Clone)]
pub struct FriendlyView {
    pub pos: Vec2,
    pub radius: f32,
    pub label: String,
    pub color: (u8, u8, u8),
}

/// Attack volume data the renderer needs (visual effect only)
#[derive(Debug, Clone)]
pub struct AttackView {
    pub pos: Vec2,
    pub radius: f32,
}

/// Inventory panel contents, pre-sorted for display
#[derive(Debug, Clone)]
pub struct InventoryView {
    pub armor: i32,
    pub weapon: String,
    /// Key label and assigned attack name per slot
    pub slots: Vec<(String, Option<String>)>,
    pub unlocked_attacks: Vec<String>,
    pub unlocked_skills: Vec<String>,
}

/// Everything the presentation layer consumes for one frame
#[derive(Debug, Clone)]
pub struct RenderSnapshot {
    pub arena: Arena,
    pub player: PlayerView,
    pub enemies: Vec<EnemyView>,
    pub friendlies: Vec<FriendlyView>,
    pub attacks: Vec<AttackView>,
    /// Tutorial / status line
    pub status_text: String,
    /// HP and enemy-count summary
    pub summary: String,
    pub inventory_open: bool,
    pub inventory: InventoryView,
}

impl RenderSnapshot {
    /// Capture the world as it stands at the end of a tick
    pub fn capture(world: &WorldState) -> Self {
        let player = &world.player;
        let inventory = &player.inventory;

        Self {
            arena: world.arena,
            player: PlayerView {
                pos: player.pos,
                radius: player.radius,
                color: crate::entities::player::PLAYER_COLOR,
                blocking: player.is_blocking(),
            },
            enemies: world
                .enemies
                .iter()
                .map(|e| EnemyView {
                    pos: e.pos,
                    radius: e.radius,
                    color: e.color,
                })
                .collect(),
            friendlies: world
                .friendlies
                .iter()
                .map(|f| FriendlyView {
                    pos: f.pos,
                    radius: f.radius,
                    label: f.label.clone(),
                    color: f.color,
                })
                .collect(),
            attacks: world
                .attacks
                .iter()
                .map(|a| AttackView {
                    pos: a.pos,
                    radius: a.radius,
                })
                .collect(),
            status_text: world.tutorial.status_text().to_string(),
            summary: format!(
                "HP {}/{} | Enemies {}",
                player.hp.ceil() as i32,
                player.max_hp as i32,
                world.enemies.len()
            ),
            inventory_open: world.inventory_open,
            inventory: InventoryView {
                armor: player.armor,
                weapon: player.weapon.clone(),
                slots: ATTACK_KEY_LABELS
                    .iter()
                    .enumerate()
                    .map(|(i, label)| (label.to_string(), inventory.slot(i).map(str::to_string)))
                    .collect(),
                unlocked_attacks: inventory.sorted_attacks().into_iter().map(String::from).collect(),
                unlocked_skills: inventory.sorted_skills().into_iter().map(String::from).collect(),
            },
        }
    }
}
