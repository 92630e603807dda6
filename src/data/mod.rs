//! External game data
//!
//! The skill-tree document, its loader, and the derived read-only index.

pub mod index;
pub mod loader;
pub mod skill_tree;

pub use index::{stat_value, SkillIndex, SWORD_BASIC_FALLBACK};
pub use loader::{load_skill_tree, DataError, SKILL_TREE_PATH};
pub use skill_tree::{NodeStats, SkillNode, SkillTag, SkillTreeDoc};
