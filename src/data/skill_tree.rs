//! Skill-tree document types
//!
//! The raw JSON document this game consumes is an external data contract;
//! these types mirror it exactly and are never mutated after load.

use std::collections::HashMap;

use serde::Deserialize;

/// A tag attached to skill nodes (e.g. "Basic")
#[derive(Debug, Clone, Deserialize)]
pub struct SkillTag {
    pub id: String,
    pub name: String,
}

/// Numeric stats attached to a node
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NodeStats {
    /// Stat name to numeric quantity (e.g. "Damage" -> 12)
    #[serde(default)]
    pub quantitative: HashMap<String, f32>,
}

/// A single node in the skill tree
#[derive(Debug, Clone, Deserialize)]
pub struct SkillNode {
    pub id: String,
    pub name: String,
    #[serde(default, rename = "tagIds")]
    pub tag_ids: Vec<String>,
    #[serde(default)]
    pub stats: NodeStats,
}

/// The full skill-tree document
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SkillTreeDoc {
    #[serde(default)]
    pub tags: Vec<SkillTag>,
    #[serde(default)]
    pub nodes: Vec<SkillNode>,
}
