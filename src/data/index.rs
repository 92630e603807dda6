//! Skill index
//!
//! Derived, read-only lookup structures over the skill-tree document.
//! Built once at startup; every query is a total function that returns an
//! absent result or a default instead of erroring.

use std::collections::HashMap;

use super::skill_tree::{SkillNode, SkillTreeDoc};

/// Fallback skill name used when the document lacks a "sword basic" node
pub const SWORD_BASIC_FALLBACK: &str = "Sword basic";

/// Read-only lookup view over a skill-tree document
#[derive(Debug, Clone)]
pub struct SkillIndex {
    /// Lowercased, trimmed name -> node
    by_name: HashMap<String, SkillNode>,
    /// Node id -> node
    by_id: HashMap<String, SkillNode>,
    /// Nodes carrying a tag named "basic", in document order
    basic_nodes: Vec<SkillNode>,
    /// The canonical "sword basic" node, when the document has one
    sword_basic: Option<SkillNode>,
}

impl SkillIndex {
    /// Build the index from a raw document
    pub fn build(doc: &SkillTreeDoc) -> Self {
        let mut tag_name_by_id: HashMap<&str, String> = HashMap::new();
        for tag in &doc.tags {
            tag_name_by_id.insert(&tag.id, tag.name.to_lowercase());
        }

        let mut by_name = HashMap::new();
        let mut by_id = HashMap::new();
        for node in &doc.nodes {
            by_name.insert(normalize_name(&node.name), node.clone());
            by_id.insert(node.id.clone(), node.clone());
        }

        let basic_nodes: Vec<SkillNode> = doc
            .nodes
            .iter()
            .filter(|node| {
                node.tag_ids
                    .iter()
                    .any(|tag_id| tag_name_by_id.get(tag_id.as_str()).map(String::as_str) == Some("basic"))
            })
            .cloned()
            .collect();

        let sword_basic = by_name.get("sword basic").cloned();
        if sword_basic.is_none() {
            log::warn!("Skill tree has no \"sword basic\" node; tutorial will grant the fallback name");
        }

        Self {
            by_name,
            by_id,
            basic_nodes,
            sword_basic,
        }
    }

    /// Look up a node by name, case-insensitive and whitespace-trimmed
    pub fn lookup(&self, name: &str) -> Option<&SkillNode> {
        self.by_name.get(&normalize_name(name))
    }

    /// Look up a node by id
    pub fn lookup_id(&self, id: &str) -> Option<&SkillNode> {
        self.by_id.get(id)
    }

    /// Nodes tagged "basic", in document order
    pub fn basic_nodes(&self) -> &[SkillNode] {
        &self.basic_nodes
    }

    /// The name granted on tutorial completion: the resolved "sword basic"
    /// node's name, or the literal fallback when the document lacks one
    pub fn sword_basic_name(&self) -> &str {
        self.sword_basic
            .as_ref()
            .map(|node| node.name.as_str())
            .unwrap_or(SWORD_BASIC_FALLBACK)
    }
}

/// Numeric stat lookup with a default; absent node or stat yields the default
pub fn stat_value(node: Option<&SkillNode>, key: &str, default: f32) -> f32 {
    node.and_then(|n| n.stats.quantitative.get(key).copied())
        .unwrap_or(default)
}

fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase()
}
