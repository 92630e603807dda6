//! Skill-tree JSON loader
//!
//! Loads the skill-tree document once at startup. A load failure is fatal:
//! the simulation never starts without its data.

use std::fs;
use std::path::Path;

use thiserror::Error;

use super::skill_tree::SkillTreeDoc;

/// Default location of the skill-tree document
pub const SKILL_TREE_PATH: &str = "assets/skill_tree.json";

/// Errors surfaced while loading the skill-tree document
#[derive(Debug, Error)]
pub enum DataError {
    #[error("failed to read skill tree {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse skill tree {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Load and parse the skill-tree document from disk
pub fn load_skill_tree(path: impl AsRef<Path>) -> Result<SkillTreeDoc, DataError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| DataError::Read {
        path: path.display().to_string(),
        source,
    })?;
    let doc: SkillTreeDoc = serde_json::from_str(&content).map_err(|source| DataError::Parse {
        path: path.display().to_string(),
        source,
    })?;
    log::info!(
        "Loaded skill tree from {}: {} nodes, {} tags",
        path.display(),
        doc.nodes.len(),
        doc.tags.len()
    );
    Ok(doc)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_reports_path() {
        let err = load_skill_tree("does/not/exist.json").unwrap_err();
        assert!(matches!(err, DataError::Read { .. }));
        assert!(err.to_string().contains("does/not/exist.json"));
    }
}
