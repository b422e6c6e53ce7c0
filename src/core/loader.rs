//! Loading genealogy documents from YAML files

use crate::core::models::Tree;
use crate::{debug, info};
use std::error::Error;
use std::fs;
use std::path::Path;

/// Parse a genealogy YAML file into a `Tree`
///
/// # Arguments
/// * `path` - Path to the YAML file
///
/// # Returns
/// The parsed tree; an empty or whitespace-only file yields an empty tree
///
/// # Errors
/// Returns an error if the file cannot be read or is not a valid document
pub fn load_tree<P: AsRef<Path>>(path: P) -> Result<Tree, Box<dyn Error>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)
        .map_err(|e| format!("Cannot read {}: {e}", path.display()))?;

    let tree = parse_tree(&content)
        .map_err(|e| format!("Invalid family tree in {}: {e}", path.display()))?;

    info!(
        "Loaded {}: {} people, {} top-level families",
        path.display(),
        tree.people.len(),
        tree.families.len()
    );
    Ok(tree)
}

/// Parse genealogy YAML text into a `Tree`
///
/// # Errors
/// Returns an error if the text is not a valid document
pub fn parse_tree(content: &str) -> Result<Tree, serde_yaml::Error> {
    if content.trim().is_empty() {
        debug!("Empty document, using an empty tree");
        return Ok(Tree::new());
    }
    Tree::from_yaml_str(content)
}
