//! Integration smoke tests for `nissaga`

use nissaga::core::render::render;
use nissaga::core::models::Tree;
use nissaga::get_version;

#[test]
fn version_is_not_empty() {
    let v = get_version();
    assert!(!v.trim().is_empty());
}

#[test]
fn empty_tree_renders() {
    let text = render(&Tree::new(), None).to_string();
    assert!(text.starts_with("digraph G {"));
}
