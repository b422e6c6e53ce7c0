//! Integration tests for rendering whole documents

use nissaga::core::loader::{load_tree, parse_tree};
use nissaga::core::locale::Locale;
use nissaga::core::models::Tree;
use nissaga::core::render::{render, render_with, RenderOptions};
use std::path::PathBuf;

fn sample(name: &str) -> Tree {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("samples")
        .join(name);
    load_tree(&path).expect("Failed to load sample")
}

fn position(text: &str, needle: &str) -> usize {
    text.find(needle)
        .unwrap_or_else(|| panic!("missing {needle:?} in:\n{text}"))
}

#[test]
fn test_document_sections_in_order() {
    let tree = parse_tree(
        r"
people:
  mom: { fullname: 'Smith, Jane' }
  kid: { fullname: 'Smith, Kid' }
families:
  - parents: [mom]
    children: [kid]
",
    )
    .unwrap();
    let text = render(&tree, None).to_text();

    assert!(text.starts_with("digraph G {\n  edge [\n"));
    assert!(text.ends_with("\n}"));

    let edge = position(&text, "  edge [");
    let node = position(&text, "  node [");
    let digraph = position(&text, "  splines=\"ortho\"");
    let family = position(&text, "  subgraph cluster_family_0 {");
    let mom = position(&text, "  \"mom\" [");
    let kid = position(&text, "  \"kid\" [");
    assert!(edge < node && node < digraph && digraph < family && family < mom && mom < kid);
}

#[test]
fn test_empty_document_renders_skeleton() {
    let tree = parse_tree("").unwrap();
    let text = render(&tree, None).to_text();
    assert!(text.contains("edge ["));
    assert!(text.contains("node ["));
    assert!(!text.contains("subgraph"));
}

#[test]
fn test_dangling_reference_gets_one_placeholder() {
    let tree = parse_tree(
        r"
people:
  mom: { fullname: 'Smith, Jane' }
families:
  - parents: [mom, ghost]
    children: [ghost]
",
    )
    .unwrap();
    let text = render(&tree, None).to_text();

    assert_eq!(text.matches("\"ghost\" [").count(), 1);
    assert!(position(&text, "\"mom\" [") < position(&text, "\"ghost\" ["));
    assert!(text.contains("{\"mom\", \"ghost\"} -> union_0 ["));
}

#[test]
fn test_undescribed_person_is_drawn_once() {
    let tree = parse_tree(
        r"
people:
  bob:
families:
  - parents: [bob]
",
    )
    .unwrap();
    let text = render(&tree, Some(Locale::Latin)).to_text();
    assert_eq!(text.matches("\"bob\" [").count(), 1);
    assert!(text.contains("# No children"));
}

#[test]
fn test_locale_does_not_leak_between_renders() {
    let cjk = sample("yamada.yaml");
    let latin = sample("simpsons.yaml");

    let first = render(&cjk, None).to_text();
    let between = render(&latin, None).to_text();
    let second = render(&cjk, None).to_text();

    assert_eq!(first, second);
    assert!(between.contains("* May 12, 1956"));
    assert!(!first.contains("* "));
}

#[test]
fn test_forced_locale_wins_over_detection() {
    let tree = sample("simpsons.yaml");
    let text = render(&tree, Some(Locale::Cjk)).to_text();
    assert!(text.contains("<font point-size=\"10\">S<br/>i<br/>m"));
    assert!(text.contains("xlabel=\"⚭ 昭和28年1月12日\""));
}

#[test]
fn test_latin_sample() {
    let text = render(&sample("simpsons.yaml"), None).to_text();

    assert!(text.contains("label=<<b>Simpson</b>>"));
    assert!(text.contains("# House 0 - Simpson"));
    assert!(text.contains("xlabel=\"⚭ Jan 12, 1953\""));
    assert!(text.contains("URL=\"https://en.wikipedia.org/wiki/Homer_Simpson\""));
    assert!(text.contains("fillcolor=\"#8e44ad\""));
    assert!(text.contains("<td colspan=\"2\">Homer Jay</td>"));
    assert!(text.contains(" † </font>"));

    // Nested families come before the enclosing family's own nodes
    let nested = position(&text, "subgraph cluster_family_0_0 {");
    let outer_union = position(&text, "{\"abraham\", \"mona\"} -> union_0 [");
    assert!(nested < outer_union);
    assert!(text.contains("siblings_0_0 -> {\"bart\", \"lisa\", \"maggie\", \"santas_little_helper\"} ["));
}

#[test]
fn test_cjk_sample() {
    let text = render(&sample("yamada.yaml"), None).to_text();

    assert!(text.contains("label=<<b>山田家</b>>"));
    assert!(text.contains("<font point-size=\"10\">山<br/>田<br/>太<br/>郎</font>"));
    assert!(text.contains("昭<br/>和<br/>6<br/>4<br/>年<br/>1<br/>月<br/>7<br/>日"));
    assert!(text.contains("令<br/>和<br/>元<br/>年"));
    assert!(text.contains("<font point-size=\"8\">†<br/>*</font>"));
    assert!(text.contains("xlabel=\"⚭ 昭和50年10月10日\n⚮ 平成2年3月31日\""));
    assert_eq!(text.matches("\"saburo\" [").count(), 1);
}

#[test]
fn test_pictures_resolve_against_pics_dir() {
    let tree = parse_tree(
        r"
people:
  ann:
    fullname: 'Lee, Ann'
    pics: [ann.jpg, ann-old.jpg]
",
    )
    .unwrap();
    let options = RenderOptions {
        locale: None,
        pics_dir: "photos".to_string(),
    };
    let text = render_with(&tree, &options).to_text();
    assert!(text.contains("<img src=\"photos/ann.jpg\" scale=\"TRUE\"></img>"));
    assert!(!text.contains("ann-old.jpg"));
}

#[test]
fn test_document_style_overrides() {
    let tree = parse_tree(
        r"
styles:
  ':node':
    shape: ellipse
    margin: ~
",
    )
    .unwrap();
    let text = render(&tree, None).to_text();
    assert!(text.contains("shape=\"ellipse\""));
    assert!(!text.contains("shape=\"box\""));
    assert!(!text.contains("margin="));
}
