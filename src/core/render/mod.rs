//! Graphviz generator for family trees
//!
//! Walks the family tree and produces a `digraph` with one invisible cluster
//! per family, a union node per couple, a sibling junction per group of
//! children, and one HTML-like table node per person.

pub mod document;
pub mod family;
pub mod person;

pub use document::{Chunk, GraphDocument};

use crate::core::locale::{derive_document_locale, Locale};
use crate::core::models::Tree;
use crate::core::styles::StyleResolver;
use crate::{debug, warn};
use document::lines;

/// Default directory that picture filenames are resolved against
pub const DEFAULT_PICS_DIR: &str = "pics";

/// Options for a single render
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Label locale; derived from the people's names when `None`
    pub locale: Option<Locale>,
    /// Directory prefix for pictures
    pub pics_dir: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            locale: None,
            pics_dir: DEFAULT_PICS_DIR.to_string(),
        }
    }
}

/// Everything a render step needs, fixed for the duration of one render
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    /// Document being rendered
    pub tree: &'a Tree,
    /// Effective locale for every name and date in this render
    pub locale: Locale,
    /// Directory prefix for pictures
    pub pics_dir: &'a str,
    /// Style cascade over the document's overrides
    pub styles: StyleResolver<'a>,
}

impl<'a> RenderContext<'a> {
    /// Create a context with an already-decided locale
    #[must_use]
    pub fn new(tree: &'a Tree, locale: Locale, pics_dir: &'a str) -> Self {
        Self {
            tree,
            locale,
            pics_dir,
            styles: StyleResolver::new(tree),
        }
    }

    /// Path of a picture file as seen from the output document
    #[must_use]
    pub fn picture_path(&self, file: &str) -> String {
        let dir = self.pics_dir.trim_end_matches('/');
        if dir.is_empty() {
            file.to_string()
        } else {
            format!("{dir}/{file}")
        }
    }
}

/// Render a tree with default options, optionally forcing the locale
#[must_use]
pub fn render(tree: &Tree, locale: Option<Locale>) -> GraphDocument {
    render_with(
        tree,
        &RenderOptions {
            locale,
            ..RenderOptions::default()
        },
    )
}

/// Render a tree into a Graphviz document
///
/// The locale is decided once: the explicit option if given, otherwise the
/// one derived from the document. Rendering never fails; people referenced by
/// families but missing from `people` get a placeholder node.
#[must_use]
pub fn render_with(tree: &Tree, options: &RenderOptions) -> GraphDocument {
    let locale = options
        .locale
        .unwrap_or_else(|| derive_document_locale(tree));
    debug!(
        "Rendering {} people and {} top-level families (locale: {locale})",
        tree.people.len(),
        tree.families.len()
    );

    let ctx = RenderContext::new(tree, locale, &options.pics_dir);
    let styles = ctx.styles;

    let mut body = vec![
        Chunk::line("edge ["),
        Chunk::block(styles.apply(&[":edge"])),
        Chunk::line("]"),
        Chunk::blank(),
        Chunk::line("node ["),
        Chunk::block(styles.apply(&[":node"])),
        Chunk::line("]"),
        Chunk::blank(),
    ];
    body.extend(lines(styles.apply(&[":digraph"])));
    body.push(Chunk::blank());

    for (index, family) in tree.families.iter().enumerate() {
        body.extend(family::render_family(&ctx, family, &[index]));
    }

    for (id, person) in &tree.people {
        body.extend(person::render_person(&ctx, id, person.as_ref()));
    }

    for id in tree.dangling_ids() {
        warn!("Person '{id}' is referenced by a family but not listed under people");
        body.extend(person::render_person(&ctx, id, None));
    }

    GraphDocument::new(vec![
        Chunk::line("digraph G {"),
        Chunk::Block(body),
        Chunk::line("}"),
    ])
}

/// Quote a node identifier for Graphviz
#[must_use]
pub fn quote_id(id: &str) -> String {
    format!("\"{}\"", id.replace('"', "\\\""))
}
