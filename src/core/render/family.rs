//! Family clusters: house banner, nested families, union and sibling junctions

use super::document::{lines, Chunk};
use super::person::escape_html;
use super::{quote_id, RenderContext};
use crate::core::locale::{date_text, Locale};
use crate::core::models::{Event, Family};
use crate::core::styles::{style_set, StyleSet, StyleValue};
use crate::debug;

/// Edge and junction colors, picked by a family's index among its siblings
pub const FAMILY_COLORS: [&str; 8] = [
    "#1abc9c", "#2ecc71", "#3498db", "#9b59b6", "#34495e", "#f1c40f", "#e67e22", "#e74c3c",
];

/// Width of the comment rulers
const RULER_WIDTH: usize = 76;

/// Color assigned to the family at `path`
#[must_use]
pub fn family_color(path: &[usize]) -> &'static str {
    let index = path.last().copied().unwrap_or(0);
    FAMILY_COLORS[index % FAMILY_COLORS.len()]
}

/// Identifier suffix for the family at `path` (e.g. `0_2_1`)
#[must_use]
pub fn family_slug(path: &[usize]) -> String {
    path.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("_")
}

/// Render one family cluster, its nested families first
#[must_use]
pub fn render_family(ctx: &RenderContext, family: &Family, path: &[usize]) -> Vec<Chunk> {
    let slug = family_slug(path);
    let color = family_color(path);
    debug!(
        "Family {slug}: {} parent(s), {} child(ren), {} nested",
        family.parents.len(),
        family.children.len(),
        family.families.len()
    );

    let mut body = lines(ctx.styles.apply(&[":family"]));
    body.push(Chunk::blank());
    body.extend(render_house(ctx, family, path));

    for (index, nested) in family.families.iter().enumerate() {
        let mut nested_path = path.to_vec();
        nested_path.push(index);
        body.extend(render_family(ctx, nested, &nested_path));
    }

    body.push(Chunk::Line(format!(
        "# Family [{}] -> [{}]",
        joint_ids(&family.parents),
        joint_ids(&family.children)
    )));
    body.push(Chunk::Line(format!("# {}", "-".repeat(RULER_WIDTH - 2))));
    body.push(Chunk::blank());
    body.extend(render_parents(ctx, family, &slug, color));
    body.extend(render_link(ctx, family, &slug, color));
    body.extend(render_children(ctx, family, &slug, color));

    vec![
        Chunk::Line(format!("subgraph cluster_family_{slug} {{")),
        Chunk::Block(body),
        Chunk::line("}"),
        Chunk::blank(),
    ]
}

fn render_house(ctx: &RenderContext, family: &Family, path: &[usize]) -> Vec<Chunk> {
    let Some(house) = family.house.as_deref().filter(|house| !house.is_empty()) else {
        return Vec::new();
    };

    let ruler = "#".repeat(RULER_WIDTH);
    let dotted_path = path
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(".");
    let background = if path.len() % 2 == 0 { "#fafafa" } else { "#f4f4f4" };

    let mut chunks = vec![
        Chunk::line(ruler.clone()),
        Chunk::Line(format!("# House {dotted_path} - {house}")),
        Chunk::line(ruler),
        Chunk::blank(),
        Chunk::Line(format!("label=<<b>{}</b>>", escape_html(house))),
    ];
    chunks.extend(lines(
        ctx.styles
            .apply_post(&[":house"], &style_set([("color", background.into())])),
    ));
    chunks.push(Chunk::blank());
    chunks
}

fn render_parents(ctx: &RenderContext, family: &Family, slug: &str, color: &str) -> Vec<Chunk> {
    if family.parents.is_empty() {
        return vec![Chunk::line("# No parents")];
    }

    let union = format!("union_{slug}");
    let mut attributes = Vec::new();
    let state = union_label(family, ctx.locale);
    if !state.is_empty() {
        attributes.push(format!("xlabel=\"{state}\""));
    }
    attributes.extend(ctx.styles.apply_pre(&[":union"], &fill(color)));

    vec![
        Chunk::Line(format!("{union} [")),
        Chunk::block(attributes),
        Chunk::line("]"),
        Chunk::blank(),
        Chunk::Line(format!("{{{}}} -> {union} [", quoted_ids(&family.parents))),
        Chunk::block(ctx.styles.apply_pre(&[":parent-link"], &stroke(color))),
        Chunk::line("]"),
    ]
}

fn render_link(ctx: &RenderContext, family: &Family, slug: &str, color: &str) -> Vec<Chunk> {
    if family.parents.is_empty() || family.children.is_empty() {
        return Vec::new();
    }

    vec![
        Chunk::Line(format!("union_{slug} -> siblings_{slug} [")),
        Chunk::block(
            ctx.styles
                .apply_pre(&[":parent-child-link"], &stroke(color)),
        ),
        Chunk::line("]"),
    ]
}

fn render_children(ctx: &RenderContext, family: &Family, slug: &str, color: &str) -> Vec<Chunk> {
    if family.children.is_empty() {
        return vec![Chunk::line("# No children")];
    }

    let siblings = format!("siblings_{slug}");
    vec![
        Chunk::Line(format!("{siblings} [")),
        Chunk::block(ctx.styles.apply_pre(&[":children"], &fill(color))),
        Chunk::line("]"),
        Chunk::Line(format!(
            "{siblings} -> {{{}}} [",
            quoted_ids(&family.children)
        )),
        Chunk::block(ctx.styles.apply_pre(&[":child-link"], &stroke(color))),
        Chunk::line("]"),
    ]
}

/// Marriage and divorce markers shown beside the union node, one per line
#[must_use]
pub fn union_label(family: &Family, locale: Locale) -> String {
    let married = match &family.married {
        Event::DidNotHappen => Some("⚯".to_string()),
        event => date_text(event, locale).map(|date| format!("⚭ {date}")),
    };
    let divorced = match &family.divorced {
        Event::Happened => Some("⚮".to_string()),
        event => date_text(event, locale).map(|date| format!("⚮ {date}")),
    };

    [married, divorced]
        .into_iter()
        .flatten()
        .collect::<Vec<_>>()
        .join("\n")
}

fn joint_ids(ids: &[String]) -> String {
    let joined = ids
        .iter()
        .filter(|id| !id.is_empty())
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ");
    if joined.is_empty() {
        "none".to_string()
    } else {
        joined
    }
}

fn quoted_ids(ids: &[String]) -> String {
    ids.iter()
        .map(|id| quote_id(id))
        .collect::<Vec<_>>()
        .join(", ")
}

fn fill(color: &str) -> StyleSet {
    style_set([("fillcolor", StyleValue::from(color))])
}

fn stroke(color: &str) -> StyleSet {
    style_set([("color", StyleValue::from(color))])
}
