//! Person nodes with HTML-like table labels

use super::document::Chunk;
use super::{quote_id, RenderContext};
use crate::core::locale::{date_text, Locale};
use crate::core::models::{Event, Person};

/// Picture cell size (width, height) for Latin labels
const LATIN_PICTURE_SIZE: (u32, u32) = (40, 40);

/// Picture cell size (width, height) for CJK labels
const CJK_PICTURE_SIZE: (u32, u32) = (50, 50);

/// Render the node declaration for one person
///
/// A missing person (undescribed or dangling reference) is drawn as a
/// placeholder showing the identifier.
#[must_use]
pub fn render_person(ctx: &RenderContext, id: &str, person: Option<&Person>) -> Vec<Chunk> {
    let placeholder;
    let person = if let Some(person) = person {
        person
    } else {
        placeholder = Person::placeholder(id);
        &placeholder
    };

    let label = match ctx.locale {
        Locale::Latin => latin_label(ctx, person),
        Locale::Cjk => cjk_label(ctx, person),
    };

    let mut attributes = Vec::new();
    if let Some(href) = person.href() {
        attributes.push(format!("URL={}", quote_id(href)));
    }
    let classes: Vec<&str> = person.class_.iter().map(String::as_str).collect();
    attributes.extend(ctx.styles.apply(&classes));
    attributes.push(format!("label=<{label}>"));

    vec![
        Chunk::Line(format!("{} [", quote_id(id))),
        Chunk::block(attributes),
        Chunk::line("]"),
    ]
}

/// Birth marker: `†*` for stillborn, the date otherwise, blank when unknown
#[must_use]
pub fn birth_marker(born: &Event, locale: Locale) -> String {
    match born {
        Event::DidNotHappen => "†*".to_string(),
        event => date_text(event, locale).map_or_else(String::new, |date| match locale {
            Locale::Latin => format!("* {date}"),
            Locale::Cjk => date,
        }),
    }
}

/// Death marker: `†` when dead without a date, the date otherwise, blank if alive
#[must_use]
pub fn death_marker(died: &Event, locale: Locale) -> String {
    match died {
        Event::Happened => "†".to_string(),
        event => date_text(event, locale).map_or_else(String::new, |date| match locale {
            Locale::Latin => format!("† {date}"),
            Locale::Cjk => date,
        }),
    }
}

/// Split "Surname, Given" at the last comma into (surname, given name)
///
/// Without a comma the whole text is the surname and the given name is blank.
#[must_use]
pub fn split_name(name: &str) -> (String, String) {
    name.rsplit_once(',').map_or_else(
        || (name.trim().to_string(), " ".to_string()),
        |(surname, given)| (surname.trim().to_string(), given.trim().to_string()),
    )
}

/// Stack text one character per line for vertical CJK labels
#[must_use]
pub fn vertical_text(text: &str) -> String {
    text.trim()
        .chars()
        .map(|c| escape_html(&c.to_string()))
        .collect::<Vec<_>>()
        .join("<br/>")
}

fn picture_cell(ctx: &RenderContext, person: &Person, size: (u32, u32), attributes: &str) -> String {
    let (width, height) = size;
    person.picture().map_or_else(
        || format!("<td{attributes} width=\"{width}\" height=\"{height}\" fixedsize=\"true\"></td>"),
        |picture| {
            format!(
                "<td{attributes} width=\"{width}\" height=\"{height}\" fixedsize=\"true\"><img src=\"{}\" scale=\"TRUE\"></img></td>",
                ctx.picture_path(picture)
            )
        },
    )
}

fn latin_label(ctx: &RenderContext, person: &Person) -> String {
    let (surname, given) = split_name(person.display_name());
    let born = escape_html(&birth_marker(&person.born, Locale::Latin));
    let died = escape_html(&death_marker(&person.died, Locale::Latin));

    [
        "<table align=\"center\" border=\"0\" cellpadding=\"0\" cellspacing=\"1\">".to_string(),
        "<tr>".to_string(),
        picture_cell(ctx, person, LATIN_PICTURE_SIZE, " rowspan=\"3\""),
        format!("<td colspan=\"2\">{}</td>", escape_html(&given)),
        "</tr>".to_string(),
        "<tr>".to_string(),
        format!(
            "<td colspan=\"2\"><font point-size=\"12\" color=\"#ffffff\">{}</font></td>",
            escape_html(&surname)
        ),
        "</tr>".to_string(),
        "<tr>".to_string(),
        format!("<td align=\"left\" width=\"60\"><font point-size=\"10\" color=\"#ffffff\"> {born} </font></td>"),
        format!("<td align=\"left\" width=\"60\"><font point-size=\"10\" color=\"#ffffff\"> {died} </font></td>"),
        "</tr>".to_string(),
        "</table>".to_string(),
    ]
    .join("\n")
}

fn cjk_label(ctx: &RenderContext, person: &Person) -> String {
    let name = vertical_text(person.display_name());
    let born = vertical_text(&birth_marker(&person.born, Locale::Cjk));
    let died = vertical_text(&death_marker(&person.died, Locale::Cjk));

    let mut rows = vec![
        "<table align=\"center\" border=\"0\" cellpadding=\"2\" cellspacing=\"0\">".to_string(),
        "<tr>".to_string(),
        picture_cell(ctx, person, CJK_PICTURE_SIZE, ""),
        "</tr>".to_string(),
        "<tr>".to_string(),
        format!("<td><font point-size=\"10\">{name}</font></td>"),
        "</tr>".to_string(),
    ];
    for marker in [born, died] {
        if !marker.is_empty() {
            rows.push("<tr>".to_string());
            rows.push(format!("<td><font point-size=\"8\">{marker}</font></td>"));
            rows.push("</tr>".to_string());
        }
    }
    rows.push("</table>".to_string());
    rows.join("\n")
}

/// Escape text placed inside an HTML-like label
#[must_use]
pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
