use std::sync::LazyLock;

use scraper::{ElementRef, Node, Selector};

use crate::error::ExtractError;
use crate::parser::extract::multiline_text_from;

static STRONG: LazyLock<Selector> = LazyLock::new(|| Selector::parse("strong").unwrap());
static REQUIREMENT: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("span.requirement").unwrap());

pub fn course_name(cell: ElementRef<'_>) -> Result<String, ExtractError> {
    let strong = cell
        .select(&STRONG)
        .next()
        .ok_or_else(|| ExtractError::malformed("course title", "no emphasis tag in title cell"))?;
    Ok(strong.text().collect::<String>().trim().to_string())
}

/// Requirement tags in document order, duplicates preserved.
pub fn uni_reqs(cell: ElementRef<'_>) -> Vec<String> {
    cell.select(&REQUIREMENT)
        .map(|span| span.text().collect::<String>().trim().to_string())
        .collect()
}

/// Free text between the requirement-list close bracket (or, with no
/// requirement tags, the title tag) and the end of the cell. Absent when no
/// boundary exists or the remainder trims to nothing.
pub fn notes(cell: ElementRef<'_>, has_reqs: bool) -> Option<String> {
    let boundary = if has_reqs {
        cell.children()
            .position(|n| matches!(n.value(), Node::Text(t) if t.text.trim() == "]"))
    } else {
        cell.children()
            .position(|n| matches!(n.value(), Node::Element(e) if e.name() == "strong"))
    }?;

    let text = multiline_text_from(cell, boundary + 1);
    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::Html;

    fn cell_of(html: &Html) -> ElementRef<'_> {
        let sel = Selector::parse("td").unwrap();
        html.select(&sel).next().unwrap()
    }

    fn fragment(cell_html: &str) -> Html {
        Html::parse_fragment(&format!("<table><tr><td>{cell_html}</td></tr></table>"))
    }

    #[test]
    fn name_from_emphasis_tag() {
        let html = fragment("<strong> Autonomous Robotics Lab </strong> [<span class=\"requirement\">sn</span>]");
        assert_eq!(course_name(cell_of(&html)).unwrap(), "Autonomous Robotics Lab");
    }

    #[test]
    fn missing_emphasis_tag_is_malformed() {
        let html = fragment("Autonomous Robotics Lab");
        let err = course_name(cell_of(&html)).unwrap_err();
        assert!(matches!(err, ExtractError::MalformedField { field: "course title", .. }));
    }

    #[test]
    fn requirement_tags_in_order_with_duplicates() {
        let html = fragment(
            "<strong>T</strong> [<span class=\"requirement\">ss</span>, \
             <span class=\"requirement\">wi</span>, <span class=\"requirement\">ss</span>]",
        );
        assert_eq!(uni_reqs(cell_of(&html)), vec!["ss", "wi", "ss"]);
    }

    #[test]
    fn no_requirement_tags_yields_empty() {
        let html = fragment("<strong>T</strong>");
        assert!(uni_reqs(cell_of(&html)).is_empty());
    }

    #[test]
    fn notes_after_requirement_close() {
        let html = fragment(
            "<strong>T</strong> [<span class=\"requirement\">sn</span>] <br> Prerequisite: COSI 101a.",
        );
        assert_eq!(
            notes(cell_of(&html), true).as_deref(),
            Some("Prerequisite: COSI 101a.")
        );
    }

    #[test]
    fn notes_after_title_when_no_reqs() {
        let html = fragment("<strong>T</strong><br>Enrollment limited to seniors.");
        assert_eq!(
            notes(cell_of(&html), false).as_deref(),
            Some("Enrollment limited to seniors.")
        );
    }

    #[test]
    fn notes_absent_when_nothing_follows_boundary() {
        let html = fragment("<strong>T</strong> [<span class=\"requirement\">sn</span>]  ");
        assert_eq!(notes(cell_of(&html), true), None);
    }

    #[test]
    fn notes_absent_without_boundary() {
        // Requirement tags claimed present, but no closing bracket text node.
        let html = fragment("<strong>T</strong> some stray text");
        assert_eq!(notes(cell_of(&html), true), None);
    }

    #[test]
    fn notes_keep_line_breaks_and_inline_markup() {
        let html = fragment(
            "<strong>T</strong><br>First line.<br>Second with <em>markup</em>.",
        );
        assert_eq!(
            notes(cell_of(&html), false).as_deref(),
            Some("First line.\nSecond with<em>markup</em>.")
        );
    }
}
