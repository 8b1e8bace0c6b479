use std::sync::LazyLock;

use regex::Regex;
use scraper::{ElementRef, Selector};

use crate::error::ExtractError;
use crate::parser::extract::collapse_ws;

// "119A" → number 119, group "A"; the group may be empty.
static NUMBER_GROUP_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^(\d+)([^0-9]*)").unwrap());
// The detail-page fragment is tucked into a javascript: href, single-quoted.
static DETAIL_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"'(course?[^']+)'").unwrap());
static ANCHOR: LazyLock<Selector> = LazyLock::new(|| Selector::parse("a").unwrap());

#[derive(Debug, PartialEq)]
pub struct CourseId {
    pub subject: String,
    pub number: u32,
    pub group: String,
    pub section: String,
}

/// Split the identity cell's text ("COSI 119A 1 Syllabus") into subject,
/// number, group, and section. Trailing tokens such as the syllabus link
/// text are ignored.
pub fn course_id(cell: ElementRef<'_>) -> Result<CourseId, ExtractError> {
    let text: String = cell.text().collect();
    let mut parts = text.split_whitespace();
    let (Some(subject), Some(number_group), Some(section)) =
        (parts.next(), parts.next(), parts.next())
    else {
        return Err(ExtractError::malformed(
            "course id",
            format!("expected `SUBJ 000X 0`, got {:?}", collapse_ws(&text)),
        ));
    };

    let caps = NUMBER_GROUP_RE.captures(number_group).ok_or_else(|| {
        ExtractError::malformed(
            "course number",
            format!("no numeric prefix in {number_group:?}"),
        )
    })?;
    let number = caps[1].parse().map_err(|_| {
        ExtractError::malformed("course number", format!("{} out of range", &caps[1]))
    })?;

    Ok(CourseId {
        subject: subject.to_string(),
        number,
        group: caps[2].to_string(),
        section: section.to_string(),
    })
}

/// Href of the first link whose visible text mentions a syllabus.
pub fn syllabus(cell: ElementRef<'_>) -> Option<String> {
    cell.select(&ANCHOR)
        .find(|a| a.text().collect::<String>().contains("Syllabus"))
        .and_then(|a| a.value().attr("href"))
        .map(str::to_string)
}

/// Relative detail-page path embedded in the identity cell's first link,
/// e.g. "course16905-1183". Absent when the link or its pattern is missing;
/// the long description then simply stays unset.
pub fn detail_path(cell: ElementRef<'_>) -> Option<String> {
    let href = cell.select(&ANCHOR).next()?.value().attr("href")?;
    DETAIL_RE.captures(href).map(|caps| caps[1].to_string())
}

// ── Tests ──
