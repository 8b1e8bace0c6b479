pub mod description;
pub mod enrollment;
pub mod identity;
pub mod instructors;
pub mod title;

use scraper::{ElementRef, Node};

use crate::course::Course;
use crate::error::ExtractError;
use crate::parser::schedule;

/// One assembled data row: the course itself plus the relative path of its
/// detail page, which the crawl pipeline follows when description fetching
/// is enabled.
#[derive(Debug)]
pub struct RowCourse {
    pub course: Course,
    pub detail_path: Option<String>,
}

/// Build one fully-populated `Course` from a classified row's cells. The
/// `description` and the `semester`/`year` stamps start out absent; the
/// crawl pipeline fills them in. Any extractor failure aborts just this
/// row.
pub fn assemble(cells: &[ElementRef<'_>]) -> Result<RowCourse, ExtractError> {
    let [class_cell, id_cell, title_cell, schedule_cell, enrollment_cell, instructor_cell, ..] =
        cells
    else {
        // The row classifier guarantees at least six cells.
        return Err(ExtractError::Unreachable(
            "row with fewer than six cells reached the assembler",
        ));
    };

    let class_text: String = class_cell.text().collect();
    let class_number = class_text.trim().parse().map_err(|_| {
        ExtractError::malformed(
            "class number",
            format!("{:?} is not a number", collapse_ws(&class_text)),
        )
    })?;

    let id = identity::course_id(*id_cell)?;
    let name = title::course_name(*title_cell)?;
    let uni_reqs = title::uni_reqs(*title_cell);
    let notes = title::notes(*title_cell, !uni_reqs.is_empty());
    let schedule = schedule::parse_schedule(*schedule_cell)?;
    let (enrolled, limit, waiting) = enrollment::counts(*enrollment_cell)?;
    let enrollment_status = enrollment::status(*enrollment_cell)?;
    let instructors = instructors::extract(*instructor_cell)?;
    let syllabus = identity::syllabus(*id_cell);
    let detail_path = identity::detail_path(*id_cell);

    Ok(RowCourse {
        course: Course {
            name,
            class_number,
            subject: id.subject,
            number: id.number,
            group: id.group,
            section: id.section,
            schedule,
            enrolled,
            limit,
            waiting,
            enrollment_status,
            syllabus,
            instructors,
            uni_reqs,
            description: None,
            notes,
            semester: None,
            year: None,
        },
        detail_path,
    })
}

/// Collapse all runs of whitespace (including NBSP) to single spaces.
pub(crate) fn collapse_ws(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Render a cell's children from `skip` onward as display text: text nodes
/// trimmed, `<br>` becomes a newline, any other tag is kept as literal
/// markup.
pub(crate) fn multiline_text_from(cell: ElementRef<'_>, skip: usize) -> String {
    let mut parts: Vec<String> = Vec::new();
    for child in cell.children().skip(skip) {
        match child.value() {
            Node::Text(text) => parts.push(text.text.trim().to_string()),
            Node::Element(el) if el.name() == "br" => parts.push("\n".to_string()),
            Node::Element(_) => {
                if let Some(el) = ElementRef::wrap(child) {
                    parts.push(el.html());
                }
            }
            _ => {}
        }
    }
    parts.concat().trim().to_string()
}

// ── Tests ──
