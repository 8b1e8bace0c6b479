pub mod extract;
pub mod rows;
pub mod schedule;

use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};
use tracing::warn;

use crate::error::ExtractError;
use extract::RowCourse;

static CLASSES_TABLE: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("table#classes-list").unwrap());
static TABLE_ROW: LazyLock<Selector> = LazyLock::new(|| Selector::parse("tr").unwrap());

#[derive(Debug)]
pub struct PageCourses {
    pub rows: Vec<RowCourse>,
    /// Rows that failed a field extractor and were skipped.
    pub dropped: usize,
}

/// Extract every course row from one results page. A row-scoped failure
/// drops just that row; a fatal extractor error (markup-layout change)
/// aborts the whole page.
pub fn extract_page(html: &str) -> Result<PageCourses, ExtractError> {
    let doc = Html::parse_document(html);

    let trs: Vec<ElementRef<'_>> = match doc.select(&CLASSES_TABLE).next() {
        Some(table) => table.select(&TABLE_ROW).collect(),
        None => {
            warn!("classes table not found; scanning whole document for rows");
            doc.select(&TABLE_ROW).collect()
        }
    };

    let mut page = PageCourses {
        rows: Vec::new(),
        dropped: 0,
    };
    for tr in trs {
        let Some(cells) = rows::classify_row(tr) else {
            continue;
        };
        match extract::assemble(&cells) {
            Ok(row) => page.rows.push(row),
            Err(e) if e.is_fatal() => return Err(e),
            Err(e) => {
                warn!("dropping row: {e}");
                page.dropped += 1;
            }
        }
    }
    Ok(page)
}

// ── Tests ──
