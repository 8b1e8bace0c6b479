use scraper::ElementRef;

/// Substrings identifying the column-header row, matched against the first
/// three cells in order.
const HEADER_LABELS: [&str; 3] = ["Class #", "Course #", "Course Title"];

/// Return a row's direct `<td>` children, or `None` when the row is not a
/// data row (too few cells, or the header row). Rejection is silent; the
/// results table carries header and spacer rows by design.
pub fn classify_row<'a>(tr: ElementRef<'a>) -> Option<Vec<ElementRef<'a>>> {
    let cells: Vec<ElementRef<'a>> = tr
        .children()
        .filter_map(ElementRef::wrap)
        .filter(|el| el.value().name() == "td")
        .collect();

    if cells.len() < 6 {
        return None;
    }

    let is_header = cells
        .iter()
        .zip(HEADER_LABELS)
        .all(|(cell, label)| cell.text().collect::<String>().contains(label));
    if is_header {
        return None;
    }

    Some(cells)
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::{Html, Selector};

    fn classify_cell_count(row_html: &str) -> Option<usize> {
        let html = Html::parse_fragment(&format!("<table>{row_html}</table>"));
        let sel = Selector::parse("tr").unwrap();
        let tr = html.select(&sel).next().unwrap();
        classify_row(tr).map(|cells| cells.len())
    }

    #[test]
    fn data_row_with_seven_cells_accepted() {
        let row = "<tr><td>16905</td><td>COSI 119A 1</td><td>Robotics</td>\
                   <td>W 2:00</td><td>4 / 10 / 0</td><td>Salas</td><td>Books</td></tr>";
        assert_eq!(classify_cell_count(row), Some(7));
    }

    #[test]
    fn short_row_rejected() {
        assert_eq!(classify_cell_count("<tr><td>a</td><td>b</td><td>c</td></tr>"), None);
        assert_eq!(classify_cell_count("<tr><td colspan=\"7\"></td></tr>"), None);
    }

    #[test]
    fn header_row_rejected() {
        let row = "<tr><td>Class #</td><td>Course #</td><td>Course Title</td>\
                   <td>Time / Location</td><td>Enrollment</td><td>Instructor(s)</td><td>Books</td></tr>";
        assert_eq!(classify_cell_count(row), None);
    }

    #[test]
    fn header_labels_with_extra_text_still_rejected() {
        let row = "<tr><td>&nbsp;Class #&nbsp;</td><td> Course # </td><td>Course Title / Requirements</td>\
                   <td>x</td><td>x</td><td>x</td></tr>";
        assert_eq!(classify_cell_count(row), None);
    }

    #[test]
    fn header_like_first_cell_alone_is_not_a_header() {
        // All three labels must match before a row is treated as the header.
        let row = "<tr><td>Class #1 meets</td><td>COSI 1 1</td><td>Intro</td>\
                   <td>x</td><td>x</td><td>x</td></tr>";
        assert_eq!(classify_cell_count(row), Some(6));
    }
}
