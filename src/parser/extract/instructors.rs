use std::sync::LazyLock;

use regex::Regex;
use scraper::{ElementRef, Selector};

use crate::course::Instructor;
use crate::error::ExtractError;
use crate::parser::extract::collapse_ws;

static EMPLID_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"emplid=([0-9a-f]+)").unwrap());
static ANCHOR: LazyLock<Selector> = LazyLock::new(|| Selector::parse("a").unwrap());

/// One `Instructor` per profile link in the cell. Staff-less offerings have
/// no links at all, which is an empty list, not an error.
pub fn extract(cell: ElementRef<'_>) -> Result<Vec<Instructor>, ExtractError> {
    let mut instructors = Vec::new();
    for a in cell.select(&ANCHOR) {
        let href = a
            .value()
            .attr("href")
            .ok_or_else(|| ExtractError::malformed("instructor", "profile link without href"))?;
        let id = EMPLID_RE
            .captures(href)
            .map(|caps| caps[1].to_string())
            .ok_or_else(|| {
                ExtractError::malformed("instructor", format!("no employee id in {href:?}"))
            })?;
        instructors.push(Instructor {
            name: collapse_ws(&a.text().collect::<String>()),
            id,
        });
    }
    Ok(instructors)
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
    fn one_instructor_per_link() {
        let html = fragment(
            "<a href=\"person.html?emplid=69957fcf6528db65\">Salas,\n  R. Pito</a><br>\
             <a href=\"person.html?emplid=0123abcd\">Hickey, Timothy</a>",
        );
        let instructors = extract(cell_of(&html)).unwrap();
        assert_eq!(
            instructors,
            vec![
                Instructor {
                    name: "Salas, R. Pito".to_string(),
                    id: "69957fcf6528db65".to_string(),
                },
                Instructor {
                    name: "Hickey, Timothy".to_string(),
                    id: "0123abcd".to_string(),
                },
            ]
        );
    }

    #[test]
    fn no_links_yields_empty_list() {
        let html = fragment("Staff");
        assert!(extract(cell_of(&html)).unwrap().is_empty());
    }

    #[test]
    fn link_without_employee_id_is_malformed() {
        let html = fragment("<a href=\"person.html?name=nobody\">Nobody</a>");
        let err = extract(cell_of(&html)).unwrap_err();
        assert!(matches!(err, ExtractError::MalformedField { field: "instructor", .. }));
    }
}
