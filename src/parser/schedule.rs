use scraper::{ElementRef, Node};

use crate::course::Meeting;
use crate::error::ExtractError;
use crate::parser::extract::collapse_ws;

/// Split a schedule cell's mixed text/tag stream into one `Meeting` per
/// `<hr>`-delimited group.
///
/// A cell typically looks like:
///
/// ```text
/// <strong>Lecture:</strong>
/// <br>Block D
/// <br>M,W,Th 11:00 AM–11:50 AM
/// <br>Golding Judaica Center110
/// <hr>
/// <strong>Recitation:</strong>
/// <br>M 6:30 PM–9:20 PM
/// <br>Gerstenzang 123
/// ```
///
/// The block line and the label are both optional, so text tokens are
/// classified by position: the first token (or the one right after a block
/// line) is the time range, anything later is the location. Positional
/// rather than semantic on purpose; it holds for this markup dialect and
/// nothing more.
pub fn parse_schedule(cell: ElementRef<'_>) -> Result<Vec<Meeting>, ExtractError> {
    let mut schedule = Vec::new();
    let mut meeting = Meeting::default();
    // Counts non-empty text tokens within the current meeting.
    let mut pos = 0usize;
    let mut saw_token = false;

    for child in cell.children() {
        match child.value() {
            Node::Element(el) if el.name() == "hr" => {
                schedule.push(std::mem::take(&mut meeting));
                pos = 0;
            }
            Node::Element(el) if el.name() == "strong" => {
                if let Some(label) = ElementRef::wrap(child) {
                    let text = collapse_ws(&label.text().collect::<String>());
                    if !text.is_empty() {
                        meeting.info = Some(text);
                        saw_token = true;
                    }
                }
            }
            Node::Text(text) => {
                let token = collapse_ws(&text.text);
                if token.is_empty() {
                    continue;
                }
                saw_token = true;
                let slot = pos;
                pos += 1;

                if let Some(code) = token.strip_prefix("Block ") {
                    meeting.block = Some(code.to_string());
                } else if slot == 0 || (meeting.block.is_some() && slot == 1) {
                    meeting.times = Some(token);
                } else {
                    meeting.location = Some(token);
                }
            }
            // <br> and anything else are transparent separators.
            _ => {}
        }
    }
    schedule.push(meeting);

    if !saw_token {
        return Err(ExtractError::MalformedSchedule);
    }
    Ok(schedule)
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::{Html, Selector};

    fn parse(cell_html: &str) -> Result<Vec<Meeting>, ExtractError> {
        let html = Html::parse_fragment(&format!("<table><tr><td>{cell_html}</td></tr></table>"));
        let sel = Selector::parse("td").unwrap();
        let td = html.select(&sel).next().unwrap();
        parse_schedule(td)
    }

    #[test]
    fn no_rule_tag_yields_one_meeting() {
        let meetings = parse("Block\u{a0}D<br>M,W,Th 11:00 AM\u{2013}11:50 AM<br>Golding 110").unwrap();
        assert_eq!(meetings.len(), 1);
        assert_eq!(meetings[0].block.as_deref(), Some("D"));
        assert_eq!(
            meetings[0].times.as_deref(),
            Some("M,W,Th 11:00 AM\u{2013}11:50 AM")
        );
        assert_eq!(meetings[0].location.as_deref(), Some("Golding 110"));
        assert_eq!(meetings[0].info, None);
    }

    #[test]
    fn times_and_location_without_block_line() {
        let meetings = parse("M 6:30 PM\u{2013}9:20 PM<br>Gerstenzang 123").unwrap();
        assert_eq!(meetings.len(), 1);
        assert_eq!(meetings[0].block, None);
        assert_eq!(meetings[0].times.as_deref(), Some("M 6:30 PM\u{2013}9:20 PM"));
        assert_eq!(meetings[0].location.as_deref(), Some("Gerstenzang 123"));
    }

    #[test]
    fn rule_tags_split_meetings_in_order() {
        let meetings = parse(
            "<strong>Lecture:</strong><br>Block\u{a0}D<br>M,W 11:00 AM\u{2013}11:50 AM<br>Golding 110\
             <hr><strong>Recitation:</strong><br>M 6:30 PM\u{2013}9:20 PM<br>Gerstenzang 123\
             <hr>Th 3:00 PM\u{2013}3:50 PM",
        )
        .unwrap();
        assert_eq!(meetings.len(), 3);
        assert_eq!(meetings[0].info.as_deref(), Some("Lecture:"));
        assert_eq!(meetings[0].block.as_deref(), Some("D"));
        assert_eq!(meetings[1].info.as_deref(), Some("Recitation:"));
        assert_eq!(meetings[1].block, None);
        assert_eq!(meetings[1].location.as_deref(), Some("Gerstenzang 123"));
        assert_eq!(meetings[2].times.as_deref(), Some("Th 3:00 PM\u{2013}3:50 PM"));
    }

    #[test]
    fn fresh_meeting_after_each_rule_tag() {
        // The second meeting must not inherit the first one's fields.
        let meetings = parse("Block\u{a0}S3<br>W 2:00 PM\u{2013}4:50 PM<br>Shapiro LL16<hr>TBA").unwrap();
        assert_eq!(meetings.len(), 2);
        assert_eq!(meetings[1].block, None);
        assert_eq!(meetings[1].times.as_deref(), Some("TBA"));
        assert_eq!(meetings[1].location, None);
        assert_eq!(meetings[1].info, None);
    }

    #[test]
    fn label_only_meeting_is_valid() {
        let meetings = parse("<strong>See instructor.</strong>").unwrap();
        assert_eq!(meetings.len(), 1);
        assert_eq!(meetings[0].info.as_deref(), Some("See instructor."));
        assert_eq!(meetings[0].times, None);
        assert_eq!(meetings[0].location, None);
    }

    #[test]
    fn empty_fragment_is_malformed() {
        let err = parse("  \n  <br> ").unwrap_err();
        assert!(matches!(err, ExtractError::MalformedSchedule));
        assert!(!err.is_fatal());
    }
}
