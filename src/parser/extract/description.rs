use std::sync::LazyLock;

use scraper::{Html, Selector};

use crate::error::ExtractError;
use crate::parser::extract::multiline_text_from;

static PARAGRAPH: LazyLock<Selector> = LazyLock::new(|| Selector::parse("p").unwrap());

/// Extract the long description from a fetched detail page: its first
/// paragraph, with `<br>`s rendered as newlines and other inline tags kept
/// as literal markup.
pub fn first_paragraph(html: &str) -> Result<String, ExtractError> {
    let doc = Html::parse_document(html);
    let p = doc
        .select(&PARAGRAPH)
        .next()
        .ok_or_else(|| ExtractError::malformed("description", "detail page has no paragraph"))?;
    Ok(multiline_text_from(p, 0))
}

// ── Tests ──
