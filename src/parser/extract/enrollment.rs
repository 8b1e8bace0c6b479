use std::sync::LazyLock;

use scraper::{ElementRef, Node, Selector};

use crate::error::ExtractError;
use crate::parser::extract::collapse_ws;

static SPAN: LazyLock<Selector> = LazyLock::new(|| Selector::parse("span").unwrap());

/// Parse the cell's trailing "enrolled / limit / waiting" text. The counts
/// always sit in the cell's last content node; anything else there means
/// the page layout itself changed.
pub fn counts(cell: ElementRef<'_>) -> Result<(u32, u32, u32), ExtractError> {
    let last = cell
        .children()
        .last()
        .ok_or(ExtractError::Unreachable("enrollment cell has no content"))?;
    let Node::Text(text) = last.value() else {
        return Err(ExtractError::Unreachable(
            "enrollment cell does not end with a text node",
        ));
    };

    let tokens: Vec<&str> = text.text.split_whitespace().collect();
    let [enrolled, "/", limit, "/", waiting] = tokens[..] else {
        return Err(ExtractError::malformed(
            "enrollment counts",
            format!("expected `N / N / N`, got {:?}", collapse_ws(&text.text)),
        ));
    };

    let parse = |what: &str, token: &str| {
        token.parse::<u32>().map_err(|_| {
            ExtractError::malformed(
                "enrollment counts",
                format!("{what} count {token:?} is not a number"),
            )
        })
    };
    Ok((
        parse("enrolled", enrolled)?,
        parse("limit", limit)?,
        parse("waiting", waiting)?,
    ))
}

/// Collapsed text of the cell's status marker ("Open Consent Req.").
pub fn status(cell: ElementRef<'_>) -> Result<String, ExtractError> {
    let span = cell.select(&SPAN).next().ok_or_else(|| {
        ExtractError::malformed("enrollment status", "no status marker in enrollment cell")
    })?;
    Ok(collapse_ws(&span.text().collect::<String>()))
}

// ── Tests ──
