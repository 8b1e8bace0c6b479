use thiserror::Error;

/// Failures raised while extracting fields from one table row.
///
/// `MalformedField` and `MalformedSchedule` are row-scoped: the page
/// extractor drops the offending row and keeps going. `Unreachable` means a
/// structural assumption about the markup no longer holds, so nothing on
/// the page can be trusted and the crawl must stop.
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("malformed {field} field: {reason}")]
    MalformedField { field: &'static str, reason: String },

    #[error("schedule fragment has no parseable tokens")]
    MalformedSchedule,

    #[error("markup layout changed: {0}")]
    Unreachable(&'static str),
}

impl ExtractError {
    pub fn malformed(field: &'static str, reason: impl Into<String>) -> Self {
        ExtractError::MalformedField {
            field,
            reason: reason.into(),
        }
    }

    pub fn is_fatal(&self) -> bool {
        matches!(self, ExtractError::Unreachable(_))
    }
}

/// A failed page or detail request. Always fatal for the crawl run; there
/// is no automatic retry.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("GET {url} returned {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error(transparent)]
    Transport(#[from] reqwest::Error),
}
