//! Query parsing for sensor-class selection (`/sensor?class=<int>`).
//!
//! The query is scanned as generic `&`-separated key-value pairs, so the
//! `class` key may appear at any offset and alongside other pairs. A
//! narrow byte-length window is kept as a cheap sanity filter applied
//! before any parsing, and before the registry is consulted.

/// Shortest accepted query: `class=0`.
pub const QUERY_MIN_LEN: usize = 7;
/// Longest accepted query; anything beyond this is rejected unread.
pub const QUERY_MAX_LEN: usize = 48;

/// Reasons a selection query is rejected. All map to a bad-request
/// response.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum QueryError {
    /// Query byte-length outside [`QUERY_MIN_LEN`]..=[`QUERY_MAX_LEN`].
    #[error("query length {0} outside accepted range")]
    LengthOutOfRange(usize),
    /// No `class=` pair present.
    #[error("missing class key")]
    MissingClassKey,
    /// The `class` value is empty, non-decimal, or exceeds one byte.
    #[error("invalid class value: {0:?}")]
    InvalidClassValue(String),
}

/// Extract the numeric class code from a selection query.
///
/// Accepts an optional leading `&` (some stacks hand the raw option
/// bytes over separator included).
///
/// # Errors
///
/// Returns [`QueryError`] on any length, shape, or value failure.
pub fn parse_class_query(query: &str) -> Result<u8, QueryError> {
    let len = query.len();
    if !(QUERY_MIN_LEN..=QUERY_MAX_LEN).contains(&len) {
        return Err(QueryError::LengthOutOfRange(len));
    }

    for pair in query.trim_start_matches('&').split('&') {
        let Some((key, value)) = pair.split_once('=') else {
            continue;
        };
        if key != "class" {
            continue;
        }
        if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
            return Err(QueryError::InvalidClassValue(value.to_string()));
        }
        return value
            .parse::<u8>()
            .map_err(|_| QueryError::InvalidClassValue(value.to_string()));
    }

    Err(QueryError::MissingClassKey)
}
