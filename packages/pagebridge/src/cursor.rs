//! Opaque cursors over array indices.
//!
//! A cursor is the base64 encoding of `arrayconnection:<index>`, the scheme
//! used by `graphql-relay` array connections, so Relay-speaking clients can
//! exchange cursors with this gateway unchanged.

use crate::{PagingError, PagingResult};
use base64::{engine::general_purpose::STANDARD, Engine};

pub type Cursor = String;

const PREFIX: &str = "arrayconnection:";

/// Suffix of the cursor that sits before the first item of a result set.
const BEFORE_START: &str = "-1";

/// A position in an ordered result set, as addressed by a cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Position {
    /// Before the first item. Only page cursors for page 1 point here.
    BeforeStart,
    /// The zero-based index of an item.
    Index(u64),
}

impl Position {
    /// Offset of the first item that comes after this position, or `None`
    /// past the last addressable offset.
    pub fn offset_after(&self) -> Option<u64> {
        match self {
            Position::BeforeStart => Some(0),
            Position::Index(index) => index.checked_add(1),
        }
    }

    /// Exclusive end offset of a slice that stops before this position.
    pub fn offset_before(&self) -> u64 {
        match self {
            Position::BeforeStart => 0,
            Position::Index(index) => *index,
        }
    }
}

pub fn encode(index: u64) -> Cursor {
    STANDARD.encode(format!("{PREFIX}{index}"))
}

pub fn encode_position(position: Position) -> Cursor {
    match position {
        Position::BeforeStart => STANDARD.encode(format!("{PREFIX}{BEFORE_START}")),
        Position::Index(index) => encode(index),
    }
}

/// Decode a cursor into the array index it was produced from.
pub fn decode(cursor: &str) -> PagingResult<u64> {
    match decode_position(cursor)? {
        Position::Index(index) => Ok(index),
        Position::BeforeStart => Err(PagingError::InvalidCursor(cursor.to_string())),
    }
}

/// Decode a cursor that may also be the before-start sentinel.
pub fn decode_position(cursor: &str) -> PagingResult<Position> {
    let invalid = || PagingError::InvalidCursor(cursor.to_string());

    let bytes = STANDARD.decode(cursor).map_err(|_| invalid())?;
    let text = String::from_utf8(bytes).map_err(|_| invalid())?;
    let suffix = text.strip_prefix(PREFIX).ok_or_else(invalid)?;

    if suffix == BEFORE_START {
        return Ok(Position::BeforeStart);
    }

    // `u64::from_str` accepts a leading `+`, which `encode` never produces.
    if suffix.is_empty() || !suffix.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }

    suffix.parse::<u64>().map(Position::Index).map_err(|_| invalid())
}

/// The cursor after which `page` starts, i.e. the last index of the page
/// before it.
pub fn page_cursor(page: u64, size: u64) -> Cursor {
    match page.saturating_sub(1).saturating_mul(size) {
        0 => encode_position(Position::BeforeStart),
        start => encode(start - 1),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_encode_matches_relay_array_connection_cursors() {
        assert_eq!(encode(0), "YXJyYXljb25uZWN0aW9uOjA=");
        assert_eq!(encode(599), "YXJyYXljb25uZWN0aW9uOjU5OQ==");
    }

    #[test]
    fn test_decode_round_trips() {
        for index in [0, 1, 9, 10, 99, 100, 599, 12_345, u64::MAX] {
            assert_eq!(decode(&encode(index)).unwrap(), index);
        }
    }

    #[test]
    fn test_decode_rejects_foreign_cursors() {
        assert_matches!(decode("not a cursor"), Err(PagingError::InvalidCursor(_)));
        assert_matches!(decode(""), Err(PagingError::InvalidCursor(_)));

        let wrong_prefix = STANDARD.encode("cursor:12");
        assert_matches!(decode(&wrong_prefix), Err(PagingError::InvalidCursor(_)));

        let not_a_number = STANDARD.encode("arrayconnection:abc");
        assert_matches!(decode(&not_a_number), Err(PagingError::InvalidCursor(_)));

        let signed = STANDARD.encode("arrayconnection:+3");
        assert_matches!(decode(&signed), Err(PagingError::InvalidCursor(_)));

        let negative = STANDARD.encode("arrayconnection:-2");
        assert_matches!(decode(&negative), Err(PagingError::InvalidCursor(_)));
    }

    #[test]
    fn test_before_start_sentinel() {
        let sentinel = encode_position(Position::BeforeStart);
        assert_eq!(sentinel, "YXJyYXljb25uZWN0aW9uOi0x");
        assert_eq!(decode_position(&sentinel).unwrap(), Position::BeforeStart);
        assert_matches!(decode(&sentinel), Err(PagingError::InvalidCursor(_)));

        assert_eq!(Position::BeforeStart.offset_after(), Some(0));
        assert_eq!(Position::Index(9).offset_after(), Some(10));
        assert_eq!(Position::Index(u64::MAX).offset_after(), None);
        assert_eq!(Position::Index(9).offset_before(), 9);
    }

    #[test]
    fn test_page_cursor() {
        assert_eq!(page_cursor(1, 10), encode_position(Position::BeforeStart));
        assert_eq!(decode(&page_cursor(2, 10)).unwrap(), 9);
        assert_eq!(decode(&page_cursor(20, 30)).unwrap(), 569);
        assert_eq!(page_cursor(3, 0), encode_position(Position::BeforeStart));
    }
}
