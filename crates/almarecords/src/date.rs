//! Date codec for date-only wire fields (`birth_date`, `expiry_date`, ...).
//!
//! The wire form is `YYYY-MM-DD`. The server marks dates as UTC with a
//! trailing `Z` (`2024-03-15Z`), which decoding accepts and encoding never
//! emits.

use crate::error::{RecordError, Result};
use chrono::NaiveDate;
use log::warn;

pub const WIRE_FORMAT: &str = "%Y-%m-%d";

/// Anything a date field can be set from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateInput {
    Date(NaiveDate),
    Wire(String),
    Absent,
}

impl From<NaiveDate> for DateInput {
    fn from(date: NaiveDate) -> Self {
        DateInput::Date(date)
    }
}

impl From<Option<NaiveDate>> for DateInput {
    fn from(date: Option<NaiveDate>) -> Self {
        date.map_or(DateInput::Absent, DateInput::Date)
    }
}

impl From<&str> for DateInput {
    fn from(wire: &str) -> Self {
        DateInput::Wire(wire.to_string())
    }
}

impl From<String> for DateInput {
    fn from(wire: String) -> Self {
        DateInput::Wire(wire)
    }
}

/// Parse a wire date. Empty input is absent, not an error.
pub fn decode(wire: &str) -> Result<Option<NaiveDate>> {
    let trimmed = wire.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    let bare = trimmed.strip_suffix('Z').unwrap_or(trimmed);
    NaiveDate::parse_from_str(bare, WIRE_FORMAT)
        .map(Some)
        .map_err(|_| RecordError::DateFormat {
            value: wire.to_string(),
        })
}

/// Render a date in wire form. Absent renders as the empty string.
///
/// Strings that already parse are normalized; anything else passes through
/// verbatim.
pub fn encode(input: impl Into<DateInput>) -> String {
    match input.into() {
        DateInput::Date(date) => date.format(WIRE_FORMAT).to_string(),
        DateInput::Absent => String::new(),
        DateInput::Wire(wire) => match decode(&wire) {
            Ok(Some(date)) => date.format(WIRE_FORMAT).to_string(),
            Ok(None) => String::new(),
            Err(_) => {
                warn!("passing through unparseable date '{wire}'");
                wire
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn decode_empty_is_absent() {
        assert_eq!(decode("").unwrap(), None);
        assert_eq!(decode("   ").unwrap(), None);
    }

    #[test]
    fn decode_plain_date() {
        assert_eq!(decode("2024-03-15").unwrap(), Some(ymd(2024, 3, 15)));
    }

    #[test]
    fn decode_accepts_utc_marker() {
        assert_eq!(decode("2030-01-01Z").unwrap(), Some(ymd(2030, 1, 1)));
    }

    #[test]
    fn decode_rejects_garbage() {
        match decode("not-a-date") {
            Err(RecordError::DateFormat { value }) => assert_eq!(value, "not-a-date"),
            other => panic!("expected DateFormat, got {:?}", other),
        }
    }

    #[test]
    fn decode_rejects_time_component() {
        assert!(decode("2024-03-15T10:00:00Z").is_err());
        assert!(decode("2024-02-30").is_err());
    }

    #[test]
    fn encode_absent_is_empty() {
        assert_eq!(encode(None::<NaiveDate>), "");
        assert_eq!(encode(DateInput::Absent), "");
        assert_eq!(encode(""), "");
    }

    #[test]
    fn encode_date() {
        assert_eq!(encode(ymd(2024, 3, 5)), "2024-03-05");
    }

    #[test]
    fn encode_string_is_idempotent() {
        assert_eq!(encode("2024-03-15"), "2024-03-15");
        assert_eq!(encode(encode("2024-03-15")), "2024-03-15");
        assert_eq!(encode("2024-03-15Z"), "2024-03-15");
    }

    #[test]
    fn encode_unparseable_string_passes_through() {
        assert_eq!(encode("someday"), "someday");
    }
}
