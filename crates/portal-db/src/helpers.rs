//! Row-to-record parsing helpers.
//!
//! Every repo converts `libsql::Row` (column-indexed) into typed records.
//! These helpers isolate the parsing and handle the two datetime formats in
//! the store: RFC 3339 written by the service, and `SQLite`'s
//! `YYYY-MM-DD HH:MM:SS` used by hand-written rows.

use chrono::{DateTime, NaiveDate, NaiveTime, SecondsFormat, Utc};

use crate::error::DatabaseError;

/// Format used for every DATE column.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a required TEXT column as `DateTime<Utc>`.
///
/// Accepts RFC 3339, `SQLite`'s `YYYY-MM-DD HH:MM:SS`, and a bare date
/// (taken as midnight UTC).
///
/// # Errors
///
/// Returns `DatabaseError::Query` if the string matches none of the formats.
pub fn parse_datetime(s: &str) -> Result<DateTime<Utc>, DatabaseError> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }
    if let Ok(naive) = chrono::NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S") {
        return Ok(naive.and_utc());
    }
    parse_date(s)
        .map(midnight_utc)
        .map_err(|_| DatabaseError::Query(format!("Failed to parse datetime '{s}'")))
}

/// Parse a required DATE column.
///
/// # Errors
///
/// Returns `DatabaseError::Query` if the string is not `YYYY-MM-DD`.
pub fn parse_date(s: &str) -> Result<NaiveDate, DatabaseError> {
    NaiveDate::parse_from_str(s, DATE_FORMAT)
        .map_err(|e| DatabaseError::Query(format!("Failed to parse date '{s}': {e}")))
}

/// Serialize an instant the way every TIMESTAMP column stores it.
///
/// Second precision with a `Z` suffix keeps lexical and chronological order equal.
#[must_use]
pub fn format_datetime(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::Secs, true)
}

#[must_use]
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

#[must_use]
pub fn midnight_utc(date: NaiveDate) -> DateTime<Utc> {
    date.and_time(NaiveTime::MIN).and_utc()
}

/// Parse a TEXT column into a serde-deserializable enum.
///
/// Works with all portal-core enums that use `#[serde(rename_all = "snake_case")]`.
///
/// # Errors
///
/// Returns `DatabaseError::Query` if the string does not match any enum variant.
pub fn parse_enum<T: serde::de::DeserializeOwned>(s: &str) -> Result<T, DatabaseError> {
    serde_json::from_value(serde_json::Value::String(s.to_string()))
        .map_err(|e| DatabaseError::Query(format!("Failed to parse enum from '{s}': {e}")))
}

/// Read a nullable TEXT column. Returns `None` for both SQL NULL and empty string.
///
/// `row.get::<String>(idx)` on a NULL column returns an error, not `""`.
///
/// # Errors
///
/// Returns `DatabaseError` if the column read fails.
pub fn get_opt_string(row: &libsql::Row, idx: i32) -> Result<Option<String>, DatabaseError> {
    match row.get::<Option<String>>(idx)? {
        Some(s) if s.is_empty() => Ok(None),
        other => Ok(other),
    }
}

/// Read an INTEGER 0/1 column as a flag.
///
/// # Errors
///
/// Returns `DatabaseError` if the column read fails.
pub fn get_bool(row: &libsql::Row, idx: i32) -> Result<bool, DatabaseError> {
    Ok(row.get::<i64>(idx)? != 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn parses_all_datetime_shapes() {
        let expected = Utc.with_ymd_and_hms(2024, 10, 15, 9, 0, 0).unwrap();
        assert_eq!(parse_datetime("2024-10-15T09:00:00Z").unwrap(), expected);
        assert_eq!(parse_datetime("2024-10-15T14:30:00+05:30").unwrap(), expected);
        assert_eq!(parse_datetime("2024-10-15 09:00:00").unwrap(), expected);
        assert_eq!(
            parse_datetime("2024-10-15").unwrap(),
            Utc.with_ymd_and_hms(2024, 10, 15, 0, 0, 0).unwrap()
        );
        assert!(parse_datetime("yesterday").is_err());
    }

    #[test]
    fn format_datetime_sorts_lexically() {
        let a = Utc.with_ymd_and_hms(2023, 12, 31, 23, 59, 59).unwrap();
        let b = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        assert_eq!(format_datetime(&b), "2024-01-01T00:00:00Z");
        assert!(format_datetime(&a) < format_datetime(&b));
    }

    #[test]
    fn parse_enum_reads_snake_case() {
        use portal_core::enums::HolidayType;
        let parsed: HolidayType = parse_enum("restricted").unwrap();
        assert_eq!(parsed, HolidayType::Restricted);
        assert!(parse_enum::<HolidayType>("festival").is_err());
    }
}
