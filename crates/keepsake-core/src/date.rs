//! Parsing and display of the loosely-formatted dates the API returns.

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeZone};

const NAIVE_TIMESTAMP_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Parse a calendar date: `YYYY-MM-DD` or any timestamp [`parse_timestamp`]
/// accepts (converted to the local date).
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
  let raw = raw.trim();
  NaiveDate::parse_from_str(raw, "%Y-%m-%d")
    .ok()
    .or_else(|| parse_timestamp(raw).map(|t| t.date_naive()))
}

/// Parse an instant: RFC 3339, or a zone-less ISO date-time read as local
/// time.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Local>> {
  let raw = raw.trim();
  if let Ok(t) = DateTime::parse_from_rfc3339(raw) {
    return Some(t.with_timezone(&Local));
  }
  NAIVE_TIMESTAMP_FORMATS
    .iter()
    .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
    .and_then(|naive| Local.from_local_datetime(&naive).earliest())
}

/// Render a date for display, falling back to the raw text.
pub fn display_date(raw: &str) -> String {
  parse_date(raw).map_or_else(|| raw.to_string(), |d| d.format("%Y-%m-%d").to_string())
}

/// Render a timestamp for display, falling back to the raw text.
pub fn display_timestamp(raw: &str) -> String {
  parse_timestamp(raw).map_or_else(
    || raw.to_string(),
    |t| t.format("%Y-%m-%d %H:%M").to_string(),
  )
}

#[cfg(test)]
mod tests {
  use chrono::{NaiveTime, Utc};

  use super::*;

  #[test]
  fn plain_dates() {
    assert_eq!(parse_date("2023-02-14"), NaiveDate::from_ymd_opt(2023, 2, 14));
    assert_eq!(parse_date(" 2023-02-14 "), NaiveDate::from_ymd_opt(2023, 2, 14));
    assert_eq!(parse_date("14/02/2023"), None);
  }

  #[test]
  fn rfc3339_keeps_the_instant() {
    let t = parse_timestamp("2024-05-01T10:00:00Z").unwrap();
    assert_eq!(
      t.with_timezone(&Utc),
      Utc.with_ymd_and_hms(2024, 5, 1, 10, 0, 0).unwrap()
    );
  }

  #[test]
  fn zone_less_timestamps_are_local() {
    let t = parse_timestamp("2024-05-01T10:30:00.123456").unwrap();
    assert_eq!(t.date_naive(), NaiveDate::from_ymd_opt(2024, 5, 1).unwrap());
    assert_eq!(
      t.time(),
      NaiveTime::from_hms_micro_opt(10, 30, 0, 123_456).unwrap()
    );
    assert!(parse_timestamp("2024-05-01 10:30:00").is_some());
  }

  #[test]
  fn unparseable_values_display_verbatim() {
    assert_eq!(display_date("someday"), "someday");
    assert_eq!(display_timestamp("yesterday"), "yesterday");
    assert_eq!(display_date("2023-02-14"), "2023-02-14");
  }
}
