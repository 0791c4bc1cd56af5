//! ISO-8601 encoding for response timestamps.
//!
//! Timestamps are written in UTC with millisecond precision and a `Z`
//! designator, e.g. `2026-10-15T08:30:12.345Z`.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Deserializer, Serializer};

/// Format an instant the way every endpoint reports it.
pub fn format(instant: &DateTime<Utc>) -> String {
    instant.to_rfc3339_opts(SecondsFormat::Millis, true)
}

pub fn serialize<S>(instant: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&format(instant))
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    DateTime::parse_from_rfc3339(&raw)
        .map(|instant| instant.with_timezone(&Utc))
        .map_err(serde::de::Error::custom)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_uses_millis_and_zulu() {
        let instant = Utc.with_ymd_and_hms(2026, 10, 15, 8, 30, 12).unwrap()
            + chrono::Duration::microseconds(345_678);
        assert_eq!(format(&instant), "2026-10-15T08:30:12.345Z");
    }

    #[test]
    fn test_format_keeps_zero_millis() {
        let instant = Utc.with_ymd_and_hms(2022, 1, 1, 0, 0, 0).unwrap();
        assert_eq!(format(&instant), "2022-01-01T00:00:00.000Z");
    }

    #[test]
    fn test_deserialize_accepts_offsets() {
        #[derive(Deserialize)]
        struct Wrapper {
            #[serde(deserialize_with = "deserialize")]
            at: DateTime<Utc>,
        }

        let parsed: Wrapper =
            serde_json::from_str(r#"{"at":"2026-10-15T10:30:12.345+02:00"}"#).unwrap();
        assert_eq!(format(&parsed.at), "2026-10-15T08:30:12.345Z");

        let invalid = serde_json::from_str::<Wrapper>(r#"{"at":"yesterday"}"#);
        assert!(invalid.is_err());
    }
}
