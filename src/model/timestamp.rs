//! Lenient timestamp deserialization for client-supplied dates.
//!
//! Accepts RFC 3339 strings, naive date-times (read as UTC), bare dates (midnight UTC)
//! and Unix epoch seconds, integer or fractional. `null` and absent fields yield `None`.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{de::Error, Deserialize, Deserializer};

const NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

#[derive(Deserialize)]
#[serde(untagged)]
enum RawTimestamp {
    Seconds(i64),
    FractionalSeconds(f64),
    Text(String),
}

/// Deserializes an optional timestamp in any of the accepted formats.
///
/// Use with `#[serde(default, deserialize_with = "...")]`.
pub fn deserialize_optional<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<RawTimestamp>::deserialize(deserializer)? {
        None => Ok(None),
        Some(raw) => parse(raw).map(Some).map_err(D::Error::custom),
    }
}

fn parse(raw: RawTimestamp) -> Result<DateTime<Utc>, String> {
    match raw {
        RawTimestamp::Seconds(secs) => DateTime::from_timestamp(secs, 0)
            .ok_or_else(|| format!("timestamp {} is out of range", secs)),
        RawTimestamp::FractionalSeconds(secs) => {
            let whole = secs.floor();
            let nanos = ((secs - whole) * 1e9).round() as u32;
            DateTime::from_timestamp(whole as i64, nanos.min(999_999_999))
                .ok_or_else(|| format!("timestamp {} is out of range", secs))
        }
        RawTimestamp::Text(text) => parse_text(text.trim()),
    }
}

fn parse_text(text: &str) -> Result<DateTime<Utc>, String> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(text) {
        return Ok(parsed.with_timezone(&Utc));
    }

    for format in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(text, format) {
            return Ok(naive.and_utc());
        }
    }

    if let Ok(date) = NaiveDate::parse_from_str(text, "%Y-%m-%d") {
        if let Some(midnight) = date.and_hms_opt(0, 0, 0) {
            return Ok(midnight.and_utc());
        }
    }

    Err(format!("'{}' is not a recognized date or date-time", text))
}
