use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, TimeZone as _, Utc};
use serde::{Deserialize, Deserializer};

use crate::error::{CatalogError, Result};

/// The published date a record gets when its source leaves it out: midnight
/// UTC on 0001-01-01, the first day of the proleptic Gregorian calendar.
pub fn default_published_date() -> DateTime<Utc> {
    let date = NaiveDate::from_ymd_opt(1, 1, 1).expect("0001-01-01 is a valid date");
    Utc.from_utc_datetime(&date.and_time(NaiveTime::MIN))
}

/// Parses a published date as it appears in a catalog source. Accepts, most
/// specific first:
///
/// - an RFC 3339 date-time, e.g. `2009-04-01T00:00:00-07:00`
/// - an ISO 8601 date-time whose offset has no colon, e.g.
///   `2009-04-01T00:00:00.000-0700`
/// - a date-time without any offset, e.g. `2009-04-01T00:00:00`, which is
///   taken to be in UTC
/// - a bare date, e.g. `2009-04-01`, which is taken to be midnight UTC
///
/// The date and time must be joined by `T`, and surrounding whitespace is
/// not allowed. Offsets are folded into the returned UTC date-time.
pub fn parse_published_date(value: &str) -> Result<DateTime<Utc>> {
    if value.trim() != value || value.contains(' ') {
        return Err(CatalogError::InvalidDate { value: value.to_owned() });
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Ok(dt.to_utc());
    }
    if let Ok(dt) = DateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f%z") {
        return Ok(dt.to_utc());
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f") {
        return Ok(Utc.from_utc_datetime(&naive));
    }
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Ok(Utc.from_utc_datetime(&date.and_time(NaiveTime::MIN)));
    }

    Err(CatalogError::InvalidDate { value: value.to_owned() })
}

/// `deserialize_with` adapter for published dates. A missing field gets
/// [`default_published_date`] through `#[serde(default)]`, but an explicit
/// `null` is rejected like any other non-string value.
pub(crate) fn deserialize_published_date<'de, D>(
    deserializer: D,
) -> std::result::Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = String::deserialize(deserializer)?;
    parse_published_date(&value).map_err(serde::de::Error::custom)
}
