//! Parsing and serialization of screentime timestamps.
//!
//! Stored values come from `datetime-local` style inputs (`2024-01-05T20:15`)
//! or full ISO/RFC 3339 strings; all of them become a [`NaiveDateTime`].

use chrono::{DateTime, NaiveDateTime};
use thiserror::Error;

/// Canonical storage format.
pub const STORAGE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid timestamp '{0}' (expected e.g. 2024-01-05T20:15 or 2024-01-05T20:15:00Z)")]
pub struct TimestampError(pub String);

/// Parse a timestamp in any accepted form.
///
/// Offsets are normalised to UTC before the offset is dropped.
pub fn parse_timestamp(value: &str) -> Result<NaiveDateTime, TimestampError> {
    let trimmed = value.trim();
    for fmt in NAIVE_FORMATS {
        if let Ok(ts) = NaiveDateTime::parse_from_str(trimmed, fmt) {
            return Ok(ts);
        }
    }
    DateTime::parse_from_rfc3339(trimmed)
        .map(|dt| dt.naive_utc())
        .map_err(|_| TimestampError(value.to_string()))
}

/// Format a timestamp the way it is stored.
pub fn format_timestamp(ts: &NaiveDateTime) -> String {
    ts.format(STORAGE_FORMAT).to_string()
}

/// `#[serde(with = ...)]` adapter accepting every form [`parse_timestamp`] does.
pub mod serde_flexible {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(ts: &NaiveDateTime, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&super::format_timestamp(ts))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<NaiveDateTime, D::Error> {
        let raw = String::deserialize(d)?;
        super::parse_timestamp(&raw).map_err(serde::de::Error::custom)
    }
}
