//! # Temporal Types
//!
//! Defines `Timestamp`, a UTC timestamp truncated to seconds precision.
//!
//! The Gateway exports timestamps as RFC 3339 with either a `Z` suffix or an
//! explicit `+00:00` offset, sometimes with microseconds. Both are accepted
//! and normalised; rendering always uses `YYYY-MM-DDTHH:MM:SSZ`.

use chrono::{DateTime, Duration, Timelike, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// A UTC timestamp, truncated to seconds.
///
/// # Construction
///
/// - [`Timestamp::now()`]: current UTC time, truncated.
/// - [`Timestamp::from_utc()`]: from a `DateTime<Utc>`, truncating sub-seconds.
/// - [`Timestamp::parse()`]: from an RFC 3339 string with any offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Create a timestamp from the current UTC time, truncated to seconds.
    pub fn now() -> Self {
        Self(truncate_to_seconds(Utc::now()))
    }

    /// Create a timestamp from a `chrono::DateTime<Utc>`, truncating sub-seconds.
    pub fn from_utc(dt: DateTime<Utc>) -> Self {
        Self(truncate_to_seconds(dt))
    }

    /// Parse an RFC 3339 string, converting any offset to UTC.
    pub fn parse(s: &str) -> Result<Self, ValidationError> {
        let dt = DateTime::parse_from_rfc3339(s).map_err(|e| ValidationError::InvalidTimestamp {
            value: s.to_string(),
            reason: e.to_string(),
        })?;
        Ok(Self(truncate_to_seconds(dt.with_timezone(&Utc))))
    }

    /// The instant `days` whole days after this one.
    ///
    /// Saturates at the latest representable instant instead of overflowing.
    pub fn plus_days(&self, days: i64) -> Self {
        let shifted = Duration::try_days(days)
            .and_then(|d| self.0.checked_add_signed(d))
            .unwrap_or(DateTime::<Utc>::MAX_UTC);
        Self(truncate_to_seconds(shifted))
    }

    /// Access the inner `DateTime<Utc>`.
    pub fn as_datetime(&self) -> &DateTime<Utc> {
        &self.0
    }

    /// Render as ISO 8601 with Z suffix (e.g., `2026-01-15T12:00:00Z`).
    pub fn to_iso8601(&self) -> String {
        self.0.format("%Y-%m-%dT%H:%M:%SZ").to_string()
    }

    /// Render the calendar date the way job cards show it (e.g., `Jan 15, 2026`).
    pub fn to_display_date(&self) -> String {
        self.0.format("%b %-d, %Y").to_string()
    }
}

impl std::fmt::Display for Timestamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_iso8601())
    }
}

fn truncate_to_seconds(dt: DateTime<Utc>) -> DateTime<Utc> {
    dt.with_nanosecond(0).unwrap_or(dt)
}
