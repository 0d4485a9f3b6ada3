use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TimestampError {
    #[error("Timestamp {0:?} is not an ISO-8601 date or date-time")]
    Unparseable(String),
}

/// A capture timestamp: either a pre-parsed instant or ISO-8601-like text.
#[derive(Debug, Clone, PartialEq)]
pub enum Timestamp {
    Instant(DateTime<Utc>),
    Text(String),
}

impl Timestamp {
    /// Resolve to a UTC instant.
    pub fn instant(&self) -> Result<DateTime<Utc>, TimestampError> {
        match self {
            Timestamp::Instant(dt) => Ok(*dt),
            Timestamp::Text(raw) => parse_instant(raw),
        }
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(dt: DateTime<Utc>) -> Self {
        Timestamp::Instant(dt)
    }
}

impl From<&str> for Timestamp {
    fn from(raw: &str) -> Self {
        Timestamp::Text(raw.to_string())
    }
}

impl From<String> for Timestamp {
    fn from(raw: String) -> Self {
        Timestamp::Text(raw)
    }
}

/// Parse ISO-8601-like text into a UTC instant.
///
/// Accepted forms: RFC 3339 with an offset or trailing `Z`, a naive
/// date-time with `T` or space separator and optional fractional seconds,
/// or a bare date (midnight). Text without timezone information is
/// interpreted as UTC.
pub fn parse_instant(raw: &str) -> Result<DateTime<Utc>, TimestampError> {
    let text = raw.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Ok(dt.with_timezone(&Utc));
    }

    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(text, fmt) {
            return Ok(Utc.from_utc_datetime(&naive));
        }
    }

    if let Ok(date) = NaiveDate::parse_from_str(text, "%Y-%m-%d") {
        return Ok(Utc.from_utc_datetime(&date.and_time(NaiveTime::MIN)));
    }

    Err(TimestampError::Unparseable(raw.to_string()))
}

/// Elapsed age of `instant` at `now`, in 86 400-second days.
///
/// Floored at zero: a future instant has age 0.0, never a negative value.
pub fn age_in_days(instant: DateTime<Utc>, now: DateTime<Utc>) -> f64 {
    let millis = now.signed_duration_since(instant).num_milliseconds();
    (millis as f64 / 86_400_000.0).max(0.0)
}
