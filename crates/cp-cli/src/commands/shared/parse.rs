use chrono::{DateTime, FixedOffset, Utc};
use cp_core::errors::CoreError;
use cp_core::timestamp::StartsAt;

/// Parse a lesson start time. Naive timestamps parse here and are rejected
/// by the service.
pub fn parse_starts_at(raw: &str) -> Result<StartsAt, CoreError> {
    raw.parse()
}

/// Parse a timestamp that must carry a UTC offset.
pub fn parse_instant(raw: &str, field: &str) -> Result<DateTime<FixedOffset>, CoreError> {
    raw.parse::<StartsAt>()
        .map_err(|_| CoreError::validation(format!("invalid {field} timestamp '{raw}'")))?
        .with_offset()
        .ok_or_else(|| CoreError::validation(format!("{field} must include timezone: '{raw}'")))
}

pub fn parse_optional_instant(
    raw: Option<&str>,
    field: &str,
) -> Result<Option<DateTime<FixedOffset>>, CoreError> {
    raw.map(|value| parse_instant(value, field)).transpose()
}

pub fn parse_utc_instant(raw: &str, field: &str) -> Result<DateTime<Utc>, CoreError> {
    parse_instant(raw, field).map(|at| at.with_timezone(&Utc))
}
