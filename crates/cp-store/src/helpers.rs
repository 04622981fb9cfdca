//! Record-to-entity parsing helpers.
//!
//! Lesson records keep timestamps and statuses as strings. These helpers turn
//! them back into typed values and report failures as `InvalidRecord`.

use chrono::{DateTime, FixedOffset};

use crate::error::StoreError;

/// Parse an RFC 3339 timestamp, keeping its offset.
///
/// # Errors
///
/// Returns `StoreError::InvalidRecord` if the string is not RFC 3339.
pub fn parse_datetime(
    collection: &'static str,
    id: &str,
    s: &str,
) -> Result<DateTime<FixedOffset>, StoreError> {
    DateTime::parse_from_rfc3339(s).map_err(|e| StoreError::InvalidRecord {
        collection,
        id: id.to_string(),
        reason: format!("failed to parse datetime '{s}': {e}"),
    })
}

/// Parse a string into a serde-deserializable enum.
///
/// Works with all cp-core enums that use `#[serde(rename_all = "snake_case")]`.
///
/// # Errors
///
/// Returns `StoreError::InvalidRecord` if the string does not match any variant.
pub fn parse_enum<T: serde::de::DeserializeOwned>(
    collection: &'static str,
    id: &str,
    s: &str,
) -> Result<T, StoreError> {
    serde_json::from_value(serde_json::Value::String(s.to_string())).map_err(|e| {
        StoreError::InvalidRecord {
            collection,
            id: id.to_string(),
            reason: format!("failed to parse enum from '{s}': {e}"),
        }
    })
}

#[cfg(test)]
mod tests {
    use cp_core::enums::LessonStatus;

    use super::*;

    #[test]
    fn datetime_keeps_offset() {
        let dt = parse_datetime("lessons", "les-1", "2026-10-15T10:00:00-03:30").unwrap();
        assert_eq!(dt.offset().local_minus_utc(), -(3 * 3600 + 1800));
    }

    #[test]
    fn naive_datetime_is_invalid_record() {
        let err = parse_datetime("lessons", "les-1", "2026-10-15T10:00:00").unwrap_err();
        assert!(matches!(err, StoreError::InvalidRecord { collection: "lessons", .. }));
    }

    #[test]
    fn enum_from_tag() {
        let status: LessonStatus = parse_enum("lessons", "les-1", "completed").unwrap();
        assert_eq!(status, LessonStatus::Completed);
        assert!(parse_enum::<LessonStatus>("lessons", "les-1", "Done").is_err());
    }
}
