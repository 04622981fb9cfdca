//! Lesson start input.
//!
//! Callers may hand the service a timestamp that lacks a UTC offset (for
//! example a naive `2026-10-15T10:00` typed at a prompt). `StartsAt` keeps that
//! case representable so the service can reject it as a validation error
//! instead of guessing a zone.

use std::str::FromStr;

use chrono::{DateTime, FixedOffset, NaiveDateTime, TimeZone};

use crate::errors::CoreError;

/// Naive forms accepted by [`StartsAt::from_str`].
const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// A lesson start time as supplied by a caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartsAt {
    /// Carries an explicit UTC offset.
    Offset(DateTime<FixedOffset>),
    /// Wall-clock time with no offset.
    Naive(NaiveDateTime),
}

impl StartsAt {
    /// The offset-aware timestamp, if there is one.
    #[must_use]
    pub const fn with_offset(self) -> Option<DateTime<FixedOffset>> {
        match self {
            Self::Offset(dt) => Some(dt),
            Self::Naive(_) => None,
        }
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for StartsAt {
    fn from(value: DateTime<Tz>) -> Self {
        Self::Offset(value.fixed_offset())
    }
}

impl From<NaiveDateTime> for StartsAt {
    fn from(value: NaiveDateTime) -> Self {
        Self::Naive(value)
    }
}

impl FromStr for StartsAt {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
            return Ok(Self::Offset(dt));
        }
        if let Ok(dt) = DateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S%.f%:z") {
            return Ok(Self::Offset(dt));
        }
        NAIVE_FORMATS
            .iter()
            .find_map(|format| NaiveDateTime::parse_from_str(s, format).ok())
            .map(Self::Naive)
            .ok_or_else(|| CoreError::validation(format!("invalid starts_at timestamp '{s}'")))
    }
}
