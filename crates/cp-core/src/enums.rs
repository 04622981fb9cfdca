//! Status enums for ClassPilot.
//!
//! Enums serialize as lowercase tags via `#[serde(rename_all = "snake_case")]`.
//! `LessonStatus` provides `allowed_next_states()` so the service layer can
//! enforce valid transitions.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// LessonStatus
// ---------------------------------------------------------------------------

/// Status of a lesson through its booking lifecycle.
///
/// ```text
/// scheduled → completed
/// canceled (no transition leads here yet)
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum LessonStatus {
    Scheduled,
    Completed,
    Canceled,
}

impl LessonStatus {
    /// Valid next states from the current state.
    #[must_use]
    #[allow(clippy::match_same_arms)]
    pub const fn allowed_next_states(self) -> &'static [Self] {
        match self {
            Self::Scheduled => &[Self::Completed],
            Self::Completed => &[],
            Self::Canceled => &[],
        }
    }

    /// Check whether transitioning to `next` is allowed.
    #[must_use]
    pub fn can_transition_to(self, next: Self) -> bool {
        self.allowed_next_states().contains(&next)
    }

    /// Return the tag used in the persisted document.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Scheduled => "scheduled",
            Self::Completed => "completed",
            Self::Canceled => "canceled",
        }
    }
}

impl fmt::Display for LessonStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scheduled_can_only_complete() {
        assert!(LessonStatus::Scheduled.can_transition_to(LessonStatus::Completed));
        assert!(!LessonStatus::Scheduled.can_transition_to(LessonStatus::Canceled));
        assert!(!LessonStatus::Scheduled.can_transition_to(LessonStatus::Scheduled));
    }

    #[test]
    fn terminal_states_have_no_transitions() {
        assert!(LessonStatus::Completed.allowed_next_states().is_empty());
        assert!(LessonStatus::Canceled.allowed_next_states().is_empty());
    }

    #[test]
    fn serde_tag_matches_as_str() {
        for status in [
            LessonStatus::Scheduled,
            LessonStatus::Completed,
            LessonStatus::Canceled,
        ] {
            let json = serde_json::to_value(status).unwrap();
            assert_eq!(json, serde_json::Value::String(status.as_str().to_string()));
        }
    }
}
