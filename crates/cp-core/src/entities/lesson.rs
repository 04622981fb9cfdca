use chrono::{DateTime, FixedOffset};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::LessonStatus;
use crate::errors::CoreError;
use crate::normalize;

/// Shortest bookable lesson, in minutes.
pub const MIN_DURATION_MINUTES: u32 = 15;

/// A booked lesson between a tutor and one of their students.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Lesson {
    pub id: String,
    pub tutor_id: String,
    pub student_id: String,
    /// Start instant with the offset it was booked in.
    pub starts_at: DateTime<FixedOffset>,
    pub duration_minutes: u32,
    pub topic: String,
    pub status: LessonStatus,
    /// Present only after completion, and never blank.
    pub notes: Option<String>,
}

impl Lesson {
    /// Return a completed copy of this lesson with normalized notes.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Validation` if the lesson is not `scheduled`.
    pub fn completed(&self, notes: Option<&str>) -> Result<Self, CoreError> {
        if !self.status.can_transition_to(LessonStatus::Completed) {
            return Err(CoreError::validation(format!(
                "only scheduled lessons can be completed (lesson {} is {})",
                self.id, self.status
            )));
        }
        Ok(Self {
            status: LessonStatus::Completed,
            notes: normalize::notes(notes),
            ..self.clone()
        })
    }

    /// Revenue earned for this lesson at `hourly_rate`, unrounded.
    #[must_use]
    pub fn earnings(&self, hourly_rate: f64) -> f64 {
        f64::from(self.duration_minutes) / 60.0 * hourly_rate
    }
}
