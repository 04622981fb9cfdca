//! Tutor dashboard aggregation over lessons and students.

use chrono::{DateTime, Datelike, FixedOffset, TimeZone, Utc};
use cp_core::enums::LessonStatus;
use cp_core::errors::CoreError;
use cp_core::responses::TutorDashboard;

use crate::error::ServiceError;
use crate::service::TutoringService;

/// First instant of the calendar month containing `now`, in `now`'s offset.
fn month_start(now: DateTime<FixedOffset>) -> Result<DateTime<FixedOffset>, CoreError> {
    now.date_naive()
        .with_day(1)
        .and_then(|day| day.and_hms_opt(0, 0, 0))
        .and_then(|midnight| now.offset().from_local_datetime(&midnight).single())
        .ok_or_else(|| CoreError::Other(anyhow::anyhow!("cannot compute start of month for {now}")))
}

fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

impl TutoringService {
    /// Dashboard figures for a tutor as of the current instant.
    ///
    /// # Errors
    ///
    /// `NotFoundError` if `tutor_id` does not resolve.
    pub fn tutor_dashboard(&self, tutor_id: &str) -> Result<TutorDashboard, ServiceError> {
        self.tutor_dashboard_at(tutor_id, Utc::now())
    }

    /// Dashboard figures for a tutor as of `now`.
    ///
    /// Upcoming lessons are scheduled lessons starting at or after `now`.
    /// Revenue covers completed lessons from the start of `now`'s month (in
    /// the reference offset) through `now`, rounded to cents.
    ///
    /// # Errors
    ///
    /// `NotFoundError` if `tutor_id` does not resolve.
    pub fn tutor_dashboard_at(
        &self,
        tutor_id: &str,
        now: DateTime<Utc>,
    ) -> Result<TutorDashboard, ServiceError> {
        let tutor = self.require_tutor(tutor_id)?;
        let now = now.with_timezone(&self.reference_offset());
        let month_start = month_start(now)?;

        let students_count = self.students().list_by_tutor(tutor_id)?.len();
        let lessons = self.lessons().list_by_tutor(tutor_id, None, None)?;

        let upcoming_lessons_count = lessons
            .iter()
            .filter(|l| l.status == LessonStatus::Scheduled && l.starts_at >= now)
            .count();

        let revenue: f64 = lessons
            .iter()
            .filter(|l| l.status == LessonStatus::Completed)
            .filter(|l| l.starts_at >= month_start && l.starts_at <= now)
            .map(|l| l.earnings(tutor.hourly_rate))
            .sum();

        tracing::debug!(tutor_id, students_count, upcoming_lessons_count, revenue, "computed dashboard");

        Ok(TutorDashboard {
            students_count,
            upcoming_lessons_count,
            current_month_revenue_estimate: round_cents(revenue),
        })
    }
}
