//! Response types for derived views.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Aggregated view of one tutor's activity, as returned by `tutor_dashboard`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct TutorDashboard {
    pub students_count: usize,
    /// Scheduled lessons starting at or after "now".
    pub upcoming_lessons_count: usize,
    /// Completed lessons this calendar month, rounded to cents.
    pub current_month_revenue_estimate: f64,
}
