//! Serde roundtrip and JsonSchema validation tests for all entity types.

use chrono::DateTime;
use schemars::schema_for;
use cp_core::entities::*;
use cp_core::enums::LessonStatus;
use cp_core::responses::TutorDashboard;

/// Validate a JSON value against a schemars-generated schema.
fn validate_against_schema(
    schema: &serde_json::Value,
    instance: &serde_json::Value,
) -> Vec<String> {
    let validator = jsonschema::validator_for(schema).expect("schema should be valid");
    validator
        .iter_errors(instance)
        .map(|e| format!("{e}"))
        .collect()
}

macro_rules! roundtrip_and_validate {
    ($name:ident, $ty:ty, $instance:expr) => {
        #[test]
        fn $name() {
            let val: $ty = $instance;

            let json_str = serde_json::to_string_pretty(&val).unwrap();
            let recovered: $ty = serde_json::from_str(&json_str).unwrap();
            pretty_assertions::assert_eq!(
                recovered,
                val,
                "serde roundtrip failed for {}",
                stringify!($ty)
            );

            let schema = serde_json::to_value(schema_for!($ty)).unwrap();
            let instance = serde_json::to_value(&val).unwrap();
            let errors = validate_against_schema(&schema, &instance);
            assert!(
                errors.is_empty(),
                "Schema validation failed for {}: {:?}",
                stringify!($ty),
                errors
            );
        }
    };
}

roundtrip_and_validate!(
    tutor_roundtrip,
    Tutor,
    Tutor {
        id: "tut-00000000000000000000000000000001".into(),
        full_name: "Ana Ruiz".into(),
        email: "ana@demo.com".into(),
        timezone: "Europe/Madrid".into(),
        hourly_rate: 30.0,
    }
);

roundtrip_and_validate!(
    student_roundtrip,
    Student,
    Student {
        id: "stu-00000000000000000000000000000001".into(),
        tutor_id: "tut-00000000000000000000000000000001".into(),
        full_name: "Leo".into(),
        email: "leo@demo.com".into(),
        goals: "Exam prep".into(),
    }
);

roundtrip_and_validate!(
    scheduled_lesson_roundtrip,
    Lesson,
    Lesson {
        id: "les-00000000000000000000000000000001".into(),
        tutor_id: "tut-00000000000000000000000000000001".into(),
        student_id: "stu-00000000000000000000000000000001".into(),
        starts_at: DateTime::parse_from_rfc3339("2026-10-15T10:00:00-05:00").unwrap(),
        duration_minutes: 45,
        topic: "Functions".into(),
        status: LessonStatus::Scheduled,
        notes: None,
    }
);

roundtrip_and_validate!(
    completed_lesson_roundtrip,
    Lesson,
    Lesson {
        id: "les-00000000000000000000000000000002".into(),
        tutor_id: "tut-00000000000000000000000000000001".into(),
        student_id: "stu-00000000000000000000000000000001".into(),
        starts_at: DateTime::parse_from_rfc3339("2026-10-01T08:30:00+09:30").unwrap(),
        duration_minutes: 60,
        topic: "Derivatives".into(),
        status: LessonStatus::Completed,
        notes: Some("Great progress".into()),
    }
);

roundtrip_and_validate!(
    dashboard_roundtrip,
    TutorDashboard,
    TutorDashboard {
        students_count: 3,
        upcoming_lessons_count: 2,
        current_month_revenue_estimate: 60.0,
    }
);

#[test]
fn lesson_status_serializes_lowercase() {
    let json = serde_json::to_string(&LessonStatus::Canceled).unwrap();
    assert_eq!(json, "\"canceled\"");
}

#[test]
fn minimum_duration_is_exported_with_entities() {
    assert_eq!(cp_core::entities::MIN_DURATION_MINUTES, 15);
}
