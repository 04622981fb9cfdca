//! Service layer enforcing cross-entity business rules.
//!
//! `TutoringService` owns one repository per collection (as trait objects)
//! and performs at most one persisted mutation per method. All validation
//! happens before that mutation, so a rejected call leaves the document
//! untouched.

use std::path::PathBuf;
use std::sync::Arc;

use chrono::{DateTime, FixedOffset, Offset, Utc};
use cp_core::entities::{Lesson, MIN_DURATION_MINUTES, Student, Tutor};
use cp_core::enums::LessonStatus;
use cp_core::errors::CoreError;
use cp_core::ids::{PREFIX_LESSON, PREFIX_STUDENT, PREFIX_TUTOR, generate_id};
use cp_core::normalize;
use cp_core::timestamp::StartsAt;

use crate::error::{ServiceError, StoreError};
use crate::repos::{
    JsonLessonRepository, JsonStudentRepository, JsonTutorRepository, LessonRepository,
    StudentRepository, TutorRepository,
};
use crate::store::{DocumentStore, FileStore};

/// Orchestrates the tutor, student, and lesson repositories.
pub struct TutoringService {
    tutors: Box<dyn TutorRepository>,
    students: Box<dyn StudentRepository>,
    lessons: Box<dyn LessonRepository>,
    reference_offset: FixedOffset,
}

impl TutoringService {
    /// Build a service from explicit repositories. The dashboard reference
    /// zone defaults to UTC.
    #[must_use]
    pub fn new(
        tutors: Box<dyn TutorRepository>,
        students: Box<dyn StudentRepository>,
        lessons: Box<dyn LessonRepository>,
    ) -> Self {
        Self {
            tutors,
            students,
            lessons,
            reference_offset: Utc.fix(),
        }
    }

    /// Build a service whose three repositories share one document store.
    #[must_use]
    pub fn from_store(store: Arc<dyn DocumentStore>) -> Self {
        Self::new(
            Box::new(JsonTutorRepository::new(Arc::clone(&store))),
            Box::new(JsonStudentRepository::new(Arc::clone(&store))),
            Box::new(JsonLessonRepository::new(store)),
        )
    }

    /// Open (or initialize) the document file at `path` and build a service on it.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the file or its directory cannot be created.
    pub fn open_file(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let store = FileStore::open(path)?;
        Ok(Self::from_store(Arc::new(store)))
    }

    /// Use `offset` as the reference zone for dashboard "now" and "current month".
    #[must_use]
    pub const fn with_reference_offset(mut self, offset: FixedOffset) -> Self {
        self.reference_offset = offset;
        self
    }

    #[must_use]
    pub const fn reference_offset(&self) -> FixedOffset {
        self.reference_offset
    }

    pub(crate) fn students(&self) -> &dyn StudentRepository {
        self.students.as_ref()
    }

    pub(crate) fn lessons(&self) -> &dyn LessonRepository {
        self.lessons.as_ref()
    }

    pub(crate) fn require_tutor(&self, tutor_id: &str) -> Result<Tutor, ServiceError> {
        self.tutors
            .get(tutor_id)?
            .ok_or_else(|| CoreError::not_found("tutor", tutor_id).into())
    }

    // -----------------------------------------------------------------------
    // Mutations
    // -----------------------------------------------------------------------

    /// Register a tutor with normalized contact details.
    ///
    /// # Errors
    ///
    /// `ValidationError` if `hourly_rate` is not a positive number.
    pub fn register_tutor(
        &self,
        full_name: &str,
        email: &str,
        timezone: &str,
        hourly_rate: f64,
    ) -> Result<Tutor, ServiceError> {
        if !hourly_rate.is_finite() || hourly_rate <= 0.0 {
            return Err(CoreError::validation("hourly_rate must be greater than 0").into());
        }

        let tutor = Tutor {
            id: generate_id(PREFIX_TUTOR)?,
            full_name: normalize::text(full_name),
            email: normalize::email(email),
            timezone: normalize::text(timezone),
            hourly_rate,
        };
        let tutor = self.tutors.add(tutor)?;
        tracing::info!(tutor_id = %tutor.id, "registered tutor");
        Ok(tutor)
    }

    /// Register a student under an existing tutor.
    ///
    /// # Errors
    ///
    /// `NotFoundError` if `tutor_id` does not resolve.
    pub fn register_student(
        &self,
        tutor_id: &str,
        full_name: &str,
        email: &str,
        goals: &str,
    ) -> Result<Student, ServiceError> {
        self.require_tutor(tutor_id)?;

        let student = Student {
            id: generate_id(PREFIX_STUDENT)?,
            tutor_id: tutor_id.to_string(),
            full_name: normalize::text(full_name),
            email: normalize::email(email),
            goals: normalize::text(goals),
        };
        let student = self.students.add(student)?;
        tracing::info!(student_id = %student.id, tutor_id, "registered student");
        Ok(student)
    }

    /// Book a lesson between a tutor and one of that tutor's students.
    ///
    /// Overlapping lessons are allowed; there is no double-booking check.
    ///
    /// # Errors
    ///
    /// - `NotFoundError` if `tutor_id` does not resolve.
    /// - `ValidationError` if the student is missing or belongs to another
    ///   tutor, if `starts_at` has no UTC offset, or if `duration_minutes` is
    ///   below 15.
    pub fn schedule_lesson(
        &self,
        tutor_id: &str,
        student_id: &str,
        starts_at: impl Into<StartsAt>,
        duration_minutes: u32,
        topic: &str,
    ) -> Result<Lesson, ServiceError> {
        self.require_tutor(tutor_id)?;

        match self.students.get(student_id)? {
            Some(student) if student.tutor_id == tutor_id => {}
            _ => {
                return Err(CoreError::validation("student is not assigned to this tutor").into());
            }
        }

        let starts_at = starts_at
            .into()
            .with_offset()
            .ok_or_else(|| CoreError::validation("starts_at must include timezone"))?;

        if duration_minutes < MIN_DURATION_MINUTES {
            return Err(CoreError::validation(format!(
                "duration_minutes must be at least {MIN_DURATION_MINUTES}"
            ))
            .into());
        }

        let lesson = Lesson {
            id: generate_id(PREFIX_LESSON)?,
            tutor_id: tutor_id.to_string(),
            student_id: student_id.to_string(),
            starts_at,
            duration_minutes,
            topic: normalize::text(topic),
            status: LessonStatus::Scheduled,
            notes: None,
        };
        let lesson = self.lessons.add(lesson)?;
        tracing::info!(lesson_id = %lesson.id, tutor_id, student_id, "scheduled lesson");
        Ok(lesson)
    }

    /// Mark a scheduled lesson completed, with optional notes.
    ///
    /// Not idempotent: a second call on the same lesson fails.
    ///
    /// # Errors
    ///
    /// - `NotFoundError` if `lesson_id` does not resolve.
    /// - `ValidationError` if the lesson is not `scheduled`.
    pub fn complete_lesson(
        &self,
        lesson_id: &str,
        notes: Option<&str>,
    ) -> Result<Lesson, ServiceError> {
        let lesson = self
            .lessons
            .get(lesson_id)?
            .ok_or_else(|| CoreError::not_found("lesson", lesson_id))?;

        let completed = lesson.completed(notes)?;
        let completed = self.lessons.update(completed)?;
        tracing::info!(lesson_id, "completed lesson");
        Ok(completed)
    }

    // -----------------------------------------------------------------------
    // Reads
    // -----------------------------------------------------------------------

    /// # Errors
    ///
    /// `NotFoundError` if `tutor_id` does not resolve.
    pub fn get_tutor(&self, tutor_id: &str) -> Result<Tutor, ServiceError> {
        self.require_tutor(tutor_id)
    }

    /// # Errors
    ///
    /// `NotFoundError` if `student_id` does not resolve.
    pub fn get_student(&self, student_id: &str) -> Result<Student, ServiceError> {
        self.students
            .get(student_id)?
            .ok_or_else(|| CoreError::not_found("student", student_id).into())
    }

    /// # Errors
    ///
    /// `NotFoundError` if `lesson_id` does not resolve.
    pub fn get_lesson(&self, lesson_id: &str) -> Result<Lesson, ServiceError> {
        self.lessons
            .get(lesson_id)?
            .ok_or_else(|| CoreError::not_found("lesson", lesson_id).into())
    }

    /// Students belonging to a tutor, in registration order.
    ///
    /// # Errors
    ///
    /// `NotFoundError` if `tutor_id` does not resolve.
    pub fn list_students(&self, tutor_id: &str) -> Result<Vec<Student>, ServiceError> {
        self.require_tutor(tutor_id)?;
        Ok(self.students.list_by_tutor(tutor_id)?)
    }

    /// A tutor's lessons starting within the optional inclusive bounds.
    ///
    /// # Errors
    ///
    /// `NotFoundError` if `tutor_id` does not resolve.
    pub fn list_lessons(
        &self,
        tutor_id: &str,
        start_from: Option<DateTime<FixedOffset>>,
        end_to: Option<DateTime<FixedOffset>>,
    ) -> Result<Vec<Lesson>, ServiceError> {
        self.require_tutor(tutor_id)?;
        Ok(self.lessons.list_by_tutor(tutor_id, start_from, end_to)?)
    }
}
