//! Repository contracts and their JSON-document implementations.
//!
//! Each repository is a thin table view over one collection of the shared
//! document. Implementations must keep these failure semantics regardless of
//! the backing medium:
//! - `add` appends and returns the entity unchanged; ids are assigned by the
//!   caller and are not deduplicated.
//! - `get` returns the first record with a matching id, or `None`.
//! - `update` (lessons only) replaces in place, preserving order, and fails
//!   with `StoreError::RecordNotFound` when the id is absent.

use chrono::{DateTime, FixedOffset};
use cp_core::entities::{Lesson, Student, Tutor};

use crate::error::StoreError;

pub mod lesson;
pub mod student;
pub mod tutor;

pub use lesson::JsonLessonRepository;
pub use student::JsonStudentRepository;
pub use tutor::JsonTutorRepository;

pub trait TutorRepository: Send + Sync {
    fn add(&self, tutor: Tutor) -> Result<Tutor, StoreError>;
    fn get(&self, tutor_id: &str) -> Result<Option<Tutor>, StoreError>;
}

pub trait StudentRepository: Send + Sync {
    fn add(&self, student: Student) -> Result<Student, StoreError>;
    fn get(&self, student_id: &str) -> Result<Option<Student>, StoreError>;
    fn list_by_tutor(&self, tutor_id: &str) -> Result<Vec<Student>, StoreError>;
}

pub trait LessonRepository: Send + Sync {
    fn add(&self, lesson: Lesson) -> Result<Lesson, StoreError>;
    fn get(&self, lesson_id: &str) -> Result<Option<Lesson>, StoreError>;
    fn update(&self, lesson: Lesson) -> Result<Lesson, StoreError>;

    /// Lessons for `tutor_id` whose `starts_at` lies within the inclusive bounds.
    fn list_by_tutor(
        &self,
        tutor_id: &str,
        start_from: Option<DateTime<FixedOffset>>,
        end_to: Option<DateTime<FixedOffset>>,
    ) -> Result<Vec<Lesson>, StoreError>;
}
