//! Entity structs for all ClassPilot domain objects.
//!
//! Each entity maps to one collection in the persisted document. Entities are
//! immutable values: changes build a new value with struct-update syntax.

mod lesson;
mod student;
mod tutor;

pub use lesson::{Lesson, MIN_DURATION_MINUTES};
pub use student::Student;
pub use tutor::Tutor;
