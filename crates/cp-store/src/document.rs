//! Shape of the persisted document.
//!
//! ```json
//! { "v": 1, "tutors": [...], "students": [...], "lessons": [...] }
//! ```
//!
//! The three collections are required: a document missing any of them fails
//! to deserialize and is reported as corrupt. `v` defaults to 1 so documents
//! written before the field existed still load.

use cp_core::entities::{Student, Tutor};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Current document schema version.
pub const DOCUMENT_VERSION: u32 = 1;

const fn default_document_version() -> u32 {
    DOCUMENT_VERSION
}

/// The single persisted document holding every collection.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct Document {
    #[serde(default = "default_document_version")]
    pub v: u32,
    pub tutors: Vec<Tutor>,
    pub students: Vec<Student>,
    pub lessons: Vec<LessonRecord>,
}

impl Document {
    /// The empty form written when no file exists yet.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            v: DOCUMENT_VERSION,
            tutors: Vec::new(),
            students: Vec::new(),
            lessons: Vec::new(),
        }
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::empty()
    }
}

/// Flat lesson record as stored on disk.
///
/// `starts_at` is RFC 3339 with its original offset and `status` is the
/// lowercase status tag. Conversion to `Lesson` lives in `repos::lesson`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct LessonRecord {
    pub id: String,
    pub tutor_id: String,
    pub student_id: String,
    pub starts_at: String,
    pub duration_minutes: u32,
    pub topic: String,
    pub status: String,
    #[serde(default)]
    pub notes: Option<String>,
}
