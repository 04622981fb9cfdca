//! Lesson repository over the `lessons` collection.

use std::sync::Arc;

use chrono::{DateTime, FixedOffset};
use cp_core::entities::Lesson;

use crate::document::LessonRecord;
use crate::error::StoreError;
use crate::helpers::{parse_datetime, parse_enum};
use crate::repos::LessonRepository;
use crate::store::DocumentStore;

const COLLECTION: &str = "lessons";

fn record_to_lesson(record: &LessonRecord) -> Result<Lesson, StoreError> {
    Ok(Lesson {
        id: record.id.clone(),
        tutor_id: record.tutor_id.clone(),
        student_id: record.student_id.clone(),
        starts_at: parse_datetime(COLLECTION, &record.id, &record.starts_at)?,
        duration_minutes: record.duration_minutes,
        topic: record.topic.clone(),
        status: parse_enum(COLLECTION, &record.id, &record.status)?,
        notes: record.notes.clone(),
    })
}

fn lesson_to_record(lesson: &Lesson) -> LessonRecord {
    LessonRecord {
        id: lesson.id.clone(),
        tutor_id: lesson.tutor_id.clone(),
        student_id: lesson.student_id.clone(),
        starts_at: lesson.starts_at.to_rfc3339(),
        duration_minutes: lesson.duration_minutes,
        topic: lesson.topic.clone(),
        status: lesson.status.as_str().to_string(),
        notes: lesson.notes.clone(),
    }
}

pub struct JsonLessonRepository {
    store: Arc<dyn DocumentStore>,
}

impl JsonLessonRepository {
    #[must_use]
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }
}

impl LessonRepository for JsonLessonRepository {
    fn add(&self, lesson: Lesson) -> Result<Lesson, StoreError> {
        let record = lesson_to_record(&lesson);
        self.store.update(&mut |doc| {
            doc.lessons.push(record.clone());
            Ok(())
        })?;
        Ok(lesson)
    }

    fn get(&self, lesson_id: &str) -> Result<Option<Lesson>, StoreError> {
        let doc = self.store.read()?;
        doc.lessons
            .iter()
            .find(|record| record.id == lesson_id)
            .map(record_to_lesson)
            .transpose()
    }

    fn update(&self, lesson: Lesson) -> Result<Lesson, StoreError> {
        let record = lesson_to_record(&lesson);
        self.store.update(&mut |doc| {
            let slot = doc
                .lessons
                .iter_mut()
                .find(|existing| existing.id == record.id)
                .ok_or_else(|| StoreError::RecordNotFound {
                    collection: COLLECTION,
                    id: record.id.clone(),
                })?;
            *slot = record.clone();
            Ok(())
        })?;
        Ok(lesson)
    }

    fn list_by_tutor(
        &self,
        tutor_id: &str,
        start_from: Option<DateTime<FixedOffset>>,
        end_to: Option<DateTime<FixedOffset>>,
    ) -> Result<Vec<Lesson>, StoreError> {
        let doc = self.store.read()?;
        let mut lessons = Vec::new();
        for record in doc.lessons.iter().filter(|r| r.tutor_id == tutor_id) {
            let lesson = record_to_lesson(record)?;
            if start_from.is_some_and(|from| lesson.starts_at < from) {
                continue;
            }
            if end_to.is_some_and(|to| lesson.starts_at > to) {
                continue;
            }
            lessons.push(lesson);
        }
        Ok(lessons)
    }
}

#[cfg(test)]
mod tests {
    use cp_core::enums::LessonStatus;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::store::MemoryStore;

    fn at(s: &str) -> DateTime<FixedOffset> {
        DateTime::parse_from_rfc3339(s).unwrap()
    }

    fn lesson(id: &str, tutor_id: &str, starts_at: &str) -> Lesson {
        Lesson {
            id: id.into(),
            tutor_id: tutor_id.into(),
            student_id: "stu-1".into(),
            starts_at: at(starts_at),
            duration_minutes: 60,
            topic: "Functions".into(),
            status: LessonStatus::Scheduled,
            notes: None,
        }
    }

    #[test]
    fn record_keeps_offset_and_lowercase_status() {
        let lesson = lesson("les-1", "tut-1", "2026-10-15T10:00:00+05:45");
        let record = lesson_to_record(&lesson);
        assert_eq!(record.starts_at, "2026-10-15T10:00:00+05:45");
        assert_eq!(record.status, "scheduled");

        let back = record_to_lesson(&record).unwrap();
        assert_eq!(back, lesson);
        assert_eq!(back.starts_at.offset().local_minus_utc(), 5 * 3600 + 45 * 60);
    }

    #[test]
    fn absent_notes_serialize_as_null() {
        let record = lesson_to_record(&lesson("les-1", "tut-1", "2026-10-15T10:00:00Z"));
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["notes"], serde_json::Value::Null);
    }

    #[test]
    fn update_replaces_in_place() {
        let store = Arc::new(MemoryStore::new());
        let repo = JsonLessonRepository::new(store.clone());
        repo.add(lesson("les-1", "tut-1", "2026-10-15T10:00:00Z")).unwrap();
        let second = repo.add(lesson("les-2", "tut-1", "2026-10-16T10:00:00Z")).unwrap();
        repo.add(lesson("les-3", "tut-1", "2026-10-17T10:00:00Z")).unwrap();

        let done = second.completed(Some("Great progress")).unwrap();
        repo.update(done.clone()).unwrap();

        let ids: Vec<String> = store.read().unwrap().lessons.into_iter().map(|r| r.id).collect();
        assert_eq!(ids, ["les-1", "les-2", "les-3"]);
        assert_eq!(repo.get("les-2").unwrap(), Some(done));
    }

    #[test]
    fn update_missing_is_record_not_found() {
        let store = Arc::new(MemoryStore::new());
        let repo = JsonLessonRepository::new(store.clone());
        let result = repo.update(lesson("les-404", "tut-1", "2026-10-15T10:00:00Z"));

        assert!(matches!(
            result,
            Err(StoreError::RecordNotFound { collection: "lessons", .. })
        ));
        assert!(store.read().unwrap().lessons.is_empty());
    }

    #[test]
    fn list_by_tutor_applies_inclusive_bounds() {
        let repo = JsonLessonRepository::new(Arc::new(MemoryStore::new()));
        repo.add(lesson("les-1", "tut-1", "2026-10-01T00:00:00Z")).unwrap();
        repo.add(lesson("les-2", "tut-1", "2026-10-10T12:00:00+02:00")).unwrap();
        repo.add(lesson("les-3", "tut-1", "2026-10-20T00:00:00Z")).unwrap();
        repo.add(lesson("les-4", "tut-2", "2026-10-10T00:00:00Z")).unwrap();

        let all = repo.list_by_tutor("tut-1", None, None).unwrap();
        assert_eq!(all.len(), 3);

        // Bounds compare instants: 12:00+02:00 is 10:00Z.
        let window = repo
            .list_by_tutor(
                "tut-1",
                Some(at("2026-10-01T00:00:00Z")),
                Some(at("2026-10-10T10:00:00Z")),
            )
            .unwrap();
        let ids: Vec<&str> = window.iter().map(|l| l.id.as_str()).collect();
        assert_eq!(ids, ["les-1", "les-2"]);
    }

    #[test]
    fn malformed_record_is_invalid_record() {
        let mut doc = crate::document::Document::empty();
        let mut record = lesson_to_record(&lesson("les-1", "tut-1", "2026-10-15T10:00:00Z"));
        record.status = "postponed".into();
        doc.lessons.push(record);

        let repo = JsonLessonRepository::new(Arc::new(MemoryStore::with_document(doc)));
        assert!(matches!(
            repo.get("les-1"),
            Err(StoreError::InvalidRecord { .. })
        ));
    }
}
