//! Student repository over the `students` collection.

use std::sync::Arc;

use cp_core::entities::Student;

use crate::error::StoreError;
use crate::repos::StudentRepository;
use crate::store::DocumentStore;

pub struct JsonStudentRepository {
    store: Arc<dyn DocumentStore>,
}

impl JsonStudentRepository {
    #[must_use]
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }
}

impl StudentRepository for JsonStudentRepository {
    fn add(&self, student: Student) -> Result<Student, StoreError> {
        self.store.update(&mut |doc| {
            doc.students.push(student.clone());
            Ok(())
        })?;
        Ok(student)
    }

    fn get(&self, student_id: &str) -> Result<Option<Student>, StoreError> {
        let doc = self.store.read()?;
        Ok(doc
            .students
            .into_iter()
            .find(|student| student.id == student_id))
    }

    fn list_by_tutor(&self, tutor_id: &str) -> Result<Vec<Student>, StoreError> {
        let doc = self.store.read()?;
        Ok(doc
            .students
            .into_iter()
            .filter(|student| student.tutor_id == tutor_id)
            .collect())
    }
}
