//! Tutor repository over the `tutors` collection.

use std::sync::Arc;

use cp_core::entities::Tutor;

use crate::error::StoreError;
use crate::repos::TutorRepository;
use crate::store::DocumentStore;

pub struct JsonTutorRepository {
    store: Arc<dyn DocumentStore>,
}

impl JsonTutorRepository {
    #[must_use]
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }
}

impl TutorRepository for JsonTutorRepository {
    fn add(&self, tutor: Tutor) -> Result<Tutor, StoreError> {
        self.store.update(&mut |doc| {
            doc.tutors.push(tutor.clone());
            Ok(())
        })?;
        Ok(tutor)
    }

    fn get(&self, tutor_id: &str) -> Result<Option<Tutor>, StoreError> {
        let doc = self.store.read()?;
        Ok(doc.tutors.into_iter().find(|tutor| tutor.id == tutor_id))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::store::MemoryStore;

    fn tutor(id: &str, name: &str) -> Tutor {
        Tutor {
            id: id.into(),
            full_name: name.into(),
            email: format!("{}@demo.com", name.to_lowercase()),
            timezone: "UTC".into(),
            hourly_rate: 25.0,
        }
    }

    #[test]
    fn add_then_get() {
        let repo = JsonTutorRepository::new(Arc::new(MemoryStore::new()));
        let added = repo.add(tutor("tut-1", "Ana")).unwrap();
        assert_eq!(repo.get("tut-1").unwrap(), Some(added));
        assert_eq!(repo.get("tut-2").unwrap(), None);
    }

    #[test]
    fn add_does_not_deduplicate() {
        let store = Arc::new(MemoryStore::new());
        let repo = JsonTutorRepository::new(store.clone());
        repo.add(tutor("tut-1", "Ana")).unwrap();
        repo.add(tutor("tut-1", "Bea")).unwrap();

        assert_eq!(store.read().unwrap().tutors.len(), 2);
        // First match wins.
        assert_eq!(repo.get("tut-1").unwrap().unwrap().full_name, "Ana");
    }
}
