//! Shared test utilities for cp-store unit tests.

#[cfg(test)]
pub(crate) mod helpers {
    use std::sync::Arc;

    use cp_core::entities::{Student, Tutor};

    use crate::service::TutoringService;
    use crate::store::MemoryStore;

    /// Create a service over an empty in-memory document.
    pub fn test_service() -> TutoringService {
        TutoringService::from_store(Arc::new(MemoryStore::new()))
    }

    /// Register a tutor at 30/hour and one student under them.
    pub fn register_pair(svc: &TutoringService) -> (Tutor, Student) {
        let tutor = svc
            .register_tutor("Ana Ruiz", "ana@demo.com", "Europe/Madrid", 30.0)
            .unwrap();
        let student = svc
            .register_student(&tutor.id, "Leo", "leo@demo.com", "Exam prep")
            .unwrap();
        (tutor, student)
    }
}
