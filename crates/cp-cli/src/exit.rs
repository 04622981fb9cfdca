use cp_core::errors::CoreError;
use cp_store::{ErrorClass, ServiceError};

pub const EXIT_FAILURE: i32 = 1;
pub const EXIT_NOT_FOUND: i32 = 3;
pub const EXIT_BAD_INPUT: i32 = 4;

/// Classify an error reaching `main` by the domain error it carries.
pub fn classify(error: &anyhow::Error) -> ErrorClass {
    if let Some(service) = error.downcast_ref::<ServiceError>() {
        return service.class();
    }
    match error.downcast_ref::<CoreError>() {
        Some(CoreError::NotFound { .. }) => ErrorClass::NotFound,
        Some(CoreError::Validation(_)) => ErrorClass::BadInput,
        Some(CoreError::Other(_)) | None => ErrorClass::Fatal,
    }
}

pub fn exit_code(error: &anyhow::Error) -> i32 {
    match classify(error) {
        ErrorClass::NotFound => EXIT_NOT_FOUND,
        ErrorClass::BadInput => EXIT_BAD_INPUT,
        ErrorClass::Fatal => EXIT_FAILURE,
    }
}
