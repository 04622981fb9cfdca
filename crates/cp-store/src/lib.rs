//! # cp-store
//!
//! Persistence and domain-consistency layer for ClassPilot.
//!
//! All state lives in one JSON document with three collections (`tutors`,
//! `students`, `lessons`). Every mutation rewrites the whole document through
//! a temporary file in the target's directory followed by an atomic rename, so
//! readers only ever see the previous or the next complete document.
//!
//! Layers, leaf-first:
//! - [`store`]: the [`DocumentStore`] trait, [`FileStore`], and [`MemoryStore`]
//! - [`repos`]: repository traits and their JSON-document implementations
//! - [`service`]: [`TutoringService`], which enforces cross-entity rules

pub mod document;
pub mod error;
pub mod helpers;
pub mod repos;
pub mod service;
pub mod store;

mod dashboard;
mod test_support;

pub use document::Document;
pub use error::{ErrorClass, ServiceError, StoreError};
pub use service::TutoringService;
pub use store::{DocumentStore, FileStore, MemoryStore};
