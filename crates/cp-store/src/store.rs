//! Whole-document storage backends.
//!
//! [`DocumentStore`] is the narrow load/store seam the repositories are built
//! on. [`FileStore`] persists to one JSON file with atomic replacement;
//! [`MemoryStore`] keeps the document in memory for tests.

use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

use tempfile::NamedTempFile;

use crate::document::Document;
use crate::error::StoreError;

/// Whole-document read and write.
///
/// There is no partial or field-level update: every mutation reads the full
/// document, changes it in memory, and writes the full document back.
pub trait DocumentStore: Send + Sync {
    /// Load and parse the entire document.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Corrupt` if the stored content is not a valid
    /// document, or `StoreError::Io` if it cannot be read.
    fn read(&self) -> Result<Document, StoreError>;

    /// Replace the stored document with `document`.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if serialization or the replacement fails. The
    /// previous document is left intact on failure.
    fn write(&self, document: &Document) -> Result<(), StoreError>;

    /// Read-modify-write under this store's writer lock.
    ///
    /// If `apply` fails, nothing is written and its error is returned.
    ///
    /// # Errors
    ///
    /// Returns the first error from reading, `apply`, or writing.
    fn update(
        &self,
        apply: &mut dyn FnMut(&mut Document) -> Result<(), StoreError>,
    ) -> Result<(), StoreError>;
}

// ---------------------------------------------------------------------------
// FileStore
// ---------------------------------------------------------------------------

/// Document store backed by a single JSON file.
///
/// Writes go to a temporary file in the same directory, are flushed to disk,
/// and then renamed over the target, so a crash mid-write leaves the previous
/// document in place.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    writer: Mutex<()>,
}

impl FileStore {
    /// Open the store at `path`, creating parent directories and an empty
    /// document if the file does not exist yet.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Io` if the directory or initial file cannot be created.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let store = Self {
            path: path.into(),
            writer: Mutex::new(()),
        };

        let dir = store.dir().to_path_buf();
        std::fs::create_dir_all(&dir).map_err(|source| StoreError::Io { path: dir, source })?;

        if !store.path.exists() {
            store.write(&Document::empty())?;
            tracing::info!(path = %store.path.display(), "initialized empty document");
        }
        Ok(store)
    }

    /// Path of the document file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Directory holding the document and its temporary files.
    fn dir(&self) -> &Path {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        }
    }

    fn io_error(&self, source: std::io::Error) -> StoreError {
        StoreError::Io {
            path: self.path.clone(),
            source,
        }
    }

    /// Flush the directory entry so the rename itself survives a crash.
    #[cfg(unix)]
    fn sync_dir(&self) {
        if let Err(error) = std::fs::File::open(self.dir()).and_then(|dir| dir.sync_all()) {
            tracing::warn!(%error, dir = %self.dir().display(), "failed to sync document directory");
        }
    }

    #[cfg(not(unix))]
    fn sync_dir(&self) {}
}

impl DocumentStore for FileStore {
    fn read(&self) -> Result<Document, StoreError> {
        let raw = match std::fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => {
                let empty = Document::empty();
                self.write(&empty)?;
                tracing::info!(path = %self.path.display(), "document missing; initialized empty");
                return Ok(empty);
            }
            Err(error) => return Err(self.io_error(error)),
        };

        let document: Document =
            serde_json::from_str(&raw).map_err(|e| StoreError::Corrupt {
                path: self.path.clone(),
                reason: e.to_string(),
            })?;

        tracing::debug!(
            path = %self.path.display(),
            tutors = document.tutors.len(),
            students = document.students.len(),
            lessons = document.lessons.len(),
            "read document"
        );
        Ok(document)
    }

    fn write(&self, document: &Document) -> Result<(), StoreError> {
        let mut tmp = NamedTempFile::new_in(self.dir()).map_err(|e| self.io_error(e))?;
        {
            let mut out = BufWriter::new(&mut tmp);
            serde_json::to_writer_pretty(&mut out, document)?;
            out.write_all(b"\n").map_err(|e| self.io_error(e))?;
            out.flush().map_err(|e| self.io_error(e))?;
        }
        tmp.as_file().sync_all().map_err(|e| self.io_error(e))?;

        // Dropping a failed `PersistError` removes the temporary file.
        tmp.persist(&self.path)?;
        self.sync_dir();

        tracing::debug!(
            path = %self.path.display(),
            tutors = document.tutors.len(),
            students = document.students.len(),
            lessons = document.lessons.len(),
            "wrote document"
        );
        Ok(())
    }

    fn update(
        &self,
        apply: &mut dyn FnMut(&mut Document) -> Result<(), StoreError>,
    ) -> Result<(), StoreError> {
        let _guard = self.writer.lock().unwrap_or_else(PoisonError::into_inner);
        let mut document = self.read()?;
        apply(&mut document)?;
        self.write(&document)
    }
}

// ---------------------------------------------------------------------------
// MemoryStore
// ---------------------------------------------------------------------------

/// Document store held entirely in memory.
#[derive(Debug, Default)]
pub struct MemoryStore {
    document: Mutex<Document>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing document.
    #[must_use]
    pub const fn with_document(document: Document) -> Self {
        Self {
            document: Mutex::new(document),
        }
    }
}

impl DocumentStore for MemoryStore {
    fn read(&self) -> Result<Document, StoreError> {
        Ok(self
            .document
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone())
    }

    fn write(&self, document: &Document) -> Result<(), StoreError> {
        *self.document.lock().unwrap_or_else(PoisonError::into_inner) = document.clone();
        Ok(())
    }

    fn update(
        &self,
        apply: &mut dyn FnMut(&mut Document) -> Result<(), StoreError>,
    ) -> Result<(), StoreError> {
        let mut guard = self.document.lock().unwrap_or_else(PoisonError::into_inner);
        let mut next = guard.clone();
        apply(&mut next)?;
        *guard = next;
        Ok(())
    }
}
