//! JSON document persistence.
//!
//! State persists as five independent documents in the data directory.
//! Loads are best-effort per document: a missing file is simply absent, a
//! malformed one is an error the caller downgrades to defaults. Saves are
//! all-or-nothing per document and independent of each other.

use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::StorageError;

/// The five persisted documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Document {
    Activities,
    Reminders,
    CalendarEvents,
    Notes,
    Logs,
}

impl Document {
    pub const ALL: [Document; 5] = [
        Document::Activities,
        Document::Reminders,
        Document::CalendarEvents,
        Document::Notes,
        Document::Logs,
    ];

    pub fn file_name(self) -> &'static str {
        match self {
            Document::Activities => "activities.json",
            Document::Reminders => "reminders.json",
            Document::CalendarEvents => "calendar_events.json",
            Document::Notes => "notes.json",
            Document::Logs => "logs.json",
        }
    }
}

/// Loads and saves the persisted documents under one directory.
#[derive(Debug, Clone)]
pub struct DocumentStore {
    dir: PathBuf,
}

/// The live session is not one of the five documents: it is auxiliary
/// state a one-shot caller persists between invocations, like a pid file.
const SESSION_FILE: &str = "session.json";

impl DocumentStore {
    /// Open the store at the default data directory.
    ///
    /// # Errors
    /// Returns an error if the directory cannot be created.
    pub fn open_default() -> Result<Self, StorageError> {
        Ok(Self { dir: super::data_dir()? })
    }

    /// Open the store at an explicit directory (config override, tests).
    ///
    /// # Errors
    /// Returns an error if the directory cannot be created.
    pub fn at(dir: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let dir = dir.into();
        fs::create_dir_all(&dir)
            .map_err(|source| StorageError::DataDir { path: dir.clone(), source })?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path(&self, doc: Document) -> PathBuf {
        self.dir.join(doc.file_name())
    }

    /// Load one document. `Ok(None)` when the file does not exist.
    ///
    /// # Errors
    /// Read failures and malformed content are errors; the caller decides
    /// whether to fall back to defaults.
    pub fn load<T: DeserializeOwned>(&self, doc: Document) -> Result<Option<T>, StorageError> {
        let path = self.path(doc);
        let text = match fs::read_to_string(&path) {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(source) => return Err(StorageError::ReadFailed { path, source }),
        };
        let value = serde_json::from_str(&text)
            .map_err(|source| StorageError::Malformed { path, source })?;
        Ok(Some(value))
    }

    /// Save one document.
    ///
    /// # Errors
    /// Returns an error if serialization or the write fails.
    pub fn save<T: Serialize>(&self, doc: Document, value: &T) -> Result<(), StorageError> {
        let path = self.path(doc);
        let text = serde_json::to_string_pretty(value).map_err(|source| {
            StorageError::Malformed { path: path.clone(), source }
        })?;
        fs::write(&path, text)
            .map_err(|source| StorageError::WriteFailed { path, source })
    }

    /// Delete one document. Returns whether a file was actually removed;
    /// an already-missing file is not an error.
    ///
    /// # Errors
    /// Returns an error only for IO failures other than absence.
    pub fn remove(&self, doc: Document) -> Result<bool, StorageError> {
        remove_file(self.path(doc))
    }

    /// Load the persisted live session, if one exists.
    ///
    /// # Errors
    /// Same contract as [`DocumentStore::load`].
    pub fn load_session<T: DeserializeOwned>(&self) -> Result<Option<T>, StorageError> {
        let path = self.dir.join(SESSION_FILE);
        let text = match fs::read_to_string(&path) {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(source) => return Err(StorageError::ReadFailed { path, source }),
        };
        let value = serde_json::from_str(&text)
            .map_err(|source| StorageError::Malformed { path, source })?;
        Ok(Some(value))
    }

    /// Persist the live session.
    ///
    /// # Errors
    /// Returns an error if serialization or the write fails.
    pub fn save_session<T: Serialize>(&self, value: &T) -> Result<(), StorageError> {
        let path = self.dir.join(SESSION_FILE);
        let text = serde_json::to_string_pretty(value).map_err(|source| {
            StorageError::Malformed { path: path.clone(), source }
        })?;
        fs::write(&path, text)
            .map_err(|source| StorageError::WriteFailed { path, source })
    }

    /// Drop the persisted live session, tolerating its absence.
    ///
    /// # Errors
    /// Returns an error only for IO failures other than absence.
    pub fn clear_session(&self) -> Result<bool, StorageError> {
        remove_file(self.dir.join(SESSION_FILE))
    }
}

fn remove_file(path: PathBuf) -> Result<bool, StorageError> {
    match fs::remove_file(&path) {
        Ok(()) => Ok(true),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
        Err(source) => Err(StorageError::RemoveFailed { path, source }),
    }
}
