//! Core error types for tempo-core.
//!
//! This module defines the error hierarchy using thiserror. Validation and
//! not-found errors abort an operation before any state change; storage
//! errors on load are recovered per-document and on save are surfaced as
//! warnings, never as process failures.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for tempo-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Lookup errors
    #[error("Not found: {0}")]
    NotFound(#[from] NotFoundError),

    /// Document storage errors
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Input validation errors.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// A required text field was empty
    #[error("{field} must not be empty")]
    EmptyField { field: &'static str },

    /// A duration that must be positive was zero or negative
    #[error("{field} must be a positive number of {unit}")]
    NonPositiveDuration { field: &'static str, unit: &'static str },
}

/// An operation referenced an id absent from its collection.
#[derive(Error, Debug)]
pub enum NotFoundError {
    #[error("no activity with id '{id}'")]
    Activity { id: String },

    #[error("no reminder with id '{id}'")]
    Reminder { id: String },

    #[error("no calendar event with id '{id}'")]
    CalendarEvent { id: String },

    #[error("no notebook with id '{id}'")]
    Notebook { id: String },
}

/// Document storage errors.
#[derive(Error, Debug)]
pub enum StorageError {
    /// The data directory could not be determined or created
    #[error("Failed to prepare data directory {path}: {source}")]
    DataDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Reading a document file failed
    #[error("Failed to read {path}: {source}")]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Writing a document file failed
    #[error("Failed to write {path}: {source}")]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Deleting a document file failed
    #[error("Failed to remove {path}: {source}")]
    RemoveFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A document existed but did not parse
    #[error("Malformed document {path}: {source}")]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
