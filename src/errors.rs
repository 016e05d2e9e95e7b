//! Error types for the voltcase library.
//!
//! This module defines custom error types that categorize different failures
//! that can occur during card management operations.

use std::{io, path::PathBuf};

use thiserror::Error;
use uuid::Uuid;

/// The main error type for the voltcase library.
#[derive(Error, Debug)]
pub enum VoltError {
    /// Errors related to file I/O operations.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Errors related to serialization/deserialization operations.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Card was not found when performing an operation.
    #[error("Card not found: {id}")]
    CardNotFound { id: Uuid },

    /// Card with the same ID already exists.
    #[error("Card already exists: {id}")]
    CardAlreadyExists { id: Uuid },

    /// Directory creation or access failed.
    #[error("Failed to create or access directory: {path}")]
    DirectoryError { path: PathBuf },

    /// Errors related to export operations.
    #[error("Export failed: {message}")]
    ExportFailed { message: String },

    /// Errors related to import operations.
    #[error("Import failed: {message}")]
    ImportFailed { message: String },

    /// Generic application error with a custom message.
    #[error("{message}")]
    ApplicationError { message: String },
}
