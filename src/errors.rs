//! Typed error definitions for media_sort.
//! Provides a small set of well-known failure modes for better logs and tests.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MediaSortError {
    #[error("Metadata unavailable for {path}: {reason}")]
    MetadataUnavailable { path: PathBuf, reason: String },

    #[error("Unparseable capture date '{raw}' in {path}: {message}")]
    MetadataParse {
        path: PathBuf,
        raw: String,
        message: String,
    },

    #[error("Placeholder (all-zero) capture date in {0}")]
    InvalidSentinelDate(PathBuf),

    #[error("Cannot read modification time of {path}: {source}")]
    ModifiedTimeUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to create directory {path}: {source}")]
    DirectoryCreation {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to move {src} -> {dest}: {message}")]
    MoveFailure {
        src: PathBuf,
        dest: PathBuf,
        message: String,
    },

    #[error("Source directory not found: {0}")]
    SourceRootMissing(PathBuf),

    #[error("Source path is not a directory: {0}")]
    SourceRootNotDirectory(PathBuf),
}

impl MediaSortError {
    /// Stable numeric code for structured logs.
    pub fn code(&self) -> u16 {
        match self {
            MediaSortError::MetadataUnavailable { .. } => 10,
            MediaSortError::MetadataParse { .. } => 11,
            MediaSortError::InvalidSentinelDate(_) => 12,
            MediaSortError::ModifiedTimeUnavailable { .. } => 13,
            MediaSortError::DirectoryCreation { .. } => 20,
            MediaSortError::MoveFailure { .. } => 21,
            MediaSortError::SourceRootMissing(_) => 30,
            MediaSortError::SourceRootNotDirectory(_) => 31,
        }
    }

    /// Short machine-friendly label, paired with `code()` in log events.
    pub fn kind(&self) -> &'static str {
        match self {
            MediaSortError::MetadataUnavailable { .. } => "metadata_unavailable",
            MediaSortError::MetadataParse { .. } => "metadata_parse",
            MediaSortError::InvalidSentinelDate(_) => "invalid_sentinel_date",
            MediaSortError::ModifiedTimeUnavailable { .. } => "mtime_unavailable",
            MediaSortError::DirectoryCreation { .. } => "directory_creation",
            MediaSortError::MoveFailure { .. } => "move_failure",
            MediaSortError::SourceRootMissing(_) => "source_root_missing",
            MediaSortError::SourceRootNotDirectory(_) => "source_root_not_directory",
        }
    }
}
