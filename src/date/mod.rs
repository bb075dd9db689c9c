//! Capture-date resolution.
//!
//! Sources by extension:
//! - heic:          exiftool `DateTimeOriginal`
//! - jpg/jpeg/png:  embedded EXIF `DateTimeOriginal`
//! - mp4/mov:       exiftool `CreateDate`, then `MediaCreateDate`
//! - anything else: no capture date; callers decide on a fallback
//!
//! `DateResolver::resolve` never fails: errors are logged and become `None`.

mod embedded;
pub mod parse;
mod tool;

use chrono::{DateTime, Local, NaiveDateTime};
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

use crate::errors::MediaSortError;
use crate::media::MediaFile;

pub use embedded::read_date_time_original;
pub use parse::{first_value_line, parse_capture_timestamp, parse_video_timestamp};
pub use tool::{DEFAULT_EXIFTOOL, ExifTool, MetadataTool};

const HEIC_FIELDS: &[&str] = &["DateTimeOriginal"];
const VIDEO_FIELDS: &[&str] = &["CreateDate", "MediaCreateDate"];

pub struct DateResolver {
    tool: Box<dyn MetadataTool>,
}

impl std::fmt::Debug for DateResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DateResolver").finish_non_exhaustive()
    }
}

impl DateResolver {
    pub fn new(tool: impl MetadataTool + 'static) -> Self {
        Self { tool: Box::new(tool) }
    }

    /// Resolver backed by the exiftool binary at `program`.
    pub fn with_exiftool(program: impl Into<std::path::PathBuf>) -> Self {
        Self::new(ExifTool::new(program))
    }

    /// Best-effort capture timestamp. Failures are logged and yield `None`.
    pub fn resolve(&self, file: &MediaFile) -> Option<NaiveDateTime> {
        match self.try_resolve(file) {
            Ok(found) => found,
            Err(MediaSortError::InvalidSentinelDate(path)) => {
                debug!(path = %path.display(), "placeholder capture date; treating as missing");
                None
            }
            Err(e) => {
                warn!(code = e.code(), kind = e.kind(), path = %file.path.display(), error = %e, "could not read capture date");
                None
            }
        }
    }

    /// Capture timestamp with the failure reason kept.
    pub fn try_resolve(&self, file: &MediaFile) -> Result<Option<NaiveDateTime>, MediaSortError> {
        match file.extension.as_str() {
            "heic" => self.from_tool(&file.path, HEIC_FIELDS, parse_capture_timestamp),
            "jpg" | "jpeg" | "png" => read_date_time_original(&file.path),
            "mp4" | "mov" => self.from_tool(&file.path, VIDEO_FIELDS, parse_video_timestamp),
            _ => Ok(None),
        }
    }

    fn from_tool(
        &self,
        path: &Path,
        fields: &[&str],
        parse: fn(&Path, &str) -> Result<NaiveDateTime, MediaSortError>,
    ) -> Result<Option<NaiveDateTime>, MediaSortError> {
        let Some(output) = self.tool.read_fields(path, fields)? else {
            return Ok(None);
        };
        match first_value_line(&output) {
            Some(line) => parse(path, line).map(Some),
            None => Ok(None),
        }
    }
}

/// File modification time as local date+time.
pub fn modified_time(path: &Path) -> Result<NaiveDateTime, MediaSortError> {
    let modified = fs::metadata(path)
        .and_then(|m| m.modified())
        .map_err(|source| MediaSortError::ModifiedTimeUnavailable {
            path: path.to_path_buf(),
            source,
        })?;
    Ok(DateTime::<Local>::from(modified).naive_local())
}
