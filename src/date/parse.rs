//! Text parsing for metadata date values.
//!
//! exiftool's `-s3` output and EXIF ASCII tags share the `YYYY:MM:DD HH:MM:SS`
//! layout. Both are parsed here so the rules can be tested without spawning
//! the tool or reading a file.

use chrono::NaiveDateTime;
use std::path::Path;

use crate::errors::MediaSortError;

pub const CAPTURE_FORMAT: &str = "%Y:%m:%d %H:%M:%S";

/// Placeholder written by cameras and muxers when no date was recorded.
pub const SENTINEL_DATE: &str = "0000:00:00 00:00:00";

/// First line of tool output that carries a value.
pub fn first_value_line(output: &str) -> Option<&str> {
    output.lines().map(str::trim).find(|l| !l.is_empty())
}

/// Parse one `YYYY:MM:DD HH:MM:SS` value.
pub fn parse_capture_timestamp(path: &Path, raw: &str) -> Result<NaiveDateTime, MediaSortError> {
    let value = raw.trim();
    NaiveDateTime::parse_from_str(value, CAPTURE_FORMAT).map_err(|e| {
        MediaSortError::MetadataParse {
            path: path.to_path_buf(),
            raw: value.to_string(),
            message: e.to_string(),
        }
    })
}

/// Like `parse_capture_timestamp`, but rejects the all-zero placeholder first.
pub fn parse_video_timestamp(path: &Path, raw: &str) -> Result<NaiveDateTime, MediaSortError> {
    if raw.trim() == SENTINEL_DATE {
        return Err(MediaSortError::InvalidSentinelDate(path.to_path_buf()));
    }
    parse_capture_timestamp(path, raw)
}
