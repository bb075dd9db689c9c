//! Embedded EXIF reading for JPEG and PNG containers.

use chrono::NaiveDateTime;
use exif::{In, Reader, Tag, Value};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use super::parse::parse_capture_timestamp;
use crate::errors::MediaSortError;

/// Read `DateTimeOriginal` from the file's embedded EXIF block.
///
/// A file without EXIF, or EXIF without the tag, is `Ok(None)`.
pub fn read_date_time_original(path: &Path) -> Result<Option<NaiveDateTime>, MediaSortError> {
    let file = File::open(path).map_err(|e| MediaSortError::MetadataUnavailable {
        path: path.to_path_buf(),
        reason: format!("open: {e}"),
    })?;

    let exif = match Reader::new().read_from_container(&mut BufReader::new(file)) {
        Ok(exif) => exif,
        Err(exif::Error::NotFound(_)) => return Ok(None),
        Err(e) => {
            return Err(MediaSortError::MetadataUnavailable {
                path: path.to_path_buf(),
                reason: format!("exif: {e}"),
            });
        }
    };

    let Some(field) = exif.get_field(Tag::DateTimeOriginal, In::PRIMARY) else {
        return Ok(None);
    };

    let raw = match &field.value {
        Value::Ascii(values) => match values.first() {
            Some(bytes) => String::from_utf8_lossy(bytes).into_owned(),
            None => return Ok(None),
        },
        _ => field.display_value().to_string(),
    };

    parse_capture_timestamp(path, &raw).map(Some)
}
