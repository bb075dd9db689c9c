//! Media classification by file extension.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Extensions treated as still images (lowercase).
pub const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "heic"];
/// Extensions treated as videos (lowercase).
pub const VIDEO_EXTENSIONS: &[&str] = &["mp4", "mov"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MediaKind {
    Image,
    Video,
    Other,
}

impl MediaKind {
    /// Classify a lowercase extension.
    pub fn from_extension(ext: &str) -> Self {
        if IMAGE_EXTENSIONS.contains(&ext) {
            MediaKind::Image
        } else if VIDEO_EXTENSIONS.contains(&ext) {
            MediaKind::Video
        } else {
            MediaKind::Other
        }
    }
}

/// A file observed on disk, with its kind inferred from the extension.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaFile {
    pub path: PathBuf,
    /// Base name, kept as OsString so non-UTF8 names survive the move.
    pub file_name: OsString,
    /// Lowercased extension, empty when the file has none.
    pub extension: String,
    pub kind: MediaKind,
}

impl MediaFile {
    /// Returns None for paths without a final component (e.g. `/` or `..`).
    pub fn from_path(path: &Path) -> Option<Self> {
        let file_name = path.file_name()?.to_os_string();
        let extension = path
            .extension()
            .map(|e| e.to_string_lossy().to_ascii_lowercase())
            .unwrap_or_default();
        let kind = MediaKind::from_extension(&extension);
        Some(Self {
            path: path.to_path_buf(),
            file_name,
            extension,
            kind,
        })
    }
}
