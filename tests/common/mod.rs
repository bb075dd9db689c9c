#![allow(dead_code)]

use chrono::{Local, TimeZone};
use filetime::{FileTime, set_file_mtime};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use media_sort::{MediaSortError, MetadataTool};

/// Scripted stand-in for exiftool, keyed by file name.
#[derive(Debug, Clone, Default)]
pub struct FakeTool {
    responses: HashMap<String, Result<Option<String>, String>>,
    calls: Arc<Mutex<Vec<(String, Vec<String>)>>>,
}

impl FakeTool {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tool prints `output` for `file_name` (empty string = prints nothing).
    pub fn with_output(mut self, file_name: &str, output: &str) -> Self {
        let value = if output.trim().is_empty() { None } else { Some(output.to_string()) };
        self.responses.insert(file_name.to_string(), Ok(value));
        self
    }

    /// Tool fails (missing binary, non-zero exit) for `file_name`.
    pub fn with_failure(mut self, file_name: &str, reason: &str) -> Self {
        self.responses.insert(file_name.to_string(), Err(reason.to_string()));
        self
    }

    /// Shared handle to the recorded calls; survives moving the tool into a resolver.
    pub fn calls(&self) -> Arc<Mutex<Vec<(String, Vec<String>)>>> {
        Arc::clone(&self.calls)
    }
}

impl MetadataTool for FakeTool {
    fn read_fields(&self, path: &Path, fields: &[&str]) -> Result<Option<String>, MediaSortError> {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        self.calls
            .lock()
            .unwrap()
            .push((name.clone(), fields.iter().map(|f| f.to_string()).collect()));
        match self.responses.get(&name) {
            Some(Ok(out)) => Ok(out.clone()),
            Some(Err(reason)) => Err(MediaSortError::MetadataUnavailable {
                path: path.to_path_buf(),
                reason: reason.clone(),
            }),
            None => Ok(None),
        }
    }
}

/// Minimal JPEG whose APP1 segment carries EXIF DateTimeOriginal = `value`.
///
/// Layout (little-endian TIFF):
///   0  header "II*\0" + IFD0 offset 8
///   8  IFD0: one entry, ExifIFDPointer -> 26
///   26 Exif IFD: one entry, DateTimeOriginal ASCII[20] -> 44
///   44 "YYYY:MM:DD HH:MM:SS\0"
pub fn jpeg_with_date_time_original(value: &str) -> Vec<u8> {
    assert_eq!(value.len(), 19, "EXIF date must be 19 characters");

    let mut tiff = Vec::new();
    tiff.extend_from_slice(b"II*\0");
    tiff.extend_from_slice(&8u32.to_le_bytes());

    tiff.extend_from_slice(&1u16.to_le_bytes());
    tiff.extend_from_slice(&0x8769u16.to_le_bytes());
    tiff.extend_from_slice(&4u16.to_le_bytes());
    tiff.extend_from_slice(&1u32.to_le_bytes());
    tiff.extend_from_slice(&26u32.to_le_bytes());
    tiff.extend_from_slice(&0u32.to_le_bytes());

    tiff.extend_from_slice(&1u16.to_le_bytes());
    tiff.extend_from_slice(&0x9003u16.to_le_bytes());
    tiff.extend_from_slice(&2u16.to_le_bytes());
    tiff.extend_from_slice(&20u32.to_le_bytes());
    tiff.extend_from_slice(&44u32.to_le_bytes());
    tiff.extend_from_slice(&0u32.to_le_bytes());

    tiff.extend_from_slice(value.as_bytes());
    tiff.push(0);
    assert_eq!(tiff.len(), 64);

    let mut app1 = b"Exif\0\0".to_vec();
    app1.extend_from_slice(&tiff);

    let mut jpeg = vec![0xFF, 0xD8, 0xFF, 0xE1];
    jpeg.extend_from_slice(&((app1.len() + 2) as u16).to_be_bytes());
    jpeg.extend_from_slice(&app1);
    jpeg.extend_from_slice(&[0xFF, 0xD9]);
    jpeg
}

/// JPEG with no APP1 segment at all.
pub fn jpeg_without_exif() -> Vec<u8> {
    vec![0xFF, 0xD8, 0xFF, 0xD9]
}

pub fn write(path: &Path, bytes: &[u8]) -> PathBuf {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, bytes).unwrap();
    path.to_path_buf()
}

/// Set mtime to local noon on the given day.
pub fn set_local_mtime(path: &Path, year: i32, month: u32, day: u32) {
    let local = Local
        .with_ymd_and_hms(year, month, day, 12, 0, 0)
        .single()
        .expect("unambiguous local time");
    set_file_mtime(path, FileTime::from_unix_time(local.timestamp(), 0)).unwrap();
}

pub fn undated(root: &Path) -> PathBuf {
    root.join(media_sort::UNDATED_DIR_NAME)
}
