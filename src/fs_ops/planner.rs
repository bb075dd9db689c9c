//! Destination planning: timestamp -> bucket -> directory.
//!
//! `ensure_directory` is the only place that creates directories. The cache
//! guarantees at most one creation attempt per bucket per run, even with many
//! workers asking for the same bucket at once.

use chrono::{Datelike, NaiveDateTime};
use std::collections::HashSet;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::{debug, info};

use crate::errors::MediaSortError;

/// Folder for files whose date could not be determined ("no creation date").
/// Kept verbatim for compatibility with existing trees.
pub const UNDATED_DIR_NAME: &str = "생성일없음";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Bucket {
    Dated { year: i32, month: u32 },
    Undated,
}

impl Bucket {
    /// `{root}/{year}/{month:02}` or `{root}/생성일없음`.
    pub fn directory(&self, root: &Path) -> PathBuf {
        match self {
            Bucket::Dated { year, month } => root.join(format!("{year:04}")).join(format!("{month:02}")),
            Bucket::Undated => root.join(UNDATED_DIR_NAME),
        }
    }

    pub fn is_undated(&self) -> bool {
        matches!(self, Bucket::Undated)
    }
}

impl fmt::Display for Bucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Bucket::Dated { year, month } => write!(f, "{year:04}/{month:02}"),
            Bucket::Undated => f.write_str(UNDATED_DIR_NAME),
        }
    }
}

pub fn plan_bucket(timestamp: Option<NaiveDateTime>) -> Bucket {
    match timestamp {
        Some(ts) => Bucket::Dated {
            year: ts.year(),
            month: ts.month(),
        },
        None => Bucket::Undated,
    }
}

/// Buckets whose directory is known to exist in this run.
///
/// Under dry-run nothing reaches the disk, so the cache also remembers which
/// destination files the run has already claimed.
#[derive(Debug, Default)]
pub struct DirectoryCache {
    ensured: Mutex<HashSet<Bucket>>,
    claimed: Mutex<HashSet<PathBuf>>,
}

impl DirectoryCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, bucket: &Bucket) -> bool {
        self.ensured
            .lock()
            .map(|set| set.contains(bucket))
            .unwrap_or(false)
    }

    /// Record `dest` as taken. Returns false if an earlier file already claimed it.
    pub fn claim_destination(&self, dest: &Path) -> bool {
        let mut claimed = self.claimed.lock().unwrap_or_else(|p| p.into_inner());
        claimed.insert(dest.to_path_buf())
    }

    pub fn len(&self) -> usize {
        self.ensured.lock().map(|set| set.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Make sure the bucket's directory exists under `root` and return its path.
///
/// The cache lock is held across check-and-create, so two workers never race
/// on the same bucket. `create_dir_all` also tolerates a directory created by
/// some other process in the meantime.
pub fn ensure_directory(
    bucket: Bucket,
    root: &Path,
    cache: &DirectoryCache,
    dry_run: bool,
) -> Result<PathBuf, MediaSortError> {
    let dir = bucket.directory(root);

    // A poisoned lock only means another worker panicked mid-insert; the set is still usable.
    let mut ensured = cache.ensured.lock().unwrap_or_else(|p| p.into_inner());
    if ensured.contains(&bucket) {
        return Ok(dir);
    }

    if dry_run {
        info!(action = "mkdir -p", path = %dir.display(), "dry-run");
    } else if dir.is_dir() {
        debug!(bucket = %bucket, path = %dir.display(), "bucket directory already present");
    } else {
        fs::create_dir_all(&dir).map_err(|source| MediaSortError::DirectoryCreation {
            path: dir.clone(),
            source,
        })?;
        info!(bucket = %bucket, path = %dir.display(), "Created bucket directory");
    }

    ensured.insert(bucket);
    Ok(dir)
}
