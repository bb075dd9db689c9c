//! Per-file relocation pipeline shared by both run modes.
//!
//! discovered -> date resolved -> bucket planned -> directory ensured ->
//! moved | skipped-duplicate | failed

use chrono::NaiveDateTime;
use std::path::{Path, PathBuf};
use tracing::{error, info, warn};

use crate::config::MissingDatePolicy;
use crate::date::{DateResolver, modified_time};
use crate::errors::MediaSortError;
use crate::fs_ops::{Bucket, DirectoryCache, Relocation, ensure_directory, plan_bucket, relocate};
use crate::media::MediaFile;
use crate::shutdown;

/// Terminal state of one file.
#[derive(Debug)]
pub enum Outcome {
    Moved { src: PathBuf, dest: PathBuf, bucket: Bucket },
    SkippedDuplicate { src: PathBuf, dest: PathBuf, bucket: Bucket },
    Failed { src: PathBuf, bucket: Option<Bucket>, error: MediaSortError },
    /// Shutdown was requested before the file was touched.
    Interrupted { src: PathBuf },
}

impl Outcome {
    pub fn bucket(&self) -> Option<Bucket> {
        match self {
            Outcome::Moved { bucket, .. } | Outcome::SkippedDuplicate { bucket, .. } => Some(*bucket),
            Outcome::Failed { bucket, .. } => *bucket,
            Outcome::Interrupted { .. } => None,
        }
    }
}

/// Counts per terminal state. `undated` overlaps the others: it counts every
/// file routed to the undated bucket regardless of how the move went.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub moved: usize,
    pub skipped_duplicate: usize,
    pub failed: usize,
    pub interrupted: usize,
    pub undated: usize,
}

impl Summary {
    pub fn record(&mut self, outcome: &Outcome) {
        match outcome {
            Outcome::Moved { .. } => self.moved += 1,
            Outcome::SkippedDuplicate { .. } => self.skipped_duplicate += 1,
            Outcome::Failed { .. } => self.failed += 1,
            Outcome::Interrupted { .. } => self.interrupted += 1,
        }
        if outcome.bucket().is_some_and(|b| b.is_undated()) {
            self.undated += 1;
        }
    }

    pub fn merge(mut self, other: Summary) -> Summary {
        self.moved += other.moved;
        self.skipped_duplicate += other.skipped_duplicate;
        self.failed += other.failed;
        self.interrupted += other.interrupted;
        self.undated += other.undated;
        self
    }

    pub fn total(&self) -> usize {
        self.moved + self.skipped_duplicate + self.failed + self.interrupted
    }
}

impl<'a> FromIterator<&'a Outcome> for Summary {
    fn from_iter<I: IntoIterator<Item = &'a Outcome>>(iter: I) -> Self {
        let mut s = Summary::default();
        for o in iter {
            s.record(o);
        }
        s
    }
}

/// Everything one run needs to place a file.
#[derive(Debug)]
pub struct Pipeline<'a> {
    pub resolver: &'a DateResolver,
    pub cache: &'a DirectoryCache,
    pub root: &'a Path,
    pub policy: MissingDatePolicy,
    pub dry_run: bool,
}

impl Pipeline<'_> {
    pub fn process(&self, path: &Path) -> Outcome {
        let src = path.to_path_buf();
        if shutdown::is_requested() {
            return Outcome::Interrupted { src };
        }
        let Some(file) = MediaFile::from_path(path) else {
            return Outcome::Failed {
                src,
                bucket: None,
                error: MediaSortError::MoveFailure {
                    src: path.to_path_buf(),
                    dest: self.root.to_path_buf(),
                    message: "path has no file name".into(),
                },
            };
        };

        let bucket = plan_bucket(self.timestamp_for(&file));

        let dest_dir = match ensure_directory(bucket, self.root, self.cache, self.dry_run) {
            Ok(dir) => dir,
            Err(e) => {
                error!(code = e.code(), kind = e.kind(), src = %src.display(), error = %e, "could not prepare destination");
                return Outcome::Failed { src, bucket: Some(bucket), error: e };
            }
        };
        let dest = dest_dir.join(&file.file_name);
        info!(src = %src.display(), dest = %dest.display(), bucket = %bucket, "relocating");

        if self.dry_run {
            // Same collision rule as a real run: on disk, or already taken earlier in this run.
            if dest.try_exists().unwrap_or(false) || !self.cache.claim_destination(&dest) {
                info!(src = %src.display(), dest = %dest.display(), "dry-run: same name already at destination; would leave in place");
                return Outcome::SkippedDuplicate { src, dest, bucket };
            }
            info!(src = %src.display(), dest = %dest.display(), "dry-run: would move file");
            return Outcome::Moved { src, dest, bucket };
        }

        match relocate(&src, &dest_dir, &file.file_name) {
            Ok(Relocation::Moved(dest)) => Outcome::Moved { src, dest, bucket },
            Ok(Relocation::SkippedDuplicate(dest)) => {
                info!(src = %src.display(), dest = %dest.display(), "same name already at destination; left in place");
                Outcome::SkippedDuplicate { src, dest, bucket }
            }
            Err(e) => {
                error!(code = e.code(), kind = e.kind(), src = %src.display(), error = %e, "move failed");
                Outcome::Failed { src, bucket: Some(bucket), error: e }
            }
        }
    }

    fn timestamp_for(&self, file: &MediaFile) -> Option<NaiveDateTime> {
        if let Some(ts) = self.resolver.resolve(file) {
            return Some(ts);
        }
        match self.policy {
            MissingDatePolicy::Undated => None,
            MissingDatePolicy::ModifiedTime => match modified_time(&file.path) {
                Ok(ts) => Some(ts),
                Err(e) => {
                    warn!(code = e.code(), kind = e.kind(), path = %file.path.display(), error = %e, "no usable date; sending to undated");
                    None
                }
            },
        }
    }
}
