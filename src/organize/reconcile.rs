//! Reconciliation: walk an import tree and move media into the root tree.
//! Images are handled in a first full pass, videos in a second one.

use anyhow::Result;
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use walkdir::WalkDir;

use super::pipeline::{Pipeline, Summary};
use crate::config::Config;
use crate::date::DateResolver;
use crate::errors::MediaSortError;
use crate::fs_ops::DirectoryCache;
use crate::media::{MediaFile, MediaKind};

/// Every regular file of `kind` under `dir`, in walk order (sorted by name per directory).
pub fn collect_kind(dir: &Path, kind: MediaKind) -> Vec<PathBuf> {
    WalkDir::new(dir)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(e) => Some(e),
            Err(e) => {
                warn!(error = %e, "skipping unreadable path during walk");
                None
            }
        })
        .filter(|e| e.file_type().is_file())
        .map(|e| e.into_path())
        .filter(|p| MediaFile::from_path(p).is_some_and(|f| f.kind == kind))
        .collect()
}

/// Run a reconciliation of `config.source_dir` (import) into `config.root_dir`.
pub fn reconcile(config: &Config, resolver: &DateResolver) -> Result<Summary> {
    if !config.source_dir.exists() {
        return Err(MediaSortError::SourceRootMissing(config.source_dir.clone()).into());
    }
    if !config.source_dir.is_dir() {
        return Err(MediaSortError::SourceRootNotDirectory(config.source_dir.clone()).into());
    }

    let cache = DirectoryCache::new();
    let pipeline = Pipeline {
        resolver,
        cache: &cache,
        root: &config.root_dir,
        policy: config.effective_missing_date(),
        dry_run: config.dry_run,
    };

    let mut total = Summary::default();
    for (label, kind) in [("images", MediaKind::Image), ("videos", MediaKind::Video)] {
        // Collect before moving so relocations never feed back into the walk.
        let paths = collect_kind(&config.source_dir, kind);
        info!(pass = label, import = %config.source_dir.display(), files = paths.len(), "Starting reconciliation pass");

        let mut pass = Summary::default();
        for path in &paths {
            pass.record(&pipeline.process(path));
        }
        info!(
            pass = label,
            moved = pass.moved,
            skipped = pass.skipped_duplicate,
            failed = pass.failed,
            undated = pass.undated,
            "Reconciliation pass finished"
        );
        total = total.merge(pass);
    }
    Ok(total)
}
