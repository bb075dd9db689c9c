//! Flat sweep: organize the direct children of one directory in parallel.

use anyhow::{Context, Result};
use rayon::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use super::pipeline::{Outcome, Pipeline, Summary};
use crate::config::Config;
use crate::date::DateResolver;
use crate::errors::MediaSortError;
use crate::fs_ops::DirectoryCache;

/// Regular files directly inside `dir`, sorted by name for stable logs.
/// Subdirectories (including already-built year folders) are left alone.
pub fn list_files(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.exists() {
        return Err(MediaSortError::SourceRootMissing(dir.to_path_buf()).into());
    }
    let mut files = Vec::new();
    for entry in fs::read_dir(dir).with_context(|| format!("read directory '{}'", dir.display()))? {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                warn!(dir = %dir.display(), error = %e, "skipping unreadable entry");
                continue;
            }
        };
        match entry.file_type() {
            Ok(ft) if ft.is_file() => files.push(entry.path()),
            Ok(_) => debug!(path = %entry.path().display(), "not a regular file; skipped"),
            Err(e) => warn!(path = %entry.path().display(), error = %e, "cannot stat entry; skipped"),
        }
    }
    files.sort();
    Ok(files)
}

/// Run a flat sweep of `config.source_dir` into `config.root_dir`.
pub fn sweep(config: &Config, resolver: &DateResolver) -> Result<Summary> {
    let files = list_files(&config.source_dir)?;
    info!(source = %config.source_dir.display(), files = files.len(), threads = config.threads, "Starting sweep");

    let cache = DirectoryCache::new();
    let pipeline = Pipeline {
        resolver,
        cache: &cache,
        root: &config.root_dir,
        policy: config.effective_missing_date(),
        dry_run: config.dry_run,
    };

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(config.threads)
        .thread_name(|i| format!("media-sort-{i}"))
        .build()
        .context("build worker pool")?;

    let outcomes: Vec<Outcome> = pool.install(|| files.par_iter().map(|p| pipeline.process(p)).collect());
    let summary: Summary = outcomes.iter().collect();

    info!(
        moved = summary.moved,
        skipped = summary.skipped_duplicate,
        failed = summary.failed,
        interrupted = summary.interrupted,
        undated = summary.undated,
        buckets = cache.len(),
        "Sweep finished"
    );
    Ok(summary)
}
