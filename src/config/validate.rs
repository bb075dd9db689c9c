//! Config validation logic.
//! Verifies the source directory, prepares the root, and canonicalizes both.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use tracing::{debug, error, info};

use super::types::Config;
use crate::errors::MediaSortError;

/// Validate paths in place. A missing or non-directory source is fatal; a
/// missing root is created (or only reported under dry-run).
pub fn validate_and_normalize(cfg: &mut Config) -> Result<()> {
    ensure_source_dir(&cfg.source_dir)?;
    fs::read_dir(&cfg.source_dir).with_context(|| {
        format!("Cannot read source directory '{}'; check permissions", cfg.source_dir.display())
    })?;
    cfg.source_dir = dunce::canonicalize(&cfg.source_dir).unwrap_or_else(|_| cfg.source_dir.clone());

    ensure_root_dir(&cfg.root_dir, cfg.dry_run)?;
    if cfg.root_dir.exists() {
        cfg.root_dir = dunce::canonicalize(&cfg.root_dir).unwrap_or_else(|_| cfg.root_dir.clone());
    }

    info!(
        mode = %cfg.mode,
        source = %cfg.source_dir.display(),
        root = %cfg.root_dir.display(),
        missing_date = %cfg.effective_missing_date(),
        dry_run = cfg.dry_run,
        "Config validated"
    );
    Ok(())
}

fn ensure_source_dir(path: &Path) -> Result<(), MediaSortError> {
    if !path.exists() {
        error!(path = %path.display(), "source directory does not exist");
        return Err(MediaSortError::SourceRootMissing(path.to_path_buf()));
    }
    if !path.is_dir() {
        error!(path = %path.display(), "source path is not a directory");
        return Err(MediaSortError::SourceRootNotDirectory(path.to_path_buf()));
    }
    debug!(path = %path.display(), "source directory present");
    Ok(())
}

fn ensure_root_dir(path: &Path, dry_run: bool) -> Result<()> {
    if path.exists() {
        if !path.is_dir() {
            anyhow::bail!("root exists but isn't a directory: {}", path.display());
        }
        return Ok(());
    }
    if dry_run {
        info!(action = "mkdir -p", path = %path.display(), "dry-run");
        return Ok(());
    }
    fs::create_dir_all(path)
        .with_context(|| format!("Failed to create root directory '{}'", path.display()))?;
    info!(path = %path.display(), "Created root directory");
    Ok(())
}
