//! File relocation.
//! Renames in place when possible; on cross-filesystem errors falls back to
//! copy+remove. Never overwrites: an existing destination means "skip".

use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use super::atomic::rename;
use super::copy::copy_then_remove;
use super::helpers::describe_io_error;
use super::util::is_cross_device;
use crate::errors::MediaSortError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Relocation {
    Moved(PathBuf),
    /// A file with the same name already sits at the destination.
    SkippedDuplicate(PathBuf),
}

impl Relocation {
    pub fn destination(&self) -> &Path {
        match self {
            Relocation::Moved(p) | Relocation::SkippedDuplicate(p) => p,
        }
    }
}

/// Move `src` to `dest_dir/file_name` unless that path is already taken.
pub fn relocate(src: &Path, dest_dir: &Path, file_name: &OsStr) -> Result<Relocation, MediaSortError> {
    let dest = dest_dir.join(file_name);

    // try_exists errors (e.g. EACCES on the parent) are not proof of absence; let the rename report them.
    if dest.try_exists().unwrap_or(false) {
        debug!(src = %src.display(), dest = %dest.display(), "destination exists; skipping");
        return Ok(Relocation::SkippedDuplicate(dest));
    }

    match rename(src, &dest) {
        Ok(()) => {
            info!(src = %src.display(), dest = %dest.display(), "Moved file");
            Ok(Relocation::Moved(dest))
        }
        Err(e) if is_cross_device(&e) => {
            debug!(src = %src.display(), dest = %dest.display(), "cross-filesystem; copying instead");
            copy_then_remove(src, &dest).map_err(|message| MediaSortError::MoveFailure {
                src: src.to_path_buf(),
                dest: dest.clone(),
                message,
            })?;
            info!(src = %src.display(), dest = %dest.display(), "Copied file across filesystems and removed source");
            Ok(Relocation::Moved(dest))
        }
        Err(e) => Err(MediaSortError::MoveFailure {
            src: src.to_path_buf(),
            dest: dest.clone(),
            message: describe_io_error("rename", src, &e),
        }),
    }
}
