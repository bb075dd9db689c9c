//! Cross-device move: copy to a temp file beside the destination, rename it
//! into place, then remove the source. On any failure the source stays put and
//! nothing is left behind at the destination.
//!
//! The copy keeps the source's access and modification times: the sweep dates
//! undated files by mtime, so a moved file must land with the same one.

use filetime::{FileTime, set_file_times};
use std::fs;
use std::path::Path;
use tracing::{trace, warn};

use super::atomic::rename;
use super::helpers::describe_io_error;
use super::util::unique_temp_path;

/// Returns a ready-to-log message on failure.
pub(super) fn copy_then_remove(src: &Path, dest: &Path) -> Result<(), String> {
    let dest_dir = dest
        .parent()
        .ok_or_else(|| format!("destination has no parent: {}", dest.display()))?;
    let src_meta = fs::metadata(src).map_err(|e| describe_io_error("stat source", src, &e))?;
    let tmp = unique_temp_path(dest_dir);

    if let Err(e) = fs::copy(src, &tmp) {
        let _ = fs::remove_file(&tmp);
        return Err(describe_io_error("copy to temporary file", &tmp, &e));
    }
    preserve_times(&tmp, &src_meta);
    if let Ok(f) = fs::File::open(&tmp) {
        let _ = f.sync_all();
    }

    if let Err(e) = rename(&tmp, dest) {
        let _ = fs::remove_file(&tmp);
        return Err(describe_io_error("rename temporary file into place", dest, &e));
    }

    if let Err(e) = fs::remove_file(src) {
        // Keep a single copy of the file: undo the destination.
        if let Err(undo) = fs::remove_file(dest) {
            warn!(dest = %dest.display(), error = %undo, "could not undo copy after failed source removal");
        }
        return Err(describe_io_error("remove original file", src, &e));
    }

    Ok(())
}

/// Best-effort: a failure is logged, the copy itself still counts.
fn preserve_times(dest: &Path, src_meta: &fs::Metadata) {
    let mtime = FileTime::from_last_modification_time(src_meta);
    let atime = FileTime::from_last_access_time(src_meta);
    match set_file_times(dest, atime, mtime) {
        Ok(()) => trace!(path = %dest.display(), "kept source atime/mtime"),
        Err(e) => warn!(path = %dest.display(), error = %e, "failed to set atime/mtime on copy"),
    }
}
