//! Rename helper.
//! - Returns the raw io::Error so callers can detect cross-device failures.
//! - On Unix, best-effort fsync of the destination directory after rename.

use std::fs::{self, File};
use std::io;
use std::path::Path;

pub(super) fn rename(src: &Path, dst: &Path) -> io::Result<()> {
    fs::rename(src, dst)?;

    #[cfg(unix)]
    if let Some(parent) = dst.parent() {
        // Ignore fsync errors to avoid turning a successful rename into a failure.
        let _ = File::open(parent).and_then(|d| d.sync_all());
    }

    Ok(())
}
