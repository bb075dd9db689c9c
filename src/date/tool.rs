//! External metadata tool (exiftool) as a swappable collaborator.

use std::ffi::OsString;
use std::io;
use std::path::{Path, PathBuf};
use std::process::Command;
use tracing::trace;

use crate::errors::MediaSortError;

pub const DEFAULT_EXIFTOOL: &str = "exiftool";

/// Reads named metadata fields from a file.
///
/// Implementations return the tool's plain-text output, one line per field
/// that had a value. `Ok(None)` means the tool ran but printed nothing.
pub trait MetadataTool: Send + Sync {
    fn read_fields(&self, path: &Path, fields: &[&str]) -> Result<Option<String>, MediaSortError>;
}

/// Runs `exiftool -<Field>... -s3 <path>` once per call.
#[derive(Debug, Clone)]
pub struct ExifTool {
    program: PathBuf,
}

impl ExifTool {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    fn args_for(path: &Path, fields: &[&str]) -> Vec<OsString> {
        let mut args: Vec<OsString> = fields.iter().map(|f| OsString::from(format!("-{f}"))).collect();
        args.push(OsString::from("-s3"));
        args.push(path.as_os_str().to_os_string());
        args
    }
}

impl Default for ExifTool {
    fn default() -> Self {
        Self::new(DEFAULT_EXIFTOOL)
    }
}

impl MetadataTool for ExifTool {
    fn read_fields(&self, path: &Path, fields: &[&str]) -> Result<Option<String>, MediaSortError> {
        let args = Self::args_for(path, fields);
        trace!(program = %self.program.display(), ?args, "spawning metadata tool");

        let output = Command::new(&self.program).args(&args).output().map_err(|e| {
            let reason = if e.kind() == io::ErrorKind::NotFound {
                format!("'{}' not found; is exiftool installed and on PATH?", self.program.display())
            } else {
                format!("failed to run '{}': {e}", self.program.display())
            };
            MediaSortError::MetadataUnavailable {
                path: path.to_path_buf(),
                reason,
            }
        })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(MediaSortError::MetadataUnavailable {
                path: path.to_path_buf(),
                reason: format!("{} exited with {}: {}", self.program.display(), output.status, stderr.trim()),
            });
        }

        let stdout = String::from_utf8_lossy(&output.stdout).trim().to_string();
        if stdout.is_empty() {
            Ok(None)
        } else {
            Ok(Some(stdout))
        }
    }
}
