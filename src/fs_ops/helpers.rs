//! I/O helper utilities.
//!
//! Turns io::Error into a one-line message with the operation, the path and a
//! platform-aware hint, for move failures surfaced in logs.

use std::io;
use std::path::Path;

/// Hint for a raw OS error code, if we have one worth printing.
fn os_hint(code: i32) -> Option<&'static str> {
    #[cfg(unix)]
    {
        match code {
            libc::EACCES | libc::EPERM => Some("permission denied; check ownership and write permissions"),
            libc::EXDEV => Some("cross-filesystem; atomic rename not possible"),
            libc::EBUSY => Some("resource busy; another process may be using the file"),
            libc::ENOENT => Some("path not found; it may have been moved or deleted meanwhile"),
            libc::ENOSPC => Some("insufficient space on device"),
            libc::EROFS => Some("read-only filesystem"),
            libc::ENAMETOOLONG => Some("filename or path too long"),
            _ => None,
        }
    }
    #[cfg(windows)]
    {
        match code {
            5 => Some("access denied; check permissions"),       // ERROR_ACCESS_DENIED
            17 => Some("not same device; cross-filesystem move"), // ERROR_NOT_SAME_DEVICE
            32 => Some("sharing violation; file is in use"),      // ERROR_SHARING_VIOLATION
            2 | 3 => Some("path not found"),                      // FILE/PATH NOT FOUND
            112 => Some("insufficient disk space"),               // ERROR_DISK_FULL
            _ => None,
        }
    }
    #[cfg(not(any(unix, windows)))]
    {
        let _ = code;
        None
    }
}

fn kind_hint(kind: io::ErrorKind) -> Option<&'static str> {
    match kind {
        io::ErrorKind::PermissionDenied => Some("permission denied; check ownership and write permissions"),
        io::ErrorKind::NotFound => Some("path not found"),
        io::ErrorKind::AlreadyExists => Some("already exists"),
        _ => None,
    }
}

/// Format "op 'path': error (hint) [os code: n]".
pub fn describe_io_error(op: &str, path: &Path, e: &io::Error) -> String {
    let mut msg = format!("{} '{}': {}", op, path.display(), e);
    let hint = match e.raw_os_error() {
        Some(code) => os_hint(code),
        None => kind_hint(e.kind()),
    };
    if let Some(h) = hint {
        msg.push_str(" (");
        msg.push_str(h);
        msg.push(')');
    }
    if let Some(code) = e.raw_os_error() {
        msg.push_str(&format!(" [os code: {code}]"));
    }
    msg
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn includes_op_and_path() {
        let e = io::Error::new(io::ErrorKind::PermissionDenied, "nope");
        let msg = describe_io_error("rename", Path::new("/a/b.jpg"), &e);
        assert!(msg.starts_with("rename '/a/b.jpg': nope"));
        assert!(msg.contains("permission denied"));
    }

    #[cfg(unix)]
    #[test]
    fn raw_codes_get_os_hint_and_code() {
        let e = io::Error::from_raw_os_error(libc::ENOENT);
        let msg = describe_io_error("stat", Path::new("/gone"), &e);
        assert!(msg.contains("path not found"));
        assert!(msg.contains(&format!("[os code: {}]", libc::ENOENT)));
    }
}
