//! Core configuration types.
//! - Config holds runtime settings with sensible defaults.
//! - LogLevel, RunMode and MissingDatePolicy carry simple parsing helpers.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use crate::date::DEFAULT_EXIFTOOL;

/// Program-defined verbosity levels exposed to users/config.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LogLevel {
    /// Only errors
    Quiet,
    /// Informational output (default)
    #[default]
    Normal,
    /// More info (like verbose)
    Info,
    /// Debug/trace
    Debug,
}

impl LogLevel {
    /// Parse common string names into our LogLevel (case-insensitive).
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "quiet" | "error" | "none" => Some(LogLevel::Quiet),
            "normal" => Some(LogLevel::Normal),
            "info" | "verbose" | "detailed" => Some(LogLevel::Info),
            "debug" | "trace" => Some(LogLevel::Debug),
            _ => None,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            LogLevel::Quiet => "quiet",
            LogLevel::Normal => "normal",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
        };
        f.write_str(s)
    }
}

impl FromStr for LogLevel {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("invalid log level: '{s}'"))
    }
}

/// Which orchestrator drives the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RunMode {
    /// Direct children of one directory, processed in parallel.
    #[default]
    Sweep,
    /// Recursive walk of an import tree into a root tree, images then videos.
    Reconcile,
}

impl RunMode {
    /// Policy used when `--missing-date` is not given.
    pub fn default_missing_date(self) -> MissingDatePolicy {
        match self {
            RunMode::Sweep => MissingDatePolicy::ModifiedTime,
            RunMode::Reconcile => MissingDatePolicy::Undated,
        }
    }
}

impl fmt::Display for RunMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            RunMode::Sweep => "sweep",
            RunMode::Reconcile => "reconcile",
        })
    }
}

/// What to do with a file whose capture date cannot be read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingDatePolicy {
    /// Use the file's modification time; undated only if that is unreadable.
    ModifiedTime,
    /// Send it straight to the undated folder.
    Undated,
}

impl MissingDatePolicy {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "modified-time" | "modified_time" | "mtime" => Some(MissingDatePolicy::ModifiedTime),
            "undated" => Some(MissingDatePolicy::Undated),
            _ => None,
        }
    }
}

impl fmt::Display for MissingDatePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            MissingDatePolicy::ModifiedTime => "modified-time",
            MissingDatePolicy::Undated => "undated",
        })
    }
}

impl FromStr for MissingDatePolicy {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("invalid missing-date policy: '{s}' (expected modified-time or undated)"))
    }
}

/// Runtime configuration used by the organizer.
#[derive(Debug, Clone)]
pub struct Config {
    pub mode: RunMode,
    /// Directory swept (sweep) or walked (reconcile)
    pub source_dir: PathBuf,
    /// Tree that receives `{year}/{month}` and undated folders
    pub root_dir: PathBuf,
    /// Overrides the mode's default policy when set
    pub missing_date: Option<MissingDatePolicy>,
    /// Console verbosity
    pub log_level: LogLevel,
    /// Optional path to a log file
    pub log_file: Option<PathBuf>,
    /// If true, log actions but do not modify the filesystem
    pub dry_run: bool,
    /// exiftool program (name on PATH or absolute path)
    pub exiftool: PathBuf,
    /// Worker threads for the sweep; 0 lets rayon decide
    pub threads: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            mode: RunMode::Sweep,
            source_dir: PathBuf::from("."),
            root_dir: PathBuf::from("."),
            missing_date: None,
            log_level: LogLevel::Normal,
            log_file: None,
            dry_run: false,
            exiftool: PathBuf::from(DEFAULT_EXIFTOOL),
            threads: 0,
        }
    }
}

impl Config {
    /// Flat sweep of `source`; files land in `source/{year}/{month}`.
    pub fn sweep(source: impl Into<PathBuf>) -> Self {
        let source = source.into();
        Self {
            mode: RunMode::Sweep,
            root_dir: source.clone(),
            source_dir: source,
            ..Default::default()
        }
    }

    /// Recursive reconciliation of `import` into `root`.
    pub fn reconcile(import: impl Into<PathBuf>, root: impl Into<PathBuf>) -> Self {
        Self {
            mode: RunMode::Reconcile,
            source_dir: import.into(),
            root_dir: root.into(),
            ..Default::default()
        }
    }

    pub fn effective_missing_date(&self) -> MissingDatePolicy {
        self.missing_date.unwrap_or_else(|| self.mode.default_missing_date())
    }
}
