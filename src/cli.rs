//! CLI definition and parsing.
//! Defines Args and provides parse() for command-line handling.
//!
//! Notes:
//! - `sweep SOURCE [ROOT]`: ROOT defaults to SOURCE.
//! - `reconcile IMPORT ROOT`.
//! - --debug is a shorthand for --log-level debug.

use clap::{Parser, Subcommand, ValueHint};
use std::path::PathBuf;

use crate::config::types::{Config, LogLevel, MissingDatePolicy};

/// CLI wrapper for the media_sort library.
/// CLI flags override config values (which are loaded from XML if present).
#[derive(Parser, Debug, Clone)]
#[command(
    author,
    version,
    about = "Sort photos and videos into year/month folders by capture date"
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Enable debug logging (equivalent to `--log-level debug`).
    #[arg(
        short = 'd',
        long,
        global = true,
        help = "Enable debug logging (shorthand for --log-level debug)"
    )]
    pub debug: bool,

    /// Set log level. One of: quiet, normal, info, debug.
    #[arg(long, global = true, help = "Set log level: quiet, normal, info, debug")]
    pub log_level: Option<String>,

    /// Also write logs to this file.
    #[arg(long, global = true, value_hint = ValueHint::FilePath, help = "Append logs to this file")]
    pub log_file: Option<PathBuf>,

    /// Emit logs in structured JSON (includes timestamp, level, and structured fields).
    #[arg(long, global = true, help = "Emit logs in structured JSON")]
    pub json: bool,

    /// Dry-run: log actions but do not modify the filesystem.
    #[arg(
        long,
        global = true,
        help = "Show what would be done, but do not create folders or move files"
    )]
    pub dry_run: bool,

    /// exiftool program used for HEIC and video dates.
    #[arg(long, global = true, value_hint = ValueHint::ExecutablePath, help = "Path to the exiftool program")]
    pub exiftool: Option<PathBuf>,

    /// Worker threads for the sweep (0 = one per CPU).
    #[arg(long, global = true, help = "Worker threads for sweep (0 = one per CPU)")]
    pub threads: Option<usize>,

    /// Override what happens to files without a capture date.
    #[arg(
        long,
        global = true,
        value_name = "POLICY",
        help = "Files without a capture date: modified-time | undated"
    )]
    pub missing_date: Option<MissingDatePolicy>,

    /// Print where media_sort will look for the config file (or MEDIA_SORT_CONFIG if set), then exit.
    #[arg(long, help = "Print the config file location used by media_sort and exit")]
    pub print_config: bool,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Organize the files directly inside SOURCE (not recursive), in parallel.
    Sweep {
        #[arg(value_name = "SOURCE", value_hint = ValueHint::DirPath)]
        source: PathBuf,
        /// Destination root; defaults to SOURCE.
        #[arg(value_name = "ROOT", value_hint = ValueHint::DirPath)]
        root: Option<PathBuf>,
    },
    /// Walk IMPORT recursively and move images, then videos, into ROOT.
    Reconcile {
        #[arg(value_name = "IMPORT", value_hint = ValueHint::DirPath)]
        import: PathBuf,
        #[arg(value_name = "ROOT", value_hint = ValueHint::DirPath)]
        root: PathBuf,
    },
}

impl Args {
    /// Effective log level derived from flags.
    /// Precedence: --debug > --log-level value > None (use config default).
    pub fn effective_log_level(&self) -> Option<LogLevel> {
        if self.debug {
            return Some(LogLevel::Debug);
        }
        self.log_level.as_deref().and_then(LogLevel::parse)
    }

    /// Base config for the chosen subcommand, or None when no subcommand was given.
    pub fn base_config(&self) -> Option<Config> {
        match self.command.as_ref()? {
            Command::Sweep { source, root } => {
                let mut cfg = Config::sweep(source.clone());
                if let Some(r) = root {
                    cfg.root_dir = r.clone();
                }
                Some(cfg)
            }
            Command::Reconcile { import, root } => Some(Config::reconcile(import.clone(), root.clone())),
        }
    }

    /// Apply CLI overrides to a loaded Config (in-place). No-ops for unset flags.
    pub fn apply_overrides(&self, cfg: &mut Config) {
        if let Some(level) = self.effective_log_level() {
            cfg.log_level = level;
        }
        if let Some(lf) = &self.log_file {
            cfg.log_file = Some(lf.clone());
        }
        if self.dry_run {
            cfg.dry_run = true;
        }
        if let Some(tool) = &self.exiftool {
            cfg.exiftool = tool.clone();
        }
        if let Some(n) = self.threads {
            cfg.threads = n;
        }
        if let Some(policy) = self.missing_date {
            cfg.missing_date = Some(policy);
        }
    }
}

pub fn parse() -> Args {
    Args::parse()
}
