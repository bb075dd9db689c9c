//! Core library for `media_sort`.
//!
//! Sorts photos and videos into `{root}/{YYYY}/{MM}` folders by capture date:
//! a date resolver (EXIF / exiftool / mtime), a bucket planner with a
//! per-run directory cache, a no-overwrite mover, and two run modes
//! (flat parallel sweep, recursive reconciliation) built on one pipeline.

pub mod cli;
pub mod config;
pub mod date;
pub mod errors;
pub mod fs_ops;
pub mod media;
pub mod organize;
pub mod output;
pub mod shutdown;

pub use config::{
    CONFIG_ENV, Config, LogLevel, MissingDatePolicy, RunMode, default_config_path,
    path_has_symlink_ancestor, validate_and_normalize,
};
pub use date::{DateResolver, ExifTool, MetadataTool, modified_time};
pub use errors::MediaSortError;
pub use fs_ops::{Bucket, DirectoryCache, Relocation, UNDATED_DIR_NAME, ensure_directory, plan_bucket, relocate};
pub use media::{MediaFile, MediaKind};
pub use organize::{Outcome, Pipeline, Summary, reconcile, sweep};
