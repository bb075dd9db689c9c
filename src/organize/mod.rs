//! Run modes built on one shared per-file pipeline.
//!
//! - `sweep`: direct children of one directory, parallel, mtime fallback.
//! - `reconcile`: recursive import tree, sequential, images then videos,
//!   undated fallback.

mod pipeline;
mod reconcile;
mod sweep;

pub use pipeline::{Outcome, Pipeline, Summary};
pub use reconcile::{collect_kind, reconcile};
pub use sweep::{list_files, sweep};

use anyhow::Result;

use crate::config::{Config, RunMode};
use crate::date::DateResolver;

/// Dispatch on `config.mode`.
pub fn run(config: &Config, resolver: &DateResolver) -> Result<Summary> {
    match config.mode {
        RunMode::Sweep => sweep(config, resolver),
        RunMode::Reconcile => reconcile(config, resolver),
    }
}
