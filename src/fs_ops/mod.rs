//! Filesystem operations: bucket directories and file moves.

mod atomic;
mod copy;
mod helpers;
mod planner;
mod relocate;
mod util;

pub use helpers::describe_io_error;
pub use planner::{Bucket, DirectoryCache, UNDATED_DIR_NAME, ensure_directory, plan_bucket};
pub use relocate::{Relocation, relocate};
