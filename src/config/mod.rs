//! Config module.
//! Provides configuration types, the default config path, XML loading, and validation.

pub mod paths;
pub mod types;
mod validate;
pub mod xml;

pub use paths::{CONFIG_ENV, default_config_path, path_has_symlink_ancestor};
pub use types::{Config, LogLevel, MissingDatePolicy, RunMode};
pub use validate::validate_and_normalize;
pub use xml::{FileSettings, load_config_from_xml, load_config_from_xml_path};
